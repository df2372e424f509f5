// 商品更新与表单提交记录等透传模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 商品更新列表
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ProductUpdates(pub Value);

/// 表单提交记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Submission(pub Value);
