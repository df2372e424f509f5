// 图片上传数据模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 待上传的图片表单
///
/// 浏览器提交的 multipart 正文原样转发，`content_type` 携带 boundary。
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: String,
    pub body: Vec<u8>,
}

/// 上传结果 (后端JSON透传)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct UploadedImage(pub Value);

/// 删除图片请求体
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDeletion {
    pub public_id: String,
}
