// 店铺网关数据模型定义
// 均为后端API响应的只读快照，不在本服务内持久化

mod collection;
mod country;
mod coupon;
mod image;
mod order;
mod payment;
mod content;
mod shipping;
mod transaction;

// 重新导出核心类型
pub use collection::*;
pub use country::*;
pub use coupon::*;
pub use image::*;
pub use order::*;
pub use payment::*;
pub use content::*;
pub use shipping::*;
pub use transaction::*;

use serde::{Deserialize, Serialize};

/// 路由处理器失败时的响应体
///
/// 格式: `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
