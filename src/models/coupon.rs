// 优惠券数据模型

use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

/// 后端优惠券校验响应
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponVerifyResponse {
    #[serde(alias = "discountAmount", alias = "discount_amount")]
    pub discount: Decimal,
}

/// 优惠券校验结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CouponVerification {
    /// 规范化 (大写) 后的优惠码
    pub code: String,
    /// 折扣金额
    pub discount: Decimal,
}
