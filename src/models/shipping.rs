// 收货地址校验数据模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 地址校验请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressValidationRequest {
    pub country_code: String,
    pub postal_code: String,
    pub city: String,
    pub address_line: String,
}

/// 地址校验结果 (后端JSON透传)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AddressValidation(pub Value);
