// 支付数据模型
// 定义支付方式、支付发起请求与结果等数据结构

use serde::{Deserialize, Serialize};

/// 支付网关方式标识，发起支付时固定使用
pub const PAYMENT_GATEWAY: &str = "payment_gateway";

/// 支付方式
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// 结账页可选的支付方式 (静态列表)
pub const PAYMENT_METHODS: [PaymentMethod; 3] = [
    PaymentMethod {
        id: PAYMENT_GATEWAY,
        name: "Pay Online",
        description: "Pay securely with card, bank transfer or USSD",
        icon: "credit-card",
    },
    PaymentMethod {
        id: "bank_transfer",
        name: "Bank Transfer",
        description: "Transfer directly to the store's bank account",
        icon: "landmark",
    },
    PaymentMethod {
        id: "cash_on_delivery",
        name: "Pay on Delivery",
        description: "Pay with cash when your order arrives",
        icon: "truck",
    },
];

/// 支付明细
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentDetails {
    #[serde(rename = "type")]
    pub kind: String,
}

/// 发起支付请求体
///
/// POST /api/v1/orders/{id}/payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InitiatePaymentRequest {
    pub transaction_id: String,
    pub payment_method: String,
    pub payment_details: PaymentDetails,
}

impl InitiatePaymentRequest {
    /// 通过支付网关以转账方式发起支付
    pub fn gateway_transfer(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            payment_method: PAYMENT_GATEWAY.to_string(),
            payment_details: PaymentDetails {
                kind: "transfer".to_string(),
            },
        }
    }
}

/// 后端发起支付响应
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitiationResponse {
    /// 后端成功标志，缺失时视为成功
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<PaymentInitiationData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitiationData {
    #[serde(default, alias = "reference")]
    pub transaction_ref: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

fn default_success() -> bool {
    true
}

/// 支付发起结果 (客户端瞬态)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    pub processed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<PaymentInitiationData> for PaymentStatus {
    fn from(data: PaymentInitiationData) -> Self {
        Self {
            processed: true,
            transaction_ref: data.transaction_ref,
            transaction_id: data.transaction_id,
            status: data.status,
        }
    }
}

/// 浏览器发起支付时的请求体
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestBody {
    /// 交易ID，缺失时由网关生成
    #[serde(default)]
    pub transaction_id: Option<String>,
}
