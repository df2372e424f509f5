// 交易数据模型
// 后端交易记录，按原样透传，不做校验

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// 交易记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// 交易参考号
    pub reference_id: String,
    /// 付款用户信息
    pub user: TransactionUser,
    /// 关联订单ID
    pub order_id: String,
    /// 交易金额
    pub amount: Decimal,
    /// 交易状态
    pub status: String,
    /// 交易时间
    pub date: DateTime<Utc>,
}

/// 交易用户信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
