// 卖家交易查询服务

use crate::error::ActionError;
use crate::models::Transaction;
use crate::services::ApiClient;

/// 交易服务 (卖家视角)
pub struct TransactionService {
    client: ApiClient,
}

impl TransactionService {
    /// 使用卖家子客户端
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.seller(),
        }
    }

    /// 获取卖家交易列表
    ///
    /// GET /api/v1/seller/transactions
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ActionError> {
        Ok(self.client.get("/transactions").await?)
    }
}
