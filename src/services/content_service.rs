// 内容查询服务
// 商品更新与表单提交记录的只读透传

use crate::error::ActionError;
use crate::models::{ProductUpdates, Submission};
use crate::services::{path_segment, ApiClient};

/// 内容服务
pub struct ContentService {
    client: ApiClient,
}

impl ContentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 获取最新商品更新
    ///
    /// GET /api/v1/products/updates (禁用缓存)
    pub async fn get_product_updates(&self) -> Result<ProductUpdates, ActionError> {
        Ok(self.client.get_uncached("/products/updates").await?)
    }

    /// 按ID获取表单提交记录
    ///
    /// GET /api/v1/submissions/{id}
    pub async fn get_submission(&self, id: &str) -> Result<Submission, ActionError> {
        let path = format!("/submissions/{}", path_segment(id)?);
        Ok(self.client.get(&path).await?)
    }
}
