// 订单查询服务
// 单个订单的拉取，区分不存在与加载失败

use crate::models::{Order, OrderLookup};
use crate::services::{path_segment, ApiClient};

/// 订单服务
pub struct OrderService {
    client: ApiClient,
}

impl OrderService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 按ID获取订单
    ///
    /// GET /api/v1/orders/{id}
    ///
    /// 不返回错误：失败会被记录日志并折叠为 `NotFound` 或 `Failed`。
    pub async fn fetch_order(&self, id: &str) -> OrderLookup {
        let path = match path_segment(id) {
            Ok(segment) => format!("/orders/{}", segment),
            Err(e) => {
                log::warn!("Rejected order id: {}", e);
                return OrderLookup::NotFound;
            }
        };

        match self.client.get::<Order>(&path).await {
            Ok(order) => OrderLookup::Loaded(order),
            Err(e) if e.is_not_found() => {
                log::info!("Order {} not found", id);
                OrderLookup::NotFound
            }
            Err(e) => {
                log::error!("Failed to fetch order {}: {}", id, e);
                OrderLookup::Failed(e.to_string())
            }
        }
    }
}
