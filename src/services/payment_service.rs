// 支付发起服务
// 通过后端为订单发起支付网关转账，失败时只暴露固定提示

use crate::error::ActionError;
use crate::models::{InitiatePaymentRequest, PaymentInitiationResponse, PaymentStatus};
use crate::services::{path_segment, ApiClient};

/// 支付服务
pub struct PaymentService {
    client: ApiClient,
}

impl PaymentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 发起订单支付
    ///
    /// POST /api/v1/orders/{id}/payment
    ///
    /// 至多发送一次，不重试；重复提交由调用方避免。
    ///
    /// # Arguments
    /// * `order_id` - 订单ID
    /// * `transaction_id` - 交易ID
    ///
    /// # Returns
    /// * 支付发起结果
    pub async fn initiate_payment(
        &self,
        order_id: &str,
        transaction_id: &str,
    ) -> Result<PaymentStatus, ActionError> {
        let path = match path_segment(order_id) {
            Ok(segment) => format!("/orders/{}/payment", segment),
            Err(e) => {
                log::warn!("Rejected payment order id: {}", e);
                return Err(ActionError::PaymentFailed);
            }
        };
        let request = InitiatePaymentRequest::gateway_transfer(transaction_id);

        let response: PaymentInitiationResponse = match self.client.post(&path, &request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Payment initiation for order {} failed: {}", order_id, e);
                return Err(ActionError::PaymentFailed);
            }
        };

        if !response.success {
            log::error!(
                "Payment initiation for order {} rejected: {}",
                order_id,
                response.message.as_deref().unwrap_or("no message")
            );
            return Err(ActionError::PaymentFailed);
        }

        log::info!("Payment initiated for order {} (transaction {})", order_id, transaction_id);

        let mut status = PaymentStatus::from(response.data.unwrap_or_default());
        if status.transaction_id.is_none() {
            status.transaction_id = Some(transaction_id.to_string());
        }
        Ok(status)
    }
}
