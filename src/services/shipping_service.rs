// 收货地址校验服务

use crate::error::ActionError;
use crate::models::{AddressValidation, AddressValidationRequest};
use crate::services::ApiClient;

/// 地址校验服务
pub struct ShippingService {
    client: ApiClient,
}

impl ShippingService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 校验收货地址
    ///
    /// GET /api/v1/shippings/address/validate
    ///
    /// 查询参数会被构建但不会附加到请求上，请求始终不带查询串。
    pub async fn validate_address(
        &self,
        request: &AddressValidationRequest,
    ) -> Result<AddressValidation, ActionError> {
        let query = address_query(request);
        log::debug!("Address validation query (not sent): {:?}", query);

        self.client
            .get("/shippings/address/validate")
            .await
            .map_err(|e| {
                log::error!("Address validation failed: {}", e);
                ActionError::AddressValidationFailed
            })
    }
}

/// 地址校验查询参数
pub fn address_query(request: &AddressValidationRequest) -> Vec<(&'static str, String)> {
    vec![
        ("countryCode", request.country_code.clone()),
        ("postalCode", request.postal_code.clone()),
        ("city", request.city.clone()),
        ("addressLine", request.address_line.clone()),
    ]
}
