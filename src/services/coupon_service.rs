// 优惠券校验服务

use crate::error::ActionError;
use crate::models::{CouponVerification, CouponVerifyResponse};
use crate::services::{path_segment, ApiClient};

/// 优惠券服务
pub struct CouponService {
    client: ApiClient,
}

impl CouponService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 校验优惠码并返回折扣金额
    ///
    /// GET /api/v1/coupons/verify/{CODE}，优惠码统一转为大写，禁用缓存。
    pub async fn verify_coupon(&self, code: &str) -> Result<CouponVerification, ActionError> {
        let code = normalize_code(code);
        let path = format!("/coupons/verify/{}", path_segment(&code)?);
        let response: CouponVerifyResponse = self.client.get_uncached(&path).await?;

        Ok(CouponVerification {
            code,
            discount: response.discount,
        })
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use crate::error::ApiError;
    use crate::test_support::FakeBackend;

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code("save10"), "SAVE10");
        assert_eq!(normalize_code(" BlackFriday "), "BLACKFRIDAY");
    }

    #[actix_web::test]
    async fn test_verify_coupon_uppercases_path_once() {
        let backend = FakeBackend::start();
        backend.respond("GET", "/api/v1/coupons/verify/SAVE10", 200, json!({ "discount": 10 }));

        let service = CouponService::new(backend.client());
        for code in ["save10", "Save10", "SAVE10"] {
            let result = service.verify_coupon(code).await.unwrap();
            assert_eq!(result.code, "SAVE10");
            assert_eq!(result.discount, Decimal::new(10, 0));
        }

        let requests = backend.requests();
        assert_eq!(requests.len(), 3);
        for request in &requests {
            assert_eq!(request.path, "/api/v1/coupons/verify/SAVE10");
            assert!(request.cache_control.as_deref().unwrap_or("").contains("no-cache"));
        }
    }

    #[actix_web::test]
    async fn test_verify_coupon_encodes_reserved_characters() {
        let backend = FakeBackend::start();
        backend.respond("GET", "/api/v1/coupons/verify/SAVE%3FX%3D1", 200, json!({ "discount": 5 }));
        backend.respond("GET", "/api/v1/coupons/verify/A%23B", 200, json!({ "discount": 1 }));
        backend.respond("GET", "/api/v1/coupons/verify/..%2F..%2FORDERS%2F1", 404, json!({}));

        let service = CouponService::new(backend.client());
        assert_eq!(service.verify_coupon("save?x=1").await.unwrap().code, "SAVE?X=1");
        assert_eq!(service.verify_coupon("a#b").await.unwrap().discount, Decimal::new(1, 0));
        assert!(service.verify_coupon("../../orders/1").await.is_err());

        let requests = backend.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].path, "/api/v1/coupons/verify/SAVE%3FX%3D1");
        assert_eq!(requests[0].query, "");
        assert_eq!(requests[1].path, "/api/v1/coupons/verify/A%23B");
        assert_eq!(requests[2].path, "/api/v1/coupons/verify/..%2F..%2FORDERS%2F1");
    }

    #[actix_web::test]
    async fn test_verify_coupon_dot_segment_not_sent() {
        let backend = FakeBackend::start();

        let service = CouponService::new(backend.client());
        let err = service.verify_coupon("..").await.unwrap_err();
        assert!(matches!(err, ActionError::Api(ApiError::InvalidSegment { .. })));
        assert!(backend.requests().is_empty());
    }

    #[actix_web::test]
    async fn test_verify_coupon_unknown_code() {
        let backend = FakeBackend::start();
        backend.respond("GET", "/api/v1/coupons/verify/NOPE", 404, json!({ "message": "not found" }));

        let service = CouponService::new(backend.client());
        assert!(service.verify_coupon("nope").await.is_err());
    }
}
