// 结账辅助API处理器
// 地址校验、优惠券校验与国家列表

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use crate::models::AddressValidationRequest;
use crate::services::{CountryService, CouponService, ShippingService};
use crate::state::AppState;
use crate::utils::forwarded_cookies;

/// 校验收货地址
///
/// POST /app/api/shippings/address/validate
///
/// 请求体: AddressValidationRequest
pub async fn validate_address(
    data: web::Data<AppState>,
    request: web::Json<AddressValidationRequest>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let shipping_service = ShippingService::new(data.api.with_cookies(forwarded_cookies(&req)));
    let result = shipping_service.validate_address(&request).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// 校验优惠码
///
/// GET /app/api/coupons/{code}
///
/// 响应: `{"code": "SAVE10", "discount": "10"}`
pub async fn verify_coupon(
    data: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let coupon_service = CouponService::new(data.api.with_cookies(forwarded_cookies(&req)));

    match coupon_service.verify_coupon(&path.into_inner()).await {
        Ok(verification) => Ok(HttpResponse::Ok().json(verification)),
        Err(e) => {
            log::warn!("Coupon verification failed: {}", e);
            Err(e.into())
        }
    }
}

/// 国家列表 (按名称排序)
///
/// GET /app/api/countries
pub async fn list_countries(data: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let country_service = CountryService::new(data.api.http().clone(), data.config.countries.url.clone());
    let countries = country_service.fetch_countries().await?;

    Ok(HttpResponse::Ok().json(countries))
}
