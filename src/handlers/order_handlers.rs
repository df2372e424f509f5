// 订单与支付API处理器
// 处理订单查询、支付方式列表与支付发起等浏览器请求

use actix_web::{web, HttpRequest, HttpResponse, ResponseError, Result as ActixResult};
use uuid::Uuid;
use crate::error::ActionError;
use crate::models::{ErrorBody, OrderLookup, PaymentRequestBody, PAYMENT_METHODS};
use crate::services::{OrderService, PaymentService};
use crate::state::AppState;
use crate::utils::forwarded_cookies;

/// 发起订单支付
///
/// POST /app/api/orders/{order_id}/payment
///
/// 请求体: `{"transactionId": "..."}` (可选，缺失时生成)
/// 响应: PaymentStatus
pub async fn initiate_payment(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: Option<web::Json<PaymentRequestBody>>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let order_id = path.into_inner();
    let transaction_id = body
        .and_then(|b| b.into_inner().transaction_id)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let payment_service = PaymentService::new(data.api.with_cookies(forwarded_cookies(&req)));
    let status = payment_service.initiate_payment(&order_id, &transaction_id).await?;

    Ok(HttpResponse::Ok().json(status))
}

/// 获取订单详情
///
/// GET /app/api/orders/{order_id}
///
/// 响应: 订单JSON；不存在返回404，其余失败返回500
pub async fn get_order(
    data: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let order_service = OrderService::new(data.api.with_cookies(forwarded_cookies(&req)));

    let response = match order_service.fetch_order(&path.into_inner()).await {
        OrderLookup::Loaded(order) => HttpResponse::Ok().json(order),
        OrderLookup::NotFound => ActionError::OrderNotFound.error_response(),
        OrderLookup::Failed(_) => {
            HttpResponse::InternalServerError().json(ErrorBody::new("Failed to load order"))
        }
    };

    Ok(response)
}

/// 支付方式列表
///
/// GET /app/api/payment-methods
pub async fn list_payment_methods() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(&PAYMENT_METHODS))
}
