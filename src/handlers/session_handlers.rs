// 会话与购物车API处理器
// 转发到后端并把后端的 Set-Cookie 按顺序写回浏览器

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use reqwest::Method;
use serde_json::Value;
use crate::models::ErrorBody;
use crate::services::SessionService;
use crate::state::AppState;
use crate::utils::{bridge_response, forwarded_cookies};

/// 获取当前会话
///
/// GET /app/api/session
pub async fn get_session(
    data: web::Data<AppState>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let session_service = SessionService::new(data.api.with_cookies(forwarded_cookies(&req)));

    match session_service.get_session().await {
        Ok(response) => Ok(bridge_response(
            response.status,
            response.content_type.as_deref(),
            response.body,
            &response.set_cookies,
        )),
        Err(e) => {
            log::error!("Failed to load session: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorBody::new("Failed to load session")))
        }
    }
}

/// 购物车请求转发
///
/// GET | POST | DELETE /app/api/cart
///
/// 请求体 (可选): 原样转发的JSON
pub async fn forward_cart(
    data: web::Data<AppState>,
    body: Option<web::Json<Value>>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let method = match Method::from_bytes(req.method().as_str().as_bytes()) {
        Ok(method) => method,
        Err(_) => return Ok(HttpResponse::MethodNotAllowed().finish()),
    };

    let session_service = SessionService::new(data.api.with_cookies(forwarded_cookies(&req)));
    let body = body.map(web::Json::into_inner);

    match session_service.forward_cart(method, body.as_ref()).await {
        Ok(response) => Ok(bridge_response(
            response.status,
            response.content_type.as_deref(),
            response.body,
            &response.set_cookies,
        )),
        Err(e) => {
            log::error!("Cart request failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorBody::new("Failed to update cart")))
        }
    }
}
