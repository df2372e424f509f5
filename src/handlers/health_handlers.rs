// 健康检查API处理器

use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Serialize;
use crate::state::AppState;

/// 健康检查响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// 服务状态
    pub status: &'static str,
    /// 版本信息
    pub version: &'static str,
    /// 浏览器可见的后端地址
    pub api_url: String,
    /// 当前时间戳
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// 基础健康检查
///
/// GET /app/api/health
///
/// 只反映本服务存活，不探测后端
pub async fn health_check(data: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        api_url: data.config.api.public_url.clone(),
        timestamp: chrono::Utc::now(),
    }))
}
