// CORS中间件配置
// 处理跨域请求，允许店铺前端携带Cookie访问API

use actix_cors::Cors;
use actix_web::http::header;
use crate::config::CorsConfig;

/// 创建CORS中间件
///
/// 未配置允许的源时只放行本地开发源
///
/// # Arguments
/// * `config` - 跨域配置
///
/// # Returns
/// * 配置好的CORS中间件
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::COOKIE,
        ])
        .expose_headers(vec![header::HeaderName::from_static(
            super::logging::REQUEST_ID_HEADER,
        )])
        .supports_credentials()
        .max_age(3600);

    if config.allowed_origins.is_empty() {
        cors = cors.allowed_origin_fn(|origin, _req_head| is_local_origin(origin.as_bytes()));
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

fn is_local_origin(origin: &[u8]) -> bool {
    origin.starts_with(b"http://localhost")
        || origin.starts_with(b"https://localhost")
        || origin.starts_with(b"http://127.0.0.1")
        || origin.starts_with(b"https://127.0.0.1")
}
