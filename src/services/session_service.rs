// 会话与购物车转发服务
// 原样返回后端状态码与 Set-Cookie，由响应桥接器写回浏览器

use reqwest::Method;
use serde_json::Value;
use crate::error::ApiError;
use crate::services::{ApiClient, BackendResponse};

/// 会话服务
pub struct SessionService {
    client: ApiClient,
}

impl SessionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 获取当前会话
    ///
    /// GET /api/v1/auth/session
    pub async fn get_session(&self) -> Result<BackendResponse, ApiError> {
        self.client.send(Method::GET, "/auth/session", None).await
    }

    /// 转发购物车请求
    ///
    /// {GET|POST|DELETE} /api/v1/cart
    pub async fn forward_cart(
        &self,
        method: Method,
        body: Option<&Value>,
    ) -> Result<BackendResponse, ApiError> {
        let response = self.client.send(method.clone(), "/cart", body).await?;
        log::debug!(
            "Cart {} responded {} with {} cookie(s)",
            method,
            response.status,
            response.set_cookies.len()
        );
        Ok(response)
    }
}
