// 后端API客户端
// 所有对后端REST服务的出站HTTP调用统一经过这里，负责基础URL拼接与Cookie转发

use std::time::Duration;
use anyhow::{Context, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{
    header::{CACHE_CONTROL, CONTENT_TYPE, COOKIE, SET_COOKIE},
    Client, Method, RequestBuilder,
};
use serde::{de::DeserializeOwned, Serialize};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// 后端API版本前缀
pub const API_PREFIX: &str = "/api/v1";

/// 路径段中保留原样的字符 (RFC 3986 unreserved)，其余全部百分号编码
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// 编码单个路径段
///
/// 浏览器传入的ID与优惠码必须先经过这里再拼入路径，
/// 保证 `/`、`?`、`#` 不会改变请求的后端端点。
///
/// # Arguments
/// * `value` - 原始路径段
///
/// # Returns
/// * 编码后的路径段；空段、`.` 与 `..` 返回 `ApiError::InvalidSegment`
pub fn path_segment(value: &str) -> Result<String, ApiError> {
    if value.is_empty() || value == "." || value == ".." {
        return Err(ApiError::InvalidSegment {
            segment: value.to_string(),
        });
    }
    Ok(utf8_percent_encode(value, SEGMENT).to_string())
}

/// 后端原始响应
///
/// 不把非2xx视为错误，供需要原样转发状态与Cookie的场景使用。
#[derive(Debug, Clone)]
pub struct BackendResponse {
    /// HTTP状态码
    pub status: u16,
    /// 按接收顺序排列的 Set-Cookie 值
    pub set_cookies: Vec<String>,
    /// 后端的 Content-Type (如果有)
    pub content_type: Option<String>,
    /// 响应体
    pub body: Vec<u8>,
}

impl BackendResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 后端API客户端
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    prefix: String,
    cookies: Option<String>,
}

impl ApiClient {
    /// 创建新的API客户端
    ///
    /// # Arguments
    /// * `config` - 后端API配置
    ///
    /// # Returns
    /// * API客户端实例
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::with_http(http, &config.server_url))
    }

    /// 使用已有的HTTP客户端创建
    pub fn with_http(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            prefix: API_PREFIX.to_string(),
            cookies: None,
        }
    }

    /// 卖家角色客户端，路径前缀为 /api/v1/seller
    pub fn seller(&self) -> Self {
        self.scoped("seller")
    }

    /// 按角色划分的子客户端
    pub fn scoped(&self, role: &str) -> Self {
        let mut client = self.clone();
        client.prefix = format!("{}/{}", self.prefix, role.trim_matches('/'));
        client
    }

    /// 返回转发指定浏览器Cookie的客户端
    pub fn with_cookies(&self, cookies: Option<String>) -> Self {
        let mut client = self.clone();
        client.cookies = cookies.filter(|c| !c.is_empty());
        client
    }

    /// 底层HTTP客户端 (用于第三方API)
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// 拼接完整请求URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.prefix, normalize_path(path))
    }

    /// 带前缀的请求路径 (用于日志与错误信息)
    pub fn path(&self, path: &str) -> String {
        format!("{}{}", self.prefix, normalize_path(path))
    }

    /// GET 请求
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(path, self.request(Method::GET, path)).await
    }

    /// 禁用缓存的 GET 请求
    pub async fn get_uncached<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self
            .request(Method::GET, path)
            .header(CACHE_CONTROL, "no-cache, no-store");
        self.execute(path, builder).await
    }

    /// POST JSON 请求
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(path, self.request(Method::POST, path).json(body)).await
    }

    /// PUT JSON 请求
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(path, self.request(Method::PUT, path).json(body)).await
    }

    /// PATCH JSON 请求
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(path, self.request(Method::PATCH, path).json(body)).await
    }

    /// 携带JSON请求体的 DELETE 请求
    pub async fn delete_with_body<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(path, self.request(Method::DELETE, path).json(body)).await
    }

    /// POST 原始请求体 (如 multipart 表单)
    pub async fn post_raw<T: DeserializeOwned>(
        &self,
        path: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<T, ApiError> {
        let builder = self
            .request(Method::POST, path)
            .header(CONTENT_TYPE, content_type)
            .body(body);
        self.execute(path, builder).await
    }

    /// 发送请求并返回原始响应
    ///
    /// 仅在传输失败时返回错误，状态码与 Set-Cookie 由调用方处理。
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<BackendResponse, ApiError> {
        let mut builder = self.request(method, path);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(path, e))?;
        let status = response.status().as_u16();
        let set_cookies = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(path, e))?
            .to_vec();

        Ok(BackendResponse {
            status,
            set_cookies,
            content_type,
            body,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(cookies) = &self.cookies {
            builder = builder.header(COOKIE, cookies);
        }
        builder
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let full_path = self.path(path);
        log::debug!("Backend request: {}", full_path);

        let response = builder.send().await.map_err(|e| self.transport_error(path, e))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(path, e))?;

        if !status.is_success() {
            log::warn!("Backend {} responded {}", full_path, status.as_u16());
            return Err(ApiError::Status {
                path: full_path,
                status: status.as_u16(),
                body: text,
            });
        }

        // 空响应体按 JSON null 处理
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text).map_err(|e| ApiError::Decode {
            path: full_path,
            message: e.to_string(),
        })
    }

    fn transport_error(&self, path: &str, source: reqwest::Error) -> ApiError {
        let path = self.path(path);
        log::error!("Backend request {} failed: {}", path, source);
        ApiError::Transport { path, source }
    }
}

fn normalize_path(path: &str) -> String {
    if path.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
