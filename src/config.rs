// 配置管理模块
// 负责加载和管理应用程序配置

use serde::{Deserialize, Serialize};
use std::env;
use anyhow::{Result, Context};

/// 默认国家列表数据源
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all";

/// 默认上传上限 10 MiB
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// 应用程序配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 服务器配置
    pub server: ServerConfig,
    /// 后端API配置
    pub api: ApiConfig,
    /// 国家列表数据源配置
    pub countries: CountriesConfig,
    /// 跨域配置
    pub cors: CorsConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 服务器监听地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 工作线程数
    pub workers: Option<usize>,
    /// 图片上传请求体上限 (字节)
    pub max_upload_size: usize,
}

/// 后端REST API配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 服务端调用使用的基础URL (SERVER_API_URL)
    pub server_url: String,
    /// 浏览器可见的基础URL (NEXT_PUBLIC_SERVER_API_URL)
    ///
    /// 本服务从不请求该地址。它只在启动时校验，并由 `/app/api/health`
    /// 回显，便于确认前端构建指向的后端与 `server_url` 是否一致。
    pub public_url: String,
    /// 请求超时时间 (秒)
    pub timeout: u64,
}

/// 国家列表数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesConfig {
    pub url: String,
}

/// 跨域配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorsConfig {
    /// 允许的源, 为空时只允许本地开发源
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // 加载.env文件，忽略错误

        let server_api_url = env::var("SERVER_API_URL").ok();
        let public_api_url = env::var("NEXT_PUBLIC_SERVER_API_URL").ok();
        let (server_url, public_url) = resolve_api_urls(server_api_url, public_api_url)
            .context("SERVER_API_URL or NEXT_PUBLIC_SERVER_API_URL environment variable is required")?;

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .context("Invalid SERVER_PORT")?,
                workers: env::var("SERVER_WORKERS")
                    .ok()
                    .and_then(|s| s.parse().ok()),
                max_upload_size: env::var("MAX_UPLOAD_SIZE")
                    .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_SIZE.to_string())
                    .parse()
                    .context("Invalid MAX_UPLOAD_SIZE")?,
            },
            api: ApiConfig {
                server_url,
                public_url,
                timeout: env::var("SERVER_API_TIMEOUT")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("Invalid SERVER_API_TIMEOUT")?,
            },
            countries: CountriesConfig {
                url: env::var("COUNTRIES_API_URL")
                    .unwrap_or_else(|_| DEFAULT_COUNTRIES_URL.to_string()),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .map(|s| parse_origins(&s))
                    .unwrap_or_default(),
            },
        })
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        // 验证服务器配置
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        // 验证后端API配置
        if !is_http_url(&self.api.server_url) {
            anyhow::bail!("Server API URL must be an http(s) URL: {:?}", self.api.server_url);
        }

        if !is_http_url(&self.api.public_url) {
            anyhow::bail!("Public API URL must be an http(s) URL: {:?}", self.api.public_url);
        }

        if self.server.max_upload_size == 0 {
            anyhow::bail!("Max upload size cannot be 0");
        }

        if self.api.timeout == 0 {
            anyhow::bail!("Server API timeout cannot be 0");
        }

        if !is_http_url(&self.countries.url) {
            anyhow::bail!("Countries API URL must be an http(s) URL");
        }

        Ok(())
    }

    /// 获取服务器绑定地址
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                workers: None,
                max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            },
            api: ApiConfig {
                server_url: "http://localhost:8000".to_string(),
                public_url: "http://localhost:8000".to_string(),
                timeout: 30,
            },
            countries: CountriesConfig {
                url: DEFAULT_COUNTRIES_URL.to_string(),
            },
            cors: CorsConfig::default(),
        }
    }
}

/// 解析后端基础URL
///
/// 服务端地址优先取 SERVER_API_URL，缺失时退回公开地址；公开地址缺失时与服务端地址一致。
fn resolve_api_urls(server: Option<String>, public: Option<String>) -> Option<(String, String)> {
    let server = server.filter(|s| !s.trim().is_empty());
    let public = public.filter(|s| !s.trim().is_empty());

    let server_url = server.or_else(|| public.clone())?;
    let public_url = public.unwrap_or_else(|| server_url.clone());

    Some((trim_base(&server_url), trim_base(&public_url)))
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
