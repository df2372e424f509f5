// 应用状态管理
// 包含后端API客户端、配置信息等全局状态

use anyhow::Result;
use crate::config::Config;
use crate::services::ApiClient;

/// 应用全局状态
pub struct AppState {
    /// 后端API客户端 (不携带任何浏览器Cookie)
    pub api: ApiClient,
    /// 应用配置
    pub config: Config,
}

impl AppState {
    /// 创建新的应用状态实例
    ///
    /// # Arguments
    /// * `config` - 应用配置
    ///
    /// # Returns
    /// * 应用状态实例
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config.api)?;
        Ok(Self { api, config })
    }

    /// 创建指向指定后端的测试状态
    #[cfg(test)]
    pub fn new_for_test(backend_url: &str) -> Self {
        let mut config = Config::default();
        config.api.server_url = backend_url.to_string();
        config.api.public_url = backend_url.to_string();
        config.countries.url = format!("{}/v3.1/all", backend_url);

        Self::new(config).expect("Failed to build test state")
    }
}
