// 国家列表服务
// 从第三方国家API拉取列表，按结构校验后映射并按名称排序

use reqwest::Client;
use serde_json::Value;
use crate::error::ActionError;
use crate::models::{Country, RawCountry};

/// 国家列表服务
pub struct CountryService {
    http: Client,
    url: String,
}

impl CountryService {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// 获取按名称升序排列的国家列表
    pub async fn fetch_countries(&self) -> Result<Vec<Country>, ActionError> {
        let response = self.http.get(&self.url).send().await.map_err(|e| {
            log::error!("Country API request failed: {}", e);
            ActionError::CountriesUnavailable
        })?;

        if !response.status().is_success() {
            log::error!("Country API responded {}", response.status());
            return Err(ActionError::CountriesUnavailable);
        }

        let records: Vec<Value> = response.json().await.map_err(|e| {
            log::error!("Country API returned an unexpected payload: {}", e);
            ActionError::CountriesUnavailable
        })?;

        Ok(map_countries(records))
    }
}

/// 映射原始记录并按名称排序，不符合结构的记录被丢弃
pub fn map_countries(records: Vec<Value>) -> Vec<Country> {
    let total = records.len();
    let mut countries: Vec<Country> = records
        .into_iter()
        .filter_map(|record| {
            let raw: RawCountry = serde_json::from_value(record).ok()?;
            Country::try_from(raw)
                .map_err(|reason| log::debug!("Skipping country record: {}", reason))
                .ok()
        })
        .collect();

    if countries.len() < total {
        log::warn!("Dropped {} malformed country records", total - countries.len());
    }

    countries.sort_by(|a, b| a.name.cmp(&b.name));
    countries
}
