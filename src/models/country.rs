// 国家数据模型
// restcountries v3.1 原始记录到前端国家列表的映射

use serde::{Deserialize, Serialize};

/// 国家信息 (已排序列表中的一项)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    /// 国家通用名称
    pub name: String,
    /// 国旗 emoji
    pub flag: String,
    /// ISO 3166-1 alpha-2 国家代码
    pub code: String,
}

/// restcountries 原始记录
///
/// 只声明需要的字段，其余字段忽略；必需字段缺失时整条记录丢弃。
#[derive(Debug, Deserialize)]
pub struct RawCountry {
    #[serde(default)]
    pub name: Option<RawCountryName>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub cca2: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawCountryName {
    #[serde(default)]
    pub common: Option<String>,
}

impl TryFrom<RawCountry> for Country {
    type Error = &'static str;

    fn try_from(raw: RawCountry) -> Result<Self, Self::Error> {
        let name = raw
            .name
            .and_then(|n| n.common)
            .filter(|n| !n.trim().is_empty())
            .ok_or("missing name.common")?;
        let code = raw
            .cca2
            .filter(|c| !c.trim().is_empty())
            .ok_or("missing cca2")?;

        Ok(Country {
            name,
            flag: raw.flag.unwrap_or_default(),
            code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_country_mapping() {
        let raw: RawCountry = serde_json::from_value(serde_json::json!({
            "name": { "common": "Nigeria", "official": "Federal Republic of Nigeria" },
            "flag": "🇳🇬",
            "cca2": "NG",
            "population": 206139587
        }))
        .unwrap();

        let country = Country::try_from(raw).unwrap();
        assert_eq!(country.name, "Nigeria");
        assert_eq!(country.flag, "🇳🇬");
        assert_eq!(country.code, "NG");
    }

    #[test]
    fn test_raw_country_missing_fields() {
        let no_code: RawCountry =
            serde_json::from_value(serde_json::json!({ "name": { "common": "Atlantis" } })).unwrap();
        assert!(Country::try_from(no_code).is_err());

        let no_name: RawCountry = serde_json::from_value(serde_json::json!({ "cca2": "XX" })).unwrap();
        assert!(Country::try_from(no_name).is_err());

        let no_flag: RawCountry = serde_json::from_value(serde_json::json!({
            "name": { "common": "Ghana" },
            "cca2": "GH"
        }))
        .unwrap();
        assert_eq!(Country::try_from(no_flag).unwrap().flag, "");
    }
}
