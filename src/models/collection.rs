use serde::{Deserialize, Serialize};

/// 商品合集
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
