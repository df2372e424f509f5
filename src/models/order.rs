// 订单数据模型
// 订单结构由后端定义，此处按原样透传

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 订单详情 (不透明的后端JSON对象)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Order {
    pub fields: Map<String, Value>,
}

impl Order {
    /// 订单ID (字符串或数字形式)
    pub fn id(&self) -> Option<String> {
        match self.fields.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// 单个订单的查询结果
///
/// 区分"不存在"与"加载失败"，`into_order` 提供失败即为空的视图。
#[derive(Debug, Clone, PartialEq)]
pub enum OrderLookup {
    Loaded(Order),
    NotFound,
    Failed(String),
}

impl OrderLookup {
    pub fn into_order(self) -> Option<Order> {
        match self {
            OrderLookup::Loaded(order) => Some(order),
            OrderLookup::NotFound | OrderLookup::Failed(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, OrderLookup::Loaded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_forms() {
        let order: Order = serde_json::from_value(serde_json::json!({ "id": 17, "total": "20.00" })).unwrap();
        assert_eq!(order.id().as_deref(), Some("17"));

        let order: Order = serde_json::from_value(serde_json::json!({ "id": "ord_9" })).unwrap();
        assert_eq!(order.id().as_deref(), Some("ord_9"));

        let order: Order = serde_json::from_value(serde_json::json!({ "items": [] })).unwrap();
        assert_eq!(order.id(), None);
    }

    #[test]
    fn test_order_round_trips_unknown_fields() {
        let raw = serde_json::json!({ "id": 3, "items": [{ "sku": "A1", "qty": 2 }] });
        let order: Order = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&order).unwrap(), raw);
    }

    #[test]
    fn test_lookup_null_view() {
        let order: Order = serde_json::from_value(serde_json::json!({ "id": 1 })).unwrap();
        assert_eq!(OrderLookup::Loaded(order.clone()).into_order(), Some(order));
        assert_eq!(OrderLookup::NotFound.into_order(), None);
        assert_eq!(OrderLookup::Failed("timeout".to_string()).into_order(), None);
    }
}
