// 商品合集服务

use crate::error::ActionError;
use crate::models::Collection;
use crate::services::{path_segment, ApiClient};

/// 商品合集服务
pub struct CollectionService {
    client: ApiClient,
}

impl CollectionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 按ID获取商品合集
    ///
    /// GET /api/v1/collections/{id}
    pub async fn get_collection(&self, id: &str) -> Result<Collection, ActionError> {
        let path = format!("/collections/{}", path_segment(id)?);
        Ok(self.client.get(&path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::error::ApiError;
    use crate::test_support::FakeBackend;

    #[actix_web::test]
    async fn test_get_collection() {
        let backend = FakeBackend::start();
        backend.respond(
            "GET",
            "/api/v1/collections/summer",
            200,
            json!({ "name": "Summer", "description": "Light fabrics", "products": [] }),
        );

        let service = CollectionService::new(backend.client());
        let collection = service.get_collection("summer").await.unwrap();
        assert_eq!(collection.name, "Summer");
        assert_eq!(collection.description.as_deref(), Some("Light fabrics"));
    }

    #[actix_web::test]
    async fn test_get_collection_malformed() {
        let backend = FakeBackend::start();
        backend.respond("GET", "/api/v1/collections/1", 200, json!({ "title": "no name" }));

        let service = CollectionService::new(backend.client());
        let err = service.get_collection("1").await.unwrap_err();
        assert!(matches!(err, ActionError::Api(ApiError::Decode { .. })));
    }

    #[actix_web::test]
    async fn test_get_collection_encodes_id() {
        let backend = FakeBackend::start();
        backend.respond("GET", "/api/v1/collections/summer%2F..%2F..%2Fauth%2Fsession", 404, json!({}));

        let service = CollectionService::new(backend.client());
        let err = service.get_collection("summer/../../auth/session").await.unwrap_err();
        assert!(err.to_string().contains("404"));

        let err = service.get_collection("").await.unwrap_err();
        assert!(matches!(err, ActionError::Api(ApiError::InvalidSegment { .. })));

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/api/v1/collections/summer%2F..%2F..%2Fauth%2Fsession");
    }
}
