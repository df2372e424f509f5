// 商品目录与卖家后台API处理器
// 合集、商品更新、表单提交记录与卖家交易的只读查询

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use crate::services::{CollectionService, ContentService, TransactionService};
use crate::state::AppState;
use crate::utils::forwarded_cookies;

/// 获取商品合集
///
/// GET /app/api/collections/{collection_id}
pub async fn get_collection(
    data: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let collection_service = CollectionService::new(data.api.with_cookies(forwarded_cookies(&req)));
    let collection = collection_service.get_collection(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(collection))
}

/// 获取商品更新
///
/// GET /app/api/products/updates
pub async fn get_product_updates(
    data: web::Data<AppState>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let content_service = ContentService::new(data.api.with_cookies(forwarded_cookies(&req)));
    let updates = content_service.get_product_updates().await?;

    Ok(HttpResponse::Ok().json(updates))
}

/// 获取表单提交记录
///
/// GET /app/api/submissions/{submission_id}
pub async fn get_submission(
    data: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let content_service = ContentService::new(data.api.with_cookies(forwarded_cookies(&req)));
    let submission = content_service.get_submission(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(submission))
}

/// 卖家交易列表
///
/// GET /app/api/seller/transactions
pub async fn list_seller_transactions(
    data: web::Data<AppState>,
    req: HttpRequest,
) -> ActixResult<HttpResponse> {
    let transaction_service = TransactionService::new(&data.api.with_cookies(forwarded_cookies(&req)));
    let transactions = transaction_service.list_transactions().await?;

    Ok(HttpResponse::Ok().json(transactions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test, App};
    use serde_json::{json, Value};
    use crate::test_support::FakeBackend;

    macro_rules! app {
        ($backend:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new_for_test(&$backend.url())))
                    .route("/collections/{collection_id}", web::get().to(get_collection))
                    .route("/products/updates", web::get().to(get_product_updates))
                    .route("/submissions/{submission_id}", web::get().to(get_submission))
                    .route("/seller/transactions", web::get().to(list_seller_transactions)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_get_collection() {
        let backend = FakeBackend::start();
        backend.respond("GET", "/api/v1/collections/9", 200, json!({ "name": "Denim", "description": null }));
        let app = app!(backend);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/collections/9").to_request()).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "name": "Denim", "description": null }));
    }

    #[actix_web::test]
    async fn test_get_collection_missing() {
        let backend = FakeBackend::start();
        backend.respond("GET", "/api/v1/collections/9", 404, json!({ "message": "not found" }));
        let app = app!(backend);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/collections/9").to_request()).await;
        assert_eq!(resp.status(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_product_updates_and_submission() {
        let backend = FakeBackend::start();
        backend.respond("GET", "/api/v1/products/updates", 200, json!([]));
        backend.respond("GET", "/api/v1/submissions/abc", 200, json!({ "id": "abc" }));
        let app = app!(backend);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/products/updates").to_request()).await;
        assert_eq!(resp.status(), 200);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/submissions/abc").to_request()).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], "abc");
    }

    #[actix_web::test]
    async fn test_seller_transactions_forward_session() {
        let backend = FakeBackend::start();
        backend.respond("GET", "/api/v1/seller/transactions", 200, json!([]));
        let app = app!(backend);

        let req = test::TestRequest::get()
            .uri("/seller/transactions")
            .insert_header((header::COOKIE, "session=seller-1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let requests = backend.requests();
        assert_eq!(requests[0].path, "/api/v1/seller/transactions");
        assert_eq!(requests[0].cookie.as_deref(), Some("session=seller-1"));
    }
}
