// API路由配置
// 定义浏览器可访问的所有HTTP接口路由

use actix_web::{web, Scope};
use crate::handlers::*;

/// 浏览器API路由配置
///
/// # Arguments
/// * `max_upload_size` - 图片上传请求体上限 (字节)
pub fn app_api_routes(max_upload_size: usize) -> Scope {
    web::scope("/app/api")
        // 订单与支付路由
        .service(order_routes())
        .route("/payment-methods", web::get().to(list_payment_methods))
        // 结账辅助路由
        .route("/shippings/address/validate", web::post().to(validate_address))
        .route("/coupons/{code}", web::get().to(verify_coupon))
        .route("/countries", web::get().to(list_countries))
        // 图片路由
        .service(
            web::resource("/images")
                .app_data(web::PayloadConfig::new(max_upload_size))
                .route(web::post().to(upload_image))
                .route(web::delete().to(delete_image)),
        )
        // 商品目录路由
        .route("/collections/{collection_id}", web::get().to(get_collection))
        .route("/products/updates", web::get().to(get_product_updates))
        .route("/submissions/{submission_id}", web::get().to(get_submission))
        .route("/seller/transactions", web::get().to(list_seller_transactions))
        // 会话与购物车路由
        .route("/session", web::get().to(get_session))
        .service(
            web::resource("/cart")
                .route(web::get().to(forward_cart))
                .route(web::post().to(forward_cart))
                .route(web::delete().to(forward_cart)),
        )
        // 系统状态路由
        .route("/health", web::get().to(health_check))
}

/// 订单路由
fn order_routes() -> Scope {
    web::scope("/orders")
        .route("/{order_id}", web::get().to(get_order))
        .route("/{order_id}/payment", web::post().to(initiate_payment))
}
