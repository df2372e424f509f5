// 服务层模块
// 后端API客户端与各业务动作，每个动作对应一次后端调用

pub mod api_client;
pub mod collection_service;
pub mod content_service;
pub mod country_service;
pub mod coupon_service;
pub mod image_service;
pub mod order_service;
pub mod payment_service;
pub mod session_service;
pub mod shipping_service;
pub mod transaction_service;

// 重新导出服务
pub use api_client::{path_segment, ApiClient, BackendResponse};
pub use collection_service::CollectionService;
pub use content_service::ContentService;
pub use country_service::CountryService;
pub use coupon_service::CouponService;
pub use image_service::ImageService;
pub use order_service::OrderService;
pub use payment_service::PaymentService;
pub use session_service::SessionService;
pub use shipping_service::ShippingService;
pub use transaction_service::TransactionService;
