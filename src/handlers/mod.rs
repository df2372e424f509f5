// API处理器模块
// 浏览器请求到后端调用的转发逻辑

pub mod catalog_handlers;
pub mod checkout_handlers;
pub mod health_handlers;
pub mod image_handlers;
pub mod order_handlers;
pub mod session_handlers;

// 重新导出处理器
pub use catalog_handlers::*;
pub use checkout_handlers::*;
pub use health_handlers::*;
pub use image_handlers::*;
pub use order_handlers::*;
pub use session_handlers::*;
