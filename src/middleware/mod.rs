// 中间件模块
// 包含请求日志、跨域等中间件

pub mod logging;
pub mod cors;

// 重新导出中间件
pub use logging::*;
pub use cors::*;
