// 工具函数模块
// 包含Cookie转发与响应桥接等通用工具

pub mod cookies;

// 重新导出常用函数
pub use cookies::*;
