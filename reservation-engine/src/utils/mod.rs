//! 工具模块
//!
//! - [`logger`] - 日志初始化与清理
//! - [`time`] - 日期时间显示格式

pub mod logger;
pub mod time;
