//! 核心模块 - 配置、运行环境和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 引擎配置
//! - [`BookingEnvironment`] - 向导依赖的协作者
//! - [`ReservationError`] - 预订错误

pub mod config;
pub mod error;
pub mod state;

pub use config::{AvailabilityMode, Config};
pub use error::{ConfigError, OracleError, ReservationError, Result};
pub use state::BookingEnvironment;
