//! Reservation Engine - 餐厅订位引擎
//!
//! # 架构概述
//!
//! 给定日期、时间和就餐人数，计算可用且合适的桌台，并驱动四步预订向导：
//!
//! - **日历** (`reservations::calendar`): 从今天开始的可预订日期窗口
//! - **时段** (`reservations::time_slots`): 按营业时间生成时段，分为午餐/晚餐
//! - **桌台** (`reservations::availability`): 可用性 + 容量 => 是否合适
//! - **向导** (`reservations::wizard`): 日期时间 → 选桌 → 客人信息 → 确认
//! - **提交** (`reservations::submit`): 可取消的模拟提交
//!
//! # 模块结构
//!
//! ```text
//! reservation-engine/src/
//! ├── core/          # 配置、运行环境、错误
//! ├── reservations/  # 日历、时段、桌台、向导、提交
//! └── utils/         # 日志、时间格式
//! ```

pub mod core;
pub mod reservations;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{BookingEnvironment, Config, ConfigError, OracleError, ReservationError, Result};
pub use reservations::{
    CalendarDay, FieldErrors, ReservationDraft, ReservationWizard, Submission, TableAvailability,
    TimeSlot, WizardStep,
};

// Re-export unified error types from shared
pub use shared::{ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// 按配置初始化日志
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    init_logger_with_file(
        &config.log_level,
        config.log_json || config.is_production(),
        config.log_dir.as_deref(),
    )?;
    tracing::debug!(environment = %config.environment, "Logger initialized");
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____                                 _   _
  |  _ \ ___  ___  ___ _ ____   ____ _| |_(_) ___  _ __  ___
  | |_) / _ \/ __|/ _ \ '__\ \ / / _` | __| |/ _ \| '_ \/ __|
  |  _ <  __/\__ \  __/ |   \ V / (_| | |_| | (_) | | | \__ \
  |_| \_\___||___/\___|_|    \_/ \__,_|\__|_|\___/|_| |_|___/
    "#
    );
}
