use std::sync::Arc;
use std::time::Duration;

use shared::models::{BusinessHours, DiningTable};

use super::config::{AvailabilityMode, Config};
use super::error::ConfigError;
use crate::reservations::clock::{Clock, SystemClock};
use crate::reservations::floor_plan;
use crate::reservations::oracle::{
    AvailabilityOracle, OpenAvailability, SimulatedAvailability, TableAvailabilityOracle,
};
use crate::reservations::time_slots::validate_business_hours;

/// 预订环境 - 持有向导依赖的所有协作者
///
/// 使用 Arc 实现浅拷贝，每个向导会话持有一份克隆。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | clock | Arc<dyn Clock> | 营业时区的当前时间 |
/// | business_hours | Arc<BusinessHours> | 营业时间 (已校验) |
/// | tables | Arc<Vec<DiningTable>> | 桌台布局 (不可变) |
/// | slot_oracle | Arc<dyn AvailabilityOracle> | 时段可用性 |
/// | table_oracle | Arc<dyn TableAvailabilityOracle> | 桌台可用性 |
/// | max_party_size | i32 | 最大就餐人数 |
/// | calendar_days | usize | 日历窗口天数 |
/// | submit_delay | Duration | 模拟提交延迟 |
#[derive(Clone)]
pub struct BookingEnvironment {
    pub clock: Arc<dyn Clock>,
    pub business_hours: Arc<BusinessHours>,
    pub tables: Arc<Vec<DiningTable>>,
    pub slot_oracle: Arc<dyn AvailabilityOracle>,
    pub table_oracle: Arc<dyn TableAvailabilityOracle>,
    pub max_party_size: i32,
    pub calendar_days: usize,
    pub submit_delay: Duration,
}

impl BookingEnvironment {
    /// Everything available, default limits
    ///
    /// Business hours are validated up front so a bad entry is reported here
    /// rather than on the first date selection.
    pub fn new(
        clock: Arc<dyn Clock>,
        business_hours: BusinessHours,
        tables: Vec<DiningTable>,
    ) -> Result<Self, ConfigError> {
        validate_business_hours(&business_hours)?;
        floor_plan::validate_floor_plan(&tables)?;

        Ok(Self {
            clock,
            business_hours: Arc::new(business_hours),
            tables: Arc::new(tables),
            slot_oracle: Arc::new(OpenAvailability),
            table_oracle: Arc::new(OpenAvailability),
            max_party_size: 20,
            calendar_days: 14,
            submit_delay: Duration::from_millis(1000),
        })
    }

    /// 从配置构建
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let tz = config.timezone()?;
        let hours = config.load_business_hours()?;
        let tables = config.load_floor_plan()?;

        let mut env = Self::new(Arc::new(SystemClock::new(tz)), hours, tables)?
            .with_max_party_size(config.max_party_size)
            .with_submit_delay(Duration::from_millis(config.submit_delay_ms));
        env.calendar_days = config.calendar_days;

        if config.availability_mode == AvailabilityMode::Simulated {
            let simulated = Arc::new(SimulatedAvailability::default());
            env = env
                .with_slot_oracle(simulated.clone())
                .with_table_oracle(simulated);
        }

        Ok(env)
    }

    pub fn with_slot_oracle(mut self, oracle: Arc<dyn AvailabilityOracle>) -> Self {
        self.slot_oracle = oracle;
        self
    }

    pub fn with_table_oracle(mut self, oracle: Arc<dyn TableAvailabilityOracle>) -> Self {
        self.table_oracle = oracle;
        self
    }

    pub fn with_max_party_size(mut self, max_party_size: i32) -> Self {
        self.max_party_size = max_party_size.max(1);
        self
    }

    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }
}

impl std::fmt::Debug for BookingEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingEnvironment")
            .field("now", &self.clock.now())
            .field("tables", &self.tables.len())
            .field("max_party_size", &self.max_party_size)
            .field("calendar_days", &self.calendar_days)
            .field("submit_delay", &self.submit_delay)
            .finish_non_exhaustive()
    }
}
