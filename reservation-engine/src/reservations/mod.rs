//! 预订模块
//!
//! # 模块结构
//!
//! - [`calendar`] - 可预订日期窗口
//! - [`time_slots`] - 营业时段生成
//! - [`availability`] - 桌台可用性解析
//! - [`wizard`] - 四步预订向导
//! - [`submit`] - 模拟提交

pub mod availability;
pub mod calendar;
pub mod clock;
pub mod floor_plan;
pub mod oracle;
pub mod submit;
pub mod time_slots;
pub mod validation;
pub mod wizard;

pub use availability::{AvailabilitySummary, TableAvailability};
pub use calendar::CalendarDay;
pub use clock::{Clock, FixedClock, SystemClock};
pub use oracle::{
    AvailabilityOracle, OpenAvailability, ScriptedAvailability, SimulatedAvailability,
    TableAvailabilityOracle,
};
pub use submit::Submission;
pub use time_slots::{MealPeriod, SlotGroup, TimeSlot};
pub use validation::{FieldError, FieldErrors};
pub use wizard::{ReservationDraft, ReservationWizard, WizardStep};
