use std::path::Path;

use chrono_tz::Tz;
use serde::de::DeserializeOwned;
use shared::models::{BusinessHours, DiningTable};

use super::error::ConfigError;
use crate::reservations::floor_plan;

/// 可用性来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityMode {
    /// Every slot and table is available
    Open,
    /// Random availability, for demos
    Simulated,
}

impl AvailabilityMode {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "simulated" | "random" => AvailabilityMode::Simulated,
            _ => AvailabilityMode::Open,
        }
    }
}

/// 预订引擎配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | - | 日志目录 (按天滚动) |
/// | TIMEZONE | Europe/Madrid | 营业时区 |
/// | CALENDAR_DAYS | 14 | 可预订天数 |
/// | MAX_PARTY_SIZE | 20 | 最大就餐人数 |
/// | SUBMIT_DELAY_MS | 1000 | 模拟提交延迟(毫秒) |
/// | AVAILABILITY_MODE | open | open / simulated |
/// | BUSINESS_HOURS_FILE | - | 营业时间 JSON |
/// | FLOOR_PLAN_FILE | - | 桌台布局 JSON |
///
/// # 示例
///
/// ```ignore
/// TIMEZONE=Europe/London MAX_PARTY_SIZE=12 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | production
    pub environment: String,
    /// 日志级别 (tracing filter)
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志目录，未设置时只输出到控制台
    pub log_dir: Option<String>,
    /// 营业时区 (IANA 名称)
    pub timezone: String,
    /// 日历窗口天数
    pub calendar_days: usize,
    /// 最大就餐人数
    pub max_party_size: i32,
    /// 模拟提交延迟 (毫秒)
    pub submit_delay_ms: u64,
    /// 可用性来源
    pub availability_mode: AvailabilityMode,
    /// 营业时间覆盖文件
    pub business_hours_file: Option<String>,
    /// 桌台布局覆盖文件
    pub floor_plan_file: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            timezone: std::env::var("TIMEZONE").unwrap_or_else(|_| "Europe/Madrid".into()),
            calendar_days: std::env::var("CALENDAR_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(14),
            max_party_size: std::env::var("MAX_PARTY_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &i32| *n >= 1)
                .unwrap_or(20),
            submit_delay_ms: std::env::var("SUBMIT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            availability_mode: std::env::var("AVAILABILITY_MODE")
                .map(|v| AvailabilityMode::parse(&v))
                .unwrap_or(AvailabilityMode::Open),
            business_hours_file: std::env::var("BUSINESS_HOURS_FILE")
                .ok()
                .filter(|p| !p.is_empty()),
            floor_plan_file: std::env::var("FLOOR_PLAN_FILE")
                .ok()
                .filter(|p| !p.is_empty()),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 解析营业时区
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(self.timezone.clone()))
    }

    /// 营业时间：覆盖文件优先，否则使用默认营业时间
    pub fn load_business_hours(&self) -> Result<BusinessHours, ConfigError> {
        match &self.business_hours_file {
            Some(path) => load_json(path),
            None => Ok(BusinessHours::default()),
        }
    }

    /// 桌台布局：覆盖文件优先，否则使用默认布局
    pub fn load_floor_plan(&self) -> Result<Vec<DiningTable>, ConfigError> {
        let tables: Vec<DiningTable> = match &self.floor_plan_file {
            Some(path) => load_json(path)?,
            None => floor_plan::default_floor_plan(),
        };
        floor_plan::validate_floor_plan(&tables)?;
        Ok(tables)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| ConfigError::Load {
        path: display,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn base_config() -> Config {
        Config {
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            timezone: "Europe/Madrid".into(),
            calendar_days: 14,
            max_party_size: 20,
            submit_delay_ms: 1000,
            availability_mode: AvailabilityMode::Open,
            business_hours_file: None,
            floor_plan_file: None,
        }
    }

    #[test]
    fn test_timezone_parsing() {
        let mut config = base_config();
        assert_eq!(config.timezone().unwrap(), chrono_tz::Europe::Madrid);

        config.timezone = "Mars/Olympus".into();
        assert_eq!(
            config.timezone(),
            Err(ConfigError::InvalidTimezone("Mars/Olympus".into()))
        );
    }

    #[test]
    fn test_is_production() {
        let mut config = base_config();
        assert!(!config.is_production());
        config.environment = "production".into();
        assert!(config.is_production());
    }

    #[test]
    fn test_availability_mode_parse() {
        assert_eq!(AvailabilityMode::parse("Simulated"), AvailabilityMode::Simulated);
        assert_eq!(AvailabilityMode::parse("random"), AvailabilityMode::Simulated);
        assert_eq!(AvailabilityMode::parse("open"), AvailabilityMode::Open);
        assert_eq!(AvailabilityMode::parse("whatever"), AvailabilityMode::Open);
    }

    #[test]
    fn test_defaults_without_override_files() {
        let config = base_config();
        assert_eq!(config.load_business_hours().unwrap(), BusinessHours::default());
        assert_eq!(config.load_floor_plan().unwrap().len(), 19);
    }

    #[test]
    fn test_business_hours_file_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "mondayToThursday": {{ "open": "12:00", "close": "20:00", "intervalMinutes": 15 }},
                "fridayToSaturday": {{ "open": "12:00", "close": "23:00", "intervalMinutes": 15 }},
                "sunday": {{ "open": "12:00", "close": "18:00", "intervalMinutes": 15 }}
            }}"#
        )
        .unwrap();

        let mut config = base_config();
        config.business_hours_file = Some(file.path().display().to_string());
        let hours = config.load_business_hours().unwrap();
        assert_eq!(hours.monday_to_thursday.interval_minutes, 15);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let mut config = base_config();
        config.floor_plan_file = Some("/nonexistent/floor_plan.json".into());
        match config.load_floor_plan() {
            Err(ConfigError::Load { path, .. }) => assert!(path.contains("floor_plan.json")),
            other => panic!("expected load error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_floor_plan_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"id\": 1}}]").unwrap();

        let mut config = base_config();
        config.floor_plan_file = Some(file.path().display().to_string());
        assert!(matches!(
            config.load_floor_plan(),
            Err(ConfigError::Load { .. })
        ));
    }
}
