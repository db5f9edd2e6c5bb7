use rand::Rng;

/// Custom epoch: 2024-01-01 00:00:00 UTC
const EPOCH_MS: i64 = 1_704_067_200_000;
const TIMESTAMP_MASK: i64 = 0x1FF_FFFF_FFFF; // 41 bits
const RANDOM_BITS: u32 = 12;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Snowflake-style i64 identifier
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC
///   - 12 bits: random
pub fn snowflake_id() -> i64 {
    let ts = (now_millis() - EPOCH_MS) & TIMESTAMP_MASK;
    let rand_bits: i64 = rand::thread_rng().gen_range(0..1 << RANDOM_BITS);
    (ts << RANDOM_BITS) | rand_bits
}

/// Guest-facing confirmation number, e.g. "RS-27584913408123"
pub fn confirmation_number(prefix: &str) -> String {
    format!("{}-{}", prefix, snowflake_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_fits_js_safe_integer() {
        const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
        let id = snowflake_id();
        assert!(id > 0);
        assert!(id <= MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_snowflake_is_time_ordered() {
        let first = snowflake_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = snowflake_id();
        assert!(second >> RANDOM_BITS > first >> RANDOM_BITS);
    }

    #[test]
    fn test_confirmation_number() {
        let number = confirmation_number("RS");
        let digits = number.strip_prefix("RS-").unwrap();
        assert!(digits.parse::<i64>().is_ok());
    }
}
