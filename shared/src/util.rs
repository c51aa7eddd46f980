use chrono::{DateTime, Utc};

/// 获取当前 UTC 时间 (所有实体时间戳的统一来源)
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
