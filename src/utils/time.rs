use chrono::{DateTime, Utc};

/// 数据库中时间以 Unix 秒存储；越界值回落到纪元起点
pub fn datetime_from_timestamp(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}
