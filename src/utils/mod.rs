pub mod time;
pub mod validate;

pub use time::{datetime_from_timestamp, now_timestamp};
