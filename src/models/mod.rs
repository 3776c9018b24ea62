//! 对外数据模型
//!
//! 每个实体一个子模块：`responses` 为只读投影，`requests` 为经过校验的写入载荷。

pub mod announcements;
pub mod categories;
pub mod common;
pub mod departments;
pub mod notifications;
pub mod reports;
pub mod semesters;
pub mod teacher_evaluations;
pub mod teachers;
pub mod user_points;
pub mod users;

pub use common::{FromPayload, Page, PaginationQuery, SerializeOptions, ValidationErrors};
