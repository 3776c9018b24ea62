//! SeaORM 实体定义
//!
//! 实体即后端记录。每个实体通过 `into_response` 投影为对外的响应结构，
//! 写入路径由 `models::*::requests` 生成对应的 `ActiveModel`。

pub mod prelude;

pub mod announcements;
pub mod categories;
pub mod departments;
pub mod notifications;
pub mod reports;
pub mod semesters;
pub mod teacher_evaluations;
pub mod teachers;
pub mod user_points;
pub mod users;
