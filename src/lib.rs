//! jcourse-api - 选课社区数据传输层
//!
//! 将 SeaORM 记录投影为对外的 JSON 表示，并把外部写入载荷校验为可插入的记录。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体（后端记录）
//! - `errors`: 统一错误处理
//! - `models`: 对外响应与写入请求
//! - `runtime`: 日志初始化
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod utils;

pub use migration::{Migrator, MigratorTrait};
