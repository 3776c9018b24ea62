mod r#impl;
mod structs;

pub use structs::{AppConfig, AppSettings, SerializerConfig};
