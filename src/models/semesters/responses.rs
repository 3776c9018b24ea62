use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/semester.ts")]
pub struct SemesterResponse {
    pub id: i64,
    pub name: String,
    pub available: bool,
}
