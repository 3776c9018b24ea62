pub mod options;
pub mod pagination;
pub mod payload;
pub mod validation;

pub use options::SerializeOptions;
pub use pagination::{Page, PaginationQuery};
pub use payload::{FromPayload, PayloadReader};
pub(crate) use payload::impl_try_from_payload;
pub use validation::ValidationErrors;

#[cfg(test)]
pub(crate) fn field_names<T: serde::Serialize>(value: &T) -> Vec<String> {
    match serde_json::to_value(value).expect("representation serializes") {
        serde_json::Value::Object(map) => map.keys().cloned().collect(),
        other => panic!("expected an object, got {other}"),
    }
}
