use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)https?://[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)*(:\d{1,5})?(/[^\s]*)?$")
        .expect("Invalid url regex")
});

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";
pub const INVALID_STRING: &str = "Not a valid string.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const INTEGER_OUT_OF_RANGE: &str = "Ensure this value is within the supported range.";
pub const INVALID_BOOLEAN: &str = "Must be a valid boolean.";
pub const INVALID_URL: &str = "Enter a valid URL.";
pub const INVALID_DATETIME: &str =
    "Datetime has wrong format. Use RFC 3339, e.g. 2026-01-24T12:00:00Z.";
pub const EXPECTED_OBJECT: &str = "Invalid data. Expected a dictionary.";

pub fn validate_not_blank(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err(NOT_BLANK);
    }
    Ok(())
}

/// 长度按字符计算，而非字节
pub fn validate_max_length(value: &str, max_length: usize) -> Result<(), String> {
    if value.chars().count() > max_length {
        return Err(format!(
            "Ensure this field has no more than {max_length} characters."
        ));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), &'static str> {
    if !URL_RE.is_match(url) {
        return Err(INVALID_URL);
    }
    Ok(())
}
