//! Field rules used by the booking schema
//!
//! Each rule has the shape expected by `#[validate(custom(function = ...))]`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use validator::ValidationError;

pub const MAX_ADULTS: u32 = 10;
pub const MAX_CHILDREN: u32 = 10;

pub static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ()\-]{10,20}$").expect("phone regex is valid"));

fn rule_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Guest name: at least two characters once surrounding whitespace is removed
pub fn guest_name(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < 2 {
        Err(rule_error("name-length", "name must be at least 2 characters"))
    } else if len > 100 {
        Err(rule_error("name-length", "name must not exceed 100 characters"))
    } else {
        Ok(())
    }
}

/// Parse a guest count typed into a numeric input
pub fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

fn count_in_range(
    value: &str,
    code: &'static str,
    label: &str,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    match parse_count(value) {
        None => Err(rule_error(
            code,
            format!("{} must be a whole number (value: '{}')", label, value),
        )),
        Some(n) if n < min => Err(rule_error(code, format!("at least {} {} required", min, label))),
        Some(n) if n > max => Err(rule_error(
            code,
            format!("{} must not exceed {} (value: {})", label, max, n),
        )),
        Some(_) => Ok(()),
    }
}

/// Adults: whole number from 1 to [`MAX_ADULTS`]
pub fn adult_count(value: &str) -> Result<(), ValidationError> {
    count_in_range(value, "adults-range", "adults", 1, MAX_ADULTS)
}

/// Children: whole number from 0 to [`MAX_CHILDREN`]
pub fn child_count(value: &str) -> Result<(), ValidationError> {
    count_in_range(value, "children-range", "children", 0, MAX_CHILDREN)
}
