use regex::Regex;
use std::sync::LazyLock;

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()-]{6,19}$").expect("phone pattern compiles"));

static TIME_OF_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("time pattern compiles"));

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone.trim())
}

/// `HH:MM`, 24-hour clock.
pub fn is_valid_time_of_day(value: &str) -> bool {
    TIME_OF_DAY.is_match(value)
}

/// Trimmed value, or `None` if nothing is left.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
