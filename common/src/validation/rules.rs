//! Per-field validation rules for the contact form.
//!
//! Each rule is a standalone function taking the control's raw value and
//! returning the coerced value on success, or the single user-facing message
//! displayed next to the offending control. Checks inside a rule run in
//! declared order (required first, then the shape check, then the named
//! checks) so the first failure wins. Whole-record composition lives in the
//! parent module's [`validate`](super::validate).

use regex::Regex;
use std::sync::LazyLock;

/// Address that is refused outright regardless of shape.
const BLOCKED_ADDRESS: &str = "admin@admin.com";

/// Domain suffix the form does not accept mail from.
const BLOCKED_DOMAIN_SUFFIX: &str = "exec.com";

// Email shape check. Deliberately permissive about the local part; the two
// named checks below handle the blocked address and the blocked domain.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("EMAIL_REGEX: invalid regex pattern")
});

/// Requires a non-empty name of at least 4 characters.
pub fn user_name(value: &str) -> Result<String, &'static str> {
    if value.is_empty() {
        return Err("First name is required");
    }
    if value.chars().count() < 4 {
        return Err("Minimum 4 characters required");
    }
    Ok(value.to_string())
}

/// Requires a well-formed address that is neither the blocked address nor
/// hosted under the blocked domain.
///
/// # Examples
///
/// ```
/// use common::validation::rules::email;
///
/// assert!(email("john@example.com").is_ok());
/// assert_eq!(email("not-an-email"), Err("Invalid email format"));
/// assert_eq!(email("admin@admin.com"), Err("Enter a different email address"));
/// assert_eq!(email("ceo@exec.com"), Err("This domain is not supported"));
/// ```
pub fn email(value: &str) -> Result<String, &'static str> {
    if value.is_empty() {
        return Err("Email is required");
    }
    if !EMAIL_REGEX.is_match(value) {
        return Err("Invalid email format");
    }
    if value == BLOCKED_ADDRESS {
        return Err("Enter a different email address");
    }
    if value.ends_with(BLOCKED_DOMAIN_SUFFIX) {
        return Err("This domain is not supported");
    }
    Ok(value.to_string())
}

/// Coerces the number input's text to an integer age between 18 and 100.
///
/// # Examples
///
/// ```
/// use common::validation::rules::age;
///
/// assert_eq!(age("25"), Ok(25));
/// assert_eq!(age(""), Err("Please enter your age"));
/// assert_eq!(age("17"), Err("You should be 18 years or older to contact us"));
/// assert_eq!(age("101"), Err("Please enter valid age"));
/// ```
pub fn age(value: &str) -> Result<u32, &'static str> {
    let raw = value.trim();
    if raw.is_empty() {
        return Err("Please enter your age");
    }
    // Signed parse: a number input can hand back "-5", and the lower-bound
    // check must see it before anything else rejects it.
    let age: i64 = raw.parse().map_err(|_| "Please enter valid age")?;
    if age < 18 {
        return Err("You should be 18 years or older to contact us");
    }
    if age > 100 {
        return Err("Please enter valid age");
    }
    Ok(age as u32)
}

/// Coerces the date input's text to a calendar-valid `YYYY-MM-DD` date.
/// A date input only ever produces that shape or the empty string, so both
/// failures carry the same message.
pub fn date_of_birth(value: &str) -> Result<String, &'static str> {
    if value.is_empty() || !is_valid_iso_date(value) {
        return Err("Please enter your birth date");
    }
    Ok(value.to_string())
}

/// Requires the primary phone number. The secondary number has no rule.
pub fn primary_phone(value: &str) -> Result<String, &'static str> {
    if value.is_empty() {
        return Err("Please provide your Primary phone number");
    }
    Ok(value.to_string())
}

/// Requires a non-empty message body.
pub fn message(value: &str) -> Result<String, &'static str> {
    if value.is_empty() {
        return Err("Message is required");
    }
    Ok(value.to_string())
}

/// Requires the terms-and-conditions checkbox to be ticked. The submit
/// button is also disabled while it is not; both guards are intentional.
pub fn tnc(accepted: bool) -> Result<bool, &'static str> {
    if accepted {
        Ok(true)
    } else {
        Err("Please accept terms and conditions")
    }
}

/// Checks a `YYYY-MM-DD` string against the Gregorian calendar.
fn is_valid_iso_date(value: &str) -> bool {
    let mut parts = value.splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return false;
    }
    let (Ok(year), Ok(month), Ok(day)) = (y.parse::<i32>(), m.parse::<u32>(), d.parse::<u32>())
    else {
        return false;
    };
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return false,
    };
    (1..=days).contains(&day)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
