//! Format and calendar checks

use chrono::NaiveDate;
use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::charclass::IDEOGRAPHIC_SPACE;

// ASCII digits only; `\d` would also match full-width digits
static POSTAL_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{3}-[0-9]{4}$").unwrap()
});

static TEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0[0-9]{1,4}-[0-9]{1,4}-[0-9]{3,4}$").unwrap()
});

static ISO_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap()
});

pub const TEL_MIN_LEN: usize = 12;
pub const TEL_MAX_LEN: usize = 13;

/// Area codes of the form `0X`: Tokyo (03), Osaka (06) and the 04 regions
/// such as Tokorozawa and Kamogawa. Mobile and service prefixes (090, 0120)
/// are never two digits.
pub const TWO_DIGIT_AREA_CODES: &[&str] = &["03", "04", "06"];

/// A real proleptic Gregorian date, or None for e.g. Feb 30
///
/// # Examples
/// ```
/// use entry_form_core::calendar_date;
///
/// assert!(calendar_date(2024, 2, 29).is_some());
/// assert!(calendar_date(2023, 2, 29).is_none());
/// assert!(calendar_date(1900, 2, 29).is_none());
/// assert!(calendar_date(2000, 2, 29).is_some());
/// ```
pub fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse separately submitted year / month / day fields
pub fn parse_birth_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year = year.trim().parse::<i32>().ok()?;
    let month = month.trim().parse::<u32>().ok()?;
    let day = day.trim().parse::<u32>().ok()?;
    calendar_date(year, month, day)
}

pub fn is_iso_date_format(value: &str) -> bool {
    ISO_DATE_REGEX.is_match(value)
}

/// Parse a `YYYY-MM-DD` value, rejecting dates that do not exist
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !is_iso_date_format(value) {
        return None;
    }
    let year = value[0..4].parse::<i32>().ok()?;
    let month = value[5..7].parse::<u32>().ok()?;
    let day = value[8..10].parse::<u32>().ok()?;
    calendar_date(year, month, day)
}

/// Today counts as not in the future
pub fn is_not_future(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

pub fn is_postal_code(value: &str) -> bool {
    POSTAL_CODE_REGEX.is_match(value)
}

pub fn is_tel(value: &str) -> bool {
    let len = value.chars().count();
    if !TEL_REGEX.is_match(value) || !(TEL_MIN_LEN..=TEL_MAX_LEN).contains(&len) {
        return false;
    }

    match value.split('-').next() {
        Some(area) if area.len() == 2 => TWO_DIGIT_AREA_CODES.contains(&area),
        _ => true,
    }
}

/// RFC 5322 addr-spec restricted to half-width characters and dotted domains
pub fn is_valid_email(value: &str) -> bool {
    if !value.is_ascii() || !EmailAddress::is_valid(value) {
        return false;
    }

    match value.rsplit_once('@') {
        Some((_, domain)) => {
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// `100-0001` -> `1000001`
pub fn normalize_postal_code(value: &str) -> String {
    value.chars().filter(|&c| c != '-').collect()
}

/// Drops half-width and full-width whitespace
pub fn normalize_city_town(value: &str) -> String {
    value
        .chars()
        .filter(|&c| !c.is_whitespace() && c != IDEOGRAPHIC_SPACE)
        .collect()
}
