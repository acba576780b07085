//! Rule chains, one per field group
//!
//! Each chain stops at its first failing rule and returns that rule's
//! message. `None` means the group passed.

use chrono::NaiveDate;

use crate::charclass::{char_len, conforms, has_leading_space, is_blank, CharClass};
use crate::legacy::LegacyCharset;
use crate::messages;
use crate::rules;

pub const NAME_MAX_LEN: usize = 20;
pub const KANA_MAX_LEN: usize = 20;
pub const PREFECTURE_MAX_LEN: usize = 10;
pub const CITY_TOWN_MAX_LEN: usize = 50;
pub const BUILDING_MAX_LEN: usize = 50;

pub fn name(value: &str, legacy: &LegacyCharset) -> Option<&'static str> {
    if is_blank(value) {
        Some(messages::NAME_REQUIRED)
    } else if has_leading_space(value) {
        Some(messages::LEADING_SPACE)
    } else if !conforms(value, &CharClass::NAME, legacy) {
        Some(messages::NAME_CHARSET)
    } else if char_len(value) > NAME_MAX_LEN {
        Some(messages::NAME_TOO_LONG)
    } else {
        None
    }
}

pub fn kana(value: &str) -> Option<&'static str> {
    if is_blank(value) {
        Some(messages::KANA_REQUIRED)
    } else if has_leading_space(value) {
        Some(messages::LEADING_SPACE)
    } else if !conforms(value, &CharClass::KANA, &LegacyCharset::default()) {
        Some(messages::KANA_CHARSET)
    } else if char_len(value) > KANA_MAX_LEN {
        Some(messages::KANA_TOO_LONG)
    } else {
        None
    }
}

/// Birth date from separate year / month / day inputs
pub fn birth_parts(year: &str, month: &str, day: &str, today: NaiveDate) -> Option<&'static str> {
    if is_blank(year) || is_blank(month) || is_blank(day) {
        return Some(messages::BIRTH_DATE_REQUIRED);
    }

    match rules::parse_birth_parts(year, month, day) {
        Some(date) if rules::is_not_future(date, today) => None,
        _ => Some(messages::BIRTH_DATE_INVALID),
    }
}

/// Where both input styles are accepted, the separate inputs win as soon as
/// one of them is filled in
pub fn prefers_birth_parts(year: &str, month: &str, day: &str) -> bool {
    [year, month, day].iter().any(|part| !is_blank(part))
}

/// Birth date from a single `YYYY-MM-DD` input
pub fn birth_iso(value: &str, today: NaiveDate) -> Option<&'static str> {
    if is_blank(value) {
        return Some(messages::BIRTH_DATE_REQUIRED);
    }
    if !rules::is_iso_date_format(value) {
        return Some(messages::BIRTH_DATE_FORMAT);
    }

    match rules::parse_iso_date(value) {
        Some(date) if rules::is_not_future(date, today) => None,
        _ => Some(messages::BIRTH_DATE_INVALID),
    }
}

pub fn postal_code(value: &str) -> Option<&'static str> {
    if is_blank(value) {
        Some(messages::POSTAL_CODE_REQUIRED)
    } else if !value.contains('-') {
        Some(messages::POSTAL_CODE_HYPHEN)
    } else if !rules::is_postal_code(value) {
        Some(messages::POSTAL_CODE_FORMAT)
    } else {
        None
    }
}

/// Prefecture, city/town and building share one error slot.
/// `building` is optional; an empty value skips its rules.
pub fn address(
    prefecture: &str,
    city_town: &str,
    building: &str,
    legacy: &LegacyCharset,
) -> Option<&'static str> {
    let has_building = !building.is_empty();

    if is_blank(prefecture) || is_blank(city_town) {
        Some(messages::ADDRESS_REQUIRED)
    } else if has_leading_space(prefecture) {
        Some(messages::LEADING_SPACE)
    } else if !conforms(prefecture, &CharClass::PREFECTURE, legacy) {
        Some(messages::PREFECTURE_CHARSET)
    } else if has_leading_space(city_town) {
        Some(messages::LEADING_SPACE)
    } else if !conforms(city_town, &CharClass::CITY_TOWN, legacy) {
        Some(messages::CITY_TOWN_CHARSET)
    } else if has_building && has_leading_space(building) {
        Some(messages::LEADING_SPACE)
    } else if has_building && !conforms(building, &CharClass::BUILDING, legacy) {
        Some(messages::BUILDING_CHARSET)
    } else if char_len(prefecture) > PREFECTURE_MAX_LEN {
        Some(messages::PREFECTURE_TOO_LONG)
    } else if char_len(city_town) > CITY_TOWN_MAX_LEN || char_len(building) > BUILDING_MAX_LEN {
        Some(messages::CITY_TOWN_TOO_LONG)
    } else {
        None
    }
}

pub fn tel(value: &str) -> Option<&'static str> {
    if is_blank(value) {
        Some(messages::TEL_REQUIRED)
    } else if !value.contains('-') {
        Some(messages::TEL_HYPHEN)
    } else if !rules::is_tel(value) {
        Some(messages::TEL_FORMAT)
    } else {
        None
    }
}

/// Syntax only; the duplicate lookup belongs to the server validator
pub fn email(value: &str) -> Option<&'static str> {
    if is_blank(value) {
        Some(messages::EMAIL_REQUIRED)
    } else if !rules::is_valid_email(value) {
        Some(messages::EMAIL_INVALID)
    } else {
        None
    }
}
