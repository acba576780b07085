//! Per-keystroke checks for the browser
//!
//! Advisory only: the server re-runs every rule. Chains are shared with the
//! server wherever the two agree; the address block differs in that each
//! of its three inputs is checked in turn and named in the message.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::charclass::{char_len, conforms, has_leading_space, is_blank, CharClass};
use crate::fields::{self, BUILDING_MAX_LEN, CITY_TOWN_MAX_LEN, PREFECTURE_MAX_LEN};
use crate::legacy::LegacyCharset;
use crate::messages;

pub fn check_name(value: &str) -> Option<&'static str> {
    fields::name(value, LegacyCharset::bundled())
}

pub fn check_kana(value: &str) -> Option<&'static str> {
    fields::kana(value)
}

pub fn check_birth_parts(year: &str, month: &str, day: &str, today: NaiveDate) -> Option<&'static str> {
    fields::birth_parts(year, month, day, today)
}

pub fn check_birth_date(value: &str, today: NaiveDate) -> Option<&'static str> {
    fields::birth_iso(value, today)
}

pub fn check_postal_code(value: &str) -> Option<&'static str> {
    fields::postal_code(value)
}

pub fn check_address(prefecture: &str, city_town: &str, building: &str) -> Option<&'static str> {
    let legacy = LegacyCharset::bundled();

    if is_blank(prefecture) {
        return Some(messages::LIVE_PREFECTURE_REQUIRED);
    } else if has_leading_space(prefecture) {
        return Some(messages::LIVE_PREFECTURE_LEADING_SPACE);
    } else if !conforms(prefecture, &CharClass::PREFECTURE, legacy) {
        return Some(messages::PREFECTURE_CHARSET);
    } else if char_len(prefecture) > PREFECTURE_MAX_LEN {
        return Some(messages::PREFECTURE_TOO_LONG);
    }

    if is_blank(city_town) {
        return Some(messages::LIVE_CITY_TOWN_REQUIRED);
    } else if has_leading_space(city_town) {
        return Some(messages::LIVE_CITY_TOWN_LEADING_SPACE);
    } else if !conforms(city_town, &CharClass::CITY_TOWN, legacy) {
        return Some(messages::LIVE_CITY_TOWN_CHARSET);
    } else if char_len(city_town) > CITY_TOWN_MAX_LEN {
        return Some(messages::LIVE_CITY_TOWN_TOO_LONG);
    }

    if building.is_empty() {
        None
    } else if has_leading_space(building) {
        Some(messages::LIVE_BUILDING_LEADING_SPACE)
    } else if !conforms(building, &CharClass::BUILDING, legacy) {
        Some(messages::LIVE_BUILDING_CHARSET)
    } else if char_len(building) > BUILDING_MAX_LEN {
        Some(messages::LIVE_BUILDING_TOO_LONG)
    } else {
        None
    }
}

pub fn check_tel(value: &str) -> Option<&'static str> {
    fields::tel(value)
}

pub fn check_email(value: &str) -> Option<&'static str> {
    fields::email(value)
}

/// Run every live check whose inputs are on the page.
///
/// A group is skipped when none of its inputs appear in `values`, the way
/// the page only wires up listeners for inputs it renders. Returns group
/// name -> message for failing groups.
pub fn check_form(values: &HashMap<String, String>, today: NaiveDate) -> BTreeMap<&'static str, &'static str> {
    let field = |key: &str| values.get(key).map(String::as_str);
    let text = |key: &str| field(key).unwrap_or("");
    let mut errors = BTreeMap::new();

    let mut record = |group: &'static str, outcome: Option<&'static str>| {
        if let Some(message) = outcome {
            errors.insert(group, message);
        }
    };

    if let Some(value) = field("name") {
        record("name", check_name(value));
    }
    if let Some(value) = field("kana") {
        record("kana", check_kana(value));
    }

    let has_parts = ["birth_year", "birth_month", "birth_day"]
        .iter()
        .any(|key| values.contains_key(*key));
    let parts = (text("birth_year"), text("birth_month"), text("birth_day"));
    match field("birth_date") {
        Some(value) if !fields::prefers_birth_parts(parts.0, parts.1, parts.2) => {
            record("birth_date", check_birth_date(value, today));
        }
        _ if has_parts => {
            record("birth_date", check_birth_parts(parts.0, parts.1, parts.2, today));
        }
        _ => {}
    }

    if let Some(value) = field("postal_code") {
        record("postal_code", check_postal_code(value));
    }

    let has_address = ["prefecture", "city_town", "building"]
        .iter()
        .any(|key| values.contains_key(*key));
    if has_address {
        record(
            "address",
            check_address(text("prefecture"), text("city_town"), text("building")),
        );
    }

    if let Some(value) = field("tel") {
        record("tel", check_tel(value));
    }
    if let Some(value) = field("email") {
        record("email", check_email(value));
    }

    errors
}
