// File: src/result.rs
// Purpose: Field groups and the validation outcome

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named error slot covering one or more inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    Name,
    Kana,
    BirthDate,
    PostalCode,
    /// prefecture, city_town and building
    Address,
    Tel,
    Email,
    Document1,
    Document2,
    AddressConsistency,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 10] = [
        Self::Name,
        Self::Kana,
        Self::BirthDate,
        Self::PostalCode,
        Self::Address,
        Self::Tel,
        Self::Email,
        Self::Document1,
        Self::Document2,
        Self::AddressConsistency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Kana => "kana",
            Self::BirthDate => "birth_date",
            Self::PostalCode => "postal_code",
            Self::Address => "address",
            Self::Tel => "tel",
            Self::Email => "email",
            Self::Document1 => "document1",
            Self::Document2 => "document2",
            Self::AddressConsistency => "address_consistency",
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one validation run.
///
/// `errors` holds a key only for groups that failed, each with the
/// message of the first failing rule. `ok` is true exactly when it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: BTreeMap<FieldGroup, String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: BTreeMap::new(),
        }
    }

    pub fn from_errors(errors: BTreeMap<FieldGroup, String>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
        }
    }

    pub fn has_error(&self, group: FieldGroup) -> bool {
        self.errors.contains_key(&group)
    }

    pub fn error(&self, group: FieldGroup) -> Option<&str> {
        self.errors.get(&group).map(String::as_str)
    }

    /// Errors keyed by group name, for re-rendering the form
    pub fn errors_by_name(&self) -> HashMap<String, String> {
        self.errors
            .iter()
            .map(|(group, message)| (group.as_str().to_string(), message.clone()))
            .collect()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_tracks_errors() {
        assert!(ValidationResult::success().ok);
        assert!(ValidationResult::from_errors(BTreeMap::new()).ok);

        let mut errors = BTreeMap::new();
        errors.insert(FieldGroup::Tel, "bad".to_string());
        let result = ValidationResult::from_errors(errors);
        assert!(!result.ok);
        assert!(result.has_error(FieldGroup::Tel));
        assert_eq!(result.error(FieldGroup::Tel), Some("bad"));
        assert_eq!(result.error(FieldGroup::Email), None);
    }

    #[test]
    fn test_names_match_serde() {
        for group in FieldGroup::ALL {
            let json = serde_json::to_string(&group).unwrap();
            assert_eq!(json, format!("\"{}\"", group.as_str()));
        }
    }

    #[test]
    fn test_errors_by_name() {
        let mut errors = BTreeMap::new();
        errors.insert(FieldGroup::AddressConsistency, "mismatch".to_string());
        let by_name = ValidationResult::from_errors(errors).errors_by_name();
        assert_eq!(by_name.get("address_consistency").map(String::as_str), Some("mismatch"));
    }
}
