// File: src/variant.rs
// Purpose: Calling contexts and the rule options they select

use serde::{Deserialize, Serialize};

/// How the birth date is submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthDateRule {
    /// `birth_year`, `birth_month`, `birth_day`
    #[default]
    Discrete,
    /// `birth_date` as `YYYY-MM-DD`
    Single,
    /// Discrete inputs when any of them is filled in, otherwise `birth_date`.
    /// Whichever is used is fully validated.
    Either,
}

/// The page a submission comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// New registration
    #[default]
    Register,
    /// Edit page that also accepts identity documents
    EditWithFiles,
    /// Edit page that checks the address against the postal master
    EditWithConsistency,
}

/// Rule options for one validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub birth_date: BirthDateRule,
    pub address_consistency: bool,
    pub email_duplicate: bool,
    /// Leave the record named by the form's `id` out of the duplicate
    /// e-mail lookup. Only edit pages have a record of their own.
    #[serde(default)]
    pub exclude_own_record: bool,
}

impl ValidatorConfig {
    /// Preset for a calling context
    ///
    /// # Examples
    /// ```
    /// use entry_form::{BirthDateRule, ValidatorConfig, Variant};
    ///
    /// let config = ValidatorConfig::for_variant(Variant::EditWithConsistency);
    /// assert_eq!(config.birth_date, BirthDateRule::Single);
    /// assert!(config.address_consistency);
    /// assert!(!config.email_duplicate);
    /// ```
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Register => Self {
                birth_date: BirthDateRule::Discrete,
                address_consistency: false,
                email_duplicate: true,
                exclude_own_record: false,
            },
            Variant::EditWithFiles => Self {
                birth_date: BirthDateRule::Either,
                address_consistency: false,
                email_duplicate: false,
                exclude_own_record: true,
            },
            Variant::EditWithConsistency => Self {
                birth_date: BirthDateRule::Single,
                address_consistency: true,
                email_duplicate: false,
                exclude_own_record: true,
            },
        }
    }

    /// Whether any rule consults the reference store
    pub fn needs_store(&self) -> bool {
        self.address_consistency || self.email_duplicate
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl From<Variant> for ValidatorConfig {
    fn from(variant: Variant) -> Self {
        Self::for_variant(variant)
    }
}
