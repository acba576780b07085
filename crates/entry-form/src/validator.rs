// File: src/validator.rs
// Purpose: The form validator, one short-circuit chain per field group

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use entry_form_core::{fields, messages, normalize_city_town, normalize_postal_code, LegacyCharset};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::input::{Documents, FileDescriptor, FormInput, UploadError};
use crate::result::{FieldGroup, ValidationResult};
use crate::store::{NoStore, ReferenceStore, SqlStore};
use crate::variant::{BirthDateRule, ValidatorConfig, Variant};

pub const ACCEPTED_DOCUMENT_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// Validates submitted entry forms.
///
/// Every group is checked on every run; within a group the first failing
/// rule wins. Lookups against `store` run last and only for groups whose
/// syntax already passed.
pub struct FieldValidator<S = NoStore, C = SystemClock> {
    config: ValidatorConfig,
    legacy: Arc<LegacyCharset>,
    store: S,
    clock: C,
}

impl FieldValidator<NoStore, SystemClock> {
    pub fn new(config: ValidatorConfig, legacy: Arc<LegacyCharset>) -> Self {
        Self {
            config,
            legacy,
            store: NoStore,
            clock: SystemClock,
        }
    }
}

impl FieldValidator<SqlStore, SystemClock> {
    /// Build from configuration, connecting to the configured database
    pub async fn from_config(config: &Config) -> Result<Self> {
        let legacy = config.charset.load()?;
        let store = SqlStore::connect(&config.database).await?;
        Ok(FieldValidator::new(config.validator_config(), legacy).with_store(store))
    }
}

impl<S: ReferenceStore, C: Clock> FieldValidator<S, C> {
    pub fn with_store<T: ReferenceStore>(self, store: T) -> FieldValidator<T, C> {
        FieldValidator {
            config: self.config,
            legacy: self.legacy,
            store,
            clock: self.clock,
        }
    }

    pub fn with_clock<K: Clock>(self, clock: K) -> FieldValidator<S, K> {
        FieldValidator {
            config: self.config,
            legacy: self.legacy,
            store: self.store,
            clock,
        }
    }

    /// Switch to the preset of another calling context
    pub fn configure(&mut self, variant: Variant) -> &mut Self {
        self.config = ValidatorConfig::for_variant(variant);
        self
    }

    pub fn set_config(&mut self, config: ValidatorConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate a submission.
    ///
    /// Returns `Err` only when a lookup could not be answered; field
    /// failures are in the returned result.
    #[tracing::instrument(skip_all, fields(birth_date = ?self.config.birth_date, store = self.store.name()))]
    pub async fn validate(&self, input: &FormInput, documents: &Documents) -> Result<ValidationResult> {
        let mut errors = self.check_syntax(input, documents);

        if self.config.address_consistency
            && !errors.contains_key(&FieldGroup::PostalCode)
            && !errors.contains_key(&FieldGroup::Address)
        {
            let postal_code = normalize_postal_code(input.get("postal_code"));
            let city_town = normalize_city_town(input.get("city_town"));

            let exists = self
                .store
                .address_exists(&postal_code, input.get("prefecture"), &city_town)
                .await
                .map_err(|err| {
                    tracing::warn!(error = %err, "address consistency lookup failed");
                    err
                })?;

            if !exists {
                record(&mut errors, FieldGroup::AddressConsistency, Some(messages::ADDRESS_MISMATCH));
            }
        }

        if self.config.email_duplicate && !errors.contains_key(&FieldGroup::Email) {
            // a new registration has no record to leave out, whatever `id` says
            let own_record = if self.config.exclude_own_record {
                input.record_id()
            } else {
                None
            };
            let taken = self
                .store
                .email_registered(input.get("email"), own_record)
                .await
                .map_err(|err| {
                    tracing::warn!(error = %err, "duplicate e-mail lookup failed");
                    err
                })?;

            if taken {
                record(&mut errors, FieldGroup::Email, Some(messages::EMAIL_TAKEN));
            }
        }

        let result = ValidationResult::from_errors(errors);
        tracing::info!(ok = result.ok, failed = result.errors.len(), "form validated");
        Ok(result)
    }

    /// Every rule that needs no lookup
    pub fn check_syntax(&self, input: &FormInput, documents: &Documents) -> BTreeMap<FieldGroup, String> {
        let today = self.clock.today();
        let legacy = self.legacy.as_ref();
        let mut errors = BTreeMap::new();

        record(&mut errors, FieldGroup::Name, fields::name(input.get("name"), legacy));
        record(&mut errors, FieldGroup::Kana, fields::kana(input.get("kana")));
        record(&mut errors, FieldGroup::BirthDate, self.birth_date_error(input, today));
        record(&mut errors, FieldGroup::PostalCode, fields::postal_code(input.get("postal_code")));
        record(
            &mut errors,
            FieldGroup::Address,
            fields::address(
                input.get("prefecture"),
                input.get("city_town"),
                input.get("building"),
                legacy,
            ),
        );
        record(&mut errors, FieldGroup::Tel, fields::tel(input.get("tel")));
        record(&mut errors, FieldGroup::Email, fields::email(input.get("email")));
        record(&mut errors, FieldGroup::Document1, document_error(1, documents.document1.as_ref()));
        record(&mut errors, FieldGroup::Document2, document_error(2, documents.document2.as_ref()));

        errors
    }

    fn birth_date_error(&self, input: &FormInput, today: NaiveDate) -> Option<&'static str> {
        let (year, month, day) = (input.get("birth_year"), input.get("birth_month"), input.get("birth_day"));

        match self.config.birth_date {
            BirthDateRule::Discrete => fields::birth_parts(year, month, day, today),
            BirthDateRule::Single => fields::birth_iso(input.get("birth_date"), today),
            BirthDateRule::Either => {
                if fields::prefers_birth_parts(year, month, day) {
                    fields::birth_parts(year, month, day, today)
                } else {
                    fields::birth_iso(input.get("birth_date"), today)
                }
            }
        }
    }
}

fn record(errors: &mut BTreeMap<FieldGroup, String>, group: FieldGroup, outcome: Option<impl Into<String>>) {
    if let Some(message) = outcome {
        let message = message.into();
        tracing::debug!(%group, %message, "field group failed");
        errors.insert(group, message);
    }
}

/// Optional identity document: omitted is fine, otherwise the upload must
/// have succeeded and be a PNG or JPEG image
fn document_error(slot: u8, file: Option<&FileDescriptor>) -> Option<String> {
    let file = file?;
    if file.is_omitted() {
        return None;
    }

    let label = messages::document_label(slot);
    if file.upload_error.is_size_limit() {
        return Some(messages::document_too_large(label));
    }
    if file.upload_error != UploadError::Ok || !file.present {
        return Some(messages::document_upload_failed(label));
    }

    let accepted = ACCEPTED_DOCUMENT_TYPES
        .iter()
        .any(|mime| file.mime_type.trim().eq_ignore_ascii_case(mime));
    if !accepted {
        return Some(messages::document_wrong_type(label));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::store::{AddressMasterRecord, MemoryStore};
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn validator(variant: Variant) -> FieldValidator<MemoryStore, FixedClock> {
        let store = MemoryStore::new()
            .with_address(AddressMasterRecord::new("1000001", "東京都", "千代田区", ""))
            .with_user(1, "taken@example.com");

        FieldValidator::new(variant.into(), Arc::new(LegacyCharset::bundled().clone()))
            .with_store(store)
            .with_clock(FixedClock(today()))
    }

    fn valid_input() -> FormInput {
        FormInput::new()
            .with("name", "山田太郎")
            .with("kana", "やまだたろう")
            .with("birth_year", "1990")
            .with("birth_month", "1")
            .with("birth_day", "1")
            .with("birth_date", "1990-01-01")
            .with("postal_code", "100-0001")
            .with("prefecture", "東京都")
            .with("city_town", "千代田区1-1")
            .with("tel", "03-1234-5678")
            .with("email", "new@example.com")
    }

    #[tokio::test]
    async fn test_valid_input_passes_every_variant() {
        for variant in [Variant::Register, Variant::EditWithFiles, Variant::EditWithConsistency] {
            let result = validator(variant).validate(&valid_input(), &Documents::none()).await.unwrap();
            assert_eq!(result.errors, BTreeMap::new(), "variant {variant:?}");
            assert!(result.ok);
        }
    }

    #[tokio::test]
    async fn test_groups_fail_independently() {
        let input = valid_input()
            .with("name", "Yamada")
            .with("tel", "0312345678")
            .with("postal_code", "123-45678");

        let result = validator(Variant::Register).validate(&input, &Documents::none()).await.unwrap();
        let expected: BTreeMap<FieldGroup, String> = [
            (FieldGroup::Name, messages::NAME_CHARSET),
            (FieldGroup::PostalCode, messages::POSTAL_CODE_FORMAT),
            (FieldGroup::Tel, messages::TEL_HYPHEN),
        ]
        .into_iter()
        .map(|(group, message)| (group, message.to_string()))
        .collect();
        assert_eq!(result.errors, expected);
        assert!(!result.ok);
    }

    #[tokio::test]
    async fn test_missing_birth_date_is_not_provided() {
        let mut input = valid_input();
        for key in ["birth_year", "birth_month", "birth_day", "birth_date"] {
            input.insert(key, "");
        }

        for variant in [Variant::Register, Variant::EditWithFiles, Variant::EditWithConsistency] {
            let result = validator(variant).validate(&input, &Documents::none()).await.unwrap();
            assert_eq!(result.error(FieldGroup::BirthDate), Some(messages::BIRTH_DATE_REQUIRED));
        }
    }

    #[tokio::test]
    async fn test_either_prefers_discrete_inputs() {
        let input = valid_input()
            .with("birth_year", "2021")
            .with("birth_month", "2")
            .with("birth_day", "30");
        let result = validator(Variant::EditWithFiles).validate(&input, &Documents::none()).await.unwrap();
        assert_eq!(result.error(FieldGroup::BirthDate), Some(messages::BIRTH_DATE_INVALID));

        let input = valid_input()
            .with("birth_year", "")
            .with("birth_month", "")
            .with("birth_day", "")
            .with("birth_date", "1990/01/01");
        let result = validator(Variant::EditWithFiles).validate(&input, &Documents::none()).await.unwrap();
        assert_eq!(result.error(FieldGroup::BirthDate), Some(messages::BIRTH_DATE_FORMAT));
    }

    #[tokio::test]
    async fn test_future_birth_date_uses_injected_today() {
        let tomorrow = valid_input().with("birth_date", "2024-06-16");
        let result = validator(Variant::EditWithConsistency)
            .validate(&tomorrow, &Documents::none())
            .await
            .unwrap();
        assert_eq!(result.error(FieldGroup::BirthDate), Some(messages::BIRTH_DATE_INVALID));

        let today = valid_input().with("birth_date", "2024-06-15");
        let result = validator(Variant::EditWithConsistency)
            .validate(&today, &Documents::none())
            .await
            .unwrap();
        assert!(result.ok);
    }

    #[tokio::test]
    async fn test_address_consistency_only_after_syntax_passes() {
        let input = valid_input().with("postal_code", "1000001");
        let result = validator(Variant::EditWithConsistency)
            .validate(&input, &Documents::none())
            .await
            .unwrap();
        assert!(result.has_error(FieldGroup::PostalCode));
        assert!(!result.has_error(FieldGroup::AddressConsistency));

        let input = valid_input().with("postal_code", "100-0002");
        let result = validator(Variant::EditWithConsistency)
            .validate(&input, &Documents::none())
            .await
            .unwrap();
        assert_eq!(result.error(FieldGroup::AddressConsistency), Some(messages::ADDRESS_MISMATCH));
        assert!(!result.has_error(FieldGroup::PostalCode));
        assert!(!result.has_error(FieldGroup::Address));
    }

    #[tokio::test]
    async fn test_city_town_spaces_are_ignored_for_consistency() {
        let input = valid_input().with("city_town", "千代田区 1-1");
        let result = validator(Variant::EditWithConsistency)
            .validate(&input, &Documents::none())
            .await
            .unwrap();
        assert!(result.ok, "{:?}", result.errors);
    }

    #[tokio::test]
    async fn test_duplicate_email_on_register() {
        let input = valid_input().with("email", "taken@example.com");
        let result = validator(Variant::Register).validate(&input, &Documents::none()).await.unwrap();
        assert_eq!(result.error(FieldGroup::Email), Some(messages::EMAIL_TAKEN));

        // edit variants do not look up e-mails
        let result = validator(Variant::EditWithFiles).validate(&input, &Documents::none()).await.unwrap();
        assert!(result.ok);
    }

    #[tokio::test]
    async fn test_register_ignores_submitted_record_id() {
        let input = valid_input().with("email", "taken@example.com").with("id", "1");
        let result = validator(Variant::Register).validate(&input, &Documents::none()).await.unwrap();
        assert!(!result.ok);
        assert_eq!(result.error(FieldGroup::Email), Some(messages::EMAIL_TAKEN));
    }

    #[tokio::test]
    async fn test_duplicate_email_excludes_record_under_edit() {
        let mut validator = validator(Variant::EditWithFiles);
        validator.set_config(ValidatorConfig {
            email_duplicate: true,
            ..ValidatorConfig::for_variant(Variant::EditWithFiles)
        });

        let own = valid_input().with("email", "taken@example.com").with("id", "1");
        assert!(validator.validate(&own, &Documents::none()).await.unwrap().ok);

        let other = valid_input().with("email", "taken@example.com").with("id", "2");
        let result = validator.validate(&other, &Documents::none()).await.unwrap();
        assert_eq!(result.error(FieldGroup::Email), Some(messages::EMAIL_TAKEN));
    }

    #[tokio::test]
    async fn test_invalid_email_skips_duplicate_lookup() {
        let mut validator = FieldValidator::new(
            Variant::Register.into(),
            Arc::new(LegacyCharset::bundled().clone()),
        )
        .with_clock(FixedClock(today()));

        // NoStore would fail the run if it were consulted
        let input = valid_input().with("email", "not-an-email");
        let result = validator.validate(&input, &Documents::none()).await.unwrap();
        assert_eq!(result.error(FieldGroup::Email), Some(messages::EMAIL_INVALID));

        validator.configure(Variant::EditWithFiles);
        assert!(validator.validate(&valid_input(), &Documents::none()).await.unwrap().ok);
    }

    #[tokio::test]
    async fn test_store_failure_is_a_system_error() {
        let validator = FieldValidator::new(
            Variant::Register.into(),
            Arc::new(LegacyCharset::bundled().clone()),
        )
        .with_clock(FixedClock(today()));

        let err = validator.validate(&valid_input(), &Documents::none()).await.unwrap_err();
        assert!(matches!(err, crate::Error::StoreUnavailable(_)));
    }

    #[test]
    fn test_documents() {
        assert_eq!(document_error(1, None), None);
        assert_eq!(document_error(1, Some(&FileDescriptor::absent())), None);
        assert_eq!(document_error(1, Some(&FileDescriptor::uploaded("image/png"))), None);
        assert_eq!(document_error(2, Some(&FileDescriptor::uploaded("image/jpeg"))), None);
        assert_eq!(document_error(2, Some(&FileDescriptor::uploaded("IMAGE/JPEG"))), None);

        let label = messages::document_label(1);
        assert_eq!(
            document_error(1, Some(&FileDescriptor::uploaded("application/pdf"))),
            Some(messages::document_wrong_type(label))
        );
        assert_eq!(
            document_error(1, Some(&FileDescriptor::uploaded("image/gif"))),
            Some(messages::document_wrong_type(label))
        );
        assert_eq!(
            document_error(1, Some(&FileDescriptor::failed(UploadError::FormSize))),
            Some(messages::document_too_large(label))
        );
        assert_eq!(
            document_error(1, Some(&FileDescriptor::failed(UploadError::Partial))),
            Some(messages::document_upload_failed(label))
        );
    }

    #[tokio::test]
    async fn test_document_errors_use_their_own_slots() {
        let documents = Documents::new(
            Some(FileDescriptor::uploaded("image/png")),
            Some(FileDescriptor::uploaded("text/plain")),
        );
        let result = validator(Variant::EditWithFiles).validate(&valid_input(), &documents).await.unwrap();
        assert!(!result.has_error(FieldGroup::Document1));
        assert_eq!(
            result.error(FieldGroup::Document2),
            Some(messages::document_wrong_type(messages::document_label(2)).as_str())
        );
    }
}
