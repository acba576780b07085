// File: src/input.rs
// Purpose: Submitted form values and uploaded file descriptors

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Raw submitted form values keyed by input name.
///
/// Values are kept exactly as submitted. Nothing is trimmed, since a
/// leading space is itself a rule violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInput {
    fields: HashMap<String, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Build from a JSON object. Non-string scalars are stringified,
    /// nulls and nested values are dropped.
    pub fn from_json(json: &JsonValue) -> Self {
        let mut fields = HashMap::new();

        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                let text = match value {
                    JsonValue::String(s) => s.clone(),
                    JsonValue::Number(n) => n.to_string(),
                    JsonValue::Bool(b) => b.to_string(),
                    _ => continue,
                };
                fields.insert(key.clone(), text);
            }
        }

        Self { fields }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Value of `key`; an absent input reads as empty
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Id of the record under edit, from the hidden `id` input
    pub fn record_id(&self) -> Option<i64> {
        self.fields.get("id").and_then(|id| id.trim().parse().ok())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Outcome reported by the upload transport
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadError {
    #[default]
    Ok,
    /// Larger than the server-wide limit
    IniSize,
    /// Larger than the form's declared limit
    FormSize,
    Partial,
    NoFile,
    NoTmpDir,
    CantWrite,
    Extension,
    Other(i64),
}

impl UploadError {
    /// Map the numeric codes used by multipart front ends
    ///
    /// # Examples
    /// ```
    /// use entry_form::UploadError;
    ///
    /// assert_eq!(UploadError::from_code(0), UploadError::Ok);
    /// assert_eq!(UploadError::from_code(4), UploadError::NoFile);
    /// assert_eq!(UploadError::from_code(5), UploadError::Other(5));
    /// ```
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::IniSize,
            2 => Self::FormSize,
            3 => Self::Partial,
            4 => Self::NoFile,
            6 => Self::NoTmpDir,
            7 => Self::CantWrite,
            8 => Self::Extension,
            other => Self::Other(other),
        }
    }

    pub fn is_size_limit(self) -> bool {
        matches!(self, Self::IniSize | Self::FormSize)
    }
}

/// What the upload transport knows about one file input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub present: bool,
    #[serde(default)]
    pub upload_error: UploadError,
    #[serde(default)]
    pub mime_type: String,
}

impl FileDescriptor {
    /// The input was left empty
    pub fn absent() -> Self {
        Self {
            present: false,
            upload_error: UploadError::NoFile,
            mime_type: String::new(),
        }
    }

    pub fn uploaded(mime_type: impl Into<String>) -> Self {
        Self {
            present: true,
            upload_error: UploadError::Ok,
            mime_type: mime_type.into(),
        }
    }

    pub fn failed(upload_error: UploadError) -> Self {
        Self {
            present: false,
            upload_error,
            mime_type: String::new(),
        }
    }

    /// Nothing was chosen and the transport reports nothing wrong
    pub fn is_omitted(&self) -> bool {
        self.upload_error == UploadError::NoFile
            || (!self.present && self.upload_error == UploadError::Ok)
    }
}

/// The two optional identity document inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documents {
    #[serde(default)]
    pub document1: Option<FileDescriptor>,
    #[serde(default)]
    pub document2: Option<FileDescriptor>,
}

impl Documents {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(document1: Option<FileDescriptor>, document2: Option<FileDescriptor>) -> Self {
        Self {
            document1,
            document2,
        }
    }
}
