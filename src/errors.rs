use std::fmt;
use thiserror::Error;

/// Settable input fields of an audio configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    ChannelCount,
    SampleRate,
    BitRate,
}

impl ParameterField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterField::ChannelCount => "channel count",
            ParameterField::SampleRate => "sample rate",
            ParameterField::BitRate => "bit rate",
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioConfigError {
    /// A value outside the enumerated domain of a settable field
    #[error("Invalid {field}: {value} (allowed: {allowed})")]
    InvalidParameterValue {
        field: ParameterField,
        value: u64,
        allowed: &'static str,
    },

    /// A raw tier code or name that does not name a quality preset
    #[error("Unknown audio quality tier: {0}")]
    UnknownQualityTier(String),

    /// Bytes that do not form a supported AAC-LC AudioSpecificConfig
    #[error("Malformed AudioSpecificConfig: {0}")]
    MalformedAudioSpecificConfig(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl AudioConfigError {
    pub fn invalid(field: ParameterField, value: impl Into<u64>, allowed: &'static str) -> Self {
        AudioConfigError::InvalidParameterValue {
            field,
            value: value.into(),
            allowed,
        }
    }

    /// The rejected field, for validation failures
    pub fn field(&self) -> Option<ParameterField> {
        match self {
            AudioConfigError::InvalidParameterValue { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AudioConfigError {
    fn from(err: std::io::Error) -> Self {
        AudioConfigError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AudioConfigError>;
