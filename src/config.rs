//! Settings file for saved audio presets
//!
//! Stores the audio configuration as TOML:
//!
//! ```toml
//! [audio]
//! channels = 2
//! sample_rate = 44100
//! bitrate = 128000
//! ```
//!
//! Every field is validated while decoding, and the derived fields are
//! recomputed, so a loaded configuration is always self-consistent.

use crate::audio::{AudioConfiguration, AudioQuality};
use crate::errors::{AudioConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root settings document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub audio: AudioConfiguration,
}

impl AudioSettings {
    pub fn new(audio: AudioConfiguration) -> Self {
        Self { audio }
    }

    /// Settings holding a quality preset (stereo)
    pub fn from_quality(quality: AudioQuality) -> Self {
        Self::new(AudioConfiguration::for_quality(quality))
    }

    /// Load settings from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Audio settings not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            AudioConfigError::Io(format!("Failed to read settings file: {}", e))
        })?;

        let settings = Self::from_toml(&contents)?;

        log::info!("Loaded audio settings from {:?}: {}", path, settings.audio);
        Ok(settings)
    }

    /// Save settings to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AudioConfigError::Io(format!("Failed to create settings directory: {}", e))
            })?;
        }

        let toml_string = self.to_toml()?;

        fs::write(path, toml_string).map_err(|e| {
            AudioConfigError::Io(format!("Failed to write settings file: {}", e))
        })?;

        log::info!("Saved audio settings to {:?}", path);
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            AudioConfigError::Serialization(format!("Failed to serialize settings: {}", e))
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            AudioConfigError::Deserialization(format!("Failed to parse settings: {}", e))
        })
    }

    /// Get default settings file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("liveaudio.toml")
    }

    /// Load from default location or fall back to defaults
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(Self::default_path())
    }

    /// Load from a path, falling back to defaults on any failure
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(path).unwrap_or_else(|e| {
            log::warn!("Failed to load audio settings, using defaults: {}", e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{BitRate, SampleRate};
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = AudioSettings::default();
        assert_eq!(settings.audio, AudioConfiguration::default_configuration());
    }

    #[test]
    fn test_toml_format() {
        let settings = AudioSettings::from_quality(AudioQuality::VeryHigh);
        let toml_string = settings.to_toml().unwrap();

        assert!(toml_string.contains("[audio]"));
        assert!(toml_string.contains("channels = 2"));
        assert!(toml_string.contains("sample_rate = 48000"));
        assert!(toml_string.contains("bitrate = 128000"));
        assert!(!toml_string.contains("asc"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("audio.toml");

        let settings = AudioSettings::from_quality(AudioQuality::Medium);
        settings.save_to_file(&path).unwrap();

        let loaded = AudioSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.audio.bitrate(), BitRate::Kbps96);
        assert_eq!(loaded.audio.asc_bytes(), settings.audio.asc_bytes());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let dir = tempdir().unwrap();
        let loaded = AudioSettings::load_from_file(dir.path().join("missing.toml")).unwrap();
        assert_eq!(loaded.audio.sample_rate(), SampleRate::Hz44100);
    }

    #[test]
    fn test_rejects_out_of_domain_values() {
        let err = AudioSettings::from_toml(
            "[audio]\nchannels = 2\nsample_rate = 22050\nbitrate = 96000\n",
        )
        .unwrap_err();
        assert!(matches!(err, AudioConfigError::Deserialization(_)));
        assert!(err.to_string().contains("sample rate"));
        assert!(err.to_string().contains("22050"));
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert!(AudioSettings::from_toml("[audio]\nchannels = 1\n").is_err());
    }
}
