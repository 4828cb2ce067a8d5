//! Audio quality presets

use super::types::{BitRate, ChannelCount, SampleRate};
use crate::errors::AudioConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quality presets for live audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioQuality {
    /// 16 kHz; 32 kbps mono or 64 kbps stereo
    Low,
    /// 44.1 kHz at 96 kbps
    Medium,
    /// 44.1 kHz at 128 kbps
    High,
    /// 48 kHz at 128 kbps
    VeryHigh,
}

impl AudioQuality {
    pub const ALL: [AudioQuality; 4] = [
        AudioQuality::Low,
        AudioQuality::Medium,
        AudioQuality::High,
        AudioQuality::VeryHigh,
    ];

    /// Get the preset sample rate
    pub fn sample_rate(&self) -> SampleRate {
        match self {
            AudioQuality::Low => SampleRate::Hz16000,
            AudioQuality::Medium => SampleRate::Hz44100,
            AudioQuality::High => SampleRate::Hz44100,
            AudioQuality::VeryHigh => SampleRate::Hz48000,
        }
    }

    /// Get the preset bit rate for a channel layout
    ///
    /// Only `Low` depends on the layout.
    pub fn bitrate(&self, channels: ChannelCount) -> BitRate {
        match (self, channels) {
            (AudioQuality::Low, ChannelCount::Mono) => BitRate::Kbps32,
            (AudioQuality::Low, ChannelCount::Stereo) => BitRate::Kbps64,
            (AudioQuality::Medium, _) => BitRate::Kbps96,
            (AudioQuality::High, _) => BitRate::Kbps128,
            (AudioQuality::VeryHigh, _) => BitRate::Kbps128,
        }
    }

    /// Numeric tier code (Low = 0 .. VeryHigh = 3)
    pub fn code(&self) -> u32 {
        match self {
            AudioQuality::Low => 0,
            AudioQuality::Medium => 1,
            AudioQuality::High => 2,
            AudioQuality::VeryHigh => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioQuality::Low => "low",
            AudioQuality::Medium => "medium",
            AudioQuality::High => "high",
            AudioQuality::VeryHigh => "very_high",
        }
    }
}

impl Default for AudioQuality {
    fn default() -> Self {
        AudioQuality::High
    }
}

impl TryFrom<u32> for AudioQuality {
    type Error = AudioConfigError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AudioQuality::Low),
            1 => Ok(AudioQuality::Medium),
            2 => Ok(AudioQuality::High),
            3 => Ok(AudioQuality::VeryHigh),
            _ => Err(AudioConfigError::UnknownQualityTier(code.to_string())),
        }
    }
}

impl FromStr for AudioQuality {
    type Err = AudioConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "low" => Ok(AudioQuality::Low),
            "medium" => Ok(AudioQuality::Medium),
            "high" => Ok(AudioQuality::High),
            "veryhigh" => Ok(AudioQuality::VeryHigh),
            _ => Err(AudioConfigError::UnknownQualityTier(s.to_string())),
        }
    }
}

impl fmt::Display for AudioQuality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
