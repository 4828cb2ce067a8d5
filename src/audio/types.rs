//! Enumerated encoder parameters
//!
//! Each parameter is a closed enum so an out-of-domain value can only exist
//! as a raw integer on its way in. `TryFrom<u32>` is the single validating
//! entry point, and serde goes through it as well.

use crate::errors::{AudioConfigError, ParameterField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Audio sample rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum SampleRate {
    /// 16 kHz, speech
    Hz16000,
    /// 44.1 kHz, CD
    Hz44100,
    /// 48 kHz, DVD
    Hz48000,
}

impl SampleRate {
    pub const ALL: [SampleRate; 3] = [
        SampleRate::Hz16000,
        SampleRate::Hz44100,
        SampleRate::Hz48000,
    ];

    /// Samples per second per channel
    pub fn hz(&self) -> u32 {
        match self {
            SampleRate::Hz16000 => 16_000,
            SampleRate::Hz44100 => 44_100,
            SampleRate::Hz48000 => 48_000,
        }
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        SampleRate::Hz44100
    }
}

impl TryFrom<u32> for SampleRate {
    type Error = AudioConfigError;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        match hz {
            16_000 => Ok(SampleRate::Hz16000),
            44_100 => Ok(SampleRate::Hz44100),
            48_000 => Ok(SampleRate::Hz48000),
            _ => Err(AudioConfigError::invalid(
                ParameterField::SampleRate,
                hz,
                "16000, 44100, 48000",
            )),
        }
    }
}

impl From<SampleRate> for u32 {
    fn from(rate: SampleRate) -> u32 {
        rate.hz()
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} Hz", self.hz())
    }
}

/// Target AAC bit rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BitRate {
    Kbps32,
    Kbps64,
    Kbps96,
    Kbps128,
}

impl BitRate {
    pub const ALL: [BitRate; 4] = [
        BitRate::Kbps32,
        BitRate::Kbps64,
        BitRate::Kbps96,
        BitRate::Kbps128,
    ];

    /// Bits per second
    pub fn bps(&self) -> u32 {
        match self {
            BitRate::Kbps32 => 32_000,
            BitRate::Kbps64 => 64_000,
            BitRate::Kbps96 => 96_000,
            BitRate::Kbps128 => 128_000,
        }
    }
}

impl Default for BitRate {
    fn default() -> Self {
        BitRate::Kbps96
    }
}

impl TryFrom<u32> for BitRate {
    type Error = AudioConfigError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        match bps {
            32_000 => Ok(BitRate::Kbps32),
            64_000 => Ok(BitRate::Kbps64),
            96_000 => Ok(BitRate::Kbps96),
            128_000 => Ok(BitRate::Kbps128),
            _ => Err(AudioConfigError::invalid(
                ParameterField::BitRate,
                bps,
                "32000, 64000, 96000, 128000",
            )),
        }
    }
}

impl From<BitRate> for u32 {
    fn from(rate: BitRate) -> u32 {
        rate.bps()
    }
}

impl fmt::Display for BitRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} kbps", self.bps() / 1000)
    }
}

/// Number of interleaved channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ChannelCount {
    Mono,
    Stereo,
}

impl ChannelCount {
    pub const ALL: [ChannelCount; 2] = [ChannelCount::Mono, ChannelCount::Stereo];

    pub fn count(&self) -> u32 {
        match self {
            ChannelCount::Mono => 1,
            ChannelCount::Stereo => 2,
        }
    }
}

impl Default for ChannelCount {
    fn default() -> Self {
        ChannelCount::Stereo
    }
}

impl TryFrom<u32> for ChannelCount {
    type Error = AudioConfigError;

    fn try_from(channels: u32) -> Result<Self, Self::Error> {
        match channels {
            1 => Ok(ChannelCount::Mono),
            2 => Ok(ChannelCount::Stereo),
            _ => Err(AudioConfigError::invalid(
                ParameterField::ChannelCount,
                channels,
                "1, 2",
            )),
        }
    }
}

impl From<ChannelCount> for u32 {
    fn from(channels: ChannelCount) -> u32 {
        channels.count()
    }
}

impl fmt::Display for ChannelCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChannelCount::Mono => f.write_str("mono"),
            ChannelCount::Stereo => f.write_str("stereo"),
        }
    }
}
