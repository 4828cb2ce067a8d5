//! AAC-LC AudioSpecificConfig
//!
//! The two header bytes a muxer emits ahead of raw AAC access units (for
//! example as the FLV "AAC sequence header" tag body). Bit layout, MSB first:
//!
//! ```text
//! [ audioObjectType : 5 ][ samplingFrequencyIndex : 4 ][ channelConfiguration : 4 ]
//! [ frameLengthFlag : 1 ][ dependsOnCoreCoder : 1 ][ extensionFlag : 1 ]
//! ```

use super::types::{ChannelCount, SampleRate};
use crate::errors::{AudioConfigError, Result};
use std::fmt;

/// MPEG-4 audio object type for AAC Low Complexity
pub const AAC_LC_OBJECT_TYPE: u8 = 2;

/// ISO/IEC 14496-3 samplingFrequencyIndex table, indexed by code
const SAMPLING_FREQUENCIES: [u32; 13] = [
    96_000, 88_200, 64_000, 48_000, 44_100, 32_000, 24_000, 22_050, 16_000, 12_000, 11_025, 8_000,
    7_350,
];

/// Look up the samplingFrequencyIndex for an exact sample rate
pub fn sampling_frequency_index_for(hz: u32) -> Option<u8> {
    SAMPLING_FREQUENCIES
        .iter()
        .position(|&f| f == hz)
        .map(|i| i as u8)
}

/// Sample rate for a samplingFrequencyIndex code
pub fn sampling_frequency_for_index(index: u8) -> Option<u32> {
    SAMPLING_FREQUENCIES.get(index as usize).copied()
}

impl SampleRate {
    /// samplingFrequencyIndex of this rate
    pub fn sampling_frequency_index(&self) -> u8 {
        match self {
            SampleRate::Hz48000 => 3,
            SampleRate::Hz44100 => 4,
            SampleRate::Hz16000 => 8,
        }
    }
}

/// Two-byte AAC-LC AudioSpecificConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AudioSpecificConfig {
    bytes: [u8; 2],
}

impl AudioSpecificConfig {
    pub const LEN: usize = 2;

    /// Pack the header for a sample rate and channel layout
    pub fn new(sample_rate: SampleRate, channels: ChannelCount) -> Self {
        let sf_index = sample_rate.sampling_frequency_index() as u16;
        let channel_config = channels.count() as u16;
        // frameLengthFlag, dependsOnCoreCoder and extensionFlag stay 0
        let value = ((AAC_LC_OBJECT_TYPE as u16) << 11) | (sf_index << 7) | (channel_config << 3);
        Self {
            bytes: value.to_be_bytes(),
        }
    }

    /// Decode a header produced by a muxer or a peer
    ///
    /// Only AAC-LC headers for a supported sample rate and mono/stereo layout
    /// with all trailing flags cleared are accepted.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let bytes: [u8; 2] = data.try_into().map_err(|_| {
            AudioConfigError::MalformedAudioSpecificConfig(format!(
                "expected {} bytes, got {}",
                Self::LEN,
                data.len()
            ))
        })?;

        let value = u16::from_be_bytes(bytes);
        let object_type = (value >> 11) as u8;
        let sf_index = ((value >> 7) & 0x0f) as u8;
        let channel_config = ((value >> 3) & 0x0f) as u32;
        let flags = value & 0x07;

        if object_type != AAC_LC_OBJECT_TYPE {
            return Err(AudioConfigError::MalformedAudioSpecificConfig(format!(
                "audio object type {} is not AAC LC",
                object_type
            )));
        }
        if flags != 0 {
            return Err(AudioConfigError::MalformedAudioSpecificConfig(format!(
                "unsupported GASpecificConfig flags {:#05b}",
                flags
            )));
        }

        let hz = sampling_frequency_for_index(sf_index).ok_or_else(|| {
            AudioConfigError::MalformedAudioSpecificConfig(format!(
                "reserved sampling frequency index {}",
                sf_index
            ))
        })?;
        let sample_rate = SampleRate::try_from(hz).map_err(|_| {
            AudioConfigError::MalformedAudioSpecificConfig(format!(
                "unsupported sample rate {} Hz",
                hz
            ))
        })?;
        let channels = ChannelCount::try_from(channel_config).map_err(|_| {
            AudioConfigError::MalformedAudioSpecificConfig(format!(
                "unsupported channel configuration {}",
                channel_config
            ))
        })?;

        Ok(Self::new(sample_rate, channels))
    }

    pub fn to_bytes(&self) -> [u8; 2] {
        self.bytes
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn object_type(&self) -> u8 {
        self.bytes[0] >> 3
    }

    pub fn sampling_frequency_index(&self) -> u8 {
        ((u16::from_be_bytes(self.bytes) >> 7) & 0x0f) as u8
    }

    pub fn channel_configuration(&self) -> u8 {
        (self.bytes[1] >> 3) & 0x0f
    }
}

impl Default for AudioSpecificConfig {
    fn default() -> Self {
        Self::new(SampleRate::default(), ChannelCount::default())
    }
}

impl AsRef<[u8]> for AudioSpecificConfig {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for AudioSpecificConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02x} {:02x}", self.bytes[0], self.bytes[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_headers() {
        let cases = [
            (SampleRate::Hz44100, ChannelCount::Stereo, [0x12, 0x10]),
            (SampleRate::Hz44100, ChannelCount::Mono, [0x12, 0x08]),
            (SampleRate::Hz48000, ChannelCount::Stereo, [0x11, 0x90]),
            (SampleRate::Hz48000, ChannelCount::Mono, [0x11, 0x88]),
            (SampleRate::Hz16000, ChannelCount::Stereo, [0x14, 0x10]),
            (SampleRate::Hz16000, ChannelCount::Mono, [0x14, 0x08]),
        ];
        for (rate, channels, expected) in cases {
            assert_eq!(
                AudioSpecificConfig::new(rate, channels).to_bytes(),
                expected,
                "{} {}",
                rate,
                channels
            );
        }
    }

    #[test]
    fn test_field_accessors() {
        let asc = AudioSpecificConfig::new(SampleRate::Hz48000, ChannelCount::Mono);
        assert_eq!(asc.object_type(), AAC_LC_OBJECT_TYPE);
        assert_eq!(asc.sampling_frequency_index(), 3);
        assert_eq!(asc.channel_configuration(), 1);
    }

    #[test]
    fn test_frequency_table() {
        assert_eq!(sampling_frequency_index_for(96_000), Some(0));
        assert_eq!(sampling_frequency_index_for(7_350), Some(12));
        assert_eq!(sampling_frequency_index_for(44_100), Some(4));
        assert_eq!(sampling_frequency_index_for(44_000), None);
        assert_eq!(sampling_frequency_for_index(13), None);
        for rate in SampleRate::ALL {
            assert_eq!(
                sampling_frequency_index_for(rate.hz()),
                Some(rate.sampling_frequency_index())
            );
        }
    }

    #[test]
    fn test_parse_accepts_own_output() {
        for rate in SampleRate::ALL {
            for channels in ChannelCount::ALL {
                let asc = AudioSpecificConfig::new(rate, channels);
                assert_eq!(AudioSpecificConfig::parse(asc.as_bytes()).unwrap(), asc);
            }
        }
    }

    #[test]
    fn test_parse_rejects_bad_headers() {
        // wrong length
        assert!(AudioSpecificConfig::parse(&[0x12]).is_err());
        assert!(AudioSpecificConfig::parse(&[0x12, 0x10, 0x00]).is_err());
        // AAC Main (object type 1)
        assert!(AudioSpecificConfig::parse(&[0x0a, 0x10]).is_err());
        // 22.05 kHz is in the table but not a supported rate
        assert!(AudioSpecificConfig::parse(&[0x13, 0x90]).is_err());
        // reserved frequency index 13
        assert!(AudioSpecificConfig::parse(&[0x16, 0x90]).is_err());
        // 5.1 channel configuration
        assert!(AudioSpecificConfig::parse(&[0x12, 0x30]).is_err());
        // frameLengthFlag set
        assert!(AudioSpecificConfig::parse(&[0x12, 0x14]).is_err());
    }

    #[test]
    fn test_display_hex() {
        let asc = AudioSpecificConfig::default();
        assert_eq!(asc.to_string(), "12 10");
    }
}
