//! Audio configuration value
//!
//! Holds the three encoder inputs and the two values derived from them. The
//! derived fields are private and recomputed by every successful mutation, so
//! a reader never observes an ASC or buffer hint that disagrees with the
//! inputs.

use super::asc::AudioSpecificConfig;
use super::publish::PublishedAudioConfiguration;
use super::quality::AudioQuality;
use super::types::{BitRate, ChannelCount, SampleRate};
use crate::assert_invariant;
use crate::errors::{AudioConfigError, Result};
use crate::invariant_ppt::invariants;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Samples per channel in one AAC-LC access unit
pub const AAC_FRAME_SAMPLES: usize = 1024;

/// Bytes per 16-bit PCM sample
const PCM_SAMPLE_BYTES: usize = 2;

/// Buffer size hint for a parameter triple.
///
/// The 16-bit PCM bytes of one access unit plus the encoded size of that
/// access unit at the target bit rate, rounded up:
///
/// ```text
/// 1024 * 2 * channels + ceil(bitrate * 1024 / (8 * sample_rate))
/// ```
pub fn buffer_size_hint_for(
    sample_rate: SampleRate,
    bitrate: BitRate,
    channels: ChannelCount,
) -> usize {
    let pcm = AAC_FRAME_SAMPLES * PCM_SAMPLE_BYTES * channels.count() as usize;
    let bits = bitrate.bps() as u64 * AAC_FRAME_SAMPLES as u64;
    let per_byte = 8 * sample_rate.hz() as u64;
    let encoded = bits.div_ceil(per_byte);
    pcm + encoded as usize
}

/// Live audio encoding configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AudioConfigurationRecord", into = "AudioConfigurationRecord")]
pub struct AudioConfiguration {
    channels: ChannelCount,
    sample_rate: SampleRate,
    bitrate: BitRate,
    asc: AudioSpecificConfig,
    buffer_size_hint: usize,
}

impl AudioConfiguration {
    /// Create a configuration from explicit parameters
    pub fn new(sample_rate: SampleRate, bitrate: BitRate, channels: ChannelCount) -> Self {
        let mut config = Self {
            channels,
            sample_rate,
            bitrate,
            asc: AudioSpecificConfig::new(sample_rate, channels),
            buffer_size_hint: 0,
        };
        config.recompute();
        config
    }

    /// The default configuration: the `High` preset in stereo
    pub fn default_configuration() -> Self {
        Self::for_quality(AudioQuality::default())
    }

    /// Create configuration from a quality preset (stereo)
    pub fn for_quality(quality: AudioQuality) -> Self {
        Self::for_quality_with_channels(quality, ChannelCount::default())
    }

    /// Create configuration from a quality preset with a custom channel layout
    pub fn for_quality_with_channels(quality: AudioQuality, channels: ChannelCount) -> Self {
        let config = Self::new(quality.sample_rate(), quality.bitrate(channels), channels);
        log::debug!("Resolved {} audio preset: {}", quality, config);
        config
    }

    /// Create configuration from a raw tier code
    pub fn for_quality_code(code: u32) -> Result<Self> {
        let quality = AudioQuality::try_from(code)?;
        Ok(Self::for_quality(quality))
    }

    pub fn channels(&self) -> ChannelCount {
        self.channels
    }

    pub fn channel_count(&self) -> u32 {
        self.channels.count()
    }

    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    pub fn bitrate(&self) -> BitRate {
        self.bitrate
    }

    /// AudioSpecificConfig for the current sample rate and channel layout
    pub fn asc(&self) -> AudioSpecificConfig {
        self.asc
    }

    pub fn asc_bytes(&self) -> [u8; 2] {
        self.asc.to_bytes()
    }

    /// Intermediate buffer size hint for the capture/encode pipeline, in bytes
    pub fn buffer_size_hint(&self) -> usize {
        self.buffer_size_hint
    }

    /// Assign the channel count, rejecting anything but 1 or 2
    pub fn set_channel_count(&mut self, channels: u32) -> Result<()> {
        let channels = ChannelCount::try_from(channels).inspect_err(log_rejected)?;
        self.channels = channels;
        self.recompute();
        Ok(())
    }

    /// Assign the sample rate in Hz
    pub fn set_sample_rate(&mut self, hz: u32) -> Result<()> {
        let sample_rate = SampleRate::try_from(hz).inspect_err(log_rejected)?;
        self.sample_rate = sample_rate;
        self.recompute();
        Ok(())
    }

    /// Assign the bit rate in bits per second
    pub fn set_bitrate(&mut self, bps: u32) -> Result<()> {
        let bitrate = BitRate::try_from(bps).inspect_err(log_rejected)?;
        self.bitrate = bitrate;
        self.recompute();
        Ok(())
    }

    /// Set the channel layout
    pub fn with_channels(mut self, channels: ChannelCount) -> Self {
        self.channels = channels;
        self.recompute();
        self
    }

    /// Set the sample rate
    pub fn with_sample_rate(mut self, sample_rate: SampleRate) -> Self {
        self.sample_rate = sample_rate;
        self.recompute();
        self
    }

    /// Set the bit rate
    pub fn with_bitrate(mut self, bitrate: BitRate) -> Self {
        self.bitrate = bitrate;
        self.recompute();
        self
    }

    /// Independent copy, equal by value
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Freeze this configuration and hand it to the streaming pipeline
    pub fn publish(self) -> PublishedAudioConfiguration {
        log::debug!("Publishing audio configuration: {}", self);
        PublishedAudioConfiguration::new(self)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AudioConfigError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AudioConfigError::Deserialization(e.to_string()))
    }

    fn recompute(&mut self) {
        self.asc = AudioSpecificConfig::new(self.sample_rate, self.channels);
        self.buffer_size_hint = buffer_size_hint_for(self.sample_rate, self.bitrate, self.channels);

        assert_invariant!(
            self.asc.sampling_frequency_index() == self.sample_rate.sampling_frequency_index()
                && self.asc.channel_configuration() as u32 == self.channels.count(),
            invariants::ASC_MATCHES_INPUTS,
            "AudioConfiguration::recompute"
        );
        assert_invariant!(
            self.asc.object_type() == super::asc::AAC_LC_OBJECT_TYPE,
            invariants::ASC_IS_AAC_LC,
            "AudioConfiguration::recompute"
        );
        assert_invariant!(
            self.buffer_size_hint
                >= AAC_FRAME_SAMPLES * PCM_SAMPLE_BYTES * self.channels.count() as usize,
            invariants::HINT_COVERS_PCM_FRAME,
            "AudioConfiguration::recompute"
        );
    }
}

fn log_rejected(err: &AudioConfigError) {
    log::debug!("Rejected audio parameter: {}", err);
}

impl Default for AudioConfiguration {
    fn default() -> Self {
        Self::default_configuration()
    }
}

impl fmt::Display for AudioConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} @ {} (asc {}, buffer {} bytes)",
            self.channels, self.sample_rate, self.bitrate, self.asc, self.buffer_size_hint
        )
    }
}

/// Persisted form: the three inputs only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConfigurationRecord {
    pub channels: u32,
    pub sample_rate: u32,
    pub bitrate: u32,
}

impl From<AudioConfiguration> for AudioConfigurationRecord {
    fn from(config: AudioConfiguration) -> Self {
        Self {
            channels: config.channels.count(),
            sample_rate: config.sample_rate.hz(),
            bitrate: config.bitrate.bps(),
        }
    }
}

impl TryFrom<AudioConfigurationRecord> for AudioConfiguration {
    type Error = AudioConfigError;

    fn try_from(record: AudioConfigurationRecord) -> Result<Self> {
        Ok(Self::new(
            SampleRate::try_from(record.sample_rate)?,
            BitRate::try_from(record.bitrate)?,
            ChannelCount::try_from(record.channels)?,
        ))
    }
}
