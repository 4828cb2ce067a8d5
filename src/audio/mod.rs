//! AAC audio configuration for live publishing
//!
//! Submodules:
//! - `types`: enumerated sample rate, bit rate and channel count
//! - `quality`: quality tiers and the preset table
//! - `asc`: AudioSpecificConfig packing and parsing
//! - `configuration`: the configuration value and its derived fields
//! - `publish`: read-only handle shared with the streaming pipeline

mod asc;
mod configuration;
mod publish;
mod quality;
mod types;

pub use asc::{
    sampling_frequency_for_index, sampling_frequency_index_for, AudioSpecificConfig,
    AAC_LC_OBJECT_TYPE,
};
pub use configuration::{
    buffer_size_hint_for, AudioConfiguration, AudioConfigurationRecord, AAC_FRAME_SAMPLES,
};
pub use publish::PublishedAudioConfiguration;
pub use quality::AudioQuality;
pub use types::{BitRate, ChannelCount, SampleRate};
