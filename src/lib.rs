//! liveaudio: AAC audio configuration for live-streaming publishers
//!
//! Selects concrete encoder parameters (sample rate, bit rate, channel count)
//! from quality presets and derives the AAC-LC AudioSpecificConfig bytes a
//! muxer emits ahead of the encoded audio.
//!
//! # Features
//! - Quality presets (`Low`, `Medium`, `High`, `VeryHigh`)
//! - Validated parameter assignment with atomic recomputation of derived fields
//! - Bit-exact two-byte AudioSpecificConfig packing and parsing
//! - Buffer sizing hint for capture/encode pipelines
//! - Read-only published handles for pipeline threads
//! - JSON and TOML persisted forms
//!
//! # Usage
//! ```rust
//! use liveaudio::audio::{AudioConfiguration, AudioQuality};
//!
//! let mut config = AudioConfiguration::for_quality(AudioQuality::VeryHigh);
//! assert_eq!(config.asc_bytes(), [0x11, 0x90]);
//!
//! config.set_channel_count(1).unwrap();
//! assert_eq!(config.asc_bytes(), [0x11, 0x88]);
//!
//! // Freeze before handing to the encoder thread
//! let published = config.publish();
//! assert_eq!(published.channel_count(), 1);
//! ```
pub mod audio;
pub mod config;
pub mod errors;
pub mod invariant_ppt;

// Re-exports for convenience
pub use audio::{
    AudioConfiguration, AudioQuality, AudioSpecificConfig, BitRate, ChannelCount,
    PublishedAudioConfiguration, SampleRate,
};
pub use config::AudioSettings;
pub use errors::{AudioConfigError, ParameterField, Result};

/// Initialize logging
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "liveaudio=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
