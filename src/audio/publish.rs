//! Read-only configuration handed to the streaming pipeline
//!
//! Publishing consumes the owned [`AudioConfiguration`] and wraps it in an
//! `Arc`. Pipeline threads each hold a clone of the handle; there are no
//! mutators. Reconfiguring a live session means taking a snapshot, changing
//! the copy and publishing the copy as a new handle.

use super::configuration::AudioConfiguration;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Frozen audio configuration shared by the capture, encode and mux stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedAudioConfiguration {
    inner: Arc<AudioConfiguration>,
}

impl PublishedAudioConfiguration {
    pub(crate) fn new(config: AudioConfiguration) -> Self {
        Self {
            inner: Arc::new(config),
        }
    }

    /// Mutable copy for preparing the next published configuration
    pub fn snapshot(&self) -> AudioConfiguration {
        self.inner.as_ref().clone()
    }

    /// True when both handles point at the same published value
    pub fn same_publication(&self, other: &PublishedAudioConfiguration) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for PublishedAudioConfiguration {
    type Target = AudioConfiguration;

    fn deref(&self) -> &AudioConfiguration {
        &self.inner
    }
}

impl fmt::Display for PublishedAudioConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.inner.as_ref(), f)
    }
}
