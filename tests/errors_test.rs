#[cfg(test)]
mod error_tests {
    use liveaudio::audio::{AudioConfiguration, AudioQuality, AudioSpecificConfig};
    use liveaudio::errors::{AudioConfigError, ParameterField};
    use std::error::Error;

    #[test]
    fn test_invalid_parameter_names_field_and_value() {
        let mut config = AudioConfiguration::default_configuration();
        let error = config.set_sample_rate(22_050).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid sample rate: 22050 (allowed: 16000, 44100, 48000)"
        );
        assert_eq!(error.field(), Some(ParameterField::SampleRate));
    }

    #[test]
    fn test_invalid_bitrate_message() {
        let mut config = AudioConfiguration::default_configuration();
        let error = config.set_bitrate(320_000).unwrap_err();
        assert!(error.to_string().contains("bit rate"));
        assert!(error.to_string().contains("320000"));
    }

    #[test]
    fn test_invalid_channel_count_message() {
        let mut config = AudioConfiguration::default_configuration();
        let error = config.set_channel_count(8).unwrap_err();
        assert_eq!(error.to_string(), "Invalid channel count: 8 (allowed: 1, 2)");
    }

    #[test]
    fn test_unknown_quality_tier() {
        let error = AudioQuality::try_from(9).unwrap_err();
        assert_eq!(error.to_string(), "Unknown audio quality tier: 9");
        assert_eq!(error.field(), None);

        let error = "ultra".parse::<AudioQuality>().unwrap_err();
        assert!(matches!(error, AudioConfigError::UnknownQualityTier(ref s) if s == "ultra"));
    }

    #[test]
    fn test_unknown_tier_leaves_existing_configuration_alone() {
        let config = AudioConfiguration::for_quality(AudioQuality::Low);
        let before = config.snapshot();
        assert!(AudioConfiguration::for_quality_code(42).is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn test_malformed_asc() {
        let error = AudioSpecificConfig::parse(&[0x12]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Malformed AudioSpecificConfig: expected 2 bytes, got 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: AudioConfigError = io.into();
        assert!(matches!(error, AudioConfigError::Io(_)));
        assert_eq!(error.to_string(), "IO error: gone");
    }

    #[test]
    fn test_error_debug_format() {
        let error = AudioConfigError::UnknownQualityTier("7".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("UnknownQualityTier"));
        assert!(debug_str.contains('7'));
    }

    #[test]
    fn test_error_implements_error_trait() {
        let error = AudioConfigError::Serialization("broken".to_string());
        let _error_trait: &dyn Error = &error;
        assert!(error.source().is_none());
    }

    #[test]
    fn test_parameter_field_display() {
        assert_eq!(ParameterField::ChannelCount.to_string(), "channel count");
        assert_eq!(ParameterField::SampleRate.to_string(), "sample rate");
        assert_eq!(ParameterField::BitRate.to_string(), "bit rate");
    }
}
