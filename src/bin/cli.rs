use anyhow::{bail, Context};
use liveaudio::audio::{
    AudioConfiguration, AudioQuality, AudioSpecificConfig, ChannelCount, SampleRate,
};
use liveaudio::AudioSettings;
use std::env;
use std::path::PathBuf;

const USAGE: &str = "Usage: liveaudio-cli <command> [args]

Commands:
  preset <low|medium|high|very_high> [--channels N] [--json]
  asc <sample_rate> <channels>
  parse-asc <hex>
  save <quality> <path> [--channels N]
  show [path] [--json]";

fn main() -> anyhow::Result<()> {
    liveaudio::init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let command = &args[1];
    match command.as_str() {
        "preset" => cmd_preset(&args),
        "asc" => cmd_asc(&args),
        "parse-asc" => cmd_parse_asc(&args),
        "save" => cmd_save(&args),
        "show" => cmd_show(&args),
        _ => {
            eprintln!("Unknown command: {}\n{}", command, USAGE);
            std::process::exit(1);
        }
    }
}

/// Positional arguments after the command, plus the --channels and --json flags
struct Parsed {
    positional: Vec<String>,
    channels: Option<ChannelCount>,
    json: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<Parsed> {
    let mut parsed = Parsed {
        positional: Vec::new(),
        channels: None,
        json: false,
    };

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--channels" => {
                i += 1;
                let raw = args.get(i).context("--channels requires a value")?;
                let count: u32 = raw
                    .parse()
                    .with_context(|| format!("bad channel count: {}", raw))?;
                parsed.channels = Some(ChannelCount::try_from(count)?);
            }
            "--json" => parsed.json = true,
            other => parsed.positional.push(other.to_string()),
        }
        i += 1;
    }

    Ok(parsed)
}

fn print_config(config: &AudioConfiguration, json: bool) -> anyhow::Result<()> {
    if json {
        let value = serde_json::json!({
            "channels": config.channel_count(),
            "sample_rate": config.sample_rate().hz(),
            "bitrate": config.bitrate().bps(),
            "asc": config.asc().to_string(),
            "buffer_size_hint": config.buffer_size_hint(),
        });
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("channels:         {}", config.channel_count());
        println!("sample rate:      {}", config.sample_rate());
        println!("bit rate:         {}", config.bitrate());
        println!("asc:              {}", config.asc());
        println!("buffer size hint: {} bytes", config.buffer_size_hint());
    }
    Ok(())
}

fn cmd_preset(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let quality: AudioQuality = match parsed.positional.first() {
        Some(name) => name.parse()?,
        None => AudioQuality::default(),
    };
    let channels = parsed.channels.unwrap_or_default();
    let config = AudioConfiguration::for_quality_with_channels(quality, channels);
    print_config(&config, parsed.json)
}

fn cmd_asc(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let [rate, channels] = parsed.positional.as_slice() else {
        bail!("Usage: liveaudio-cli asc <sample_rate> <channels>");
    };
    let rate: u32 = rate.parse().context("sample rate must be a number")?;
    let channels: u32 = channels.parse().context("channels must be a number")?;
    let rate = SampleRate::try_from(rate)?;
    let channels = ChannelCount::try_from(channels)?;
    println!("{}", AudioSpecificConfig::new(rate, channels));
    Ok(())
}

fn cmd_parse_asc(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    if parsed.positional.is_empty() {
        bail!("Usage: liveaudio-cli parse-asc <hex>");
    }
    let bytes = decode_hex(&parsed.positional.concat())?;
    let asc = AudioSpecificConfig::parse(&bytes)?;
    let hz = liveaudio::audio::sampling_frequency_for_index(asc.sampling_frequency_index())
        .context("sampling frequency index out of table")?;
    println!("object type:  {} (AAC LC)", asc.object_type());
    println!("sample rate:  {} Hz (index {})", hz, asc.sampling_frequency_index());
    println!("channels:     {}", asc.channel_configuration());
    Ok(())
}

fn cmd_save(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let [quality, path] = parsed.positional.as_slice() else {
        bail!("Usage: liveaudio-cli save <quality> <path> [--channels N]");
    };
    let quality: AudioQuality = quality.parse()?;
    let channels = parsed.channels.unwrap_or_default();
    let config = AudioConfiguration::for_quality_with_channels(quality, channels);
    let settings = AudioSettings::new(config);
    settings
        .save_to_file(path)
        .with_context(|| format!("saving settings to {}", path))?;
    println!("Saved {} preset to {}", quality, path);
    Ok(())
}

fn cmd_show(args: &[String]) -> anyhow::Result<()> {
    let parsed = parse_args(args)?;
    let path = parsed
        .positional
        .first()
        .map(PathBuf::from)
        .unwrap_or_else(AudioSettings::default_path);
    let settings = AudioSettings::load_from_file(&path)
        .with_context(|| format!("loading settings from {}", path.display()))?;
    print_config(&settings.audio, parsed.json)
}

fn decode_hex(input: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = input.trim();
    let unprefixed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = unprefixed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    if !digits.is_ascii() || digits.len() % 2 != 0 {
        bail!("not a hex byte string: {:?}", input);
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .with_context(|| format!("invalid hex byte {:?}", &digits[i..i + 2]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_decode_hex_prefixes() {
        assert_eq!(decode_hex("1210").unwrap(), vec![0x12, 0x10]);
        assert_eq!(decode_hex("0x1190").unwrap(), vec![0x11, 0x90]);
        assert_eq!(decode_hex("0X1408").unwrap(), vec![0x14, 0x08]);
        assert_eq!(decode_hex("12:10").unwrap(), vec![0x12, 0x10]);
        assert_eq!(decode_hex("12 10").unwrap(), vec![0x12, 0x10]);
    }

    #[test]
    fn test_decode_hex_rejects_garbage() {
        assert!(decode_hex("121").is_err());
        assert!(decode_hex("zz10").is_err());
        assert!(decode_hex("é1").is_err());
    }

    #[test]
    fn test_parse_args_channels_and_json() {
        let parsed =
            parse_args(&args(&["cli", "preset", "low", "--channels", "1", "--json"])).unwrap();
        assert_eq!(parsed.positional, vec!["low".to_string()]);
        assert_eq!(parsed.channels, Some(ChannelCount::Mono));
        assert!(parsed.json);
    }

    #[test]
    fn test_parse_args_rejects_bad_channels() {
        assert!(parse_args(&args(&["cli", "preset", "--channels"])).is_err());
        assert!(parse_args(&args(&["cli", "preset", "--channels", "two"])).is_err());
        assert!(parse_args(&args(&["cli", "preset", "--channels", "3"])).is_err());
    }
}
