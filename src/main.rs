use tonecolor::config::Settings;
use tonecolor::{colorize_characters, colorize_pinyin, determine_text_format, parse_cedict_pinyin};

use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::bail;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tonecolor")]
#[command(version = "0.1.0")]
#[command(about = "Tone colored pinyin and Chinese characters", long_about = None)]
struct Cli {
    /// Settings as .json file (enable flag and the five tone colors)
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    /// Print the text without tone colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Color space separated pinyin, e.g. `pinyin 3,3 "nǐ hǎo"`
    Pinyin { tone_numbers: String, pinyin: String },
    /// Color Chinese characters, e.g. `characters 3,3 你好`
    Characters { tone_numbers: String, characters: String },
    /// Convert CC-CEDICT pinyin (e.g. "ni3 hao3") and color it, optionally with the characters
    Entry {
        cedict_pinyin: String,
        characters: Option<String>,
    },
    /// Tell whether the text is hanzi, numbered, tone marked or plain pinyin
    Detect { text: String },
    /// Print the effective settings as json
    ShowSettings,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("TONECOLOR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn read_settings(path: Option<&Path>, no_color: bool) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(path) if path.extension().and_then(OsStr::to_str) == Some("json") => {
            Settings::load(path)?
        }
        Some(path) => bail!("Invalid settings file {}, expected .json", path.display()),
        None => Settings::default(),
    };
    if no_color {
        settings.tone_colors_enabled = false;
    }
    Ok(settings)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = read_settings(cli.settings.as_deref(), cli.no_color)?;
    info!(enabled = settings.tone_colors_enabled, "settings ready");

    match &cli.command {
        Command::Pinyin { tone_numbers, pinyin } => {
            println!("{}", colorize_pinyin(tone_numbers, pinyin, &settings));
        }
        Command::Characters { tone_numbers, characters } => {
            println!("{}", colorize_characters(tone_numbers, characters, &settings));
        }
        Command::Entry { cedict_pinyin, characters } => {
            let parsed = parse_cedict_pinyin(cedict_pinyin);
            println!("pinyin: {}", parsed.display);
            println!("tones: {}", parsed.tone_numbers);
            println!("search: {} {}", parsed.tone_marked_search, parsed.toneless_search);
            let pinyin_tones = &parsed.display_tone_numbers;
            println!("{}", colorize_pinyin(pinyin_tones, &parsed.display, &settings));
            if let Some(characters) = characters {
                let character_tones = &parsed.character_tone_numbers;
                println!("{}", colorize_characters(character_tones, characters, &settings));
            }
        }
        Command::Detect { text } => {
            println!("{:?}", determine_text_format(text));
        }
        Command::ShowSettings => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }
    Ok(())
}
