use anyhow::Result;
use cardtext::catalog::{self, CourseCatalog, CourseType};
use cardtext::config::AppConfig;
use cardtext::equalizer::{equalize_course_descriptions, LengthBand};
use cardtext::text_optimization::{
    keyword_density, normalize_whitespace, smart_truncate, TruncateOptions, DEFAULT_MIN_WORDS,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "cardtext")]
#[command(about = "Keyword-aware truncation and description equalization for course catalog cards")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Equalize every description in a JSON course catalog
    Equalize {
        /// JSON array of course records
        catalog: PathBuf,

        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Named layout preset (built-in: card, overlay)
        #[arg(long)]
        preset: Option<String>,

        /// Only equalize courses of this type
        #[arg(long, value_enum)]
        course_type: Option<TypeFilter>,

        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Truncate text (argument or stdin) while keeping keywords whole
    Truncate {
        /// Character budget
        #[arg(long)]
        max_length: usize,

        /// Keyword phrase that must not be split (repeatable)
        #[arg(long = "preserve")]
        preserve: Vec<String>,

        /// Keyword phrase allowed to overflow the budget slightly (repeatable)
        #[arg(long = "priority")]
        priority: Vec<String>,

        /// Texts with this many words or fewer are returned unchanged
        #[arg(long, default_value_t = DEFAULT_MIN_WORDS)]
        min_words: usize,

        /// Text to truncate; read from stdin when omitted
        text: Option<String>,
    },

    /// Report keyword density of text (argument or stdin) as a percentage
    Density {
        /// Keyword phrase to count
        #[arg(long)]
        keyword: String,

        /// Text to analyze; read from stdin when omitted
        text: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TypeFilter {
    Free,
    Paid,
}

impl From<TypeFilter> for CourseType {
    fn from(filter: TypeFilter) -> Self {
        match filter {
            TypeFilter::Free => CourseType::Free,
            TypeFilter::Paid => CourseType::Paid,
        }
    }
}

/// Use the argument if given, otherwise all of stdin, collapsed to single-spaced plain text
async fn input_text(text: Option<String>) -> Result<String> {
    let raw = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            buffer
        }
    };
    Ok(normalize_whitespace(&raw))
}

async fn run_equalize(
    catalog_path: PathBuf,
    config_path: Option<PathBuf>,
    preset: Option<String>,
    course_type: Option<TypeFilter>,
    out: Option<PathBuf>,
) -> Result<()> {
    // WHY: validate catalog path early to fail fast with clear error
    if !catalog_path.is_file() {
        anyhow::bail!("Catalog file does not exist: {}", catalog_path.display());
    }

    let config = AppConfig::load(config_path.as_deref()).await?;
    let options = config.equalizer_options(preset.as_deref())?;
    info!(
        target_length = options.target_length,
        min_length = options.min_length,
        preset = preset.as_deref().unwrap_or("default"),
        "Equalizer options resolved"
    );

    let loaded = CourseCatalog::load(&catalog_path).await?;
    let mut courses = match course_type {
        Some(filter) => loaded.filter_by_type(filter.into()),
        None => loaded.courses().to_vec(),
    };

    if config.normalize_whitespace {
        catalog::normalize_descriptions(&mut courses);
    }

    let report = equalize_course_descriptions(&courses, &options);

    for band in [
        LengthBand::Truncate,
        LengthBand::Extend,
        LengthBand::LightExtend,
        LengthBand::PassThrough,
    ] {
        let count = report.iter().filter(|row| row.band == band).count();
        info!(?band, count, "Band summary");
    }

    match out {
        Some(path) => {
            catalog::write_report(&path, &report).await?;
            info!("Wrote {} equalized descriptions to {}", report.len(), path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging on stderr keeps stdout free for results
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    match args.command {
        Command::Equalize { catalog, config, preset, course_type, out } => {
            run_equalize(catalog, config, preset, course_type, out).await?;
        }
        Command::Truncate { max_length, preserve, priority, min_words, text } => {
            let text = input_text(text).await?;
            let options = TruncateOptions::new(max_length)
                .preserve(preserve)
                .priority(priority)
                .min_words(min_words);
            println!("{}", smart_truncate(&text, &options));
        }
        Command::Density { keyword, text } => {
            let text = input_text(text).await?;
            println!("{:.2}", keyword_density(&text, &keyword));
        }
    }

    Ok(())
}
