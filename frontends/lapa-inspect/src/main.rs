mod cli;

use clap::Parser;
use lapa::config::Config;
use lapa::{
    first_line_segment_bytes, first_sentence_bytes, first_word_bytes, step_bytes_with,
    LineCursor, SentenceCursor, StepCursor, WidthPolicy, WordCursor,
};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

const LOG_LEVEL_ENV: &str = "LAPA_LOG_LEVEL";

/// Level from `LAPA_LOG_LEVEL`, falling back to the configured one.
fn filter_level(configured: &str, env: Option<&str>) -> LevelFilter {
    let configured = LevelFilter::from_str(configured).unwrap_or(LevelFilter::OFF);
    env.filter(|level| !level.is_empty())
        .and_then(|level| LevelFilter::from_str(level).ok())
        .unwrap_or(configured)
}

/// Logs go to stderr, and to `log_file` when given, so stdout only carries
/// segments.
fn init_logging(
    level: LevelFilter,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::builder().with_default_directive(level.into()).parse("")?;
    let stderr = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let file = match log_file {
        Some(path) => Some(
            tracing_subscriber::fmt::layer()
                .with_writer(std::fs::File::create(path)?)
                .with_ansi(false),
        ),
        None => None,
    };

    tracing_subscriber::registry().with(stderr.and_then(file).with_filter(filter)).init();
    Ok(())
}

fn print_graphemes(
    out: &mut impl Write,
    input: &[u8],
    policy: WidthPolicy,
) -> std::io::Result<()> {
    let mut rest = input;
    let mut cursor = StepCursor::START;
    while !rest.is_empty() {
        let (cluster, next, boundaries, next_cursor) = step_bytes_with(rest, cursor, policy);
        writeln!(
            out,
            "{:?}\twidth={}\tword={}\tsentence={}\tline={:?}",
            String::from_utf8_lossy(cluster),
            boundaries.width(),
            boundaries.is_word_boundary(),
            boundaries.is_sentence_boundary(),
            boundaries.line_break(),
        )?;
        rest = next;
        cursor = next_cursor;
    }
    Ok(())
}

fn print_words(out: &mut impl Write, input: &[u8]) -> std::io::Result<()> {
    let mut rest = input;
    let mut cursor = WordCursor::START;
    while !rest.is_empty() {
        let (word, next, next_cursor) = first_word_bytes(rest, cursor);
        writeln!(out, "{:?}", String::from_utf8_lossy(word))?;
        rest = next;
        cursor = next_cursor;
    }
    Ok(())
}

fn print_sentences(out: &mut impl Write, input: &[u8]) -> std::io::Result<()> {
    let mut rest = input;
    let mut cursor = SentenceCursor::START;
    while !rest.is_empty() {
        let (sentence, next, next_cursor) = first_sentence_bytes(rest, cursor);
        writeln!(out, "{:?}", String::from_utf8_lossy(sentence))?;
        rest = next;
        cursor = next_cursor;
    }
    Ok(())
}

fn print_lines(out: &mut impl Write, input: &[u8]) -> std::io::Result<()> {
    let mut rest = input;
    let mut cursor = LineCursor::START;
    while !rest.is_empty() {
        let (segment, next, must, next_cursor) = first_line_segment_bytes(rest, cursor);
        let marker = if must { "\tmust" } else { "" };
        writeln!(out, "{:?}{marker}", String::from_utf8_lossy(segment))?;
        rest = next;
        cursor = next_cursor;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Cli::parse();

    let (config, config_error) = match Config::try_load() {
        Ok(config) => (config, None),
        Err(lapa::config::ConfigError::PathNotFound) => (Config::default(), None),
        Err(err) => (Config::default(), Some(err)),
    };

    let level = filter_level(
        &config.developer.log_level,
        std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
    );
    let log_file = args.log_file.clone().or(config.developer.log_file.clone());
    if let Err(e) = init_logging(level, log_file.as_deref().map(Path::new)) {
        eprintln!("unable to configure the logger: {e}");
    }
    if let Some(err) = config_error {
        tracing::warn!("{err}, using default config");
    }

    config.apply();
    let policy = match args.ambiguous_width {
        Some(width) => WidthPolicy::new(width),
        None => config.width_policy(),
    };

    let input = match &args.file {
        Some(path) => {
            tracing::debug!("reading {}", path.display());
            std::fs::read(path)?
        }
        None => {
            let mut input = Vec::new();
            std::io::stdin().lock().read_to_end(&mut input)?;
            input
        }
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.mode {
        cli::Mode::Graphemes => print_graphemes(&mut out, &input, policy)?,
        cli::Mode::Words => print_words(&mut out, &input)?,
        cli::Mode::Sentences => print_sentences(&mut out, &input)?,
        cli::Mode::Lines => print_lines(&mut out, &input)?,
    }
    out.flush()?;

    Ok(())
}
