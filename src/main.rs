use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cifra::{render_parsed, semitones_to_key, CifraError, OutputFormat, RenderOptions, Song, Spelling};

#[derive(Parser, Debug)]
#[command(name = "cifra")]
#[command(version)]
#[command(about = "Transpose and lay out chord song sheets", long_about = None)]
struct Args {
    /// Song file (reads from stdin if not specified)
    input: Option<PathBuf>,

    /// Semitones to transpose by, on top of the song's own `transpose`
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    transpose: i32,

    /// Transpose to this key instead (needs `key` in the front matter)
    #[arg(long, conflicts_with = "transpose")]
    to_key: Option<String>,

    /// Spell black keys with flats
    #[arg(long, conflicts_with = "sharps")]
    flats: bool,

    /// Spell black keys with sharps
    #[arg(long)]
    sharps: bool,

    /// Output format: text, ruby, badges or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Output file (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), CifraError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cifra=warn")))
        .init();

    let args = Args::parse();

    let source = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        }
    };

    let song = Song::parse(&source)?;
    let semitones = match &args.to_key {
        Some(key) => semitones_to_key(&song, key)?,
        None => args.transpose,
    };
    let spelling = if args.flats {
        Some(Spelling::Flats)
    } else if args.sharps {
        Some(Spelling::Sharps)
    } else {
        None
    };

    let rendered = render_parsed(
        &song,
        &RenderOptions {
            semitones,
            spelling,
            format: args.format,
        },
    )?;
    tracing::info!(
        key = rendered.key.as_deref().unwrap_or("-"),
        semitones = rendered.semitones,
        "rendered {} rows",
        rendered.lines.len()
    );

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered.output)?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", rendered.output),
    }

    Ok(())
}
