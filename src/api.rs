//! # Public API
//!
//! One call from a song file to rendered output.
//!
//! ## Entry Points
//!
//! - [`render_song()`] - Parse front matter, transpose, align and render
//! - [`render_parsed()`] - Same, for an already parsed [`Song`]
//! - [`semitones_to_key()`] - Offset that puts a song in a given key
//!
//! ## Typical Usage
//!
//! ```rust
//! use cifra::{render_song, OutputFormat, RenderOptions};
//!
//! let source = r#"---
//! title: Wave
//! key: D
//! ---
//! D        A
//! So close your eyes
//! "#;
//!
//! let rendered = render_song(source, &RenderOptions {
//!     semitones: 3,
//!     format: OutputFormat::Text,
//!     ..Default::default()
//! })?;
//! assert_eq!(rendered.key.as_deref(), Some("F"));
//! assert_eq!(rendered.output, "F        C\nSo close your eyes\n");
//! # Ok::<(), cifra::CifraError>(())
//! ```
//!
//! The song's own `transpose` field is added to the requested offset, and
//! when no spelling is forced the song's `accidentals` setting decides.

use std::str::FromStr;

use serde::Serialize;

use crate::{
    align_lines, render_badges_html, render_ruby_html, render_text, semitones_between,
    AlignedLine, CifraError, Song, Spelling, Transposition,
};

/// What [`render_song`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Chord-over-lyric plain text.
    #[default]
    Text,
    /// HTML with `<ruby>` chord annotations.
    Ruby,
    /// HTML with inline chord badges.
    Badges,
    /// The aligned rows and song details as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CifraError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "ruby" | "html" => Ok(OutputFormat::Ruby),
            "badges" => Ok(OutputFormat::Badges),
            "json" => Ok(OutputFormat::Json),
            other => Err(CifraError::InvalidOption(format!(
                "unknown format '{}' (expected text, ruby, badges or json)",
                other
            ))),
        }
    }
}

/// Settings for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Semitones on top of the song's own `transpose`.
    pub semitones: i32,
    /// Forced spelling; `None` lets the song decide.
    pub spelling: Option<Spelling>,
    pub format: OutputFormat,
}

/// A rendered song.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSong {
    pub title: Option<String>,
    pub artist: Option<String>,
    /// Key after transposition.
    pub key: Option<String>,
    /// Total shift applied, song `transpose` included.
    pub semitones: i32,
    pub spelling: Spelling,
    pub lines: Vec<AlignedLine>,
    /// Output in the requested format.
    #[serde(skip)]
    pub output: String,
}

/// Parse, transpose and render a song file.
///
/// # Errors
/// Returns [`CifraError::MetadataError`] for invalid front matter. The chord
/// engine itself does not fail.
pub fn render_song(source: &str, options: &RenderOptions) -> Result<RenderedSong, CifraError> {
    let song = Song::parse(source)?;
    render_parsed(&song, options)
}

/// Render an already parsed song.
pub fn render_parsed(song: &Song, options: &RenderOptions) -> Result<RenderedSong, CifraError> {
    let semitones = combine_shifts(song.metadata.transpose, options.semitones);
    let spelling = options
        .spelling
        .unwrap_or_else(|| song.spelling(semitones));
    tracing::debug!(semitones, ?spelling, format = ?options.format, "rendering song");

    let lines = align_lines(&song.body, Some(Transposition::with_spelling(semitones, spelling)));
    let mut rendered = RenderedSong {
        title: song.metadata.title.clone(),
        artist: song.metadata.artist.clone(),
        key: song.key_after(semitones, spelling),
        semitones,
        spelling,
        lines,
        output: String::new(),
    };

    rendered.output = match options.format {
        OutputFormat::Text => render_text(&rendered.lines),
        OutputFormat::Ruby => render_ruby_html(&rendered.lines),
        OutputFormat::Badges => render_badges_html(&rendered.lines),
        OutputFormat::Json => serde_json::to_string_pretty(&rendered)?,
    };
    Ok(rendered)
}

/// Offset to pass as [`RenderOptions::semitones`] so that `song` sounds in
/// `target`, taking the song's own `transpose` into account.
///
/// The result is the smallest such move, between -5 and +6 semitones.
///
/// # Errors
/// [`CifraError::InvalidOption`] when the song declares no key or `target`
/// is not a key.
pub fn semitones_to_key(song: &Song, target: &str) -> Result<i32, CifraError> {
    let key = song.metadata.key.as_deref().ok_or_else(|| {
        CifraError::InvalidOption("the song has no key to transpose from".to_string())
    })?;
    let up = semitones_between(key, target)
        .ok_or_else(|| CifraError::InvalidOption(format!("unknown key '{}'", target)))?;
    let remaining = (i64::from(up) - i64::from(song.metadata.transpose)).rem_euclid(12) as i32;
    Ok(if remaining > 6 { remaining - 12 } else { remaining })
}

/// Sum of two shifts. A sum past the `i32` range is reduced modulo 12, which
/// sounds the same.
fn combine_shifts(a: i32, b: i32) -> i32 {
    a.checked_add(b)
        .unwrap_or_else(|| (i64::from(a) + i64::from(b)).rem_euclid(12) as i32)
}
