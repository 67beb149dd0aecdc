//! # Song Documents
//!
//! A song file is chord-annotated text with an optional YAML block at the
//! top:
//!
//! ```text
//! ---
//! title: Garota de Ipanema
//! artist: Tom Jobim
//! key: F
//! transpose: -2
//! accidentals: auto
//! ---
//! [Fmaj7]Olha que coisa mais [G7]linda
//! ```
//!
//! Keys are kebab-case. Every field is optional; `accidentals` must be one of
//! `sharps`, `flats` or `auto` (the default, which picks the spelling that is
//! conventional for the key being played).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chord::transpose_key;
use crate::error::CifraError;
use crate::note::{is_minor, split_key, Spelling};

/// Raw front matter for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub key: Option<String>,
    pub capo: Option<u8>,
    pub tempo: Option<u16>,
    pub transpose: Option<i32>,
    pub accidentals: Option<String>,
}

/// Accidental preference declared by a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidentals {
    #[default]
    Auto,
    Sharps,
    Flats,
}

impl FromStr for Accidentals {
    type Err = CifraError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Accidentals::Auto),
            "sharps" | "sharp" => Ok(Accidentals::Sharps),
            "flats" | "flat" => Ok(Accidentals::Flats),
            _ => Err(CifraError::MetadataError(format!(
                "accidentals must be one of sharps, flats, auto (got '{}')",
                value
            ))),
        }
    }
}

/// Validated front matter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongMetadata {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub key: Option<String>,
    pub capo: Option<u8>,
    pub tempo: Option<u16>,
    /// Semitones the song asks to be played in, relative to how it is written.
    pub transpose: i32,
    pub accidentals: Accidentals,
}

impl TryFrom<RawMetadata> for SongMetadata {
    type Error = CifraError;

    fn try_from(raw: RawMetadata) -> Result<Self, Self::Error> {
        let accidentals = match raw.accidentals.as_deref() {
            None => Accidentals::Auto,
            Some(value) => value.parse()?,
        };

        let key = raw.key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
        if let Some(key) = &key {
            if split_key(key).is_none() {
                return Err(CifraError::MetadataError(format!("unknown key '{}'", key)));
            }
        }

        Ok(SongMetadata {
            title: raw.title,
            artist: raw.artist,
            key,
            capo: raw.capo,
            tempo: raw.tempo,
            transpose: raw.transpose.unwrap_or(0),
            accidentals,
        })
    }
}

/// A parsed song file: metadata plus the chord-annotated body.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub metadata: SongMetadata,
    pub body: String,
}

impl Song {
    /// Split and validate the front matter of `source`.
    ///
    /// Text without a leading `---` line, or whose block is never closed, is
    /// all body.
    ///
    /// # Errors
    /// [`CifraError::MetadataError`] when the YAML is malformed or holds an
    /// unsupported value.
    pub fn parse(source: &str) -> Result<Song, CifraError> {
        let (front_matter, body) = split_front_matter(source);
        let metadata = match front_matter {
            Some(yaml) if !yaml.trim().is_empty() => {
                let raw: RawMetadata = serde_yaml::from_str(yaml)
                    .map_err(|e| CifraError::MetadataError(e.to_string()))?;
                SongMetadata::try_from(raw)?
            }
            _ => SongMetadata::default(),
        };
        tracing::debug!(
            title = metadata.title.as_deref().unwrap_or(""),
            key = metadata.key.as_deref().unwrap_or(""),
            transpose = metadata.transpose,
            "parsed song"
        );
        Ok(Song {
            metadata,
            body: body.to_string(),
        })
    }

    /// Spelling for the song played `semitones` away from how it is written.
    ///
    /// With `accidentals: auto` this is the conventional spelling of the
    /// destination key, falling back to sharps when the song has no key.
    pub fn spelling(&self, semitones: i32) -> Spelling {
        match self.metadata.accidentals {
            Accidentals::Sharps => Spelling::Sharps,
            Accidentals::Flats => Spelling::Flats,
            Accidentals::Auto => match &self.metadata.key {
                Some(key) if semitones.rem_euclid(12) == 0 => Spelling::for_key(key),
                Some(key) => match split_key(key) {
                    Some((root, _, quality)) => {
                        Spelling::for_root(root.transpose(semitones), is_minor(quality))
                    }
                    None => Spelling::Sharps,
                },
                None => Spelling::Sharps,
            },
        }
    }

    /// The declared key moved by `semitones`, spelled with `spelling`.
    pub fn key_after(&self, semitones: i32, spelling: Spelling) -> Option<String> {
        self.metadata
            .key
            .as_deref()
            .map(|key| transpose_key(key, semitones, spelling.prefers_flats()))
    }
}

/// Split a leading `---` block from the rest of `source`. The body keeps its
/// original bytes.
fn split_front_matter(source: &str) -> (Option<&str>, &str) {
    let mut lines = source.split_inclusive('\n');
    let start = match lines.next() {
        Some(first) if first.trim() == "---" => first.len(),
        _ => return (None, source),
    };

    let mut offset = start;
    for line in lines {
        if line.trim() == "---" {
            return (Some(&source[start..offset]), &source[offset + line.len()..]);
        }
        offset += line.len();
    }
    tracing::debug!("front matter never closed, reading it as body");
    (None, source)
}
