//! Layout type definitions
//!
//! These are the format-neutral units every renderer consumes.

use serde::Serialize;

/// How a single source line was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    /// Mostly bare chord tokens (`C   G/B   Am`).
    ChordLine,
    /// Ordinary text.
    LyricLine,
    /// Inline bracket markup (`[C]Hello [G]world`).
    MixedInlineLine,
    /// Empty or whitespace only.
    BlankLine,
}

/// One chord-over-lyric unit.
///
/// # Fields
/// - `chord`: display-ready chord text, possibly several chords joined by a space
/// - `lyric`: the text the chord sits above; `" "` anchors a chord with no text
/// - `position`: character column in the source line where the unit starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedPair {
    pub chord: String,
    pub lyric: String,
    pub position: usize,
}

impl AlignedPair {
    pub fn new(chord: impl Into<String>, lyric: impl Into<String>, position: usize) -> Self {
        Self {
            chord: chord.into(),
            lyric: lyric.into(),
            position,
        }
    }

    /// A chord with nothing to sit above.
    pub fn is_chord_only(&self) -> bool {
        !self.chord.is_empty() && self.lyric.trim().is_empty()
    }
}

/// One output row of the layout.
///
/// A chord line followed by its lyric line collapses into a single row
/// (`line_count == 2`); every other source line is one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignedLine {
    pub kind: LineKind,
    /// Zero-based index of the first source line of this row.
    pub source_line: usize,
    pub line_count: usize,
    pub pairs: Vec<AlignedPair>,
}

/// A lyric plus every chord stacked above it.
///
/// Built from consecutive pairs: chord-only pairs accumulate until the next
/// pair that carries text. Trailing chord-only pairs form a cluster with an
/// empty lyric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    pub chords: Vec<String>,
    pub lyric: String,
    pub position: usize,
}

/// A whitespace-delimited word of a lyric line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricWord {
    pub text: String,
    /// Character column.
    pub position: usize,
}
