//! # Layout Module
//!
//! Turns song text into positioned chord-over-lyric units for rendering.
//!
//! ## Purpose
//! Song sheets arrive in two notations:
//! 1. **Inline markup** - `[G]Shine on [C]you`
//! 2. **Two-line layout** - a line of chords above the lyric line it belongs to
//!
//! Both are reduced to the same output: per row, an ordered list of
//! [`AlignedPair`] (`chord`, `lyric`, `position`), usable for ruby-style
//! rendering whichever notation the author used.
//!
//! ## Sub-modules
//! - `types` - LineKind, AlignedPair, AlignedLine, Cluster, LyricWord
//! - `classify` - chord-density line classification
//! - `align` - the alignment core
//! - `cluster` - grouping pairs into lyric-anchored clusters
//!
//! ## Line Classification
//! | Line | Kind |
//! |---|---|
//! | contains `[` and `]` | MixedInlineLine |
//! | empty or whitespace | BlankLine |
//! | chord coverage > 60% of visible characters | ChordLine |
//! | anything else (including 40-60%) | LyricLine |
//!
//! ## Example
//! ```rust
//! use cifra::layout::{align_lines, LineKind};
//!
//! let rows = align_lines("[C]Hello [G]world\n\nAm   F\nSo long", None);
//!
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[0].kind, LineKind::MixedInlineLine);
//! assert_eq!(rows[1].kind, LineKind::BlankLine);
//! assert!(rows[1].pairs.is_empty());
//! assert_eq!(rows[2].kind, LineKind::ChordLine);
//! assert_eq!(rows[2].line_count, 2);
//! ```
//!
//! ## Related Modules
//! - `grammar` - finds chord tokens in each line
//! - `transpose` - supplies transposed chord text during alignment
//! - `render` - turns rows into HTML or text

mod align;
mod classify;
mod cluster;
mod types;

#[cfg(test)]
mod tests;

pub use align::{
    align_chords_and_lyrics, align_lines, align_transposed, lyric_words, CHORD_ANCHOR,
    PROXIMITY_WINDOW,
};
pub use classify::{chord_density, classify_line, CHORD_LINE_DENSITY, LYRIC_LINE_DENSITY};
pub use cluster::cluster_pairs;
pub use types::{AlignedLine, AlignedPair, Cluster, LineKind, LyricWord};
