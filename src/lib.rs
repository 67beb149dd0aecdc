//! # Cifra
//!
//! Chord notation engine for song sheets: reads chord symbols in inline
//! `[C]Hello` markup or chord-over-lyric layout, transposes them with
//! consistent sharp/flat spelling, and lines chords up with the lyrics they
//! belong to.
//!
//! ```rust
//! use cifra::{align_chords_and_lyrics, shift_note, transpose_bracket_chord_pro};
//!
//! assert_eq!(shift_note("A", 1, true), "Bb");
//! assert_eq!(transpose_bracket_chord_pro("[Am]Oi [F]gente", -2, false), "[Gm]Oi [D#]gente");
//!
//! let rows = align_chords_and_lyrics("C       G\nHello   world");
//! assert_eq!(rows[0][1].chord, "G");
//! assert_eq!(rows[0][1].lyric, "world");
//! ```

pub mod api;
pub mod chord;
pub mod error;
pub mod grammar;
pub mod layout;
pub mod note;
pub mod render;
pub mod song;
pub mod transpose;

pub use api::{render_parsed, render_song, semitones_to_key, OutputFormat, RenderOptions, RenderedSong};
pub use chord::{parse_chord_token, transpose_chord_token, transpose_key, ChordToken};
pub use error::CifraError;
pub use layout::{
    align_chords_and_lyrics, align_lines, align_transposed, classify_line, AlignedLine,
    AlignedPair, Cluster, LineKind,
};
pub use note::{normalize_note, semitones_between, shift_note, Note, Spelling};
pub use render::{render_badges_html, render_ruby_html, render_text};
pub use song::{Accidentals, Song, SongMetadata};
pub use transpose::{transpose_any_chord_tokens, transpose_bracket_chord_pro, Transposition};
