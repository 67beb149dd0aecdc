//! Chord symbols: `root (suffix)? (/bass)?`.
//!
//! The suffix (`m7`, `sus4`, `°`, ...) is opaque text. It is carried through
//! transposition verbatim and never interpreted musically.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::note::{normalize_note, Note, Spelling};

static CHORD_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-G][#b]?)([^/]*)(?:/([A-G][#b]?))?$").expect("chord token pattern is valid")
});

/// A recognized chord symbol occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    pub root: Note,
    pub suffix: String,
    pub bass: Option<Note>,
    /// Character offset in the source line (0 when parsed standalone).
    pub position: usize,
}

impl ChordToken {
    pub fn new(root: Note, suffix: impl Into<String>, bass: Option<Note>) -> Self {
        Self {
            root,
            suffix: suffix.into(),
            bass,
            position: 0,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Same chord moved by `semitones`; suffix and position are untouched.
    pub fn transpose(&self, semitones: i32) -> ChordToken {
        ChordToken {
            root: self.root.transpose(semitones),
            suffix: self.suffix.clone(),
            bass: self.bass.map(|b| b.transpose(semitones)),
            position: self.position,
        }
    }

    /// Display string, e.g. `"Bbm7/F"`.
    pub fn display(&self, spelling: Spelling) -> String {
        let mut out = String::with_capacity(self.suffix.len() + 6);
        out.push_str(self.root.name(spelling));
        out.push_str(&self.suffix);
        if let Some(bass) = self.bass {
            out.push('/');
            out.push_str(bass.name(spelling));
        }
        out
    }
}

/// Parse the full contents of a bracket (`"C#m7/G#"`) as one chord.
///
/// Returns `None` when the text does not have chord shape; callers leave such
/// text untouched.
pub fn parse_chord_token(token: &str) -> Option<ChordToken> {
    let caps = CHORD_TOKEN.captures(token)?;
    let root = normalize_note(caps.get(1)?.as_str());
    let suffix = caps.get(2).map_or("", |m| m.as_str());
    let bass = caps.get(3).map(|m| normalize_note(m.as_str()));
    Some(ChordToken::new(root, suffix, bass))
}

/// Transpose one chord symbol. Text that is not a chord comes back unchanged.
///
/// ```rust
/// use cifra::transpose_chord_token;
///
/// assert_eq!(transpose_chord_token("F#maj7/A#", 1, false), "Gmaj7/B");
/// assert_eq!(transpose_chord_token("Am", -2, true), "Gm");
/// assert_eq!(transpose_chord_token("not-a-chord", 2, false), "not-a-chord");
/// ```
pub fn transpose_chord_token(token: &str, semitones: i32, prefer_flats: bool) -> String {
    match parse_chord_token(token) {
        Some(chord) => chord
            .transpose(semitones)
            .display(Spelling::from_prefer_flats(prefer_flats)),
        None => {
            tracing::trace!(token, "not a chord, left unchanged");
            token.to_string()
        }
    }
}

/// Transpose a key name such as `"Am"` or `"Bb"`; unknown keys pass through.
pub fn transpose_key(key: &str, semitones: i32, prefer_flats: bool) -> String {
    transpose_chord_token(key.trim(), semitones, prefer_flats)
}
