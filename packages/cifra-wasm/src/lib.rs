use serde::Serialize;
use wasm_bindgen::prelude::*;

use cifra::{CifraError, OutputFormat, RenderOptions, Song, Spelling};

#[derive(Serialize)]
struct RenderError {
    kind: &'static str,
    message: String,
}

fn to_js_error(e: CifraError) -> JsValue {
    let kind = match &e {
        CifraError::MetadataError(_) => "metadata",
        CifraError::InvalidOption(_) => "option",
        CifraError::Io(_) => "io",
        CifraError::Json(_) => "json",
    };
    let error = RenderError {
        kind,
        message: e.to_string(),
    };
    JsValue::from_str(&serde_json::to_string(&error).unwrap_or_else(|_| e.to_string()))
}

/// Shift a single note name, e.g. `shift_note("A", 1, true) == "Bb"`
#[wasm_bindgen]
pub fn shift_note(note: &str, semitones: i32, prefer_flats: bool) -> String {
    cifra::shift_note(note, semitones, prefer_flats)
}

/// Transpose every chord of a song sheet, bracket markup and chord lines alike
#[wasm_bindgen]
pub fn transpose(text: &str, semitones: i32, prefer_flats: bool) -> String {
    cifra::transpose_any_chord_tokens(text, semitones, prefer_flats)
}

/// Aligned rows as a JS array of arrays of `{ chord, lyric, position }`
#[wasm_bindgen]
pub fn align(text: &str, semitones: i32, prefer_flats: bool) -> Result<JsValue, JsValue> {
    let rows = cifra::align_transposed(text, semitones, prefer_flats);
    serde_wasm_bindgen::to_value(&rows).map_err(JsValue::from)
}

/// Same as [`align`], serialized to a JSON string
#[wasm_bindgen]
pub fn align_json(text: &str, semitones: i32, prefer_flats: bool) -> String {
    let rows = cifra::align_transposed(text, semitones, prefer_flats);
    serde_json::to_string(&rows).unwrap_or_else(|_| "[]".to_string())
}

/// Render a song sheet body as HTML, `style` being "ruby" or "badges"
#[wasm_bindgen]
pub fn render_html(text: &str, semitones: i32, prefer_flats: bool, style: &str) -> Result<String, JsValue> {
    let transposition = cifra::Transposition::new(semitones, prefer_flats);
    let lines = cifra::align_lines(text, Some(transposition));
    match style {
        "ruby" => Ok(cifra::render_ruby_html(&lines)),
        "badges" => Ok(cifra::render_badges_html(&lines)),
        other => Err(to_js_error(CifraError::InvalidOption(format!(
            "unknown style '{}' (expected ruby or badges)",
            other
        )))),
    }
}

/// Render a full song file (front matter included) in `format`.
/// `accidentals` is "sharps", "flats", or anything else to let the song decide.
#[wasm_bindgen]
pub fn render_song(source: &str, semitones: i32, accidentals: &str, format: &str) -> Result<String, JsValue> {
    let spelling = match accidentals {
        "sharps" => Some(Spelling::Sharps),
        "flats" => Some(Spelling::Flats),
        _ => None,
    };
    let options = RenderOptions {
        semitones,
        spelling,
        format: format.parse::<OutputFormat>().map_err(to_js_error)?,
    };
    cifra::render_song(source, &options)
        .map(|rendered| rendered.output)
        .map_err(to_js_error)
}

/// Front matter of a song file as a JS object
#[wasm_bindgen]
pub fn song_metadata(source: &str) -> Result<JsValue, JsValue> {
    let song = Song::parse(source).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&song.metadata).map_err(JsValue::from)
}
