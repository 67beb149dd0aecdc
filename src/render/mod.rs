//! # Renderers
//!
//! Thin consumers of the layout rows. None of them makes an alignment
//! decision; they only encode the one [`crate::layout`] made.
//!
//! - [`render_ruby_html`] - `<ruby>` markup built from clusters, so stacked
//!   chords above one syllable stay one unit
//! - [`render_badges_html`] - each chord as an inline badge before its text
//! - [`render_text`] - plain chord-over-lyric text

mod html;
mod text;

pub use html::{render_badges_html, render_ruby_html};
pub use text::render_text;
