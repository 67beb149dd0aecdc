//! # Error Types
//!
//! The chord engine itself never fails: malformed notes, brackets and lines
//! degrade to renderable output. Errors only come from the outer surfaces that
//! read configuration and files.
//!
//! ## Error Types
//! - `MetadataError` - Invalid YAML front matter in a song file
//! - `InvalidOption` - A render option that cannot be honoured (e.g. unknown key)
//! - `Io` - Reading or writing song files from the CLI
//! - `Json` - Serializing the layout for JSON output
//!
//! ## Usage
//! ```rust
//! use cifra::{Song, CifraError};
//!
//! match Song::parse("---\naccidentals: sideways\n---\n[C]Hello") {
//!     Ok(song) => println!("{}", song.body),
//!     Err(CifraError::MetadataError(message)) => eprintln!("Bad front matter: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CifraError {
    /// Invalid front matter.
    ///
    /// Occurs when the YAML block between `---` markers cannot be parsed or
    /// holds an unsupported value.
    ///
    /// # Example
    /// ```
    /// # use cifra::CifraError;
    /// let err = CifraError::MetadataError("transpose must be an integer".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: transpose must be an integer");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// Invalid render option.
    ///
    /// # Example
    /// ```
    /// # use cifra::CifraError;
    /// let err = CifraError::InvalidOption("unknown key 'X#'".to_string());
    /// assert_eq!(err.to_string(), "Invalid option: unknown key 'X#'");
    /// ```
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
