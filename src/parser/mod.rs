//! `.env` parsing module.
//!
//! This module tokenizes `KEY=VALUE # comment` lines into an [`EnvSet`],
//! treating the trailing comment as the variable description.
//!
//! Parsing is permissive: blank lines, full-line `#` comments
//! and lines without a `=` are skipped silently. The only reported
//! failure is I/O on the underlying file.
//!
//! # Example
//!
//! ```rust
//! use envform::parser::parse_str;
//!
//! let vars = parse_str("PORT=8080 # http listen port\n");
//! let entry = vars.get("PORT").unwrap();
//! assert_eq!(entry.value, "8080");
//! assert_eq!(entry.description.as_deref(), Some("http listen port"));
//! ```

mod env;

pub use env::{parse_path, parse_reader, parse_str};
