//! # Introduction
//!
//! vcfront is the front end of a compiler for VC, a small C-like teaching
//! language. It turns source text into tokens and checks that the token
//! stream forms a syntactically valid program. No tree is built; the
//! recogniser only accepts or rejects.
//!
//! ## Pipeline
//!
//! ```text
//! Source → SourceFile → Scanner → Recogniser → accept / first syntax error
//!                          ↓           ↓
//!                          └─ Reporter ┘
//! ```
//!
//! 1. [`scanner`] reads characters from a [`scanner::CharSource`] and
//!    produces [`scanner::Token`]s with line and column spans.
//! 2. [`recogniser`] pulls tokens one at a time and checks them against the
//!    VC grammar, stopping at the first syntax error.
//! 3. [`diagnostics`] is the sink both stages report problems to.
//! 4. [`driver`] wires the stages together for a whole file.
//! 5. [`ui`] is a ratatui token explorer; not part of the stable library API.

pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod recogniser;
pub mod scanner;
pub mod ui;
