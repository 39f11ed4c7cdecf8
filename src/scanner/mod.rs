//! Lexical analysis for VC source text
//!
//! - [`source`]: the [`CharSource`] contract and the in-memory [`SourceFile`]
//! - [`token`]: token kinds, the keyword table and source positions
//! - [`scan`]: the [`Scanner`] itself
//!
//! The scanner is pull-based: the recogniser asks for one token at a time and
//! the scanner asks its source for one character at a time.

pub mod scan;
pub mod source;
pub mod token;

pub use scan::Scanner;
pub use source::{CharSource, SourceFile};
pub use token::{SourcePosition, Token, TokenKind};
