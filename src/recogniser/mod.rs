//! Syntax recognition for VC
//!
//! The recogniser answers one question: does the token stream match the VC
//! grammar? It builds no tree. Grammar rules map one-to-one onto methods of
//! [`Recogniser`], spread over:
//! - [`parse`]: the recogniser, its token cursor and [`SyntaxError`]
//! - `declarations`: program, variable and function declarations
//! - `statements`: statements
//! - `expressions`: expressions
//!
//! # Error model
//!
//! The first violation ends recognition. It is returned as a
//! [`SyntaxError`] through every enclosing rule and reported exactly once.

mod declarations;
mod expressions;
pub mod parse;
mod statements;

pub use parse::{Recogniser, SyntaxError};
