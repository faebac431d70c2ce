//! Main module for the R-Markdown lexer

pub mod config;
pub mod inlines;
pub mod lexing;
pub mod testing;
pub mod token;
