//! Syntax highlighting for SPARQL query text.
//!
//! The lexer splits query text into lexemes without validating it; any input,
//! SPARQL or not, tokenizes completely and renders as escaped text in the
//! worst case. The HTML formatter wraps the lexemes in classed spans with one
//! fixed, embedded color theme.

mod html;
mod lexer;

pub use html::{escape_html, highlight_document, highlight_fragment};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
