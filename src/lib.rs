//! Deutsches Java to Java cross-compiler.
//!
//! Rewrites German keywords to their Java equivalents with whole-word regular expressions.
//! There is no lexer: keywords inside comments and string literals are rewritten too.

pub mod config;
pub mod paths;
pub mod pipeline;
pub mod progress;
pub mod rules;
pub mod translator;
pub mod vocabulary;

pub use translator::{compile_to_java, translate, Mode, Translator};
