//! Shared types for the spellfix spelling corrector.
//!
//! - [`character`] -- ASCII character classification used by the tokenizer
//!   and normalizer
//! - [`token`] -- raw text tokens
//! - [`word`] -- validated dictionary words and corrections

pub mod character;
pub mod token;
pub mod word;
