//! tagconv - Part-of-speech tagset converter
//!
//! Converts tagged German corpus files between the RFTagger, CoNLL-X and a
//! tabular STTS format. Every format is read into one unified token model
//! (part of speech plus optional case, number, gender, degree, person, tense
//! and mood) and written out again, one token at a time.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod formats;
pub mod infrastructure;
pub mod tagsets;

pub use error::ConvertError;
