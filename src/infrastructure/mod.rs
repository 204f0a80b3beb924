//! Infrastructure layer - Files, charsets and settings

pub mod config;
pub mod text;

pub use config::Settings;
pub use text::{
    charset_for_name, default_charset, output_charset_for_name, TextReader, TextWriter,
};
