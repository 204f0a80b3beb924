//! CLI command definitions

use crate::application::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::formats::Format;
use crate::infrastructure::{
    charset_for_name, default_charset, output_charset_for_name, Settings,
};
use clap::Parser;
use encoding_rs::Encoding;
use std::path::PathBuf;

/// Options are declared in alphabetical order, which is also the order of
/// the usage message.
#[derive(Parser, Debug)]
#[command(name = "tagconv")]
#[command(about = "Convert POS-tagged corpus files between RFTagger, CoNLL-X and TSV", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML) with defaults for the other options
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Charset of the input file [default: UTF-8]
    #[arg(long, value_name = "NAME", value_parser = charset_for_name)]
    pub input_charset: Option<&'static Encoding>,

    /// Format of the input file (rftagger, conllx, tsv)
    #[arg(long, value_name = "FORMAT")]
    pub input_format: Option<Format>,

    /// Charset of the output file [default: UTF-8]
    #[arg(long, value_name = "NAME", value_parser = output_charset_for_name)]
    pub output_charset: Option<&'static Encoding>,

    /// Format of the output file (rftagger, conllx, tsv)
    #[arg(long, value_name = "FORMAT")]
    pub output_format: Option<Format>,

    /// File to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File to write (created or truncated)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

impl Cli {
    /// Merge the command line with the settings file, if any
    ///
    /// Values given on the command line win. Both formats must be known
    /// afterwards; charsets fall back to UTF-8.
    pub fn into_options(self) -> Result<ConvertOptions> {
        let settings = match &self.config {
            Some(path) => Settings::load_from_file(path)?,
            None => Settings::default(),
        };

        let input_format = self
            .input_format
            .or(settings.input_format)
            .ok_or_else(|| ConvertError::Config("No input format given".to_string()))?;
        let output_format = self
            .output_format
            .or(settings.output_format)
            .ok_or_else(|| ConvertError::Config("No output format given".to_string()))?;

        let input_charset = match (self.input_charset, &settings.input_charset) {
            (Some(charset), _) => charset,
            (None, Some(name)) => charset_for_name(name).map_err(ConvertError::Config)?,
            (None, None) => default_charset(),
        };
        let output_charset = match (self.output_charset, &settings.output_charset) {
            (Some(charset), _) => charset,
            (None, Some(name)) => output_charset_for_name(name).map_err(ConvertError::Config)?,
            (None, None) => default_charset(),
        };

        Ok(ConvertOptions {
            input: self.input,
            output: self.output,
            input_format,
            output_format,
            input_charset,
            output_charset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use encoding_rs::{UTF_8, WINDOWS_1252};
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("tagconv").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_options_are_sorted() {
        let longs: Vec<String> = Cli::command()
            .get_arguments()
            .filter_map(|a| a.get_long())
            .map(|l| l.to_lowercase())
            .collect();
        let mut sorted = longs.clone();
        sorted.sort();
        assert_eq!(longs, sorted);
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = parse(&[
            "--input-format",
            "tsv",
            "--output-format",
            "conllx",
            "--input-charset",
            "latin1",
            "in.tsv",
            "out.conll",
        ])
        .unwrap();
        let options = cli.into_options().unwrap();
        assert_eq!(options.input_format, Format::Tsv);
        assert_eq!(options.output_format, Format::Conllx);
        assert_eq!(options.input_charset, WINDOWS_1252);
        assert_eq!(options.output_charset, UTF_8);
        assert_eq!(options.input, PathBuf::from("in.tsv"));
    }

    #[test]
    fn test_bad_values_are_usage_errors() {
        assert!(parse(&["--input-charset", "klingon", "a", "b"]).is_err());
        assert!(parse(&["--output-charset", "utf-16le", "a", "b"]).is_err());
        assert!(parse(&["--input-format", "tiger", "a", "b"]).is_err());
        assert!(parse(&["a"]).is_err());
    }

    #[test]
    fn test_missing_format_is_config_error() {
        let cli = parse(&["--input-format", "tsv", "a", "b"]).unwrap();
        let err = cli.into_options().unwrap_err();
        assert!(matches!(err, ConvertError::Config(_)));
        assert!(err.to_string().contains("output format"));
    }

    #[test]
    fn test_settings_fill_in_and_command_line_wins() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tagconv.toml");
        fs::write(
            &path,
            "input-format = \"rftagger\"\noutput-format = \"tsv\"\noutput-charset = \"latin1\"\n",
        )
        .unwrap();
        let config = path.to_str().unwrap();

        let cli = parse(&["--config", config, "--output-format", "conllx", "a", "b"]).unwrap();
        let options = cli.into_options().unwrap();
        assert_eq!(options.input_format, Format::RfTagger);
        assert_eq!(options.output_format, Format::Conllx);
        assert_eq!(options.output_charset, WINDOWS_1252);
    }

    #[test]
    fn test_bad_charset_in_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tagconv.toml");
        fs::write(&path, "input-charset = \"klingon\"\n").unwrap();
        let config = path.to_str().unwrap();

        let cli = parse(&["--config", config, "--input-format", "tsv", "--output-format", "tsv", "a", "b"])
            .unwrap();
        assert!(matches!(cli.into_options(), Err(ConvertError::Config(_))));
    }
}
