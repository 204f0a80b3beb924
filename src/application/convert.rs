//! Conversion use case
//!
//! Streams items from a source to a sink, one token at a time.

use crate::domain::Item;
use crate::error::Result;
use crate::formats::{Format, LineSink, LineSource, Sink, Source};
use crate::infrastructure::{TextReader, TextWriter};
use encoding_rs::Encoding;
use std::fs::File;
use std::path::PathBuf;

/// What a finished conversion has seen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub tokens: u64,
    /// Sentence boundaries passed through
    pub sentences: u64,
}

/// Pull items from `source` until it ends, pushing each into `sink`
///
/// Any error aborts the run; the sink is flushed only on success.
pub fn convert(source: &mut dyn Source, sink: &mut dyn Sink) -> Result<ConversionStats> {
    let mut stats = ConversionStats::default();
    loop {
        let item = source.next_item()?;
        match &item {
            Item::Token(token) => {
                log::trace!("Token {} {}", token.index, token.form);
                stats.tokens += 1;
            }
            Item::BlankLine => {
                stats.sentences += 1;
                log::debug!("Sentence boundary after {} tokens", stats.tokens);
            }
            Item::End => break,
        }
        sink.write_item(&item)?;
    }
    sink.write_item(&Item::End)?;
    sink.finish()?;
    Ok(stats)
}

/// Options for one file conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_format: Format,
    pub output_format: Format,
    pub input_charset: &'static Encoding,
    pub output_charset: &'static Encoding,
}

/// Service converting one file into another
pub struct ConvertService;

impl ConvertService {
    /// Execute the conversion
    ///
    /// The input is opened before the output is created, so a missing input
    /// file leaves the output path untouched.
    pub fn execute(&self, options: &ConvertOptions) -> Result<ConversionStats> {
        log::info!(
            "Converting {} ({}, {}) to {} ({}, {})",
            options.input.display(),
            options.input_format,
            options.input_charset.name(),
            options.output.display(),
            options.output_format,
            options.output_charset.name()
        );

        let input = File::open(&options.input)?;
        let output = File::create(&options.output)?;

        let mut source = LineSource::new(
            TextReader::new(input, options.input_charset),
            options.input_format.reader(),
        );
        let mut sink = LineSink::new(
            TextWriter::new(output, options.output_charset),
            options.output_format.writer(),
        );

        let stats = convert(&mut source, &mut sink)?;
        log::info!(
            "Converted {} tokens in {} sentences",
            stats.tokens,
            stats.sentences
        );
        Ok(stats)
    }
}
