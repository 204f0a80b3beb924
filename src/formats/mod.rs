//! Corpus file formats
//!
//! Every format is a pair of a [`TagReader`], turning one input line into an
//! [`Item`], and a [`TagWriter`], turning a [`Token`] into one output line.
//! [`LineSource`] and [`LineSink`] attach them to charset-aware text streams.

pub mod conllx;
pub mod rftagger;
pub mod tsv;
pub mod vocabulary;

use crate::domain::{Item, Token};
use crate::error::{ConvertError, Result};
use crate::infrastructure::{TextReader, TextWriter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Token and dotted RFTagger tag, tab-separated
    RfTagger,
    /// Ten-column CoNLL-X with STTS tags
    Conllx,
    /// Token, STTS tag and seven feature columns
    Tsv,
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Format::RfTagger => "rftagger",
            Format::Conllx => "conllx",
            Format::Tsv => "tsv",
        }
    }

    pub fn reader(&self) -> Box<dyn TagReader> {
        match self {
            Format::RfTagger => Box::new(rftagger::RfTagReader::new()),
            Format::Conllx => Box::new(conllx::ConllxReader),
            Format::Tsv => Box::new(tsv::TsvReader::new()),
        }
    }

    pub fn writer(&self) -> Box<dyn TagWriter> {
        match self {
            Format::RfTagger => Box::new(rftagger::RfTagWriter),
            Format::Conllx => Box::new(conllx::ConllxWriter),
            Format::Tsv => Box::new(tsv::TsvWriter),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rftagger" => Ok(Format::RfTagger),
            "conllx" => Ok(Format::Conllx),
            "tsv" => Ok(Format::Tsv),
            _ => Err(format!(
                "Invalid format: '{}'. Valid formats are: rftagger, conllx, tsv",
                s
            )),
        }
    }
}

/// Parses single lines of one format
pub trait TagReader {
    /// Turn one line (without terminator) into a token or a sentence boundary
    fn read_line(&mut self, line: &str) -> Result<Item>;
}

/// Formats tokens for one format
pub trait TagWriter {
    /// Append the line for `token` (without terminator) to `out`
    fn write_token(&self, token: &Token, out: &mut String) -> Result<()>;
}

/// Pull side of a conversion
pub trait Source {
    fn next_item(&mut self) -> Result<Item>;
}

/// Push side of a conversion
pub trait Sink {
    fn write_item(&mut self, item: &Item) -> Result<()>;

    /// Flush everything written so far
    fn finish(&mut self) -> Result<()>;
}

/// A [`Source`] reading one item per line of a text stream
pub struct LineSource<R: Read> {
    text: TextReader<R>,
    reader: Box<dyn TagReader>,
}

impl<R: Read> LineSource<R> {
    pub fn new(text: TextReader<R>, reader: Box<dyn TagReader>) -> Self {
        LineSource { text, reader }
    }
}

impl<R: Read> Source for LineSource<R> {
    fn next_item(&mut self) -> Result<Item> {
        let Some(line) = self.text.read_line()? else {
            return Ok(Item::End);
        };
        self.reader.read_line(&line).map_err(|e| match e {
            ConvertError::Read(msg) => {
                ConvertError::Read(format!("line {}: {}", self.text.line_number(), msg))
            }
            other => other,
        })
    }
}

/// A [`Sink`] writing one line per item to a text stream
pub struct LineSink<W: Write> {
    text: TextWriter<W>,
    writer: Box<dyn TagWriter>,
    line: String,
}

impl<W: Write> LineSink<W> {
    pub fn new(text: TextWriter<W>, writer: Box<dyn TagWriter>) -> Self {
        LineSink {
            text,
            writer,
            line: String::new(),
        }
    }

    /// Flush and hand back the underlying stream
    pub fn into_inner(self) -> Result<W> {
        self.text.into_inner()
    }
}

impl<W: Write> Sink for LineSink<W> {
    fn write_item(&mut self, item: &Item) -> Result<()> {
        match item {
            Item::Token(token) => {
                self.line.clear();
                self.writer.write_token(token, &mut self.line)?;
                self.text.write_line(&self.line)
            }
            Item::BlankLine => self.text.write_line(""),
            Item::End => Ok(()),
        }
    }

    fn finish(&mut self) -> Result<()> {
        self.text.flush()
    }
}

/// Split `line` at `separator`, dropping empty fields at the end
///
/// An empty line yields one empty field.
pub(crate) fn split_fields(line: &str, separator: char) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(separator).collect();
    while fields.len() > 1 && fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

pub(crate) fn require_form<'a>(form: &'a str, line: &str) -> Result<&'a str> {
    if form.is_empty() {
        return Err(ConvertError::read(format!("Missing token form: {:?}", line)));
    }
    Ok(form)
}
