//! Line-oriented text files in a configurable charset

use crate::error::{ConvertError, Result};
use encoding_rs::{Decoder, DecoderResult, Encoder, EncoderResult, Encoding, UTF_8};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// Look up a charset by name
///
/// Accepts the WHATWG labels understood by `encoding_rs` ("utf-8",
/// "latin1", "iso-8859-15", "windows-1252", ...), case-insensitively.
pub fn charset_for_name(name: &str) -> std::result::Result<&'static Encoding, String> {
    Encoding::for_label(name.trim().as_bytes())
        .ok_or_else(|| format!("{} is not a supported charset", name))
}

/// Like [`charset_for_name`], but only for charsets that can also be written
pub fn output_charset_for_name(name: &str) -> std::result::Result<&'static Encoding, String> {
    let charset = charset_for_name(name)?;
    if charset.output_encoding() != charset {
        return Err(format!("{} is not supported as output charset", name));
    }
    Ok(charset)
}

pub fn default_charset() -> &'static Encoding {
    UTF_8
}

/// Reads decoded lines from a byte stream
pub struct TextReader<R: Read> {
    inner: BufReader<R>,
    decoder: Decoder,
    charset: &'static Encoding,
    pending: String,
    eof: bool,
    malformed: bool,
    line_number: u64,
}

impl<R: Read> TextReader<R> {
    pub fn new(inner: R, charset: &'static Encoding) -> Self {
        TextReader {
            inner: BufReader::new(inner),
            decoder: charset.new_decoder_with_bom_removal(),
            charset,
            pending: String::new(),
            eof: false,
            malformed: false,
            line_number: 0,
        }
    }

    /// Number of the line returned last, starting at 1
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Next line without its terminator, or `None` at end of input
    pub fn read_line(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(newline) = self.pending.find('\n') {
                let mut line: String = self.pending.drain(..=newline).collect();
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
                self.line_number += 1;
                return Ok(Some(line));
            }

            // lines decoded before the bad bytes have been handed out
            if self.malformed {
                return Err(ConvertError::read(format!(
                    "Line {} is not valid {}",
                    self.line_number + 1,
                    self.charset.name()
                )));
            }

            if self.eof {
                if self.pending.is_empty() {
                    return Ok(None);
                }
                let mut line = std::mem::take(&mut self.pending);
                if line.ends_with('\r') {
                    line.pop();
                }
                self.line_number += 1;
                return Ok(Some(line));
            }

            self.fill_pending()?;
        }
    }

    /// Decode the next chunk of raw input into `pending`
    fn fill_pending(&mut self) -> Result<()> {
        let chunk = self.inner.fill_buf()?;
        let last = chunk.is_empty();
        let mut consumed = 0;

        loop {
            let src = &chunk[consumed..];
            let needed = self
                .decoder
                .max_utf8_buffer_length_without_replacement(src.len())
                .unwrap_or(src.len() * 3 + 16);
            self.pending.reserve(needed);

            let (result, read) =
                self.decoder
                    .decode_to_string_without_replacement(src, &mut self.pending, last);
            consumed += read;

            match result {
                DecoderResult::InputEmpty => break,
                DecoderResult::OutputFull => continue,
                DecoderResult::Malformed(_, _) => {
                    self.malformed = true;
                    break;
                }
            }
        }

        self.inner.consume(consumed);
        if last {
            self.eof = true;
        }
        Ok(())
    }
}

/// Writes encoded lines to a byte stream
pub struct TextWriter<W: Write> {
    inner: BufWriter<W>,
    encoder: Encoder,
    charset: &'static Encoding,
    buffer: Vec<u8>,
}

impl<W: Write> TextWriter<W> {
    pub fn new(inner: W, charset: &'static Encoding) -> Self {
        TextWriter {
            inner: BufWriter::new(inner),
            encoder: charset.new_encoder(),
            charset,
            buffer: Vec::new(),
        }
    }

    /// Write `line` followed by `\n`
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.encode(line)?;
        self.encode("\n")?;
        self.inner.write_all(&self.buffer)?;
        self.buffer.clear();
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying stream
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| ConvertError::Io(e.into_error()))
    }

    fn encode(&mut self, mut src: &str) -> Result<()> {
        loop {
            let needed = self
                .encoder
                .max_buffer_length_from_utf8_without_replacement(src.len())
                .unwrap_or(src.len() * 4 + 16);
            self.buffer.reserve(needed);

            let (result, read) =
                self.encoder
                    .encode_from_utf8_to_vec_without_replacement(src, &mut self.buffer, false);
            src = &src[read..];

            match result {
                EncoderResult::InputEmpty => return Ok(()),
                EncoderResult::OutputFull => continue,
                EncoderResult::Unmappable(c) => {
                    return Err(ConvertError::write(format!(
                        "Character {:?} cannot be represented in {}",
                        c,
                        self.charset.name()
                    )));
                }
            }
        }
    }
}
