//! Tabular format: token, STTS tag and seven feature columns
//!
//! Column order is form, tag, gender, case, number, degree, person, tense,
//! mood. Trailing columns may be left out and empty columns mean the feature
//! is not set. Feature values are read case-insensitively and written in
//! lower case.

use super::vocabulary::{
    case_str, degree_str, gender_str, mood_str, number_str, parse_case, parse_degree,
    parse_gender, parse_mood, parse_number, parse_person, parse_tense, person_str, tense_str,
};
use super::{require_form, split_fields, TagReader, TagWriter};
use crate::domain::{Item, Token};
use crate::error::{ConvertError, Result};
use crate::tagsets::{from_stts, to_stts};
use num_bigint::BigUint;

/// Reads TSV lines, numbering tokens within each sentence
pub struct TsvReader {
    index: BigUint,
}

impl TsvReader {
    pub fn new() -> Self {
        TsvReader {
            index: BigUint::default(),
        }
    }
}

impl Default for TsvReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TagReader for TsvReader {
    fn read_line(&mut self, line: &str) -> Result<Item> {
        let fields = split_fields(line, '\t');
        if fields.iter().all(|f| f.is_empty()) {
            self.index = BigUint::default();
            return Ok(Item::BlankLine);
        }

        let form = require_form(fields[0], line)?;
        let tag = match fields.get(1) {
            Some(tag) if !tag.is_empty() => *tag,
            _ => return Err(ConvertError::read(format!("{} has no tag", form))),
        };
        let pos = from_stts(form, tag)?;

        self.index += 1u32;
        let mut token = Token::new(self.index.clone(), form, pos);

        // columns past the ninth are ignored
        let column = |i: usize| {
            fields
                .get(i)
                .filter(|value| !value.is_empty())
                .map(|value| value.to_lowercase())
        };
        if let Some(value) = column(2) {
            token.gender = Some(parse_gender(&value)?);
        }
        if let Some(value) = column(3) {
            token.case = Some(parse_case(&value)?);
        }
        if let Some(value) = column(4) {
            token.number = Some(parse_number(&value)?);
        }
        if let Some(value) = column(5) {
            token.degree = Some(parse_degree(&value)?);
        }
        if let Some(value) = column(6) {
            token.person = Some(parse_person(&value)?);
        }
        if let Some(value) = column(7) {
            token.tense = Some(parse_tense(&value)?);
        }
        if let Some(value) = column(8) {
            token.mood = Some(parse_mood(&value)?);
        }

        Ok(Item::Token(token))
    }
}

/// Writes all nine columns, leaving unset features empty
pub struct TsvWriter;

impl TagWriter for TsvWriter {
    fn write_token(&self, token: &Token, out: &mut String) -> Result<()> {
        let columns = [
            token.gender.map(gender_str),
            token.case.map(case_str),
            token.number.map(number_str),
            token.degree.map(degree_str),
            token.person.map(person_str),
            token.tense.map(tense_str),
            token.mood.map(mood_str),
        ];

        out.push_str(&token.form);
        out.push('\t');
        out.push_str(to_stts(token.pos));
        for column in columns {
            out.push('\t');
            out.push_str(column.unwrap_or(""));
        }
        Ok(())
    }
}
