//! CoNLL-X: ten tab-separated columns with STTS tags
//!
//! Only the first six columns are read: index, form, lemma, coarse tag
//! (unused), STTS tag and a `|`-separated list of `key=value` features.
//! `_` marks an empty lemma or feature column.

use super::vocabulary::{
    case_str, degree_str, gender_str, mood_str, number_str, parse_case, parse_degree,
    parse_gender, parse_mood, parse_number, parse_person, parse_tense, person_str, tense_str,
};
use super::{require_form, split_fields, TagReader, TagWriter};
use crate::domain::{Item, Token};
use crate::error::{ConvertError, Result};
use crate::tagsets::{from_stts, to_stts};
use num_bigint::BigUint;
use std::fmt::Write;

const EMPTY: &str = "_";

/// Reads CoNLL-X lines; the index column is taken over as is
pub struct ConllxReader;

impl TagReader for ConllxReader {
    fn read_line(&mut self, line: &str) -> Result<Item> {
        if line.is_empty() {
            return Ok(Item::BlankLine);
        }

        let fields: Vec<&str> = line.splitn(7, '\t').collect();
        if fields.len() < 6 {
            return Err(ConvertError::read(format!("Too few fields: {}", line)));
        }

        let index: BigUint = fields[0]
            .trim()
            .parse()
            .map_err(|_| ConvertError::read(format!("Invalid token index: {}", fields[0])))?;
        let form = require_form(fields[1], line)?;
        let mut token = Token::new(index, form, from_stts(form, fields[4])?);
        if fields[2] != EMPTY {
            token.lemma = Some(fields[2].to_string());
        }

        if fields[5] != EMPTY {
            for feature in split_fields(fields[5], '|') {
                read_feature(feature, &mut token)?;
            }
        }

        Ok(Item::Token(token))
    }
}

fn read_feature(feature: &str, token: &mut Token) -> Result<()> {
    let Some((key, value)) = feature.split_once('=') else {
        return Err(ConvertError::read(format!(
            "Not a key=value pair: {}",
            feature
        )));
    };

    match key {
        "number" => token.number = Some(parse_number(value)?),
        "gender" => token.gender = Some(parse_gender(value)?),
        "mood" => token.mood = Some(parse_mood(value)?),
        "person" => token.person = Some(parse_person(value)?),
        "degree" => token.degree = Some(parse_degree(value)?),
        "tense" => token.tense = Some(parse_tense(value)?),
        "case" => token.case = Some(parse_case(value)?),
        _ => return Err(ConvertError::read(format!("Unknown feature: {}", key))),
    }
    Ok(())
}

/// Writes all ten columns; unused ones are `_`
pub struct ConllxWriter;

impl TagWriter for ConllxWriter {
    fn write_token(&self, token: &Token, out: &mut String) -> Result<()> {
        let features: Vec<String> = [
            ("gender", token.gender.map(gender_str)),
            ("case", token.case.map(case_str)),
            ("number", token.number.map(number_str)),
            ("degree", token.degree.map(degree_str)),
            ("person", token.person.map(person_str)),
            ("tense", token.tense.map(tense_str)),
            ("mood", token.mood.map(mood_str)),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
        .collect();

        // writing into a String cannot fail
        let _ = write!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            token.index,
            token.form,
            token.lemma.as_deref().unwrap_or(EMPTY),
            EMPTY,
            to_stts(token.pos),
            if !token.has_features() {
                EMPTY.to_string()
            } else {
                features.join("|")
            },
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
        );
        Ok(())
    }
}
