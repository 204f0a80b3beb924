//! Lower-case feature values shared by the CoNLL-X and TSV formats

use crate::domain::{Case, Degree, Gender, Mood, Number, Person, Tense};
use crate::error::{ConvertError, Result};

pub fn parse_gender(value: &str) -> Result<Gender> {
    match value {
        "masc" => Ok(Gender::Masculine),
        "fem" => Ok(Gender::Feminine),
        "neut" => Ok(Gender::Neuter),
        "*" => Ok(Gender::Underspecified),
        _ => Err(ConvertError::read(format!("Unknown gender: {}", value))),
    }
}

pub fn parse_case(value: &str) -> Result<Case> {
    match value {
        "nom" => Ok(Case::Nominative),
        "gen" => Ok(Case::Genitive),
        "dat" => Ok(Case::Dative),
        "acc" => Ok(Case::Accusative),
        "*" => Ok(Case::Underspecified),
        _ => Err(ConvertError::read(format!("Unknown case: {}", value))),
    }
}

pub fn parse_number(value: &str) -> Result<Number> {
    match value {
        "sg" => Ok(Number::Singular),
        "pl" => Ok(Number::Plural),
        "*" => Ok(Number::Underspecified),
        _ => Err(ConvertError::read(format!("Unknown number: {}", value))),
    }
}

pub fn parse_degree(value: &str) -> Result<Degree> {
    match value {
        "pos" => Ok(Degree::Positive),
        "comp" => Ok(Degree::Comparative),
        "sup" => Ok(Degree::Superlative),
        _ => Err(ConvertError::read(format!("Unknown degree: {}", value))),
    }
}

pub fn parse_person(value: &str) -> Result<Person> {
    match value {
        "1" => Ok(Person::First),
        "2" => Ok(Person::Second),
        "3" => Ok(Person::Third),
        _ => Err(ConvertError::read(format!("Unsupported person: {}", value))),
    }
}

pub fn parse_tense(value: &str) -> Result<Tense> {
    match value {
        "pres" => Ok(Tense::Present),
        "past" => Ok(Tense::Past),
        _ => Err(ConvertError::read(format!("Unknown tense: {}", value))),
    }
}

pub fn parse_mood(value: &str) -> Result<Mood> {
    match value {
        "ind" => Ok(Mood::Indicative),
        "subj" => Ok(Mood::Subjunctive),
        _ => Err(ConvertError::read(format!("Unknown mood: {}", value))),
    }
}

pub fn gender_str(gender: Gender) -> &'static str {
    match gender {
        Gender::Masculine => "masc",
        Gender::Feminine => "fem",
        Gender::Neuter => "neut",
        Gender::Underspecified => "*",
    }
}

pub fn case_str(case: Case) -> &'static str {
    match case {
        Case::Nominative => "nom",
        Case::Genitive => "gen",
        Case::Dative => "dat",
        Case::Accusative => "acc",
        Case::Underspecified => "*",
    }
}

pub fn number_str(number: Number) -> &'static str {
    match number {
        Number::Singular => "sg",
        Number::Plural => "pl",
        Number::Underspecified => "*",
    }
}

pub fn degree_str(degree: Degree) -> &'static str {
    match degree {
        Degree::Positive => "pos",
        Degree::Comparative => "comp",
        Degree::Superlative => "sup",
    }
}

pub fn person_str(person: Person) -> &'static str {
    match person {
        Person::First => "1",
        Person::Second => "2",
        Person::Third => "3",
    }
}

pub fn tense_str(tense: Tense) -> &'static str {
    match tense {
        Tense::Present => "pres",
        Tense::Past => "past",
    }
}

pub fn mood_str(mood: Mood) -> &'static str {
    match mood {
        Mood::Indicative => "ind",
        Mood::Subjunctive => "subj",
    }
}
