//! Grammatical feature dimensions
//!
//! `Underspecified` is an explicit wildcard taken over from the source
//! format. It is distinct from a feature that is not set at all, which is
//! modelled as `None` on the token.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Underspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
    Underspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Underspecified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    Positive,
    Comparative,
    Superlative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Person {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Present,
    Past,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Indicative,
    Subjunctive,
}

impl Case {
    pub const ALL: [Case; 5] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Underspecified,
    ];
}

impl Number {
    pub const ALL: [Number; 3] = [Number::Singular, Number::Plural, Number::Underspecified];
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Masculine,
        Gender::Feminine,
        Gender::Neuter,
        Gender::Underspecified,
    ];
}

impl Degree {
    pub const ALL: [Degree; 3] = [Degree::Positive, Degree::Comparative, Degree::Superlative];
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];
}

impl Tense {
    pub const ALL: [Tense; 2] = [Tense::Present, Tense::Past];
}

impl Mood {
    pub const ALL: [Mood; 2] = [Mood::Indicative, Mood::Subjunctive];
}

/// Names one of the seven feature slots of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Case,
    Number,
    Gender,
    Degree,
    Person,
    Tense,
    Mood,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feature::Case => "case",
            Feature::Number => "number",
            Feature::Gender => "gender",
            Feature::Degree => "degree",
            Feature::Person => "person",
            Feature::Tense => "tense",
            Feature::Mood => "mood",
        };
        f.write_str(name)
    }
}
