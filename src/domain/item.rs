//! Token record passed from a reader to a writer

use super::{Case, Degree, Gender, Mood, Number, Person, Pos, Tense};
use num_bigint::BigUint;

/// One word of the corpus with its tag in unified form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Position in the sentence, starting at 1
    pub index: BigUint,
    pub form: String,
    pub lemma: Option<String>,
    pub pos: Pos,
    pub case: Option<Case>,
    pub number: Option<Number>,
    pub gender: Option<Gender>,
    pub degree: Option<Degree>,
    pub person: Option<Person>,
    pub tense: Option<Tense>,
    pub mood: Option<Mood>,
}

impl Token {
    /// Create a token without lemma and without features
    pub fn new(index: impl Into<BigUint>, form: impl Into<String>, pos: Pos) -> Self {
        Token {
            index: index.into(),
            form: form.into(),
            lemma: None,
            pos,
            case: None,
            number: None,
            gender: None,
            degree: None,
            person: None,
            tense: None,
            mood: None,
        }
    }

    /// Whether any of the seven feature slots is set
    pub fn has_features(&self) -> bool {
        self.case.is_some()
            || self.number.is_some()
            || self.gender.is_some()
            || self.degree.is_some()
            || self.person.is_some()
            || self.tense.is_some()
            || self.mood.is_some()
    }
}

/// What a reader yields for one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Token(Token),
    /// Sentence boundary
    BlankLine,
    /// Input exhausted
    End,
}
