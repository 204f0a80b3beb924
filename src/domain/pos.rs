//! Part-of-speech categories of the unified token model
//!
//! The set is the union of the distinctions made by the supported tagsets.
//! Where one tagset is coarser than another (STTS `ART` versus RFTagger
//! `ART.Def` / `ART.Indef`) the finer distinction is kept here.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    // adjectives and adverbs
    AttributiveAdjective,
    PredicativeAdjective,
    Adverb,

    // adpositions
    Postposition,
    Preposition,
    PrepositionWithArticle,
    RightCircumposition,

    // articles
    DefiniteArticle,
    IndefiniteArticle,

    CardinalNumber,

    // conjunctions
    ComparativeConjunction,
    CoordinatingConjunction,
    InfinitiveConjunction,
    SubordinatingConjunction,

    ForeignMaterial,
    Interjection,

    // nouns
    CommonNoun,
    ProperNoun,

    // particles
    AnswerParticle,
    DegreeParticle,
    NegationParticle,
    SeparatedVerbPrefix,
    ZuParticle,

    // pronouns
    AttributiveDemonstrativePronoun,
    SubstitutiveDemonstrativePronoun,
    AttributiveIndefinitePronoun,
    AttributiveIndefinitePronounWithDeterminer,
    SubstitutiveIndefinitePronoun,
    AttributiveInterrogativePronoun,
    SubstitutiveInterrogativePronoun,
    PersonalPronoun,
    AttributivePossessivePronoun,
    SubstitutivePossessivePronoun,
    ReflexivePronoun,
    AttributiveRelativePronoun,
    SubstitutiveRelativePronoun,

    // pronominal adverbs
    DemonstrativePronominalAdverb,
    InterrogativePronominalAdverb,

    // punctuation and symbols
    Colon,
    Comma,
    SentenceEnd,
    Hyphen,
    Slash,
    Ellipsis,
    Apostrophe,
    OpeningQuote,
    ClosingQuote,
    OpeningParenthesis,
    ClosingParenthesis,
    Asterisk,
    /// Latin-script non-word such as an abbreviation or siglum
    Auth,
    /// Non-word in any other script
    NonWord,
    OtherPunctuation,

    // truncated remnants
    TruncatedAdjective,
    TruncatedNoun,
    TruncatedVerb,
    TruncatedOther,

    // verbs
    FiniteAuxiliaryVerb,
    ImperativeAuxiliaryVerb,
    InfinitiveAuxiliaryVerb,
    ParticipleAuxiliaryVerb,
    FiniteModalVerb,
    InfinitiveModalVerb,
    ParticipleModalVerb,
    FiniteMainVerb,
    ImperativeMainVerb,
    InfinitiveMainVerb,
    ZuInfinitiveMainVerb,
    ParticipleMainVerb,
}

impl Pos {
    /// Every category, in declaration order
    pub const ALL: [Pos; 69] = [
        Pos::AttributiveAdjective,
        Pos::PredicativeAdjective,
        Pos::Adverb,
        Pos::Postposition,
        Pos::Preposition,
        Pos::PrepositionWithArticle,
        Pos::RightCircumposition,
        Pos::DefiniteArticle,
        Pos::IndefiniteArticle,
        Pos::CardinalNumber,
        Pos::ComparativeConjunction,
        Pos::CoordinatingConjunction,
        Pos::InfinitiveConjunction,
        Pos::SubordinatingConjunction,
        Pos::ForeignMaterial,
        Pos::Interjection,
        Pos::CommonNoun,
        Pos::ProperNoun,
        Pos::AnswerParticle,
        Pos::DegreeParticle,
        Pos::NegationParticle,
        Pos::SeparatedVerbPrefix,
        Pos::ZuParticle,
        Pos::AttributiveDemonstrativePronoun,
        Pos::SubstitutiveDemonstrativePronoun,
        Pos::AttributiveIndefinitePronoun,
        Pos::AttributiveIndefinitePronounWithDeterminer,
        Pos::SubstitutiveIndefinitePronoun,
        Pos::AttributiveInterrogativePronoun,
        Pos::SubstitutiveInterrogativePronoun,
        Pos::PersonalPronoun,
        Pos::AttributivePossessivePronoun,
        Pos::SubstitutivePossessivePronoun,
        Pos::ReflexivePronoun,
        Pos::AttributiveRelativePronoun,
        Pos::SubstitutiveRelativePronoun,
        Pos::DemonstrativePronominalAdverb,
        Pos::InterrogativePronominalAdverb,
        Pos::Colon,
        Pos::Comma,
        Pos::SentenceEnd,
        Pos::Hyphen,
        Pos::Slash,
        Pos::Ellipsis,
        Pos::Apostrophe,
        Pos::OpeningQuote,
        Pos::ClosingQuote,
        Pos::OpeningParenthesis,
        Pos::ClosingParenthesis,
        Pos::Asterisk,
        Pos::Auth,
        Pos::NonWord,
        Pos::OtherPunctuation,
        Pos::TruncatedAdjective,
        Pos::TruncatedNoun,
        Pos::TruncatedVerb,
        Pos::TruncatedOther,
        Pos::FiniteAuxiliaryVerb,
        Pos::ImperativeAuxiliaryVerb,
        Pos::InfinitiveAuxiliaryVerb,
        Pos::ParticipleAuxiliaryVerb,
        Pos::FiniteModalVerb,
        Pos::InfinitiveModalVerb,
        Pos::ParticipleModalVerb,
        Pos::FiniteMainVerb,
        Pos::ImperativeMainVerb,
        Pos::InfinitiveMainVerb,
        Pos::ZuInfinitiveMainVerb,
        Pos::ParticipleMainVerb,
    ];
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
