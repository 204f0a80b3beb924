//! Stuttgart-Tübingen Tagset
//!
//! STTS is coarser than the unified model in a few places. Reading those
//! tags falls back on the surface form of the token to pick a category;
//! writing collapses the finer categories onto the shared tag.

use crate::domain::Pos;
use crate::error::{ConvertError, Result};
use unicode_script::{Script, UnicodeScript};

/// Map an STTS tag to a part of speech, using `form` where the tag is ambiguous
pub fn from_stts(form: &str, tag: &str) -> Result<Pos> {
    let pos = match tag {
        "ADJA" => Pos::AttributiveAdjective,
        "ADJD" => Pos::PredicativeAdjective,
        "ADV" => Pos::Adverb,
        "APPO" => Pos::Postposition,
        "APPR" => Pos::Preposition,
        "APPRART" | "APPART" => Pos::PrepositionWithArticle,
        "APZR" => Pos::RightCircumposition,
        "ART" => article_by_form(form),
        "CARD" => Pos::CardinalNumber,
        "FM" => Pos::ForeignMaterial,
        "ITJ" => Pos::Interjection,
        "KOKOM" => Pos::ComparativeConjunction,
        "KON" => Pos::CoordinatingConjunction,
        "KOUI" => Pos::InfinitiveConjunction,
        "KOUS" => Pos::SubordinatingConjunction,
        "NE" => Pos::ProperNoun,
        "NN" => Pos::CommonNoun,
        "PAV" | "PROAV" => Pos::DemonstrativePronominalAdverb,
        "PDAT" => Pos::AttributiveDemonstrativePronoun,
        "PDS" => Pos::SubstitutiveDemonstrativePronoun,
        "PIAT" => Pos::AttributiveIndefinitePronoun,
        "PIDAT" => Pos::AttributiveIndefinitePronounWithDeterminer,
        "PIS" => Pos::SubstitutiveIndefinitePronoun,
        "PPER" => Pos::PersonalPronoun,
        "PPOSAT" => Pos::AttributivePossessivePronoun,
        "PPOSS" => Pos::SubstitutivePossessivePronoun,
        "PRELAT" => Pos::AttributiveRelativePronoun,
        "PRELS" => Pos::SubstitutiveRelativePronoun,
        "PRF" => Pos::ReflexivePronoun,
        "PTKA" => Pos::DegreeParticle,
        "PTKANT" => Pos::AnswerParticle,
        "PTKNEG" => Pos::NegationParticle,
        "PTKVZ" => Pos::SeparatedVerbPrefix,
        "PTKZU" => Pos::ZuParticle,
        "PWAT" => Pos::AttributiveInterrogativePronoun,
        "PWAV" => Pos::InterrogativePronominalAdverb,
        "PWS" => Pos::SubstitutiveInterrogativePronoun,
        "TRUNC" => Pos::TruncatedOther,
        "VAFIN" => Pos::FiniteAuxiliaryVerb,
        "VAIMP" => Pos::ImperativeAuxiliaryVerb,
        "VAINF" => Pos::InfinitiveAuxiliaryVerb,
        "VAPP" => Pos::ParticipleAuxiliaryVerb,
        "VMFIN" => Pos::FiniteModalVerb,
        "VMINF" => Pos::InfinitiveModalVerb,
        "VMPP" => Pos::ParticipleModalVerb,
        "VVFIN" => Pos::FiniteMainVerb,
        "VVIMP" => Pos::ImperativeMainVerb,
        "VVINF" => Pos::InfinitiveMainVerb,
        "VVIZU" => Pos::ZuInfinitiveMainVerb,
        "VVPP" => Pos::ParticipleMainVerb,
        "XY" => non_word_by_script(form),
        "$." => sentence_end_by_form(form),
        "$," => Pos::Comma,
        "$(" | "$LRB" => symbol_by_form(form),
        _ => {
            return Err(ConvertError::read(format!("Unknown STTS tag: {}", tag)));
        }
    };
    Ok(pos)
}

/// Map a part of speech to its STTS tag
pub fn to_stts(pos: Pos) -> &'static str {
    match pos {
        Pos::AttributiveAdjective => "ADJA",
        Pos::PredicativeAdjective => "ADJD",
        Pos::Adverb => "ADV",
        Pos::Postposition => "APPO",
        Pos::Preposition => "APPR",
        Pos::PrepositionWithArticle => "APPRART",
        Pos::RightCircumposition => "APZR",
        Pos::DefiniteArticle | Pos::IndefiniteArticle => "ART",
        Pos::CardinalNumber => "CARD",
        Pos::ForeignMaterial => "FM",
        Pos::Interjection => "ITJ",
        Pos::ComparativeConjunction => "KOKOM",
        Pos::CoordinatingConjunction => "KON",
        Pos::InfinitiveConjunction => "KOUI",
        Pos::SubordinatingConjunction => "KOUS",
        Pos::ProperNoun => "NE",
        Pos::CommonNoun => "NN",
        Pos::DemonstrativePronominalAdverb => "PAV",
        Pos::AttributiveDemonstrativePronoun => "PDAT",
        Pos::SubstitutiveDemonstrativePronoun => "PDS",
        Pos::AttributiveIndefinitePronoun => "PIAT",
        Pos::AttributiveIndefinitePronounWithDeterminer => "PIDAT",
        Pos::SubstitutiveIndefinitePronoun => "PIS",
        Pos::PersonalPronoun => "PPER",
        Pos::AttributivePossessivePronoun => "PPOSAT",
        Pos::SubstitutivePossessivePronoun => "PPOSS",
        Pos::AttributiveRelativePronoun => "PRELAT",
        Pos::SubstitutiveRelativePronoun => "PRELS",
        Pos::ReflexivePronoun => "PRF",
        Pos::DegreeParticle => "PTKA",
        Pos::AnswerParticle => "PTKANT",
        Pos::NegationParticle => "PTKNEG",
        Pos::SeparatedVerbPrefix => "PTKVZ",
        Pos::ZuParticle => "PTKZU",
        Pos::AttributiveInterrogativePronoun => "PWAT",
        Pos::InterrogativePronominalAdverb => "PWAV",
        Pos::SubstitutiveInterrogativePronoun => "PWS",
        Pos::TruncatedAdjective
        | Pos::TruncatedNoun
        | Pos::TruncatedVerb
        | Pos::TruncatedOther => "TRUNC",
        Pos::FiniteAuxiliaryVerb => "VAFIN",
        Pos::InfinitiveAuxiliaryVerb => "VAINF",
        Pos::ImperativeAuxiliaryVerb => "VAIMP",
        Pos::ParticipleAuxiliaryVerb => "VAPP",
        Pos::FiniteModalVerb => "VMFIN",
        Pos::InfinitiveModalVerb => "VMINF",
        Pos::ParticipleModalVerb => "VMPP",
        Pos::FiniteMainVerb => "VVFIN",
        Pos::InfinitiveMainVerb => "VVINF",
        Pos::ImperativeMainVerb => "VVIMP",
        Pos::ParticipleMainVerb => "VVPP",
        Pos::ZuInfinitiveMainVerb => "VVIZU",
        Pos::NonWord | Pos::Auth => "XY",
        Pos::SentenceEnd | Pos::Colon | Pos::Ellipsis => "$.",
        Pos::Comma => "$,",
        Pos::Hyphen
        | Pos::OpeningParenthesis
        | Pos::ClosingParenthesis
        | Pos::OpeningQuote
        | Pos::ClosingQuote
        | Pos::Slash
        | Pos::Asterisk
        | Pos::Apostrophe
        | Pos::OtherPunctuation => "$(",
    }
}

/// Articles starting with "d" are taken as definite. Imprecise, kept as is.
fn article_by_form(form: &str) -> Pos {
    if form.to_lowercase().starts_with('d') {
        Pos::DefiniteArticle
    } else {
        Pos::IndefiniteArticle
    }
}

fn non_word_by_script(form: &str) -> Pos {
    if form.chars().all(|c| c.script() == Script::Latin) {
        Pos::Auth
    } else {
        Pos::NonWord
    }
}

fn sentence_end_by_form(form: &str) -> Pos {
    match form {
        "..." | "\u{2026}" => Pos::Ellipsis,
        ":" => Pos::Colon,
        _ => Pos::SentenceEnd,
    }
}

fn symbol_by_form(form: &str) -> Pos {
    match form {
        "``" | "`" => Pos::OpeningQuote,
        "''" => Pos::ClosingQuote,
        // used for both quote directions as well, which cannot be told apart
        "'" => Pos::Apostrophe,
        "(" => Pos::OpeningParenthesis,
        ")" => Pos::ClosingParenthesis,
        "-" => Pos::Hyphen,
        "/" => Pos::Slash,
        "*" => Pos::Asterisk,
        _ => Pos::OtherPunctuation,
    }
}
