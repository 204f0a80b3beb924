//! RFTagger output: token and dotted hierarchical tag
//!
//! The first segment of a tag names the word class and fixes how many
//! segments follow, e.g. `N.Reg.Acc.Sg.Fem` or `VFIN.Full.3.Sg.Pres.Ind`.
//! Unlike the unified model, the features a word class carries are
//! mandatory in this format.

use super::{require_form, split_fields, TagReader, TagWriter};
use crate::domain::{Case, Degree, Feature, Gender, Item, Mood, Number, Person, Pos, Tense, Token};
use crate::error::{ConvertError, Result};
use num_bigint::BigUint;

/// Reads RFTagger lines, numbering tokens within each sentence
pub struct RfTagReader {
    index: BigUint,
}

impl RfTagReader {
    pub fn new() -> Self {
        RfTagReader {
            index: BigUint::default(),
        }
    }
}

impl Default for RfTagReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TagReader for RfTagReader {
    fn read_line(&mut self, line: &str) -> Result<Item> {
        if line.is_empty() {
            self.index = BigUint::default();
            return Ok(Item::BlankLine);
        }

        let Some((form, rest)) = line.split_once('\t') else {
            return Err(ConvertError::read(format!("{} has no tag", line)));
        };
        let form = require_form(form, line)?;
        // anything after a second tab (e.g. a lemma) is ignored
        let tag = rest.split('\t').next().unwrap_or_default();
        if tag.is_empty() {
            return Err(ConvertError::read(format!("{} has no tag", form)));
        }

        let (pos, features) = analyze(tag)?;
        self.index += 1u32;
        Ok(Item::Token(Token {
            index: self.index.clone(),
            form: form.to_string(),
            lemma: None,
            pos,
            case: features.case,
            number: features.number,
            gender: features.gender,
            degree: features.degree,
            person: features.person,
            tense: features.tense,
            mood: features.mood,
        }))
    }
}

/// Feature segments found in one tag
#[derive(Debug, Default)]
struct Features {
    case: Option<Case>,
    number: Option<Number>,
    gender: Option<Gender>,
    degree: Option<Degree>,
    person: Option<Person>,
    tense: Option<Tense>,
    mood: Option<Mood>,
}

/// Part of speech and features encoded in `tag`
fn analyze(tag: &str) -> Result<(Pos, Features)> {
    let parts = split_fields(tag, '.');
    let structure = |counts: &[usize]| -> Result<()> {
        if counts.contains(&parts.len()) {
            Ok(())
        } else {
            Err(ConvertError::read(format!(
                "Structure error in {} tag: {}",
                parts[0], tag
            )))
        }
    };

    let mut features = Features::default();
    let pos = match parts[0] {
        "ADJA" => {
            structure(&[5])?;
            features.degree = Some(parse_degree(parts[1])?);
            read_kng(&parts[2..], &mut features)?;
            Pos::AttributiveAdjective
        }
        "ADJD" => {
            structure(&[2])?;
            features.degree = Some(parse_degree(parts[1])?);
            Pos::PredicativeAdjective
        }
        "ADV" => {
            structure(&[1])?;
            Pos::Adverb
        }
        "APPO" => {
            structure(&[1, 2])?;
            Pos::Postposition
        }
        "APPR" => {
            structure(&[1, 2])?;
            Pos::Preposition
        }
        "APPRART" => {
            structure(&[4])?;
            read_kng(&parts[1..], &mut features)?;
            Pos::PrepositionWithArticle
        }
        "APZR" => {
            structure(&[1])?;
            Pos::RightCircumposition
        }
        "ART" => {
            structure(&[5])?;
            read_kng(&parts[2..], &mut features)?;
            match parts[1] {
                "Def" => Pos::DefiniteArticle,
                "Indef" => Pos::IndefiniteArticle,
                other => return Err(unknown("definiteness", other)),
            }
        }
        "CARD" => {
            structure(&[1])?;
            Pos::CardinalNumber
        }
        "CONJ" => {
            structure(&[2])?;
            match parts[1] {
                "Comp" => Pos::ComparativeConjunction,
                "Coord" => Pos::CoordinatingConjunction,
                "SubFin" => Pos::SubordinatingConjunction,
                "SubInf" => Pos::InfinitiveConjunction,
                other => return Err(unknown("conjunction type", other)),
            }
        }
        "FM" => {
            structure(&[1])?;
            Pos::ForeignMaterial
        }
        "ITJ" => {
            structure(&[1])?;
            Pos::Interjection
        }
        "N" => {
            structure(&[5])?;
            read_kng(&parts[2..], &mut features)?;
            match parts[1] {
                "Reg" => Pos::CommonNoun,
                "Name" => Pos::ProperNoun,
                other => return Err(unknown("noun type", other)),
            }
        }
        "PART" => {
            structure(&[2])?;
            match parts[1] {
                "Ans" => Pos::AnswerParticle,
                "Deg" => Pos::DegreeParticle,
                "Neg" => Pos::NegationParticle,
                "Zu" => Pos::ZuParticle,
                "Verb" => Pos::SeparatedVerbPrefix,
                other => return Err(unknown("particle type", other)),
            }
        }
        "PRO" => {
            structure(&[7])?;
            let pos = pronoun(parts[1], parts[2])?;
            features.person = match parts[3] {
                "-" => None,
                value => Some(parse_person(value)?),
            };
            features.case = Some(parse_case(parts[4])?);
            features.number = Some(parse_number(parts[5])?);
            features.gender = match parts[6] {
                "-" => None,
                value => Some(parse_gender(value)?),
            };
            pos
        }
        "PROADV" => {
            structure(&[2])?;
            match parts[1] {
                "Dem" => Pos::DemonstrativePronominalAdverb,
                "Inter" => Pos::InterrogativePronominalAdverb,
                other => return Err(unknown("pronominal adverb type", other)),
            }
        }
        "SYM" => {
            structure(&[3])?;
            symbol(parts[1], parts[2])?
        }
        "TRUNC" => {
            structure(&[2])?;
            match parts[1] {
                "Adj" => Pos::TruncatedAdjective,
                "Noun" => Pos::TruncatedNoun,
                "Verb" => Pos::TruncatedVerb,
                "-" => Pos::TruncatedOther,
                other => return Err(unknown("truncation type", other)),
            }
        }
        "VFIN" => {
            structure(&[6])?;
            let pos = verb(
                parts[1],
                [
                    Pos::FiniteMainVerb,
                    Pos::FiniteAuxiliaryVerb,
                    Pos::FiniteModalVerb,
                ],
            )?;
            features.person = Some(parse_person(parts[2])?);
            features.number = Some(parse_number(parts[3])?);
            features.tense = Some(parse_tense(parts[4])?);
            features.mood = Some(parse_mood(parts[5])?);
            pos
        }
        "VIMP" => {
            // VIMP.Full.2.Sg with an optional trailing mood segment
            structure(&[4, 5])?;
            let pos = match parts[1] {
                "Full" => Pos::ImperativeMainVerb,
                "Aux" => Pos::ImperativeAuxiliaryVerb,
                "Mod" => {
                    return Err(ConvertError::read("Imperative of modal verbs is not supported"))
                }
                other => return Err(unknown("verb type", other)),
            };
            features.person = Some(parse_person(parts[2])?);
            features.number = Some(parse_number(parts[3])?);
            pos
        }
        "VINF" => {
            structure(&[3])?;
            match (parts[2], parts[1]) {
                ("-", verb_type) => verb(
                    verb_type,
                    [
                        Pos::InfinitiveMainVerb,
                        Pos::InfinitiveAuxiliaryVerb,
                        Pos::InfinitiveModalVerb,
                    ],
                )?,
                ("zu", "Full") => Pos::ZuInfinitiveMainVerb,
                ("zu", "Aux" | "Mod") => {
                    return Err(ConvertError::read(
                        "zu-infinitive is not supported for auxiliary and modal verbs",
                    ))
                }
                ("zu", other) => return Err(unknown("verb type", other)),
                (other, _) => return Err(unknown("infinitive type", other)),
            }
        }
        "VPP" => {
            structure(&[2, 3])?;
            verb(
                parts[1],
                [
                    Pos::ParticipleMainVerb,
                    Pos::ParticipleAuxiliaryVerb,
                    Pos::ParticipleModalVerb,
                ],
            )?
        }
        other => return Err(unknown("word class", other)),
    };
    Ok((pos, features))
}

fn unknown(slot: &str, value: &str) -> ConvertError {
    ConvertError::read(format!("Unknown {}: {}", slot, value))
}

/// Case, number and gender, all required
fn read_kng(parts: &[&str], features: &mut Features) -> Result<()> {
    features.case = Some(parse_case(parts[0])?);
    features.number = Some(parse_number(parts[1])?);
    features.gender = Some(parse_gender(parts[2])?);
    Ok(())
}

fn pronoun(kind: &str, usage: &str) -> Result<Pos> {
    let pair = match kind {
        "Pers" => return substitutive_only("Personal", usage, Pos::PersonalPronoun),
        "Refl" => return substitutive_only("Reflexive", usage, Pos::ReflexivePronoun),
        "Poss" => (
            Pos::AttributivePossessivePronoun,
            Pos::SubstitutivePossessivePronoun,
        ),
        "Dem" => (
            Pos::AttributiveDemonstrativePronoun,
            Pos::SubstitutiveDemonstrativePronoun,
        ),
        "Indef" => (
            Pos::AttributiveIndefinitePronoun,
            Pos::SubstitutiveIndefinitePronoun,
        ),
        "Inter" => (
            Pos::AttributiveInterrogativePronoun,
            Pos::SubstitutiveInterrogativePronoun,
        ),
        "Rel" => (
            Pos::AttributiveRelativePronoun,
            Pos::SubstitutiveRelativePronoun,
        ),
        other => return Err(unknown("pronoun type", other)),
    };
    match usage {
        "Attr" => Ok(pair.0),
        "Subst" => Ok(pair.1),
        other => Err(unknown("pronoun usage", other)),
    }
}

fn substitutive_only(kind: &str, usage: &str, pos: Pos) -> Result<Pos> {
    if usage != "Subst" {
        return Err(ConvertError::read(format!(
            "{} pronoun can only be used substitutively, got {}",
            kind, usage
        )));
    }
    Ok(pos)
}

fn symbol(kind: &str, subtype: &str) -> Result<Pos> {
    let left_right = |left: Pos, right: Pos| match subtype {
        "Left" => Ok(left),
        "Right" => Ok(right),
        other => Err(ConvertError::read(format!(
            "Expected Left or Right, got {}",
            other
        ))),
    };

    match kind {
        "Pun" => match subtype {
            "Colon" => Ok(Pos::Colon),
            "Comma" => Ok(Pos::Comma),
            "Sent" => Ok(Pos::SentenceEnd),
            "Hyph" => Ok(Pos::Hyphen),
            "Slash" => Ok(Pos::Slash),
            "Cont" => Ok(Pos::Ellipsis),
            "Apos" => Ok(Pos::Apostrophe),
            "Other" => Ok(Pos::OtherPunctuation),
            other => Err(unknown("punctuation type", other)),
        },
        "Quot" => left_right(Pos::OpeningQuote, Pos::ClosingQuote),
        "Paren" => left_right(Pos::OpeningParenthesis, Pos::ClosingParenthesis),
        "Other" => match subtype {
            "Aster" => Ok(Pos::Asterisk),
            "Auth" => Ok(Pos::Auth),
            "XY" => Ok(Pos::NonWord),
            other => Err(unknown("symbol type", other)),
        },
        other => Err(unknown("symbol class", other)),
    }
}

/// Pick the main, auxiliary or modal variant
fn verb(kind: &str, [main, auxiliary, modal]: [Pos; 3]) -> Result<Pos> {
    match kind {
        "Full" => Ok(main),
        "Aux" => Ok(auxiliary),
        "Mod" => Ok(modal),
        other => Err(unknown("verb type", other)),
    }
}

fn parse_degree(value: &str) -> Result<Degree> {
    match value {
        "Pos" => Ok(Degree::Positive),
        "Comp" => Ok(Degree::Comparative),
        "Sup" => Ok(Degree::Superlative),
        other => Err(unknown("degree", other)),
    }
}

fn parse_case(value: &str) -> Result<Case> {
    match value {
        "Nom" => Ok(Case::Nominative),
        "Gen" => Ok(Case::Genitive),
        "Dat" => Ok(Case::Dative),
        "Acc" => Ok(Case::Accusative),
        "*" => Ok(Case::Underspecified),
        other => Err(unknown("case", other)),
    }
}

fn parse_number(value: &str) -> Result<Number> {
    match value {
        "Sg" => Ok(Number::Singular),
        "Pl" => Ok(Number::Plural),
        "*" => Ok(Number::Underspecified),
        other => Err(unknown("number", other)),
    }
}

fn parse_gender(value: &str) -> Result<Gender> {
    match value {
        "Masc" => Ok(Gender::Masculine),
        "Fem" => Ok(Gender::Feminine),
        "Neut" => Ok(Gender::Neuter),
        "*" => Ok(Gender::Underspecified),
        other => Err(unknown("gender", other)),
    }
}

fn parse_person(value: &str) -> Result<Person> {
    match value {
        "1" => Ok(Person::First),
        "2" => Ok(Person::Second),
        "3" => Ok(Person::Third),
        other => Err(unknown("person", other)),
    }
}

fn parse_tense(value: &str) -> Result<Tense> {
    match value {
        "Pres" => Ok(Tense::Present),
        "Past" => Ok(Tense::Past),
        other => Err(unknown("tense", other)),
    }
}

fn parse_mood(value: &str) -> Result<Mood> {
    match value {
        "Ind" => Ok(Mood::Indicative),
        "Subj" => Ok(Mood::Subjunctive),
        other => Err(unknown("mood", other)),
    }
}

/// Writes `form<TAB>tag` lines
pub struct RfTagWriter;

impl TagWriter for RfTagWriter {
    fn write_token(&self, token: &Token, out: &mut String) -> Result<()> {
        out.push_str(&token.form);
        out.push('\t');
        let mut tag = TagBuilder { token, out };
        tag.write()
    }
}

/// Appends the tag of one token segment by segment
struct TagBuilder<'a> {
    token: &'a Token,
    out: &'a mut String,
}

impl TagBuilder<'_> {
    fn write(&mut self) -> Result<()> {
        match self.token.pos {
            Pos::AttributiveAdjective => {
                self.literal("ADJA");
                self.degree()?;
                self.kng()
            }
            Pos::PredicativeAdjective => {
                self.literal("ADJD");
                self.degree()
            }
            Pos::Adverb => self.bare("ADV"),
            Pos::Postposition => self.bare("APPO"),
            Pos::Preposition => self.bare("APPR"),
            Pos::PrepositionWithArticle => {
                self.literal("APPRART");
                self.kng()
            }
            Pos::RightCircumposition => self.bare("APZR"),
            Pos::DefiniteArticle => {
                self.literal("ART.Def");
                self.kng()
            }
            Pos::IndefiniteArticle => {
                self.literal("ART.Indef");
                self.kng()
            }
            Pos::CardinalNumber => self.bare("CARD"),
            Pos::ComparativeConjunction => self.bare("CONJ.Comp"),
            Pos::CoordinatingConjunction => self.bare("CONJ.Coord"),
            Pos::SubordinatingConjunction => self.bare("CONJ.SubFin"),
            Pos::InfinitiveConjunction => self.bare("CONJ.SubInf"),
            Pos::ForeignMaterial => self.bare("FM"),
            Pos::Interjection => self.bare("ITJ"),
            Pos::CommonNoun => {
                self.literal("N.Reg");
                self.kng()
            }
            Pos::ProperNoun => {
                self.literal("N.Name");
                self.kng()
            }
            Pos::AnswerParticle => self.bare("PART.Ans"),
            Pos::DegreeParticle => self.bare("PART.Deg"),
            Pos::NegationParticle => self.bare("PART.Neg"),
            Pos::SeparatedVerbPrefix => self.bare("PART.Verb"),
            Pos::ZuParticle => self.bare("PART.Zu"),
            Pos::AttributiveDemonstrativePronoun => self.pronoun("PRO.Dem.Attr"),
            Pos::SubstitutiveDemonstrativePronoun => self.pronoun("PRO.Dem.Subst"),
            // PIDAT has no tag of its own
            Pos::AttributiveIndefinitePronoun | Pos::AttributiveIndefinitePronounWithDeterminer => {
                self.pronoun("PRO.Indef.Attr")
            }
            Pos::SubstitutiveIndefinitePronoun => self.pronoun("PRO.Indef.Subst"),
            Pos::AttributiveInterrogativePronoun => self.pronoun("PRO.Inter.Attr"),
            Pos::SubstitutiveInterrogativePronoun => self.pronoun("PRO.Inter.Subst"),
            Pos::PersonalPronoun => self.pronoun("PRO.Pers.Subst"),
            Pos::AttributivePossessivePronoun => self.pronoun("PRO.Poss.Attr"),
            Pos::SubstitutivePossessivePronoun => self.pronoun("PRO.Poss.Subst"),
            Pos::ReflexivePronoun => self.pronoun("PRO.Refl.Subst"),
            Pos::AttributiveRelativePronoun => self.pronoun("PRO.Rel.Attr"),
            Pos::SubstitutiveRelativePronoun => self.pronoun("PRO.Rel.Subst"),
            Pos::DemonstrativePronominalAdverb => self.bare("PROADV.Dem"),
            Pos::InterrogativePronominalAdverb => self.bare("PROADV.Inter"),
            Pos::Colon => self.bare("SYM.Pun.Colon"),
            Pos::Comma => self.bare("SYM.Pun.Comma"),
            Pos::SentenceEnd => self.bare("SYM.Pun.Sent"),
            Pos::Hyphen => self.bare("SYM.Pun.Hyph"),
            Pos::Slash => self.bare("SYM.Pun.Slash"),
            Pos::Ellipsis => self.bare("SYM.Pun.Cont"),
            Pos::Apostrophe => self.bare("SYM.Pun.Apos"),
            Pos::OtherPunctuation => self.bare("SYM.Pun.Other"),
            Pos::OpeningQuote => self.bare("SYM.Quot.Left"),
            Pos::ClosingQuote => self.bare("SYM.Quot.Right"),
            Pos::OpeningParenthesis => self.bare("SYM.Paren.Left"),
            Pos::ClosingParenthesis => self.bare("SYM.Paren.Right"),
            Pos::Asterisk => self.bare("SYM.Other.Aster"),
            Pos::Auth => self.bare("SYM.Other.Auth"),
            Pos::NonWord => self.bare("SYM.Other.XY"),
            Pos::TruncatedAdjective => self.bare("TRUNC.Adj"),
            Pos::TruncatedNoun => self.bare("TRUNC.Noun"),
            Pos::TruncatedVerb => self.bare("TRUNC.Verb"),
            Pos::TruncatedOther => self.bare("TRUNC.-"),
            Pos::FiniteAuxiliaryVerb => self.finite("VFIN.Aux"),
            Pos::ImperativeAuxiliaryVerb => self.imperative("VIMP.Aux"),
            Pos::InfinitiveAuxiliaryVerb => self.bare("VINF.Aux.-"),
            Pos::ParticipleAuxiliaryVerb => self.bare("VPP.Aux"),
            Pos::FiniteModalVerb => self.finite("VFIN.Mod"),
            Pos::InfinitiveModalVerb => self.bare("VINF.Mod.-"),
            Pos::ParticipleModalVerb => self.bare("VPP.Mod"),
            Pos::FiniteMainVerb => self.finite("VFIN.Full"),
            Pos::ImperativeMainVerb => self.imperative("VIMP.Full"),
            Pos::InfinitiveMainVerb => self.bare("VINF.Full.-"),
            Pos::ZuInfinitiveMainVerb => self.bare("VINF.Full.zu"),
            Pos::ParticipleMainVerb => self.bare("VPP.Full"),
        }
    }

    /// A complete tag without feature segments
    fn bare(&mut self, tag: &str) -> Result<()> {
        self.literal(tag);
        Ok(())
    }

    /// Person and gender may be `-` in pronoun tags
    fn pronoun(&mut self, prefix: &str) -> Result<()> {
        self.literal(prefix);
        self.optional_person();
        self.case()?;
        self.number()?;
        match self.token.gender {
            Some(gender) => self.segment(gender_str(gender)),
            None => self.segment("-"),
        }
        Ok(())
    }

    fn finite(&mut self, prefix: &str) -> Result<()> {
        self.literal(prefix);
        self.person()?;
        self.number()?;
        self.tense()?;
        self.mood()
    }

    fn imperative(&mut self, prefix: &str) -> Result<()> {
        self.literal(prefix);
        self.person()?;
        self.number()
    }

    fn literal(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn segment(&mut self, text: &str) {
        self.out.push('.');
        self.out.push_str(text);
    }

    fn require<T: Copy>(&self, value: Option<T>, feature: Feature) -> Result<T> {
        value.ok_or(ConvertError::MissingFeature {
            pos: self.token.pos,
            feature,
        })
    }

    fn kng(&mut self) -> Result<()> {
        self.case()?;
        self.number()?;
        self.gender()
    }

    fn degree(&mut self) -> Result<()> {
        let degree = self.require(self.token.degree, Feature::Degree)?;
        self.segment(match degree {
            Degree::Positive => "Pos",
            Degree::Comparative => "Comp",
            Degree::Superlative => "Sup",
        });
        Ok(())
    }

    fn case(&mut self) -> Result<()> {
        let case = self.require(self.token.case, Feature::Case)?;
        self.segment(match case {
            Case::Nominative => "Nom",
            Case::Genitive => "Gen",
            Case::Dative => "Dat",
            Case::Accusative => "Acc",
            Case::Underspecified => "*",
        });
        Ok(())
    }

    fn number(&mut self) -> Result<()> {
        let number = self.require(self.token.number, Feature::Number)?;
        self.segment(match number {
            Number::Singular => "Sg",
            Number::Plural => "Pl",
            Number::Underspecified => "*",
        });
        Ok(())
    }

    fn gender(&mut self) -> Result<()> {
        let gender = self.require(self.token.gender, Feature::Gender)?;
        self.segment(gender_str(gender));
        Ok(())
    }

    fn person(&mut self) -> Result<()> {
        let person = self.require(self.token.person, Feature::Person)?;
        self.segment(person_str(person));
        Ok(())
    }

    fn optional_person(&mut self) {
        match self.token.person {
            Some(person) => self.segment(person_str(person)),
            None => self.segment("-"),
        }
    }

    fn tense(&mut self) -> Result<()> {
        let tense = self.require(self.token.tense, Feature::Tense)?;
        self.segment(match tense {
            Tense::Present => "Pres",
            Tense::Past => "Past",
        });
        Ok(())
    }

    fn mood(&mut self) -> Result<()> {
        let mood = self.require(self.token.mood, Feature::Mood)?;
        self.segment(match mood {
            Mood::Indicative => "Ind",
            Mood::Subjunctive => "Subj",
        });
        Ok(())
    }
}

fn gender_str(gender: Gender) -> &'static str {
    match gender {
        Gender::Masculine => "Masc",
        Gender::Feminine => "Fem",
        Gender::Neuter => "Neut",
        Gender::Underspecified => "*",
    }
}

fn person_str(person: Person) -> &'static str {
    match person {
        Person::First => "1",
        Person::Second => "2",
        Person::Third => "3",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(line: &str) -> Result<Token> {
        match RfTagReader::new().read_line(line)? {
            Item::Token(token) => Ok(token),
            other => panic!("Expected token, got {:?}", other),
        }
    }

    fn write(token: &Token) -> Result<String> {
        let mut out = String::new();
        RfTagWriter.write_token(token, &mut out)?;
        Ok(out)
    }

    /// A token carrying every feature its part of speech needs in this format
    fn complete_token(pos: Pos) -> Token {
        let mut token = Token::new(1u32, "x", pos);
        token.case = Some(Case::Dative);
        token.number = Some(Number::Plural);
        token.gender = Some(Gender::Feminine);
        token.degree = Some(Degree::Comparative);
        token.person = Some(Person::Second);
        token.tense = Some(Tense::Past);
        token.mood = Some(Mood::Subjunctive);
        token
    }

    #[test]
    fn test_read_noun() {
        let token = read("Frau\tN.Reg.Acc.Sg.Fem").unwrap();
        assert_eq!(token.form, "Frau");
        assert_eq!(token.pos, Pos::CommonNoun);
        assert_eq!(token.case, Some(Case::Accusative));
        assert_eq!(token.number, Some(Number::Singular));
        assert_eq!(token.gender, Some(Gender::Feminine));
        assert_eq!(token.index, BigUint::from(1u32));
    }

    #[test]
    fn test_read_finite_verb() {
        let token = read("geht\tVFIN.Full.3.Sg.Pres.Ind").unwrap();
        assert_eq!(token.pos, Pos::FiniteMainVerb);
        assert_eq!(token.person, Some(Person::Third));
        assert_eq!(token.number, Some(Number::Singular));
        assert_eq!(token.tense, Some(Tense::Present));
        assert_eq!(token.mood, Some(Mood::Indicative));
    }

    #[test]
    fn test_read_underspecified() {
        let token = read("Leute\tN.Reg.*.Pl.*").unwrap();
        assert_eq!(token.case, Some(Case::Underspecified));
        assert_eq!(token.gender, Some(Gender::Underspecified));
    }

    #[test]
    fn test_read_pronoun_without_person_and_gender() {
        let token = read("uns\tPRO.Refl.Subst.1.Acc.Pl.-").unwrap();
        assert_eq!(token.pos, Pos::ReflexivePronoun);
        assert_eq!(token.person, Some(Person::First));
        assert_eq!(token.gender, None);

        let token = read("dieser\tPRO.Dem.Attr.-.Nom.Sg.Masc").unwrap();
        assert_eq!(token.pos, Pos::AttributiveDemonstrativePronoun);
        assert_eq!(token.person, None);
    }

    #[test]
    fn test_attributive_personal_pronoun_rejected() {
        let err = read("er\tPRO.Pers.Attr.3.Nom.Sg.Masc").unwrap_err();
        assert!(matches!(err, ConvertError::Read(_)));
        assert!(read("sich\tPRO.Refl.Attr.3.Acc.Sg.-").is_err());
    }

    #[test]
    fn test_modal_imperative_rejected() {
        let err = read("wolle\tVIMP.Mod.2.Sg").unwrap_err();
        assert!(matches!(err, ConvertError::Read(_)));
        assert!(err.to_string().contains("modal"));
    }

    #[test]
    fn test_imperative_with_optional_segment() {
        assert_eq!(read("geh\tVIMP.Full.2.Sg").unwrap().pos, Pos::ImperativeMainVerb);
        assert_eq!(
            read("seid\tVIMP.Aux.2.Pl.Imp").unwrap().pos,
            Pos::ImperativeAuxiliaryVerb
        );
    }

    #[test]
    fn test_zu_infinitive_only_for_main_verbs() {
        assert_eq!(
            read("anzugehen\tVINF.Full.zu").unwrap().pos,
            Pos::ZuInfinitiveMainVerb
        );
        assert!(read("zu sein\tVINF.Aux.zu").is_err());
        assert!(read("zu können\tVINF.Mod.zu").is_err());
        assert_eq!(
            read("können\tVINF.Mod.-").unwrap().pos,
            Pos::InfinitiveModalVerb
        );
    }

    #[test]
    fn test_structure_error() {
        let err = read("Haus\tN.Reg.Nom.Sg").unwrap_err();
        assert_eq!(err.to_string(), "Structure error in N tag: N.Reg.Nom.Sg");
        assert!(read("schnell\tADV.Pos").is_err());
        assert!(read("geht\tVFIN.Full.3.Sg.Pres").is_err());
    }

    #[test]
    fn test_optional_segments() {
        assert_eq!(read("in\tAPPR").unwrap().pos, Pos::Preposition);
        assert_eq!(read("in\tAPPR.Dat").unwrap().pos, Pos::Preposition);
        assert_eq!(read("gesehen\tVPP.Full.Psp").unwrap().pos, Pos::ParticipleMainVerb);
    }

    #[test]
    fn test_unknown_values() {
        assert_eq!(
            read("x\tFOO").unwrap_err().to_string(),
            "Unknown word class: FOO"
        );
        assert_eq!(
            read("Haus\tN.Reg.Nom.Sg.neut").unwrap_err().to_string(),
            "Unknown gender: neut"
        );
        assert!(read("(\tSYM.Paren.Up").is_err());
    }

    #[test]
    fn test_missing_tag() {
        assert!(read("Haus").is_err());
        assert!(read("Haus\t").is_err());
    }

    #[test]
    fn test_ignores_columns_after_tag() {
        let token = read("und\tCONJ.Coord\tund").unwrap();
        assert_eq!(token.pos, Pos::CoordinatingConjunction);
    }

    #[test]
    fn test_index_resets_at_blank_line() {
        let mut reader = RfTagReader::new();
        reader.read_line("a\tADV").unwrap();
        reader.read_line("b\tADV").unwrap();
        assert_eq!(reader.read_line("").unwrap(), Item::BlankLine);
        match reader.read_line("c\tADV").unwrap() {
            Item::Token(token) => assert_eq!(token.index, BigUint::from(1u32)),
            other => panic!("Expected token, got {:?}", other),
        }
    }

    #[test]
    fn test_write_tags() {
        let mut token = Token::new(1u32, "Frau", Pos::CommonNoun);
        token.case = Some(Case::Accusative);
        token.number = Some(Number::Singular);
        token.gender = Some(Gender::Feminine);
        assert_eq!(write(&token).unwrap(), "Frau\tN.Reg.Acc.Sg.Fem");

        let token = Token::new(1u32, "anzugehen", Pos::ZuInfinitiveMainVerb);
        assert_eq!(write(&token).unwrap(), "anzugehen\tVINF.Full.zu");

        let token = Token::new(1u32, "Ex-", Pos::TruncatedOther);
        assert_eq!(write(&token).unwrap(), "Ex-\tTRUNC.-");
    }

    #[test]
    fn test_write_pronoun_placeholders() {
        let mut token = Token::new(1u32, "sich", Pos::ReflexivePronoun);
        token.person = Some(Person::Third);
        token.case = Some(Case::Accusative);
        token.number = Some(Number::Underspecified);
        assert_eq!(write(&token).unwrap(), "sich\tPRO.Refl.Subst.3.Acc.*.-");

        let mut token = Token::new(1u32, "alle", Pos::AttributiveIndefinitePronounWithDeterminer);
        token.case = Some(Case::Nominative);
        token.number = Some(Number::Plural);
        token.gender = Some(Gender::Underspecified);
        assert_eq!(write(&token).unwrap(), "alle\tPRO.Indef.Attr.-.Nom.Pl.*");
    }

    #[test]
    fn test_write_missing_feature() {
        let mut token = Token::new(1u32, "Haus", Pos::CommonNoun);
        token.case = Some(Case::Nominative);
        token.number = Some(Number::Singular);
        let err = write(&token).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MissingFeature {
                pos: Pos::CommonNoun,
                feature: Feature::Gender
            }
        ));
        assert!(err.is_internal());

        let token = Token::new(1u32, "geht", Pos::FiniteMainVerb);
        assert!(write(&token).is_err());
    }

    /// Features a part of speech must carry to be written as RFTagger
    fn required_features(pos: Pos) -> &'static [Feature] {
        const KNG: &[Feature] = &[Feature::Case, Feature::Number, Feature::Gender];
        match pos {
            Pos::AttributiveAdjective => &[
                Feature::Degree,
                Feature::Case,
                Feature::Number,
                Feature::Gender,
            ],
            Pos::PredicativeAdjective => &[Feature::Degree],
            Pos::PrepositionWithArticle
            | Pos::DefiniteArticle
            | Pos::IndefiniteArticle
            | Pos::CommonNoun
            | Pos::ProperNoun => KNG,
            Pos::AttributiveDemonstrativePronoun
            | Pos::SubstitutiveDemonstrativePronoun
            | Pos::AttributiveIndefinitePronoun
            | Pos::AttributiveIndefinitePronounWithDeterminer
            | Pos::SubstitutiveIndefinitePronoun
            | Pos::AttributiveInterrogativePronoun
            | Pos::SubstitutiveInterrogativePronoun
            | Pos::PersonalPronoun
            | Pos::AttributivePossessivePronoun
            | Pos::SubstitutivePossessivePronoun
            | Pos::ReflexivePronoun
            | Pos::AttributiveRelativePronoun
            | Pos::SubstitutiveRelativePronoun => &[Feature::Case, Feature::Number],
            Pos::FiniteMainVerb | Pos::FiniteAuxiliaryVerb | Pos::FiniteModalVerb => &[
                Feature::Person,
                Feature::Number,
                Feature::Tense,
                Feature::Mood,
            ],
            Pos::ImperativeMainVerb | Pos::ImperativeAuxiliaryVerb => {
                &[Feature::Person, Feature::Number]
            }
            _ => &[],
        }
    }

    fn is_pronoun(pos: Pos) -> bool {
        required_features(pos) == [Feature::Case, Feature::Number]
    }

    /// Copy the given feature slots from `source` into a bare token
    fn with_features(source: &Token, features: &[Feature]) -> Token {
        let mut token = Token::new(source.index.clone(), source.form.clone(), source.pos);
        for feature in features {
            match feature {
                Feature::Case => token.case = source.case,
                Feature::Number => token.number = source.number,
                Feature::Gender => token.gender = source.gender,
                Feature::Degree => token.degree = source.degree,
                Feature::Person => token.person = source.person,
                Feature::Tense => token.tense = source.tense,
                Feature::Mood => token.mood = source.mood,
            }
        }
        token
    }

    #[test]
    fn test_every_pos_round_trips_whole_token() {
        for pos in Pos::ALL {
            let full = complete_token(pos);
            let mut variants = vec![with_features(&full, required_features(pos))];
            if is_pronoun(pos) {
                let base = [Feature::Case, Feature::Number];
                variants.push(with_features(&full, &[base[0], base[1], Feature::Person]));
                variants.push(with_features(&full, &[base[0], base[1], Feature::Gender]));
                variants.push(with_features(
                    &full,
                    &[base[0], base[1], Feature::Person, Feature::Gender],
                ));
            }

            for token in variants {
                let line = write(&token).unwrap();
                let mut expected = token.clone();
                // PIDAT shares its tag with PIAT
                if pos == Pos::AttributiveIndefinitePronounWithDeterminer {
                    expected.pos = Pos::AttributiveIndefinitePronoun;
                }
                assert_eq!(read(&line).unwrap(), expected, "{}", line);
            }
        }
    }

    #[test]
    fn test_missing_required_feature_fails_for_every_pos() {
        for pos in Pos::ALL {
            let full = complete_token(pos);
            let required = required_features(pos);
            for skipped in required {
                let kept: Vec<Feature> = required
                    .iter()
                    .copied()
                    .filter(|feature| feature != skipped)
                    .collect();
                let err = write(&with_features(&full, &kept)).unwrap_err();
                assert!(
                    matches!(err, ConvertError::MissingFeature { feature, .. } if feature == *skipped),
                    "{:?} without {:?}: {}",
                    pos,
                    skipped,
                    err
                );
            }
        }
    }

    #[test]
    fn test_pronoun_without_gender_round_trips() {
        let mut reader = RfTagReader::new();
        let Item::Token(token) = reader.read_line("ich\tPRO.Pers.Subst.1.Nom.Sg.-").unwrap() else {
            panic!("Expected token");
        };
        assert_eq!(token.gender, None);
        assert_eq!(write(&token).unwrap(), "ich\tPRO.Pers.Subst.1.Nom.Sg.-");

        let token = read("dies\tPRO.Dem.Subst.-.Nom.Sg.-").unwrap();
        assert_eq!(write(&token).unwrap(), "dies\tPRO.Dem.Subst.-.Nom.Sg.-");
    }

    #[test]
    fn test_empty_form_rejected() {
        let err = read("\tADV").unwrap_err();
        assert!(matches!(err, ConvertError::Read(_)));
        assert!(err.to_string().contains("Missing token form"));
    }

    #[test]
    fn test_every_pos_reads_back() {
        for pos in Pos::ALL {
            let token = complete_token(pos);
            let line = write(&token).unwrap();
            let back = read(&line).unwrap();
            // PIDAT shares its tag with PIAT
            let expected = match pos {
                Pos::AttributiveIndefinitePronounWithDeterminer => {
                    Pos::AttributiveIndefinitePronoun
                }
                other => other,
            };
            assert_eq!(back.pos, expected, "{}", line);
        }
    }
}
