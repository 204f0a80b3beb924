//! Domain layer - Unified token model

pub mod features;
pub mod item;
pub mod pos;

pub use features::{Case, Degree, Feature, Gender, Mood, Number, Person, Tense};
pub use item::{Item, Token};
pub use pos::Pos;
