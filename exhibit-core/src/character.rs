//! Character attributes chosen on the character creation screen.
//!
//! Every field of [`CharacterConfig`] is optional; the derivation rules in
//! [`crate::derivation`] fill the gaps with fixed defaults.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A literal that did not match any known value of a categorical attribute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} literal: {value}")]
pub struct UnknownLiteral {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed categorical attribute whose serialized form is a fixed literal.
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $lit)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $lit),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLiteral;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($lit => Ok(Self::$variant),)+
                    other => Err(UnknownLiteral {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

literal_enum! {
    #[derive(Default)]
    Gender ("gender") {
        #[default]
        Male => "male",
        Female => "female",
    }
}

impl Gender {
    #[must_use]
    pub const fn is_female(self) -> bool {
        matches!(self, Self::Female)
    }
}

literal_enum! {
    #[derive(Default)]
    HairColor ("hair color") {
        #[default]
        Black => "black",
        Brown => "brown",
        Blonde => "blonde",
        Red => "red",
        Gray => "gray",
        White => "white",
    }
}

literal_enum! {
    /// Hair cuts offered by the avatar primitive. `Normal` doubles as the short masculine default.
    HairStyle ("hair style") {
        Normal => "normal",
        Thick => "thick",
        Mohawk => "mohawk",
        WomanLong => "womanLong",
        WomanShort => "womanShort",
    }
}

literal_enum! {
    #[derive(Default)]
    SkinTone ("skin tone") {
        Light => "light",
        Medium => "medium",
        #[default]
        Tan => "tan",
        Brown => "brown",
        Dark => "dark",
    }
}

literal_enum! {
    BudgetLevel ("budget") {
        Backpacker => "backpacker",
        Moderate => "moderate",
        Comfortable => "comfortable",
        Luxury => "luxury",
    }
}

literal_enum! {
    #[derive(Default)]
    GlassesStyle ("glasses style") {
        #[default]
        None => "none",
        Round => "round",
        Square => "square",
    }
}

literal_enum! {
    #[derive(Default)]
    HatStyle ("hat style") {
        #[default]
        None => "none",
        Beanie => "beanie",
        Turban => "turban",
    }
}

literal_enum! {
    #[derive(Default)]
    AccessoryStyle ("accessory style") {
        #[default]
        None => "none",
        Earrings => "earrings",
        Headphones => "headphones",
        Scar => "scar",
        Bandana => "bandana",
    }
}

/// Health condition tag. Unknown tags survive a round trip as [`HealthCondition::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthCondition {
    Asthma,
    Arthritis,
    HeartCondition,
    ChronicFatigue,
    Vertigo,
    HeatSensitivity,
    PoorEyesight,
    MobilityImpairment,
    Other(String),
}

impl HealthCondition {
    pub const KNOWN: [Self; 8] = [
        Self::Asthma,
        Self::Arthritis,
        Self::HeartCondition,
        Self::ChronicFatigue,
        Self::Vertigo,
        Self::HeatSensitivity,
        Self::PoorEyesight,
        Self::MobilityImpairment,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Asthma => "asthma",
            Self::Arthritis => "arthritis",
            Self::HeartCondition => "heart-condition",
            Self::ChronicFatigue => "chronic-fatigue",
            Self::Vertigo => "vertigo",
            Self::HeatSensitivity => "heat-sensitivity",
            Self::PoorEyesight => "poor-eyesight",
            Self::MobilityImpairment => "mobility-impairment",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for HealthCondition {
    fn from(tag: &str) -> Self {
        match tag {
            "asthma" => Self::Asthma,
            "arthritis" => Self::Arthritis,
            "heart-condition" => Self::HeartCondition,
            "chronic-fatigue" => Self::ChronicFatigue,
            "vertigo" => Self::Vertigo,
            "heat-sensitivity" => Self::HeatSensitivity,
            "poor-eyesight" => Self::PoorEyesight,
            "mobility-impairment" => Self::MobilityImpairment,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for HealthCondition {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<HealthCondition> for String {
    fn from(condition: HealthCondition) -> Self {
        match condition {
            HealthCondition::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for HealthCondition {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.trim()))
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clothing key. Unrecognised keys are kept so lookups can fall back to the casual row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClothingStyle {
    Pambahay,
    #[default]
    Casual,
    Formal,
    Sporty,
    Other(String),
}

impl ClothingStyle {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pambahay => "pambahay",
            Self::Casual => "casual",
            Self::Formal => "formal",
            Self::Sporty => "sporty",
            Self::Other(key) => key,
        }
    }
}

impl From<&str> for ClothingStyle {
    fn from(key: &str) -> Self {
        match key {
            "pambahay" => Self::Pambahay,
            "casual" => Self::Casual,
            "formal" => Self::Formal,
            "sporty" => Self::Sporty,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ClothingStyle {
    fn from(key: String) -> Self {
        Self::from(key.as_str())
    }
}

impl From<ClothingStyle> for String {
    fn from(style: ClothingStyle) -> Self {
        match style {
            ClothingStyle::Other(key) => key,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ClothingStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.trim()))
    }
}

impl fmt::Display for ClothingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age brackets offered on the character creation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Child,
    Teen,
    YoungAdult,
    Adult,
    MiddleAged,
    Senior,
}

impl AgeGroup {
    #[must_use]
    pub const fn for_age(age: u32) -> Self {
        match age {
            0..=12 => Self::Child,
            13..=17 => Self::Teen,
            18..=29 => Self::YoungAdult,
            30..=44 => Self::Adult,
            45..=59 => Self::MiddleAged,
            _ => Self::Senior,
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Child => "age.child",
            Self::Teen => "age.teen",
            Self::YoungAdult => "age.young_adult",
            Self::Adult => "age.adult",
            Self::MiddleAged => "age.middle_aged",
            Self::Senior => "age.senior",
        }
    }
}

/// Reads an optional literal, dropping values no variant matches so the
/// derivation default applies instead of failing the whole document.
fn lenient_literal<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownLiteral>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.parse() {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            log::warn!("{err}; using the default");
            Ok(None)
        }
    }
}

/// Partial character description. Missing fields resolve to deterministic defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(
        default,
        deserialize_with = "lenient_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<Gender>,
    #[serde(
        default,
        deserialize_with = "lenient_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub hair_color: Option<HairColor>,
    #[serde(
        default,
        deserialize_with = "lenient_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub hair_style: Option<HairStyle>,
    #[serde(
        default,
        deserialize_with = "lenient_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub skin_tone: Option<SkinTone>,
    #[serde(
        default,
        deserialize_with = "lenient_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget: Option<BudgetLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<HealthCondition>>,
    #[serde(
        default,
        deserialize_with = "lenient_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub glasses_style: Option<GlassesStyle>,
    #[serde(
        default,
        deserialize_with = "lenient_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub hat_style: Option<HatStyle>,
    #[serde(
        default,
        deserialize_with = "lenient_literal",
        skip_serializing_if = "Option::is_none"
    )]
    pub accessory_style: Option<AccessoryStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clothing_style: Option<ClothingStyle>,
}

impl CharacterConfig {
    pub const DEFAULT_AGE: u32 = 25;

    #[must_use]
    pub fn gender(&self) -> Gender {
        self.gender.unwrap_or_default()
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age.unwrap_or(Self::DEFAULT_AGE)
    }

    #[must_use]
    pub fn conditions(&self) -> &[HealthCondition] {
        self.conditions.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn has_condition(&self, condition: &HealthCondition) -> bool {
        self.conditions().contains(condition)
    }

    #[must_use]
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::for_age(self.age())
    }
}
