//! Derivation rules for traits that follow from gender, age and conditions.

use serde::{Deserialize, Serialize};

use crate::character::{
    AccessoryStyle, CharacterConfig, Gender, GlassesStyle, HairStyle, HatStyle, HealthCondition,
};
use crate::traits::{Clothing, clothing_for, hair_hex, skin_hex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeStyle {
    Circle,
    Oval,
    Smile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoseStyle {
    Short,
    Long,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouthStyle {
    Laugh,
    Smile,
    Peace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EyebrowStyle {
    Up,
    UpWoman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EarSize {
    Small,
    Big,
}

/// Cumulative facial-age decoration bucket, `0..=3`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WrinkleTier(u8);

impl WrinkleTier {
    pub const NONE: Self = Self(0);
    pub const LIGHT: Self = Self(1);
    pub const MODERATE: Self = Self(2);
    pub const DEEP: Self = Self(3);

    #[must_use]
    pub const fn for_age(age: u32) -> Self {
        if age >= 65 {
            Self::DEEP
        } else if age >= 50 {
            Self::MODERATE
        } else if age >= 35 {
            Self::LIGHT
        } else {
            Self::NONE
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }
}

/// Ages below this count as a child for face shape purposes.
const CHILD_AGE: u32 = 13;

/// Every trait the avatar needs, resolved from a partial [`CharacterConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedTraits {
    pub gender: Gender,
    pub age: u32,
    pub hair_color: &'static str,
    pub face_color: &'static str,
    pub hair_style: HairStyle,
    pub glasses_style: GlassesStyle,
    pub hat_style: HatStyle,
    pub accessory_style: AccessoryStyle,
    pub clothing: Clothing,
    pub eye_style: EyeStyle,
    pub nose_style: NoseStyle,
    pub mouth_style: MouthStyle,
    pub eyebrow_style: EyebrowStyle,
    pub ear_size: EarSize,
    pub wrinkle_tier: WrinkleTier,
}

#[must_use]
pub const fn default_hair_style(gender: Gender) -> HairStyle {
    match gender {
        Gender::Female => HairStyle::WomanLong,
        Gender::Male => HairStyle::Normal,
    }
}

#[must_use]
pub fn default_glasses(conditions: &[HealthCondition]) -> GlassesStyle {
    if conditions.contains(&HealthCondition::PoorEyesight) {
        GlassesStyle::Round
    } else {
        GlassesStyle::None
    }
}

#[must_use]
pub const fn eye_style(gender: Gender) -> EyeStyle {
    if gender.is_female() {
        EyeStyle::Circle
    } else {
        EyeStyle::Oval
    }
}

#[must_use]
pub const fn nose_style(gender: Gender, age: u32) -> NoseStyle {
    if gender.is_female() {
        NoseStyle::Round
    } else if age < CHILD_AGE {
        NoseStyle::Short
    } else {
        NoseStyle::Long
    }
}

#[must_use]
pub const fn mouth_style(gender: Gender, age: u32) -> MouthStyle {
    if age < CHILD_AGE {
        MouthStyle::Laugh
    } else if gender.is_female() {
        MouthStyle::Peace
    } else {
        MouthStyle::Smile
    }
}

#[must_use]
pub const fn eyebrow_style(gender: Gender) -> EyebrowStyle {
    if gender.is_female() {
        EyebrowStyle::UpWoman
    } else {
        EyebrowStyle::Up
    }
}

#[must_use]
pub const fn ear_size(age: u32) -> EarSize {
    if age < CHILD_AGE {
        EarSize::Small
    } else {
        EarSize::Big
    }
}

/// Resolve every avatar trait for `config`. Total: no input fails.
#[must_use]
pub fn derive_traits(config: &CharacterConfig) -> DerivedTraits {
    let gender = config.gender();
    let age = config.age();
    let conditions = config.conditions();
    let clothing_style = config.clothing_style.clone().unwrap_or_default();

    DerivedTraits {
        gender,
        age,
        hair_color: hair_hex(config.hair_color.unwrap_or_default()),
        face_color: skin_hex(config.skin_tone.unwrap_or_default()),
        hair_style: config
            .hair_style
            .unwrap_or_else(|| default_hair_style(gender)),
        glasses_style: config
            .glasses_style
            .unwrap_or_else(|| default_glasses(conditions)),
        hat_style: config.hat_style.unwrap_or_default(),
        accessory_style: config.accessory_style.unwrap_or_default(),
        clothing: clothing_for(&clothing_style, gender),
        eye_style: eye_style(gender),
        nose_style: nose_style(gender, age),
        mouth_style: mouth_style(gender, age),
        eyebrow_style: eyebrow_style(gender),
        ear_size: ear_size(age),
        wrinkle_tier: WrinkleTier::for_age(age),
    }
}
