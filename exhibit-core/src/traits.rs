//! Static trait tables mapping categorical attributes to rendering primitives.

use serde::{Deserialize, Serialize};

use crate::character::{ClothingStyle, Gender, HairColor, HealthCondition, SkinTone};

/// Shirt cut understood by the avatar primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShirtStyle {
    Hoody,
    Short,
    Polo,
}

impl ShirtStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hoody => "hoody",
            Self::Short => "short",
            Self::Polo => "polo",
        }
    }
}

/// Shirt cut and colour for one clothing style and gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Clothing {
    pub shirt_style: ShirtStyle,
    pub shirt_color: &'static str,
}

const fn clothing(shirt_style: ShirtStyle, shirt_color: &'static str) -> Clothing {
    Clothing {
        shirt_style,
        shirt_color,
    }
}

/// Rows are `[male, female]`.
const PAMBAHAY: [Clothing; 2] = [
    clothing(ShirtStyle::Short, "#78909C"),
    clothing(ShirtStyle::Short, "#F48FB1"),
];
const CASUAL: [Clothing; 2] = [
    clothing(ShirtStyle::Hoody, "#5C6BC0"),
    clothing(ShirtStyle::Hoody, "#CE93D8"),
];
const FORMAL: [Clothing; 2] = [
    clothing(ShirtStyle::Polo, "#1A237E"),
    clothing(ShirtStyle::Polo, "#7B1FA2"),
];
const SPORTY: [Clothing; 2] = [
    clothing(ShirtStyle::Short, "#E53935"),
    clothing(ShirtStyle::Short, "#00ACC1"),
];

#[must_use]
pub const fn hair_hex(color: HairColor) -> &'static str {
    match color {
        HairColor::Black => "#2C3E50",
        HairColor::Brown => "#6D4C2E",
        HairColor::Blonde => "#D4A537",
        HairColor::Red => "#B85C3A",
        HairColor::Gray => "#9E9E9E",
        HairColor::White => "#E0E0E0",
    }
}

#[must_use]
pub const fn skin_hex(tone: SkinTone) -> &'static str {
    match tone {
        SkinTone::Light => "#FDEBD0",
        SkinTone::Medium => "#F5CBA7",
        SkinTone::Tan => "#E0A97F",
        SkinTone::Brown => "#B07D5B",
        SkinTone::Dark => "#7B5539",
    }
}

/// Look up the clothing row for a style; unknown styles resolve to the casual row.
#[must_use]
pub fn clothing_for(style: &ClothingStyle, gender: Gender) -> Clothing {
    let row = match style {
        ClothingStyle::Pambahay => &PAMBAHAY,
        ClothingStyle::Formal => &FORMAL,
        ClothingStyle::Sporty => &SPORTY,
        ClothingStyle::Casual | ClothingStyle::Other(_) => &CASUAL,
    };
    row[usize::from(gender.is_female())]
}

pub const FALLBACK_CONDITION_ICON: &str = "⚠️";

/// Badge glyph for a health condition.
#[must_use]
pub fn condition_icon(condition: &HealthCondition) -> &'static str {
    match condition {
        HealthCondition::Asthma => "🫁",
        HealthCondition::Arthritis => "🦴",
        HealthCondition::HeartCondition => "❤️",
        HealthCondition::ChronicFatigue => "😮‍💨",
        HealthCondition::Vertigo => "💫",
        HealthCondition::HeatSensitivity => "🌡️",
        HealthCondition::PoorEyesight => "👓",
        HealthCondition::MobilityImpairment => "🦽",
        HealthCondition::Other(_) => FALLBACK_CONDITION_ICON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hair_and_skin_tables_are_distinct() {
        let hair: std::collections::HashSet<_> =
            HairColor::ALL.iter().map(|c| hair_hex(*c)).collect();
        assert_eq!(hair.len(), 6);
        let skin: std::collections::HashSet<_> =
            SkinTone::ALL.iter().map(|t| skin_hex(*t)).collect();
        assert_eq!(skin.len(), 5);
    }

    #[test]
    fn clothing_rows_differ_by_gender() {
        for style in ["pambahay", "casual", "formal", "sporty"] {
            let style = ClothingStyle::from(style);
            let male = clothing_for(&style, Gender::Male);
            let female = clothing_for(&style, Gender::Female);
            assert_eq!(male.shirt_style, female.shirt_style);
            assert_ne!(male.shirt_color, female.shirt_color);
        }
        assert_eq!(
            clothing_for(&ClothingStyle::Formal, Gender::Female),
            clothing(ShirtStyle::Polo, "#7B1FA2")
        );
    }

    #[test]
    fn unknown_clothing_uses_casual_row() {
        let odd = ClothingStyle::from("tuxedo");
        for gender in Gender::ALL {
            assert_eq!(
                clothing_for(&odd, *gender),
                clothing_for(&ClothingStyle::Casual, *gender)
            );
        }
    }

    #[test]
    fn unmapped_condition_gets_fallback_icon() {
        assert_eq!(condition_icon(&HealthCondition::PoorEyesight), "👓");
        assert_eq!(
            condition_icon(&HealthCondition::from("sea-sickness")),
            FALLBACK_CONDITION_ICON
        );
    }
}
