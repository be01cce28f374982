//! Property tests for trait derivation and overlay geometry.

use exhibit_core::overlay::{LayerKind, MAX_BADGES};
use exhibit_core::{
    AccessoryStyle, AvatarComposer, CharacterConfig, ClothingStyle, Gender, GlassesStyle,
    HairColor, HatStyle, HealthCondition, OverlayInput, SkinTone, WrinkleTier, condition_badges,
    derive_traits, overlay_layers,
};
use proptest::prelude::*;

fn condition_strategy() -> impl Strategy<Value = HealthCondition> {
    prop_oneof![
        4 => prop::sample::select(HealthCondition::KNOWN.to_vec()),
        1 => "[a-z]{3,10}".prop_map(HealthCondition::from),
    ]
}

fn config_strategy() -> impl Strategy<Value = CharacterConfig> {
    (
        prop::option::of(0u32..=110),
        prop::option::of(prop::sample::select(Gender::ALL)),
        prop::option::of(prop::sample::select(HairColor::ALL)),
        prop::option::of(prop::sample::select(SkinTone::ALL)),
        prop::option::of(prop::collection::vec(condition_strategy(), 0..6)),
        prop::option::of(prop::sample::select(GlassesStyle::ALL)),
        prop::option::of(prop::sample::select(HatStyle::ALL)),
        prop::option::of(prop::sample::select(AccessoryStyle::ALL)),
        prop::option::of(prop::sample::select(vec![
            ClothingStyle::from("pambahay"),
            ClothingStyle::from("casual"),
            ClothingStyle::from("formal"),
            ClothingStyle::from("sporty"),
            ClothingStyle::from("barong"),
        ])),
    )
        .prop_map(
            |(age, gender, hair_color, skin_tone, conditions, glasses, hat, accessory, clothing)| {
                CharacterConfig {
                    age,
                    gender,
                    hair_color,
                    skin_tone,
                    conditions,
                    glasses_style: glasses,
                    hat_style: hat,
                    accessory_style: accessory,
                    clothing_style: clothing,
                    ..CharacterConfig::default()
                }
            },
        )
}

fn wrinkle_strokes(age: u32) -> usize {
    let input = OverlayInput::from_config(&CharacterConfig {
        age: Some(age),
        ..CharacterConfig::default()
    });
    overlay_layers(&input)
        .into_iter()
        .filter(|layer| layer.kind == LayerKind::Wrinkles)
        .map(|layer| layer.shapes.len())
        .sum()
}

proptest! {
    #[test]
    fn derivation_is_deterministic(config in config_strategy()) {
        prop_assert_eq!(derive_traits(&config), derive_traits(&config.clone()));
    }

    #[test]
    fn explicit_values_win_over_defaults(config in config_strategy()) {
        let traits = derive_traits(&config);
        if let Some(glasses) = config.glasses_style {
            prop_assert_eq!(traits.glasses_style, glasses);
        }
        if let Some(hat) = config.hat_style {
            prop_assert_eq!(traits.hat_style, hat);
        }
        if let Some(accessory) = config.accessory_style {
            prop_assert_eq!(traits.accessory_style, accessory);
        }
    }

    #[test]
    fn wrinkle_tier_is_monotonic(a in 0u32..=120, b in 0u32..=120) {
        let (young, old) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(WrinkleTier::for_age(young) <= WrinkleTier::for_age(old));
        prop_assert!(wrinkle_strokes(young) <= wrinkle_strokes(old));
    }

    #[test]
    fn badges_never_exceed_limit(conditions in prop::collection::vec(condition_strategy(), 0..12)) {
        let badges = condition_badges(&conditions);
        prop_assert_eq!(badges.len(), conditions.len().min(MAX_BADGES));
        for (badge, condition) in badges.iter().zip(&conditions) {
            prop_assert_eq!(&badge.condition, condition);
        }
    }

    #[test]
    fn same_seed_composes_same_avatar(seed in any::<u64>(), config in config_strategy()) {
        let mut a = AvatarComposer::seeded(seed);
        let mut b = AvatarComposer::seeded(seed);
        prop_assert_eq!(a.compose(&config), b.compose(&config));
    }
}
