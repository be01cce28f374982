//! Avatar composer: a random base appearance overlaid with derived traits.
//!
//! The base is drawn from the avatar primitive's palettes and cached keyed by
//! [`Sex`]. Changing anything other than the sex reuses the cached base, so
//! tweaking hair colour never reshuffles unrelated random features.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::character::{CharacterConfig, Gender, GlassesStyle, HairStyle, HatStyle};
use crate::derivation::{
    DerivedTraits, EarSize, EyeStyle, EyebrowStyle, MouthStyle, NoseStyle, derive_traits,
};
use crate::traits::ShirtStyle;

pub const HAT_COLOR: &str = "#4A4A4A";
pub const TRANSPARENT_BG: &str = "transparent";

const FACE_COLORS: [&str; 2] = ["#F9C9B6", "#AC6651"];
const HAIR_COLORS: [&str; 7] = [
    "#000", "#fff", "#77311D", "#FC909F", "#D2EFF3", "#506AF4", "#F48150",
];
const SHIRT_COLORS: [&str; 5] = ["#9287FF", "#6BD9E9", "#FC909F", "#F4D150", "#77311D"];
const BG_COLORS: [&str; 11] = [
    "#9287FF", "#6BD9E9", "#FC909F", "#F4D150", "#E0DDFF", "#D2EFF3", "#FFEDEF", "#FFEBA4",
    "#506AF4", "#F48150", "#74D153",
];
const MAN_HAIR: [HairStyle; 3] = [HairStyle::Normal, HairStyle::Thick, HairStyle::Mohawk];
const WOMAN_HAIR: [HairStyle; 3] = [
    HairStyle::Normal,
    HairStyle::WomanLong,
    HairStyle::WomanShort,
];
const HATS: [HatStyle; 4] = [HatStyle::Beanie, HatStyle::Turban, HatStyle::None, HatStyle::None];
const EYES: [EyeStyle; 3] = [EyeStyle::Circle, EyeStyle::Oval, EyeStyle::Smile];
const WOMAN_BROWS: [EyebrowStyle; 2] = [EyebrowStyle::Up, EyebrowStyle::UpWoman];
const GLASSES: [GlassesStyle; 3] = [GlassesStyle::Round, GlassesStyle::Square, GlassesStyle::None];
const NOSES: [NoseStyle; 3] = [NoseStyle::Short, NoseStyle::Long, NoseStyle::Round];
const MOUTHS: [MouthStyle; 3] = [MouthStyle::Laugh, MouthStyle::Smile, MouthStyle::Peace];
const SHIRTS: [ShirtStyle; 3] = [ShirtStyle::Hoody, ShirtStyle::Short, ShirtStyle::Polo];
const EARS: [EarSize; 2] = [EarSize::Small, EarSize::Big];
const FACE_SHAPES: [FaceShape; 3] = [FaceShape::Round, FaceShape::Oval, FaceShape::Square];

/// Head outline drawn by the avatar primitive. Never overridden by character traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Round,
    Oval,
    Square,
}

/// Binary sex parameter of the avatar primitive; the only key of the base cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Man,
    Woman,
}

impl From<Gender> for Sex {
    fn from(gender: Gender) -> Self {
        if gender.is_female() {
            Self::Woman
        } else {
            Self::Man
        }
    }
}

/// Randomly generated appearance before any character traits are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseAppearance {
    pub sex: Sex,
    pub face_shape: FaceShape,
    pub face_color: String,
    pub ear_size: EarSize,
    pub hair_color: String,
    pub hair_style: HairStyle,
    pub hat_color: String,
    pub hat_style: HatStyle,
    pub eye_style: EyeStyle,
    pub eye_brow_style: EyebrowStyle,
    pub glasses_style: GlassesStyle,
    pub nose_style: NoseStyle,
    pub mouth_style: MouthStyle,
    pub shirt_style: ShirtStyle,
    pub shirt_color: String,
    pub bg_color: String,
    pub is_gradient: bool,
}

/// Uniform draw from a fixed palette. Empty palettes are rejected at compile time.
fn pick<T: Copy, R: Rng + ?Sized, const N: usize>(rng: &mut R, options: &[T; N]) -> T {
    const { assert!(N > 0, "palette must not be empty") };
    options[rng.gen_range(0..N)]
}

impl BaseAppearance {
    /// Draw a fresh base appearance for `sex`.
    pub fn generate<R: Rng + ?Sized>(sex: Sex, rng: &mut R) -> Self {
        let hair_styles: &[HairStyle; 3] = match sex {
            Sex::Man => &MAN_HAIR,
            Sex::Woman => &WOMAN_HAIR,
        };
        let eye_brow_style = match sex {
            Sex::Man => EyebrowStyle::Up,
            Sex::Woman => pick(rng, &WOMAN_BROWS),
        };
        Self {
            sex,
            face_shape: pick(rng, &FACE_SHAPES),
            face_color: pick(rng, &FACE_COLORS).to_string(),
            ear_size: pick(rng, &EARS),
            hair_color: pick(rng, &HAIR_COLORS).to_string(),
            hair_style: pick(rng, hair_styles),
            hat_color: pick(rng, &HAIR_COLORS).to_string(),
            hat_style: pick(rng, &HATS),
            eye_style: pick(rng, &EYES),
            eye_brow_style,
            glasses_style: pick(rng, &GLASSES),
            nose_style: pick(rng, &NOSES),
            mouth_style: pick(rng, &MOUTHS),
            shirt_style: pick(rng, &SHIRTS),
            shirt_color: pick(rng, &SHIRT_COLORS).to_string(),
            bg_color: pick(rng, &BG_COLORS).to_string(),
            is_gradient: rng.gen_bool(0.5),
        }
    }
}

/// Configuration handed to the avatar primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarConfig {
    pub sex: Sex,
    pub face_shape: FaceShape,
    pub face_color: String,
    pub ear_size: EarSize,
    pub hair_color: String,
    pub hair_color_random: bool,
    pub hair_style: HairStyle,
    pub hat_color: String,
    pub hat_style: HatStyle,
    pub eye_style: EyeStyle,
    pub eye_brow_style: EyebrowStyle,
    pub glasses_style: GlassesStyle,
    pub nose_style: NoseStyle,
    pub mouth_style: MouthStyle,
    pub shirt_style: ShirtStyle,
    pub shirt_color: String,
    pub bg_color: String,
    pub is_gradient: bool,
}

impl From<&BaseAppearance> for AvatarConfig {
    fn from(base: &BaseAppearance) -> Self {
        Self {
            sex: base.sex,
            face_shape: base.face_shape,
            face_color: base.face_color.clone(),
            ear_size: base.ear_size,
            hair_color: base.hair_color.clone(),
            hair_color_random: true,
            hair_style: base.hair_style,
            hat_color: base.hat_color.clone(),
            hat_style: base.hat_style,
            eye_style: base.eye_style,
            eye_brow_style: base.eye_brow_style,
            glasses_style: base.glasses_style,
            nose_style: base.nose_style,
            mouth_style: base.mouth_style,
            shirt_style: base.shirt_style,
            shirt_color: base.shirt_color.clone(),
            bg_color: base.bg_color.clone(),
            is_gradient: base.is_gradient,
        }
    }
}

/// Overlay derived traits on top of `base`. Derived and explicit values always win.
#[must_use]
pub fn overlay_traits(base: &BaseAppearance, traits: &DerivedTraits) -> AvatarConfig {
    AvatarConfig {
        sex: Sex::from(traits.gender),
        face_color: traits.face_color.to_string(),
        ear_size: traits.ear_size,
        hair_color: traits.hair_color.to_string(),
        hair_color_random: false,
        hair_style: traits.hair_style,
        hat_color: HAT_COLOR.to_string(),
        hat_style: traits.hat_style,
        eye_style: traits.eye_style,
        eye_brow_style: traits.eyebrow_style,
        glasses_style: traits.glasses_style,
        nose_style: traits.nose_style,
        mouth_style: traits.mouth_style,
        shirt_style: traits.clothing.shirt_style,
        shirt_color: traits.clothing.shirt_color.to_string(),
        bg_color: TRANSPARENT_BG.to_string(),
        is_gradient: false,
        ..AvatarConfig::from(base)
    }
}

/// Composes avatar configurations, caching the random base per [`Sex`].
#[derive(Debug, Clone)]
pub struct AvatarComposer<R = ChaCha20Rng> {
    rng: R,
    base: Option<BaseAppearance>,
    regenerations: u32,
}

impl AvatarComposer<ChaCha20Rng> {
    /// Reproducible composer driven by a `ChaCha20` stream.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> AvatarComposer<R> {
    pub const fn new(rng: R) -> Self {
        Self {
            rng,
            base: None,
            regenerations: 0,
        }
    }

    /// Cached base, if one has been generated.
    #[must_use]
    pub const fn base(&self) -> Option<&BaseAppearance> {
        self.base.as_ref()
    }

    /// Number of times the base has been (re)generated.
    #[must_use]
    pub const fn regenerations(&self) -> u32 {
        self.regenerations
    }

    /// Base for `sex`, regenerating only when the cached entry has a different key.
    pub fn base_for(&mut self, sex: Sex) -> &BaseAppearance {
        let stale = self.base.as_ref().is_none_or(|cached| cached.sex != sex);
        if stale {
            log::debug!("regenerating avatar base for {sex:?}");
            self.regenerations += 1;
            self.base = Some(BaseAppearance::generate(sex, &mut self.rng));
        }
        self.base
            .get_or_insert_with(|| BaseAppearance::generate(sex, &mut self.rng))
    }

    /// Compose the renderable configuration for `config`.
    pub fn compose(&mut self, config: &CharacterConfig) -> AvatarConfig {
        let traits = derive_traits(config);
        let base = self.base_for(Sex::from(traits.gender));
        overlay_traits(base, &traits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{HairColor, SkinTone};

    fn female(hair: HairColor) -> CharacterConfig {
        CharacterConfig {
            gender: Some(Gender::Female),
            age: Some(52),
            hair_color: Some(hair),
            ..CharacterConfig::default()
        }
    }

    #[test]
    fn hair_change_keeps_cached_base() {
        let mut composer = AvatarComposer::seeded(7);
        let first = composer.compose(&female(HairColor::Black));
        let base_before = composer.base().cloned();
        let second = composer.compose(&female(HairColor::Blonde));
        assert_eq!(composer.base().cloned(), base_before);
        assert_eq!(composer.regenerations(), 1);
        assert_eq!(first.hair_color, "#2C3E50");
        assert_eq!(second.hair_color, "#D4A537");
        assert_eq!(first.face_shape, second.face_shape);
        assert_eq!(first.shirt_color, second.shirt_color);
        assert_eq!(first.eye_style, second.eye_style);
    }

    #[test]
    fn gender_change_regenerates_base() {
        let mut composer = AvatarComposer::seeded(7);
        composer.compose(&female(HairColor::Black));
        assert_eq!(composer.base().map(|b| b.sex), Some(Sex::Woman));
        composer.compose(&CharacterConfig::default());
        assert_eq!(composer.base().map(|b| b.sex), Some(Sex::Man));
        assert_eq!(composer.regenerations(), 2);
    }

    #[test]
    fn overlay_pins_fixed_fields() {
        let mut composer = AvatarComposer::seeded(99);
        let cfg = CharacterConfig {
            skin_tone: Some(SkinTone::Light),
            ..CharacterConfig::default()
        };
        let avatar = composer.compose(&cfg);
        assert_eq!(avatar.sex, Sex::Man);
        assert_eq!(avatar.face_color, "#FDEBD0");
        assert_eq!(avatar.hat_color, HAT_COLOR);
        assert_eq!(avatar.bg_color, TRANSPARENT_BG);
        assert!(!avatar.is_gradient);
        assert!(!avatar.hair_color_random);
    }

    #[test]
    fn seeded_composers_agree() {
        let mut a = AvatarComposer::seeded(1234);
        let mut b = AvatarComposer::seeded(1234);
        a.base_for(Sex::Woman);
        b.base_for(Sex::Woman);
        assert_eq!(a.base(), b.base());
    }

    #[test]
    fn man_base_uses_masculine_palette() {
        let mut composer = AvatarComposer::seeded(5);
        for _ in 0..16 {
            let base = BaseAppearance::generate(Sex::Man, &mut composer.rng);
            assert!(MAN_HAIR.contains(&base.hair_style));
            assert_eq!(base.eye_brow_style, EyebrowStyle::Up);
        }
    }

    #[test]
    fn avatar_config_serializes_primitive_props() {
        let mut composer = AvatarComposer::seeded(3);
        let avatar = composer.compose(&female(HairColor::Gray));
        let json = serde_json::to_value(&avatar).unwrap();
        assert_eq!(json["sex"], "woman");
        assert_eq!(json["hairStyle"], "womanLong");
        assert_eq!(json["eyeBrowStyle"], "upWoman");
        assert_eq!(json["shirtStyle"], "hoody");
    }

    #[test]
    fn pick_covers_the_whole_palette() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let drawn: std::collections::BTreeSet<&str> =
            (0..200).map(|_| pick(&mut rng, &SHIRT_COLORS)).collect();
        assert_eq!(drawn.len(), SHIRT_COLORS.len());
        assert_eq!(pick(&mut rng, &["only"]), "only");
    }
}
