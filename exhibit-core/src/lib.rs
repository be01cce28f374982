//! Hidden Conditions exhibit core
//!
//! Platform-agnostic logic for the exhibit: character traits and their derived
//! rendering rules, the avatar composer, overlay geometry, the fork mini game,
//! the map transparency flow and the landmark/persona data model.
//! This crate has no UI or browser dependencies.

pub mod character;
pub mod composer;
pub mod derivation;
pub mod exhibit;
pub mod fork;
pub mod map;
pub mod overlay;
pub mod settings;
pub mod traits;
pub mod transparency;

// Re-export commonly used types
pub use character::{
    AccessoryStyle, AgeGroup, BudgetLevel, CharacterConfig, ClothingStyle, Gender, GlassesStyle,
    HairColor, HairStyle, HatStyle, HealthCondition, SkinTone, UnknownLiteral,
};
pub use composer::{AvatarComposer, AvatarConfig, BaseAppearance, FaceShape, Sex, overlay_traits};
pub use derivation::{DerivedTraits, WrinkleTier, derive_traits};
pub use exhibit::{
    ConditionKind, DataError, ExhibitData, HiddenCondition, Impact, Landmark, MapKnowledge,
    Multiplier, Persona, PlayerStats, Region,
};
pub use fork::{ForkConfig, ForkGate, ForkPosition, NavDirection};
pub use map::MapViewport;
pub use overlay::{
    ConditionBadge, LayerKind, OverlayInput, OverlayLayer, OverlayShape, condition_badges,
    overlay_layers, render_svg,
};
pub use settings::{MemoryStore, Setting, SettingsStore, StoredLiteral};
pub use traits::{Clothing, ShirtStyle, clothing_for, condition_icon, hair_hex, skin_hex};
pub use transparency::{Decision, MapTransparencyFlow, Step};

/// Trait for abstracting exhibit data loading.
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load landmarks and personas from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read or parsed.
    fn load_exhibit_data(&self) -> Result<ExhibitData, Self::Error>;
}

/// Loader over a JSON document already in memory.
#[derive(Debug, Clone, Copy)]
pub struct StaticDataLoader<'a> {
    json: &'a str,
}

impl<'a> StaticDataLoader<'a> {
    #[must_use]
    pub const fn new(json: &'a str) -> Self {
        Self { json }
    }
}

impl DataLoader for StaticDataLoader<'_> {
    type Error = DataError;

    fn load_exhibit_data(&self) -> Result<ExhibitData, Self::Error> {
        ExhibitData::from_json(self.json)
    }
}
