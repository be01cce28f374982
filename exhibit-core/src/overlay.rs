//! Decorative vector layers drawn on top of the composed avatar.
//!
//! Geometry is fixed on a 200×200 view box. Layers depend only on gender,
//! wrinkle tier, accessory and the condition list, so rendering is a pure
//! function of those inputs.

use serde::Serialize;
use std::fmt::Write as _;

use crate::character::{AccessoryStyle, CharacterConfig, Gender, HealthCondition};
use crate::derivation::{DerivedTraits, WrinkleTier, derive_traits};
use crate::traits::condition_icon;

pub const VIEW_BOX: u32 = 200;
pub const MAX_BADGES: usize = 4;

const LASH: &str = "#2C3E50";
const WRINKLE: &str = "#5D4037";
const GOLD: &str = "#FFD700";
const SCAR: &str = "#8D6E63";
const BANDANA: &str = "#E53935";
const BANDANA_SHADE: &str = "#C62828";

/// Fill and optional outline of a closed shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Paint {
    pub fill: Option<&'static str>,
    pub stroke: Option<(&'static str, f32)>,
}

impl Paint {
    const fn fill(color: &'static str) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    const fn outline(color: &'static str, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some((color, width)),
        }
    }

    const fn filled_outline(fill: &'static str, stroke: &'static str, width: f32) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some((stroke, width)),
        }
    }
}

/// One vector primitive of an overlay layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OverlayShape {
    /// Open path with a round line cap and no fill.
    Stroke {
        d: &'static str,
        color: &'static str,
        width: f32,
        opacity: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        paint: Paint,
        opacity: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
        paint: Paint,
        opacity: f32,
    },
}

const fn stroke(d: &'static str, color: &'static str, width: f32, opacity: f32) -> OverlayShape {
    OverlayShape::Stroke {
        d,
        color,
        width,
        opacity,
    }
}

const fn circle(cx: f32, cy: f32, r: f32, paint: Paint, opacity: f32) -> OverlayShape {
    OverlayShape::Circle {
        cx,
        cy,
        r,
        paint,
        opacity,
    }
}

const fn rect(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    rx: f32,
    paint: Paint,
    opacity: f32,
) -> OverlayShape {
    OverlayShape::Rect {
        x,
        y,
        width,
        height,
        rx,
        paint,
        opacity,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Eyelashes,
    Wrinkles,
    Accessory(AccessoryStyle),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayer {
    pub kind: LayerKind,
    pub shapes: Vec<OverlayShape>,
}

/// Inputs the overlay depends on, usually taken from [`DerivedTraits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayInput {
    pub gender: Gender,
    pub wrinkle_tier: WrinkleTier,
    pub accessory: AccessoryStyle,
    pub conditions: Vec<HealthCondition>,
}

impl OverlayInput {
    #[must_use]
    pub fn new(traits: &DerivedTraits, conditions: &[HealthCondition]) -> Self {
        Self {
            gender: traits.gender,
            wrinkle_tier: traits.wrinkle_tier,
            accessory: traits.accessory_style,
            conditions: conditions.to_vec(),
        }
    }

    #[must_use]
    pub fn from_config(config: &CharacterConfig) -> Self {
        Self::new(&derive_traits(config), config.conditions())
    }
}

const EYELASHES: [OverlayShape; 6] = [
    stroke("M 73 86 L 70 82", LASH, 1.2, 0.5),
    stroke("M 77 84.5 L 75 80", LASH, 1.2, 0.5),
    stroke("M 81 84 L 81 80", LASH, 1.2, 0.5),
    stroke("M 119 84 L 119 80", LASH, 1.2, 0.5),
    stroke("M 123 84.5 L 125 80", LASH, 1.2, 0.5),
    stroke("M 127 86 L 130 82", LASH, 1.2, 0.5),
];

fn wrinkle_shapes(tier: WrinkleTier) -> Vec<OverlayShape> {
    let deep = tier >= WrinkleTier::DEEP;
    let mut shapes = Vec::new();
    if tier >= WrinkleTier::LIGHT {
        let opacity = if deep {
            0.28
        } else if tier >= WrinkleTier::MODERATE {
            0.2
        } else {
            0.12
        };
        let width = if deep { 1.4 } else { 1.0 };
        shapes.push(stroke("M 72 68 Q 100 64 128 68", WRINKLE, width, opacity));
    }
    if tier >= WrinkleTier::MODERATE {
        let pick = |deep_value: f32, value: f32| if deep { deep_value } else { value };
        shapes.extend([
            stroke("M 75 74 Q 100 71 125 74", WRINKLE, pick(1.2, 0.9), pick(0.24, 0.15)),
            // crow's feet
            stroke("M 62 90 Q 58 86 55 83", WRINKLE, 0.9, pick(0.25, 0.15)),
            stroke("M 62 91 Q 57 90 53 88", WRINKLE, 0.8, pick(0.22, 0.12)),
            stroke("M 138 90 Q 142 86 145 83", WRINKLE, 0.9, pick(0.25, 0.15)),
            stroke("M 138 91 Q 143 90 147 88", WRINKLE, 0.8, pick(0.22, 0.12)),
            // nasolabial folds
            stroke("M 82 108 Q 78 118 80 130", WRINKLE, pick(1.3, 1.0), pick(0.25, 0.15)),
            stroke("M 118 108 Q 122 118 120 130", WRINKLE, pick(1.3, 1.0), pick(0.25, 0.15)),
        ]);
    }
    if deep {
        shapes.extend([
            stroke("M 78 80 Q 100 77.5 122 80", WRINKLE, 1.0, 0.18),
            stroke("M 74 97 Q 80 99 88 97", WRINKLE, 0.8, 0.18),
            stroke("M 112 97 Q 120 99 126 97", WRINKLE, 0.8, 0.18),
        ]);
    }
    shapes
}

fn accessory_shapes(accessory: AccessoryStyle) -> Vec<OverlayShape> {
    match accessory {
        AccessoryStyle::None => Vec::new(),
        AccessoryStyle::Earrings => vec![
            circle(54.0, 105.0, 4.5, Paint::outline(GOLD, 1.8), 0.85),
            circle(54.0, 109.0, 1.5, Paint::fill(GOLD), 0.9),
            circle(146.0, 105.0, 4.5, Paint::outline(GOLD, 1.8), 0.85),
            circle(146.0, 109.0, 1.5, Paint::fill(GOLD), 0.9),
        ],
        AccessoryStyle::Headphones => vec![
            stroke("M 52 82 Q 52 42 100 40 Q 148 42 148 82", "#333", 4.5, 0.85),
            rect(42.0, 80.0, 16.0, 22.0, 5.0, Paint::filled_outline("#444", "#333", 1.5), 0.9),
            rect(45.0, 84.0, 10.0, 14.0, 3.0, Paint::fill("#666"), 0.6),
            rect(142.0, 80.0, 16.0, 22.0, 5.0, Paint::filled_outline("#444", "#333", 1.5), 0.9),
            rect(145.0, 84.0, 10.0, 14.0, 3.0, Paint::fill("#666"), 0.6),
        ],
        AccessoryStyle::Scar => vec![
            stroke("M 70 100 L 82 115", SCAR, 2.0, 0.45),
            stroke("M 72 103 L 76 101", SCAR, 1.0, 0.3),
            stroke("M 74 107 L 78 105", SCAR, 1.0, 0.3),
            stroke("M 77 111 L 81 109", SCAR, 1.0, 0.3),
        ],
        AccessoryStyle::Bandana => vec![
            stroke("M 56 72 Q 100 62 144 72", BANDANA, 8.0, 0.8),
            stroke("M 56 72 Q 100 64 144 72", BANDANA_SHADE, 2.0, 0.5),
            circle(145.0, 76.0, 4.0, Paint::fill(BANDANA), 0.8),
            stroke("M 148 78 Q 156 86 152 96", BANDANA, 3.0, 0.7),
            stroke("M 147 80 Q 160 84 158 94", BANDANA, 2.5, 0.6),
        ],
    }
}

/// Overlay layers in paint order. Empty layers are omitted.
#[must_use]
pub fn overlay_layers(input: &OverlayInput) -> Vec<OverlayLayer> {
    let mut layers = Vec::with_capacity(3);
    if input.gender.is_female() {
        layers.push(OverlayLayer {
            kind: LayerKind::Eyelashes,
            shapes: EYELASHES.to_vec(),
        });
    }
    let wrinkles = wrinkle_shapes(input.wrinkle_tier);
    if !wrinkles.is_empty() {
        layers.push(OverlayLayer {
            kind: LayerKind::Wrinkles,
            shapes: wrinkles,
        });
    }
    let accessory = accessory_shapes(input.accessory);
    if !accessory.is_empty() {
        layers.push(OverlayLayer {
            kind: LayerKind::Accessory(input.accessory),
            shapes: accessory,
        });
    }
    layers
}

/// Small icon chip shown under the avatar for one condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionBadge {
    pub condition: HealthCondition,
    pub icon: &'static str,
}

/// Badges for the first [`MAX_BADGES`] conditions.
#[must_use]
pub fn condition_badges(conditions: &[HealthCondition]) -> Vec<ConditionBadge> {
    conditions
        .iter()
        .take(MAX_BADGES)
        .map(|condition| ConditionBadge {
            condition: condition.clone(),
            icon: condition_icon(condition),
        })
        .collect()
}

fn write_paint(out: &mut String, paint: Paint) {
    let _ = write!(out, r#" fill="{}""#, paint.fill.unwrap_or("none"));
    if let Some((color, width)) = paint.stroke {
        let _ = write!(out, r#" stroke="{color}" stroke-width="{width}""#);
    }
}

fn write_shape(out: &mut String, shape: &OverlayShape) {
    match *shape {
        OverlayShape::Stroke {
            d,
            color,
            width,
            opacity,
        } => {
            let _ = write!(
                out,
                r#"<path d="{d}" stroke="{color}" stroke-width="{width}" opacity="{opacity}" stroke-linecap="round" fill="none"/>"#
            );
        }
        OverlayShape::Circle {
            cx,
            cy,
            r,
            paint,
            opacity,
        } => {
            let _ = write!(out, r#"<circle cx="{cx}" cy="{cy}" r="{r}""#);
            write_paint(out, paint);
            let _ = write!(out, r#" opacity="{opacity}"/>"#);
        }
        OverlayShape::Rect {
            x,
            y,
            width,
            height,
            rx,
            paint,
            opacity,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" rx="{rx}""#
            );
            write_paint(out, paint);
            let _ = write!(out, r#" opacity="{opacity}"/>"#);
        }
    }
}

/// Serialize the overlay as a standalone SVG document of `size` pixels.
#[must_use]
pub fn render_svg(input: &OverlayInput, size: u32) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {VIEW_BOX} {VIEW_BOX}" fill="none">"#
    );
    for layer in overlay_layers(input) {
        let class = match layer.kind {
            LayerKind::Eyelashes => "eyelashes".to_string(),
            LayerKind::Wrinkles => format!("wrinkles tier-{}", input.wrinkle_tier.level()),
            LayerKind::Accessory(style) => format!("accessory {style}"),
        };
        let _ = write!(out, r#"<g class="{class}">"#);
        for shape in &layer.shapes {
            write_shape(&mut out, shape);
        }
        out.push_str("</g>");
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(gender: Gender, age: u32, accessory: AccessoryStyle) -> OverlayInput {
        OverlayInput {
            gender,
            wrinkle_tier: WrinkleTier::for_age(age),
            accessory,
            conditions: Vec::new(),
        }
    }

    fn wrinkle_count(layers: &[OverlayLayer]) -> usize {
        layers
            .iter()
            .find(|l| l.kind == LayerKind::Wrinkles)
            .map_or(0, |l| l.shapes.len())
    }

    #[test]
    fn young_man_without_accessory_has_no_layers() {
        assert!(overlay_layers(&input(Gender::Male, 20, AccessoryStyle::None)).is_empty());
    }

    #[test]
    fn eyelashes_only_for_women() {
        let layers = overlay_layers(&input(Gender::Female, 20, AccessoryStyle::None));
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].kind, LayerKind::Eyelashes);
        assert_eq!(layers[0].shapes.len(), 6);
    }

    #[test]
    fn wrinkle_tiers_are_cumulative() {
        let counts: Vec<usize> = [20, 40, 55, 70]
            .into_iter()
            .map(|age| {
                wrinkle_count(&overlay_layers(&input(
                    Gender::Male,
                    age,
                    AccessoryStyle::None,
                )))
            })
            .collect();
        assert_eq!(counts, vec![0, 1, 8, 11]);
    }

    #[test]
    fn forehead_line_darkens_with_tier() {
        let opacity_at = |age| {
            let layers = overlay_layers(&input(Gender::Male, age, AccessoryStyle::None));
            match layers[0].shapes[0] {
                OverlayShape::Stroke { opacity, width, .. } => (opacity, width),
                _ => (0.0, 0.0),
            }
        };
        let (light, light_w) = opacity_at(40);
        let (moderate, moderate_w) = opacity_at(55);
        let (deep, deep_w) = opacity_at(80);
        assert!(light < moderate && moderate < deep);
        assert!(light_w <= moderate_w && moderate_w < deep_w);
    }

    #[test]
    fn each_accessory_renders_one_layer() {
        for accessory in AccessoryStyle::ALL {
            let layers = overlay_layers(&input(Gender::Male, 20, *accessory));
            let accessory_layers: Vec<_> = layers
                .iter()
                .filter(|l| matches!(l.kind, LayerKind::Accessory(_)))
                .collect();
            if *accessory == AccessoryStyle::None {
                assert!(accessory_layers.is_empty());
            } else {
                assert_eq!(accessory_layers.len(), 1);
                assert_eq!(accessory_layers[0].kind, LayerKind::Accessory(*accessory));
            }
        }
    }

    #[test]
    fn badges_truncate_at_four_with_fallback() {
        let conditions: Vec<HealthCondition> = [
            "asthma",
            "mystery-rash",
            "vertigo",
            "arthritis",
            "poor-eyesight",
        ]
        .into_iter()
        .map(HealthCondition::from)
        .collect();
        let badges = condition_badges(&conditions);
        assert_eq!(badges.len(), MAX_BADGES);
        assert_eq!(badges[0].icon, "🫁");
        assert_eq!(badges[1].icon, "⚠️");
        assert_eq!(badges[3].condition, HealthCondition::Arthritis);
    }

    #[test]
    fn svg_contains_layers_and_geometry() {
        let svg = render_svg(&input(Gender::Female, 70, AccessoryStyle::Earrings), 160);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 200 200""#));
        assert!(svg.contains(r#"class="wrinkles tier-3""#));
        assert!(svg.contains(r#"class="accessory earrings""#));
        assert!(svg.contains(
            r##"<circle cx="54" cy="105" r="4.5" fill="none" stroke="#FFD700" stroke-width="1.8" opacity="0.85"/>"##
        ));
        assert!(svg.contains(r#"d="M 73 86 L 70 82""#));
        assert!(svg.ends_with("</svg>"));
    }
}
