use std::collections::BTreeMap;

use exhibit_core::overlay::{LayerKind, OverlayShape, Paint};
use exhibit_core::{
    AvatarComposer, CharacterConfig, OverlayInput, condition_badges, derive_traits,
    overlay_layers,
};
use yew::prelude::*;

use crate::components::avatar_face::avatar_face;
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: CharacterConfig,
    #[prop_or(200)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    /// Fixes the random base appearance; drawn from the browser when unset.
    #[prop_or_default]
    pub seed: Option<u64>,
}

fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
        seed
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5EED_AB1E
    }
}

fn paint_attrs(paint: Paint) -> (String, Option<String>, Option<String>) {
    let fill = paint.fill.unwrap_or("none").to_string();
    let (stroke, width) = paint
        .stroke
        .map_or((None, None), |(c, w)| (Some(c.to_string()), Some(w.to_string())));
    (fill, stroke, width)
}

fn shape_html(shape: &OverlayShape) -> Html {
    match *shape {
        OverlayShape::Stroke {
            d,
            color,
            width,
            opacity,
        } => html! {
            <path d={d} stroke={color} stroke-width={width.to_string()} opacity={opacity.to_string()} stroke-linecap="round" fill="none"/>
        },
        OverlayShape::Circle {
            cx,
            cy,
            r,
            paint,
            opacity,
        } => {
            let (fill, stroke, width) = paint_attrs(paint);
            html! {
                <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} fill={fill} stroke={stroke} stroke-width={width} opacity={opacity.to_string()}/>
            }
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
            let (fill, stroke, stroke_width) = paint_attrs(paint);
            html! {
                <rect x={x.to_string()} y={y.to_string()} width={width.to_string()} height={height.to_string()} rx={rx.to_string()} fill={fill} stroke={stroke} stroke-width={stroke_width} opacity={opacity.to_string()}/>
            }
        }
    }
}

fn overlay_html(input: &OverlayInput, size: u32) -> Html {
    let layers = overlay_layers(input);
    if layers.is_empty() {
        return Html::default();
    }
    let size = size.to_string();
    html! {
        <svg class="avatar-overlay" width={size.clone()} height={size} viewBox="0 0 200 200" fill="none" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
            { for layers.iter().map(|layer| {
                let class = match layer.kind {
                    LayerKind::Eyelashes => classes!("eyelashes"),
                    LayerKind::Wrinkles => classes!("wrinkles", format!("tier-{}", input.wrinkle_tier.level())),
                    LayerKind::Accessory(style) => classes!("accessory", style.as_str()),
                };
                html! { <g class={class}>{ for layer.shapes.iter().map(shape_html) }</g> }
            }) }
        </svg>
    }
}

#[function_component(CharacterAvatar)]
pub fn character_avatar(p: &Props) -> Html {
    let seed = p.seed;
    let composer = use_mut_ref(move || AvatarComposer::seeded(seed.unwrap_or_else(entropy_seed)));
    let avatar = composer.borrow_mut().compose(&p.config);

    let traits = derive_traits(&p.config);
    let overlay = OverlayInput::new(&traits, p.config.conditions());
    let badges = condition_badges(p.config.conditions());

    let name = p
        .config
        .name
        .clone()
        .unwrap_or_else(|| i18n::t("fork.character"));
    let label = i18n::tr("avatar.label", &BTreeMap::from([("name", name.as_str())]));
    let style = format!("width: {0}px; height: {0}px;", p.size);

    html! {
        <div class={classes!("character-avatar", p.class.clone())} style={style} role="img" aria-label={label}>
            <div class="avatar-frame" aria-hidden="true"></div>
            { avatar_face(&avatar, p.size) }
            { overlay_html(&overlay, p.size) }
            if !badges.is_empty() {
                <div class="condition-badges" aria-label={i18n::t("avatar.conditions")}>
                    { for badges.iter().map(|badge| html! {
                        <span class="condition-badge" title={badge.condition.to_string()} data-condition={badge.condition.to_string()}>
                            { badge.icon }
                        </span>
                    }) }
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exhibit_core::{AccessoryStyle, Gender, WrinkleTier};

    #[test]
    fn empty_overlay_renders_nothing() {
        let input = OverlayInput {
            gender: Gender::Male,
            wrinkle_tier: WrinkleTier::NONE,
            accessory: AccessoryStyle::None,
            conditions: Vec::new(),
        };
        assert_eq!(overlay_html(&input, 200), Html::default());
    }

    #[test]
    fn paint_without_stroke_omits_outline() {
        let (fill, stroke, width) = paint_attrs(Paint {
            fill: Some("#FFD700"),
            stroke: None,
        });
        assert_eq!(fill, "#FFD700");
        assert!(stroke.is_none() && width.is_none());
    }
}
