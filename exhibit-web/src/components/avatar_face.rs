//! Flat SVG face drawn from an [`AvatarConfig`] on the shared 200×200 canvas.

use exhibit_core::composer::{AvatarConfig, FaceShape, Sex};
use exhibit_core::derivation::{EarSize, EyeStyle, EyebrowStyle, MouthStyle, NoseStyle};
use exhibit_core::traits::ShirtStyle;
use exhibit_core::{GlassesStyle, HairStyle, HatStyle};
use yew::prelude::*;

const INK: &str = "#2C2C2C";

fn head(shape: FaceShape, color: &str) -> Html {
    match shape {
        FaceShape::Round => html! {
            <circle class="avatar-head" cx="100" cy="96" r="44" fill={color.to_string()}/>
        },
        FaceShape::Oval => html! {
            <ellipse class="avatar-head" cx="100" cy="96" rx="40" ry="48" fill={color.to_string()}/>
        },
        FaceShape::Square => html! {
            <rect class="avatar-head" x="58" y="52" width="84" height="90" rx="22" fill={color.to_string()}/>
        },
    }
}

fn ears(size: EarSize, color: &str) -> Html {
    let r = match size {
        EarSize::Small => "7",
        EarSize::Big => "10",
    };
    html! {
        <g class="avatar-ears" fill={color.to_string()}>
            <circle cx="56" cy="98" r={r}/>
            <circle cx="144" cy="98" r={r}/>
        </g>
    }
}

fn hair(style: HairStyle, color: &str) -> Html {
    let d = match style {
        HairStyle::Normal => "M 58 84 Q 60 48 100 46 Q 140 48 142 84 Q 128 62 100 62 Q 72 62 58 84 Z",
        HairStyle::Thick => "M 54 90 Q 52 40 100 38 Q 148 40 146 90 Q 134 58 100 58 Q 66 58 54 90 Z",
        HairStyle::Mohawk => "M 90 58 Q 92 26 100 20 Q 108 26 110 58 Z",
        HairStyle::WomanLong => {
            "M 56 150 Q 44 60 100 44 Q 156 60 144 150 L 132 150 Q 140 78 100 64 Q 60 78 68 150 Z"
        }
        HairStyle::WomanShort => {
            "M 54 110 Q 48 48 100 44 Q 152 48 146 110 L 138 110 Q 138 66 100 62 Q 62 66 62 110 Z"
        }
    };
    html! { <path class={classes!("avatar-hair", style.as_str())} d={d} fill={color.to_string()}/> }
}

fn eyes(style: EyeStyle) -> Html {
    match style {
        EyeStyle::Circle => html! {
            <g class="avatar-eyes circle" fill={INK}>
                <circle cx="82" cy="92" r="5"/>
                <circle cx="118" cy="92" r="5"/>
            </g>
        },
        EyeStyle::Oval => html! {
            <g class="avatar-eyes oval" fill={INK}>
                <ellipse cx="82" cy="92" rx="4" ry="6"/>
                <ellipse cx="118" cy="92" rx="4" ry="6"/>
            </g>
        },
        EyeStyle::Smile => html! {
            <g class="avatar-eyes smile" stroke={INK} stroke-width="2.5" fill="none" stroke-linecap="round">
                <path d="M 76 94 Q 82 87 88 94"/>
                <path d="M 112 94 Q 118 87 124 94"/>
            </g>
        },
    }
}

fn brows(style: EyebrowStyle) -> Html {
    let (left, right) = match style {
        EyebrowStyle::Up => ("M 74 80 L 90 78", "M 110 78 L 126 80"),
        EyebrowStyle::UpWoman => ("M 74 81 Q 82 74 90 78", "M 110 78 Q 118 74 126 81"),
    };
    html! {
        <g class="avatar-brows" stroke={INK} stroke-width="2.5" fill="none" stroke-linecap="round">
            <path d={left}/>
            <path d={right}/>
        </g>
    }
}

fn nose(style: NoseStyle) -> Html {
    let d = match style {
        NoseStyle::Short => "M 98 102 Q 100 108 103 106",
        NoseStyle::Long => "M 100 96 L 97 112 Q 100 115 104 112",
        NoseStyle::Round => "M 96 106 Q 100 112 104 106",
    };
    html! { <path class="avatar-nose" d={d} stroke={INK} stroke-width="2" fill="none" stroke-linecap="round"/> }
}

fn mouth(style: MouthStyle) -> Html {
    match style {
        MouthStyle::Laugh => html! {
            <path class="avatar-mouth laugh" d="M 86 118 Q 100 136 114 118 Z" fill={INK}/>
        },
        MouthStyle::Smile => html! {
            <path class="avatar-mouth smile" d="M 88 120 Q 100 130 112 120" stroke={INK} stroke-width="2.5" fill="none" stroke-linecap="round"/>
        },
        MouthStyle::Peace => html! {
            <path class="avatar-mouth peace" d="M 92 122 L 108 122" stroke={INK} stroke-width="2.5" stroke-linecap="round"/>
        },
    }
}

fn glasses(style: GlassesStyle) -> Html {
    match style {
        GlassesStyle::None => Html::default(),
        GlassesStyle::Round => html! {
            <g class="avatar-glasses round" stroke={INK} stroke-width="2" fill="none">
                <circle cx="82" cy="92" r="11"/>
                <circle cx="118" cy="92" r="11"/>
                <path d="M 93 92 L 107 92"/>
            </g>
        },
        GlassesStyle::Square => html! {
            <g class="avatar-glasses square" stroke={INK} stroke-width="2" fill="none">
                <rect x="70" y="83" width="24" height="18" rx="3"/>
                <rect x="106" y="83" width="24" height="18" rx="3"/>
                <path d="M 94 92 L 106 92"/>
            </g>
        },
    }
}

fn hat(style: HatStyle, color: &str) -> Html {
    match style {
        HatStyle::None => Html::default(),
        HatStyle::Beanie => html! {
            <g class="avatar-hat beanie" fill={color.to_string()}>
                <path d="M 56 76 Q 58 34 100 32 Q 142 34 144 76 Z"/>
                <circle cx="100" cy="30" r="7"/>
            </g>
        },
        HatStyle::Turban => html! {
            <path class="avatar-hat turban" d="M 54 78 Q 50 30 100 28 Q 150 30 146 78 Q 124 58 100 66 Q 76 58 54 78 Z" fill={color.to_string()}/>
        },
    }
}

fn shirt(style: ShirtStyle, sex: Sex, color: &str) -> Html {
    let body = "M 40 200 Q 44 150 100 146 Q 156 150 160 200 Z";
    let detail = match style {
        ShirtStyle::Hoody => html! {
            <path d="M 80 150 Q 100 170 120 150" stroke="rgba(0,0,0,0.25)" stroke-width="3" fill="none"/>
        },
        ShirtStyle::Polo => html! {
            <path d="M 88 148 L 100 164 L 112 148" stroke="rgba(0,0,0,0.3)" stroke-width="3" fill="none"/>
        },
        ShirtStyle::Short => Html::default(),
    };
    let sex_class = match sex {
        Sex::Man => "man",
        Sex::Woman => "woman",
    };
    html! {
        <g class={classes!("avatar-shirt", style.as_str(), sex_class)}>
            <path d={body} fill={color.to_string()}/>
            { detail }
        </g>
    }
}

/// Render `config` as an inline SVG of `size` pixels.
#[must_use]
pub fn avatar_face(config: &AvatarConfig, size: u32) -> Html {
    let size = size.to_string();
    html! {
        <svg class="avatar-face" width={size.clone()} height={size} viewBox="0 0 200 200" xmlns="http://www.w3.org/2000/svg" role="presentation" aria-hidden="true">
            <circle class="avatar-bg" cx="100" cy="100" r="100" fill={config.bg_color.clone()}/>
            { shirt(config.shirt_style, config.sex, &config.shirt_color) }
            { ears(config.ear_size, &config.face_color) }
            { head(config.face_shape, &config.face_color) }
            { hair(config.hair_style, &config.hair_color) }
            { eyes(config.eye_style) }
            { brows(config.eye_brow_style) }
            { nose(config.nose_style) }
            { mouth(config.mouth_style) }
            { glasses(config.glasses_style) }
            { hat(config.hat_style, &config.hat_color) }
        </svg>
    }
}
