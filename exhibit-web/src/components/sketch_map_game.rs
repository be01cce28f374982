//! Hand-drawn junction with three paths. The character walks down the chosen
//! path, reports the choice, then returns to the junction.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use exhibit_core::fork::{ForkConfig, ForkGate, NavDirection};
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub character_avatar: AttrValue,
    #[prop_or_default]
    pub current_direction: Option<NavDirection>,
    pub on_choose_direction: Callback<NavDirection>,
    #[prop_or(true)]
    pub can_navigate: bool,
    #[prop_or_default]
    pub rain: bool,
    #[prop_or_default]
    pub config: ForkConfig,
}

fn clock_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::now_ms()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_reset(gate: Rc<RefCell<ForkGate>>, redraw: UseForceUpdateHandle, delay_ms: u64) {
    let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = crate::dom::sleep_ms(delay).await {
            crate::dom::console_error(&crate::dom::js_error_message(&err));
        }
        gate.borrow_mut().settle();
        redraw.force_update();
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_reset(gate: Rc<RefCell<ForkGate>>, redraw: UseForceUpdateHandle, delay_ms: u64) {
    let _ = (gate, redraw, delay_ms);
}

const fn button_class(direction: NavDirection) -> &'static str {
    match direction {
        NavDirection::Left => "sketch-map-btn sketch-map-btn-left",
        NavDirection::Straight => "sketch-map-btn sketch-map-btn-straight",
        NavDirection::Right => "sketch-map-btn sketch-map-btn-right",
    }
}

/// Direction name for the live region, without the button arrows.
const fn spoken_key(direction: NavDirection) -> &'static str {
    match direction {
        NavDirection::Left => "fork.spoken.left",
        NavDirection::Straight => "fork.spoken.straight",
        NavDirection::Right => "fork.spoken.right",
    }
}

fn paper() -> Html {
    html! {
        <svg viewBox="0 0 320 200" class="sketch-map-svg" aria-hidden="true">
            <ellipse cx="160" cy="100" rx="85" ry="55" fill="hsl(35 28% 92%)" stroke="hsl(30 25% 75%)" stroke-width="2" class="sketch-path-bg"/>
            <path d="M 160 100 Q 80 95 55 70" fill="none" stroke="hsl(30 25% 70%)" stroke-width="3" stroke-linecap="round" class="sketch-path"/>
            <path d="M 160 100 Q 160 55 160 25" fill="none" stroke="hsl(30 25% 70%)" stroke-width="3" stroke-linecap="round" class="sketch-path"/>
            <path d="M 160 100 Q 240 95 265 70" fill="none" stroke="hsl(30 25% 70%)" stroke-width="3" stroke-linecap="round" class="sketch-path"/>
            <circle cx="160" cy="100" r="22" fill="hsl(35 30% 96%)" stroke="hsl(30 25% 65%)" stroke-width="2" class="sketch-junction"/>
        </svg>
    }
}

#[function_component(SketchMapGame)]
pub fn sketch_map_game(p: &Props) -> Html {
    let config = p.config;
    let can_navigate = p.can_navigate;
    let gate = use_mut_ref(move || ForkGate::new(config).with_navigation(can_navigate));
    let redraw = use_force_update();

    {
        let mut g = gate.borrow_mut();
        g.set_navigation(p.can_navigate);
        g.tick(clock_ms());
    }

    let choose = {
        let gate = gate.clone();
        let redraw = redraw.clone();
        let on_choose = p.on_choose_direction.clone();
        Callback::from(move |direction: NavDirection| {
            let accepted = gate.borrow_mut().choose(direction, clock_ms());
            if let Some(direction) = accepted {
                on_choose.emit(direction);
                redraw.force_update();
                let delay = gate.borrow().config().reset_delay_ms;
                schedule_reset(gate.clone(), redraw.clone(), delay);
            }
        })
    };

    let (position, open, animating) = {
        let g = gate.borrow();
        (g.position(), g.is_open(), g.animating())
    };
    let heading = p.current_direction.map(|direction| {
        let name = i18n::t(spoken_key(direction));
        i18n::tr("fork.chose", &BTreeMap::from([("direction", name.as_str())]))
    });

    html! {
        <div class="sketch-map-game" data-animating={animating.map(NavDirection::as_str)}>
            <div class="sketch-map-paper">
                if p.rain {
                    <div class="sketch-map-rain">
                        <span class="text-xs font-medium opacity-90">{ i18n::t("fork.rain") }</span>
                    </div>
                }
                { paper() }
                <div class="sketch-character" style={position.css()} role="img" aria-label={i18n::t("fork.character")}>
                    <span class="sketch-character-emoji">{ p.character_avatar.clone() }</span>
                </div>
                <div class="sketch-map-fork-label">
                    <span class="text-xs font-medium text-muted-foreground">{ i18n::t("fork.prompt") }</span>
                </div>
                if let Some(heading) = heading {
                    <p class="sr-only" aria-live="polite">{ heading }</p>
                }
            </div>
            <div class="sketch-map-buttons">
                { for NavDirection::ALL.into_iter().map(|direction| {
                    let choose = choose.clone();
                    let onclick = Callback::from(move |_| choose.emit(direction));
                    html! {
                        <button type="button" class={button_class(direction)} {onclick} disabled={!open} data-direction={direction.as_str()}>
                            { i18n::t(direction.i18n_key()) }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
