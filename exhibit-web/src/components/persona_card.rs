use exhibit_core::exhibit::{MapKnowledge, Persona};
use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub persona: Persona,
    #[prop_or_default]
    pub is_selected: bool,
    #[prop_or_default]
    pub on_click: Option<Callback<String>>,
}

const fn knowledge_key(level: MapKnowledge) -> &'static str {
    match level {
        MapKnowledge::Low => "persona.knowledge.low",
        MapKnowledge::Medium => "persona.knowledge.medium",
        MapKnowledge::High => "persona.knowledge.high",
    }
}

fn mini_stat(label: String, value: i32) -> Html {
    html! {
        <span class="mini-stat" role="text">
            <span class="mini-stat-label">{ label }</span>
            <span class="mini-stat-value">{ value }</span>
        </span>
    }
}

#[function_component(PersonaCard)]
pub fn persona_card(p: &Props) -> Html {
    let persona = &p.persona;
    let onclick = {
        let cb = p.on_click.clone();
        let id = persona.id.clone();
        Callback::from(move |_| {
            if let Some(cb) = cb.as_ref() {
                cb.emit(id.clone());
            }
        })
    };
    html! {
        <button
            type="button"
            {onclick}
            class={classes!("persona-card", "touch-target", p.is_selected.then_some("exhibit-card-selected"))}
            aria-pressed={p.is_selected.to_string()}
            data-persona={persona.id.clone()}
        >
            <div class="persona-card-header">
                <div class="persona-avatar" aria-hidden="true">{ persona.avatar.clone() }</div>
                <div>
                    <h3 class="persona-name">{ persona.name.clone() }</h3>
                    <p class="persona-role">{ persona.role.clone() }</p>
                </div>
            </div>
            <div class="persona-card-body">
                <p class="persona-description">{ persona.description.clone() }</p>
                <div class="persona-stats">
                    { mini_stat(i18n::t("stats.health"), persona.initial_health) }
                    { mini_stat(i18n::t("stats.stamina"), persona.initial_stamina) }
                    { mini_stat(i18n::t("stats.money"), persona.initial_money) }
                </div>
                <p class="persona-knowledge">{ i18n::t(knowledge_key(persona.map_knowledge)) }</p>
            </div>
        </button>
    }
}
