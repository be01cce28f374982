use exhibit_core::exhibit::{ConditionKind, Landmark, PlayerStats};
use exhibit_core::fork::NavDirection;
use yew::prelude::*;

use crate::components::character_avatar::CharacterAvatar;
use crate::components::exhibit_header::ExhibitHeader;
use crate::components::persona_card::PersonaCard;
use crate::components::sketch_map_game::SketchMapGame;
use crate::data::exhibit_data;
use crate::i18n;
use crate::pages::map_transparency::MapTransparencyDemo;
use crate::paths::asset_path;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Explore,
    Transparency,
}

/// Landmark reached by walking down `direction`, cycling through the list.
#[must_use]
pub fn landmark_for(landmarks: &[Landmark], direction: NavDirection) -> Option<&Landmark> {
    if landmarks.is_empty() {
        return None;
    }
    let slot = match direction {
        NavDirection::Left => 0,
        NavDirection::Straight => 1,
        NavDirection::Right => 2,
    };
    landmarks.get(slot % landmarks.len())
}

fn landmark_card(landmark: &Landmark) -> Html {
    html! {
        <article class="landmark-card" data-landmark={landmark.id.clone()} data-region={landmark.region.as_str()}>
            <img src={asset_path(&landmark.image_url)} alt={landmark.name.clone()} loading="lazy"/>
            <h3>{ landmark.name.clone() }</h3>
            <p class="landmark-location">{ landmark.location.clone() }</p>
        </article>
    }
}

fn stats_bar(stats: PlayerStats) -> Html {
    html! {
        <div class="stats-bar" role="status">
            <span class="stat stat-health">{ format!("{} {}", i18n::t("stats.health"), stats.health) }</span>
            <span class="stat stat-stamina">{ format!("{} {}", i18n::t("stats.stamina"), stats.stamina) }</span>
            <span class="stat stat-money">{ format!("{} ₱{}", i18n::t("stats.money"), stats.money) }</span>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    #[prop_or_default]
    pub initial_phase: Phase,
}

#[function_component(App)]
pub fn app(p: &Props) -> Html {
    let data = exhibit_data();
    let phase = use_state(|| p.initial_phase);
    let persona_id = use_state(|| data.personas.first().map(|persona| persona.id.clone()));
    let stats = use_state(|| data.personas.first().map(PlayerStats::from_persona));
    let visited = use_state(|| None::<(NavDirection, String)>);

    let on_select = {
        let persona_id = persona_id.clone();
        let stats = stats.clone();
        let visited = visited.clone();
        Callback::from(move |id: String| {
            stats.set(data.persona(&id).map(PlayerStats::from_persona));
            visited.set(None);
            persona_id.set(Some(id));
        })
    };

    let on_choose = {
        let persona_id = persona_id.clone();
        let stats = stats.clone();
        let visited = visited.clone();
        Callback::from(move |direction: NavDirection| {
            let (Some(id), Some(current)) = ((*persona_id).clone(), *stats) else {
                return;
            };
            let Some(landmark) = landmark_for(&data.landmarks, direction) else {
                return;
            };
            let mut next = current;
            next.reveal(landmark, &id);
            stats.set(Some(next));
            visited.set(Some((direction, landmark.id.clone())));
        })
    };

    let to_phase = |target: Phase| {
        let phase = phase.clone();
        Callback::from(move |()| phase.set(target))
    };

    if *phase == Phase::Transparency {
        return html! { <MapTransparencyDemo on_back={to_phase(Phase::Explore)} /> };
    }

    let persona = (*persona_id).as_deref().and_then(|id| data.persona(id));
    let landmark = (*visited)
        .as_ref()
        .and_then(|(_, id)| data.landmark(id));
    let rain = landmark.is_some_and(|l| {
        l.hidden_conditions
            .iter()
            .any(|c| c.kind == ConditionKind::Weather)
    });
    let can_navigate = (*stats).is_some_and(|s| !s.is_exhausted());
    let open_transparency = {
        let go = to_phase(Phase::Transparency);
        Callback::from(move |_| go.emit(()))
    };

    html! {
        <main id="main" class="exhibit-app">
            <ExhibitHeader title={i18n::t("app.title")} subtitle={i18n::t("app.subtitle")} centered=true />
            <nav class="exhibit-nav">
                <button type="button" class="nav-transparency" onclick={open_transparency}>
                    { i18n::t("app.nav.transparency") }
                </button>
            </nav>
            <section class="persona-list" aria-label={i18n::t("app.choose_persona")}>
                <h2>{ i18n::t("app.choose_persona") }</h2>
                { for data.personas.iter().map(|candidate| html! {
                    <PersonaCard
                        persona={candidate.clone()}
                        is_selected={Some(&candidate.id) == (*persona_id).as_ref()}
                        on_click={on_select.clone()}
                    />
                }) }
            </section>
            if let Some(persona) = persona {
                <section class="explore">
                    if let Some(config) = persona.character_config.clone() {
                        <CharacterAvatar key={persona.id.clone()} {config} size={160} />
                    }
                    if let Some(current) = *stats {
                        { stats_bar(current) }
                    }
                    <SketchMapGame
                        character_avatar={persona.avatar.clone()}
                        current_direction={(*visited).as_ref().map(|(direction, _)| *direction)}
                        on_choose_direction={on_choose}
                        {can_navigate}
                        {rain}
                    />
                    if let Some(landmark) = landmark {
                        { landmark_card(landmark) }
                    }
                </section>
            }
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_cycle_through_landmarks() {
        let landmarks = &exhibit_data().landmarks;
        assert_eq!(
            landmark_for(landmarks, NavDirection::Left).map(|l| l.id.as_str()),
            Some("intramuros")
        );
        assert_eq!(
            landmark_for(&landmarks[..1], NavDirection::Right).map(|l| l.id.as_str()),
            Some("intramuros")
        );
        assert!(landmark_for(&[], NavDirection::Straight).is_none());
    }
}
