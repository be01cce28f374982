//! Three-step demo: judge readiness from a bare map, see the same place with
//! its hidden conditions marked, then compare.

use exhibit_core::exhibit::Landmark;
use exhibit_core::map::MapViewport;
use exhibit_core::transparency::{Decision, MapTransparencyFlow, Step};
use yew::prelude::*;

use crate::components::exhibit_header::ExhibitHeader;
use crate::components::map_view::MapView;
use crate::data::exhibit_data;
use crate::i18n;
use crate::storage::BrowserSettings;

pub const DEFAULT_LANDMARK: &str = "intramuros";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Store for the session decision; detected from the browser when unset.
    #[prop_or_default]
    pub settings: Option<BrowserSettings>,
    #[prop_or(AttrValue::Static(DEFAULT_LANDMARK))]
    pub landmark_id: AttrValue,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
}

fn decision_buttons(on_decide: &Callback<Decision>) -> Html {
    html! {
        <div class="decision-buttons" role="group">
            { for Decision::ALL.into_iter().map(|decision| {
                let on_decide = on_decide.clone();
                let onclick = Callback::from(move |_| on_decide.emit(decision));
                html! {
                    <button type="button" class={classes!("decision-btn", decision.as_str())} data-decision={decision.as_str()} {onclick}>
                        { i18n::t(decision.i18n_key()) }
                    </button>
                }
            }) }
        </div>
    }
}

fn condition_list(landmark: Option<&Landmark>) -> Html {
    let Some(landmark) = landmark else {
        return Html::default();
    };
    html! {
        <ul class="hidden-conditions">
            { for landmark.hidden_conditions.iter().map(|c| html! {
                <li class="hidden-condition" data-kind={c.kind.as_str()}>
                    <strong>{ c.label.clone() }</strong>
                    <span>{ c.description.clone() }</span>
                </li>
            }) }
        </ul>
    }
}

fn incomplete_view(on_decide: &Callback<Decision>) -> Html {
    html! {
        <section class="map-step map-step-incomplete">
            <h2>{ i18n::t("transparency.incomplete.title") }</h2>
            <p>{ i18n::t("transparency.incomplete.body") }</p>
            <MapView viewport={MapViewport::default()} />
            <p class="map-question">{ i18n::t("transparency.incomplete.question") }</p>
            { decision_buttons(on_decide) }
        </section>
    }
}

fn improved_view(landmark: Option<&Landmark>, on_compare: Callback<MouseEvent>) -> Html {
    let viewport = landmark.map_or_else(MapViewport::default, MapViewport::for_landmark);
    html! {
        <section class="map-step map-step-improved">
            <h2>{ i18n::t("transparency.improved.title") }</h2>
            <p>{ i18n::t("transparency.improved.body") }</p>
            <MapView {viewport} />
            { condition_list(landmark) }
            <button type="button" class="compare-btn" onclick={on_compare}>
                { i18n::t("transparency.improved.compare") }
            </button>
        </section>
    }
}

fn comparison_view(decision: Decision, landmark: Option<&Landmark>) -> Html {
    html! {
        <section class="map-step map-step-comparison" data-decision={decision.as_str()}>
            <h2>{ i18n::t("transparency.comparison.title") }</h2>
            <div class="comparison-before">
                <p>{ i18n::t("transparency.comparison.before") }</p>
                <p class="comparison-decision">{ i18n::t(decision.i18n_key()) }</p>
            </div>
            <div class="comparison-after">
                <p>{ i18n::t("transparency.comparison.after") }</p>
                { condition_list(landmark) }
            </div>
        </section>
    }
}

#[function_component(MapTransparencyDemo)]
pub fn map_transparency_demo(p: &Props) -> Html {
    let settings = {
        let injected = p.settings.clone();
        use_memo((), move |()| injected.unwrap_or_else(BrowserSettings::detect))
    };
    let flow = {
        let settings = settings.clone();
        use_state(move || MapTransparencyFlow::restore(&*settings))
    };

    let on_decide = {
        let flow = flow.clone();
        let settings = settings.clone();
        Callback::from(move |decision: Decision| {
            let mut next = *flow;
            if let Err(err) = next.decide(decision, &*settings) {
                log::warn!("decision not persisted: {err}");
            }
            flow.set(next);
        })
    };
    let on_compare = {
        let flow = flow.clone();
        Callback::from(move |_| {
            let mut next = *flow;
            next.compare();
            flow.set(next);
        })
    };

    let landmark = exhibit_data().landmark(&p.landmark_id);
    let content = match flow.step() {
        Step::Incomplete => incomplete_view(&on_decide),
        Step::Improved => improved_view(landmark, on_compare),
        Step::Comparison => comparison_view(flow.comparison_decision(), landmark),
    };

    html! {
        <div class="min-h-screen bg-background map-transparency-demo">
            <ExhibitHeader title={i18n::t("app.nav.transparency")} on_back={p.on_back.clone()} />
            { content }
        </div>
    }
}
