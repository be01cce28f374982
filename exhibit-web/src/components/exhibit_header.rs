use yew::prelude::*;

use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub on_back: Option<Callback<()>>,
    #[prop_or_default]
    pub centered: bool,
    #[prop_or_default]
    pub class: Classes,
}

/// Page title block. The back button only appears when `on_back` is set.
#[function_component(ExhibitHeader)]
pub fn exhibit_header(p: &Props) -> Html {
    let back = p.on_back.clone().map(|cb| {
        let onclick = Callback::from(move |_| cb.emit(()));
        html! {
            <button type="button" class="exhibit-back touch-target" aria-label={i18n::t("header.back")} {onclick}>
                <span aria-hidden="true">{ "←" }</span>
            </button>
        }
    });
    html! {
        <header class={classes!("exhibit-header", p.centered.then_some("text-center"), p.class.clone())}>
            { back }
            <h1 class="exhibit-title">{ p.title.clone() }</h1>
            if let Some(subtitle) = p.subtitle.clone() {
                <p class={classes!("exhibit-subtitle", p.centered.then_some("mx-auto"))}>{ subtitle }</p>
            }
        </header>
    }
}
