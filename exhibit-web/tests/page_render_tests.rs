use exhibit_core::settings::{MemoryStore, SettingsStore};
use exhibit_core::transparency::STORAGE_KEY;
use exhibit_web::app::{App, Phase};
use exhibit_web::pages::map_transparency::MapTransparencyDemo;
use exhibit_web::storage::BrowserSettings;
use futures::executor::block_on;
use yew::{AttrValue, LocalServerRenderer};

fn render_demo(store: MemoryStore) -> String {
    let props = exhibit_web::pages::map_transparency::Props {
        settings: Some(BrowserSettings::Memory(store)),
        landmark_id: AttrValue::from("intramuros"),
        on_back: None,
    };
    block_on(LocalServerRenderer::<MapTransparencyDemo>::with_props(props).render())
}

#[test]
fn demo_opens_on_incomplete_map() {
    exhibit_web::i18n::set_lang("en");
    let html = render_demo(MemoryStore::new());
    assert!(html.contains("map-step-incomplete"));
    assert_eq!(html.matches("data-decision=").count(), 3);
    assert!(html.contains("Historic Walled City"));
}

#[test]
fn stored_decision_does_not_skip_ahead() {
    exhibit_web::i18n::set_lang("en");
    let store = MemoryStore::new();
    store.set_item(STORAGE_KEY, "unprepared").unwrap();
    let html = render_demo(store.clone());
    assert!(html.contains("map-step-incomplete"));
    assert_eq!(
        store.get_item(STORAGE_KEY).unwrap().as_deref(),
        Some("unprepared")
    );
}

#[test]
fn app_lists_personas_and_fork() {
    exhibit_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<App>::new().render());
    assert!(html.contains("Hidden Conditions"));
    assert_eq!(html.matches("data-persona=").count(), 3);
    assert!(html.contains("sketch-map-game"));
    assert!(html.contains("character-avatar"));
}

#[test]
fn app_can_open_on_transparency_demo() {
    exhibit_web::i18n::set_lang("en");
    let props = exhibit_web::app::Props {
        initial_phase: Phase::Transparency,
    };
    let html = block_on(LocalServerRenderer::<App>::with_props(props).render());
    assert!(html.contains("map-transparency-demo"));
    assert!(html.contains("exhibit-back"));
}
