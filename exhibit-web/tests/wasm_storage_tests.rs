#![cfg(target_arch = "wasm32")]

use exhibit_core::settings::SettingsStore;
use exhibit_core::transparency::{Decision, MapTransparencyFlow, STORAGE_KEY, Step};
use wasm_bindgen_test::*;

use exhibit_web::storage::BrowserSettings;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_detects_session_storage() {
    assert!(matches!(
        BrowserSettings::detect(),
        BrowserSettings::Session(_)
    ));
}

#[wasm_bindgen_test]
fn decision_survives_in_session_storage() {
    let settings = BrowserSettings::detect();
    settings.remove_item(STORAGE_KEY).expect("clear key");

    let mut flow = MapTransparencyFlow::restore(&settings);
    flow.decide(Decision::Unsure, &settings).expect("persist decision");

    let restored = MapTransparencyFlow::restore(&BrowserSettings::detect());
    assert_eq!(restored.step(), Step::Incomplete);
    assert_eq!(restored.decision(), Some(Decision::Unsure));
    settings.remove_item(STORAGE_KEY).expect("clear key");
}
