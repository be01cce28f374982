use std::hash::Hasher;

use exhibit_core::{
    AvatarComposer, ConditionKind, DataLoader, ExhibitData, Gender, Impact, OverlayInput,
    PlayerStats, Region, StaticDataLoader, render_svg,
};
use twox_hash::XxHash64;

const EXHIBIT_JSON: &str = include_str!("../../exhibit-web/static/data/exhibit.json");

fn load() -> ExhibitData {
    StaticDataLoader::new(EXHIBIT_JSON)
        .load_exhibit_data()
        .unwrap()
}

fn fingerprint(bytes: &[u8]) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(bytes);
    hasher.finish()
}

#[test]
fn bundled_data_covers_every_region() {
    let data = load();
    for region in Region::ALL {
        assert!(
            data.landmarks.iter().any(|l| l.region == region),
            "no landmark in {region:?}"
        );
    }
    assert!(data.landmarks.iter().all(|l| !l.hidden_conditions.is_empty()));
    assert!(data.personas.iter().all(|p| p.character_config.is_some()));
}

#[test]
fn lola_at_intramuros() {
    let data = load();
    let lola = data.persona("lola-remedios").unwrap();
    let intramuros = data.landmark("intramuros").unwrap();
    assert_eq!(
        intramuros.total_impact(&lola.id),
        Impact {
            health: -25,
            stamina: -28,
            money: -350
        }
    );

    let mut stats = PlayerStats::from_persona(lola);
    stats.reveal(intramuros, &lola.id);
    assert_eq!(
        stats,
        PlayerStats {
            health: 45,
            stamina: 22,
            money: 2650
        }
    );
}

#[test]
fn money_never_goes_negative() {
    let data = load();
    let miguel = data.persona("miguel").unwrap();
    let apo = data.landmark("mount-apo").unwrap();
    assert!(
        apo.hidden_conditions
            .iter()
            .any(|c| c.kind == ConditionKind::Altitude)
    );
    let mut stats = PlayerStats::from_persona(miguel);
    stats.reveal(apo, &miguel.id);
    assert_eq!(stats.health, 80);
    assert_eq!(stats.stamina, 69);
    assert_eq!(stats.money, 0);
}

#[test]
fn persona_avatars_are_reproducible() {
    let data = load();
    for persona in &data.personas {
        let config = persona.character_config.as_ref().unwrap();
        let first = AvatarComposer::seeded(0x00C0_FFEE).compose(config);
        let second = AvatarComposer::seeded(0x00C0_FFEE).compose(config);
        let a = serde_json::to_vec(&first).unwrap();
        let b = serde_json::to_vec(&second).unwrap();
        assert_eq!(fingerprint(&a), fingerprint(&b), "{} drifted", persona.id);
    }
}

#[test]
fn lola_overlay_has_lashes_and_deep_wrinkles() {
    let data = load();
    let config = data
        .persona("lola-remedios")
        .and_then(|p| p.character_config.as_ref())
        .unwrap();
    assert_eq!(config.gender(), Gender::Female);
    let svg = render_svg(&OverlayInput::from_config(config), 200);
    assert!(svg.contains(r#"class="eyelashes""#));
    assert!(svg.contains("tier-3"));
}
