//! Text and JSON renderings written by the preview commands.

use std::io::Write;

use colored::Colorize;
use exhibit_core::{
    CharacterConfig, DerivedTraits, ExhibitData, Impact, Landmark, Persona, PlayerStats, Region,
    condition_badges,
};
use serde::Serialize;
use serde_json::json;

/// One landmark as seen by one persona (or by the baseline visitor).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkImpact<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub region: Region,
    pub conditions: Vec<ConditionImpact<'a>>,
    pub total: Impact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_after: Option<PlayerStats>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConditionImpact<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub impact: Impact,
}

/// Impacts of every landmark in `region` (all regions when `None`) for `persona`.
#[must_use]
pub fn landmark_impacts<'a>(
    data: &'a ExhibitData,
    persona: Option<&Persona>,
    region: Option<Region>,
) -> Vec<LandmarkImpact<'a>> {
    let persona_id = persona.map_or("", |p| p.id.as_str());
    data.landmarks
        .iter()
        .filter(|l| region.is_none_or(|r| l.region == r))
        .map(|landmark| impact_row(landmark, persona, persona_id))
        .collect()
}

fn impact_row<'a>(
    landmark: &'a Landmark,
    persona: Option<&Persona>,
    persona_id: &str,
) -> LandmarkImpact<'a> {
    let conditions = landmark
        .hidden_conditions
        .iter()
        .map(|c| ConditionImpact {
            id: &c.id,
            label: &c.label,
            impact: c.impact_for(persona_id),
        })
        .collect();
    let stats_after = persona.map(|p| {
        let mut stats = PlayerStats::from_persona(p);
        stats.reveal(landmark, persona_id);
        stats
    });
    LandmarkImpact {
        id: &landmark.id,
        name: &landmark.name,
        region: landmark.region,
        conditions,
        total: landmark.total_impact(persona_id),
        stats_after,
    }
}

fn signed(value: i32) -> String {
    let text = format!("{value:+}");
    match value.signum() {
        -1 => text.red().to_string(),
        1 => text.green().to_string(),
        _ => text.dimmed().to_string(),
    }
}

fn impact_line(impact: &Impact) -> String {
    format!(
        "health {}  stamina {}  money {}",
        signed(impact.health),
        signed(impact.stamina),
        signed(impact.money)
    )
}

/// Human-readable landmark report.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_landmarks_console(
    out: &mut dyn Write,
    rows: &[LandmarkImpact<'_>],
    persona: Option<&Persona>,
) -> std::io::Result<()> {
    match persona {
        Some(p) => {
            let start = PlayerStats::from_persona(p);
            writeln!(
                out,
                "Visitor: {} ({}) starting at health {} stamina {} money {}",
                p.name.bold(),
                p.role,
                start.health,
                start.stamina,
                start.money
            )?;
        }
        None => writeln!(out, "Visitor: {}", "baseline (no multipliers)".bold())?,
    }
    if rows.is_empty() {
        writeln!(out, "No landmarks match.")?;
        return Ok(());
    }
    for row in rows {
        writeln!(out)?;
        writeln!(
            out,
            "{} [{}]",
            row.name.bright_cyan().bold(),
            row.region.as_str()
        )?;
        for condition in &row.conditions {
            writeln!(out, "  - {}: {}", condition.label, impact_line(&condition.impact))?;
        }
        writeln!(out, "  total: {}", impact_line(&row.total))?;
        if let Some(stats) = row.stats_after {
            let status = if stats.is_exhausted() {
                "exhausted".red().bold().to_string()
            } else {
                "ok".green().to_string()
            };
            writeln!(
                out,
                "  after visit: health {} stamina {} money {} ({status})",
                stats.health, stats.stamina, stats.money
            )?;
        }
    }
    Ok(())
}

/// Machine-readable landmark report.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_landmarks_json(
    out: &mut dyn Write,
    rows: &[LandmarkImpact<'_>],
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

/// Character config, resolved traits and composed avatar as one JSON document.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_avatar_json(
    out: &mut dyn Write,
    config: &CharacterConfig,
    traits: &DerivedTraits,
    avatar: &exhibit_core::AvatarConfig,
) -> anyhow::Result<()> {
    let badges = condition_badges(config.conditions());
    let doc = json!({
        "config": config,
        "traits": traits,
        "avatar": avatar,
        "badges": badges,
    });
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}

/// Short description of the resolved traits.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_avatar_summary(
    out: &mut dyn Write,
    config: &CharacterConfig,
    traits: &DerivedTraits,
) -> std::io::Result<()> {
    let name = config.name.as_deref().unwrap_or("Traveler");
    writeln!(
        out,
        "{} | {} | age {} ({:?})",
        name.bold(),
        traits.gender,
        traits.age,
        config.age_group()
    )?;
    writeln!(
        out,
        "hair {} {} | face {} | glasses {} | hat {} | accessory {}",
        traits.hair_style,
        traits.hair_color,
        traits.face_color,
        traits.glasses_style,
        traits.hat_style,
        traits.accessory_style
    )?;
    writeln!(
        out,
        "shirt {} {} | wrinkle tier {}",
        traits.clothing.shirt_style.as_str(),
        traits.clothing.shirt_color,
        traits.wrinkle_tier.level()
    )?;
    let badges = condition_badges(config.conditions());
    if badges.is_empty() {
        writeln!(out, "conditions: none")?;
    } else {
        let list: Vec<String> = badges
            .iter()
            .map(|b| format!("{} {}", b.icon, b.condition))
            .collect();
        writeln!(out, "conditions: {}", list.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::FileDataLoader;
    use exhibit_core::DataLoader;

    fn data() -> ExhibitData {
        FileDataLoader::default().load_exhibit_data().unwrap()
    }

    #[test]
    fn region_filter_keeps_matching_landmarks() {
        let data = data();
        let rows = landmark_impacts(&data, None, Some(Region::Mindanao));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "mount-apo");
        assert!(rows[0].stats_after.is_none());
    }

    #[test]
    fn persona_rows_carry_final_stats() {
        let data = data();
        let lola = data.persona("lola-remedios").unwrap();
        let rows = landmark_impacts(&data, Some(lola), Some(Region::Luzon));
        let after = rows[0].stats_after.unwrap();
        assert_eq!((after.health, after.stamina, after.money), (45, 22, 2650));
    }

    #[test]
    fn console_report_names_each_landmark() {
        colored::control::set_override(false);
        let data = data();
        let rows = landmark_impacts(&data, None, None);
        let mut buf = Vec::new();
        write_landmarks_console(&mut buf, &rows, None).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Intramuros [luzon]"));
        assert!(text.contains("Mount Apo"));
        assert!(text.contains("money -350"));
    }
}
