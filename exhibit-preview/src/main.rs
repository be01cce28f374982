mod loader;
mod report;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use exhibit_core::{
    AccessoryStyle, AvatarComposer, BudgetLevel, CharacterConfig, ClothingStyle, DataLoader,
    ExhibitData, Gender, GlassesStyle, HairColor, HairStyle, HatStyle, HealthCondition,
    OverlayInput, Region, SkinTone, derive_traits, render_svg,
};
use loader::FileDataLoader;
use report::{
    landmark_impacts, write_avatar_json, write_avatar_summary, write_landmarks_console,
    write_landmarks_json,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AvatarFormat {
    /// Config, resolved traits and composed avatar as JSON
    Json,
    /// Standalone SVG of the age, gender and accessory overlay
    Overlay,
    /// One-screen text summary
    #[default]
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Console,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "exhibit-preview", version)]
#[command(about = "Preview Hidden Conditions avatars and landmark impacts from the terminal")]
struct Args {
    /// Exhibit data file (defaults to the bundled exhibit.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Optional path to write output instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a character and show the avatar it produces
    Avatar(AvatarArgs),
    /// Show what each landmark's hidden conditions cost a visitor
    Landmarks(LandmarkArgs),
    /// List persona ids in the exhibit data
    Personas,
}

#[derive(Debug, Clone, Default, clap::Args)]
struct AvatarArgs {
    /// Start from this persona's character config
    #[arg(long)]
    persona: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long)]
    gender: Option<Gender>,
    #[arg(long)]
    hair_color: Option<HairColor>,
    #[arg(long)]
    hair_style: Option<HairStyle>,
    #[arg(long)]
    skin_tone: Option<SkinTone>,
    #[arg(long)]
    budget: Option<BudgetLevel>,
    /// Health conditions (comma-separated)
    #[arg(long, value_delimiter = ',')]
    conditions: Vec<HealthCondition>,
    #[arg(long)]
    glasses: Option<GlassesStyle>,
    #[arg(long)]
    hat: Option<HatStyle>,
    #[arg(long)]
    accessory: Option<AccessoryStyle>,
    #[arg(long)]
    clothing: Option<ClothingStyle>,
    /// Seed for the random base appearance
    #[arg(long, default_value_t = 1337)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = AvatarFormat::Summary)]
    format: AvatarFormat,
    /// Overlay size in pixels
    #[arg(long, default_value_t = 200)]
    size: u32,
}

#[derive(Debug, Clone, Default, clap::Args)]
struct LandmarkArgs {
    /// Apply this persona's multipliers and track its stats
    #[arg(long)]
    persona: Option<String>,
    /// Only show landmarks in this region (luzon, visayas, mindanao)
    #[arg(long)]
    region: Option<Region>,
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    format: ReportFormat,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let data = FileDataLoader::new(args.data.clone())
        .load_exhibit_data()
        .context("failed to load exhibit data")?;
    log::debug!(
        "loaded {} landmarks and {} personas",
        data.landmarks.len(),
        data.personas.len()
    );
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match &args.command {
        Command::Avatar(avatar) => run_avatar(avatar, &data, output_target.writer())?,
        Command::Landmarks(landmarks) => {
            run_landmarks(landmarks, &data, output_target.writer())?;
        }
        Command::Personas => list_personas(&data, output_target.writer())?,
    }
    output_target.flush_inner()?;
    Ok(())
}

fn announce_banner(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", "🗺️  Hidden Conditions Preview".bright_cyan().bold())?;
    writeln!(out, "{}", "=============================".cyan())
}

fn resolve_config(args: &AvatarArgs, data: &ExhibitData) -> Result<CharacterConfig> {
    let mut config = match &args.persona {
        Some(id) => {
            let persona = data
                .persona(id)
                .ok_or_else(|| anyhow!("unknown persona: {id}"))?;
            let mut config = persona.character_config.clone().unwrap_or_default();
            config.name.get_or_insert_with(|| persona.name.clone());
            config
        }
        None => CharacterConfig::default(),
    };
    // Flags override the persona's values.
    if args.name.is_some() {
        config.name.clone_from(&args.name);
    }
    config.age = args.age.or(config.age);
    config.gender = args.gender.or(config.gender);
    config.hair_color = args.hair_color.or(config.hair_color);
    config.hair_style = args.hair_style.or(config.hair_style);
    config.skin_tone = args.skin_tone.or(config.skin_tone);
    config.budget = args.budget.or(config.budget);
    config.glasses_style = args.glasses.or(config.glasses_style);
    config.hat_style = args.hat.or(config.hat_style);
    config.accessory_style = args.accessory.or(config.accessory_style);
    if let Some(clothing) = &args.clothing {
        config.clothing_style = Some(clothing.clone());
    }
    if !args.conditions.is_empty() {
        config.conditions = Some(args.conditions.clone());
    }
    Ok(config)
}

fn run_avatar(args: &AvatarArgs, data: &ExhibitData, out: &mut dyn Write) -> Result<()> {
    let config = resolve_config(args, data)?;
    let traits = derive_traits(&config);
    match args.format {
        AvatarFormat::Json => {
            let avatar = AvatarComposer::seeded(args.seed).compose(&config);
            write_avatar_json(out, &config, &traits, &avatar)?;
        }
        AvatarFormat::Overlay => {
            let input = OverlayInput::new(&traits, config.conditions());
            writeln!(out, "{}", render_svg(&input, args.size))?;
        }
        AvatarFormat::Summary => write_avatar_summary(out, &config, &traits)?,
    }
    Ok(())
}

fn run_landmarks(args: &LandmarkArgs, data: &ExhibitData, out: &mut dyn Write) -> Result<()> {
    let persona = args
        .persona
        .as_deref()
        .map(|id| {
            data.persona(id)
                .ok_or_else(|| anyhow!("unknown persona: {id}"))
        })
        .transpose()?;
    let rows = landmark_impacts(data, persona, args.region);
    match args.format {
        ReportFormat::Console => {
            announce_banner(out)?;
            write_landmarks_console(out, &rows, persona)?;
        }
        ReportFormat::Json => write_landmarks_json(out, &rows)?,
    }
    Ok(())
}

fn list_personas(data: &ExhibitData, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available personas:")?;
    for persona in &data.personas {
        writeln!(out, "  {:15} - {} ({})", persona.id, persona.name, persona.role)?;
    }
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ExhibitData {
        FileDataLoader::default().load_exhibit_data().unwrap()
    }

    #[test]
    fn persona_config_seeds_the_character() {
        let args = AvatarArgs {
            persona: Some("lola-remedios".to_string()),
            ..AvatarArgs::default()
        };
        let config = resolve_config(&args, &data()).unwrap();
        assert_eq!(config.gender, Some(Gender::Female));
        assert_eq!(config.age, Some(72));
        assert_eq!(config.name.as_deref(), Some("Lola Remedios"));
    }

    #[test]
    fn flags_override_persona_values() {
        let args = AvatarArgs {
            persona: Some("miguel".to_string()),
            age: Some(64),
            conditions: vec![HealthCondition::Vertigo],
            ..AvatarArgs::default()
        };
        let config = resolve_config(&args, &data()).unwrap();
        assert_eq!(config.age, Some(64));
        assert_eq!(config.gender, Some(Gender::Male));
        assert_eq!(config.conditions(), [HealthCondition::Vertigo]);
    }

    #[test]
    fn unknown_persona_is_an_error() {
        let args = AvatarArgs {
            persona: Some("nobody".to_string()),
            ..AvatarArgs::default()
        };
        let err = resolve_config(&args, &data()).unwrap_err();
        assert!(err.to_string().contains("nobody"));
    }

    #[test]
    fn overlay_format_writes_svg() {
        let args = AvatarArgs {
            gender: Some(Gender::Female),
            age: Some(70),
            format: AvatarFormat::Overlay,
            size: 120,
            ..AvatarArgs::default()
        };
        let mut buf = Vec::new();
        run_avatar(&args, &data(), &mut buf).unwrap();
        let svg = String::from_utf8(buf).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="120""#));
        assert!(svg.contains("tier-3"));
    }

    #[test]
    fn personas_are_listed() {
        let mut buf = Vec::new();
        list_personas(&data(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Available personas"));
        assert!(text.contains("ana"));
    }
}
