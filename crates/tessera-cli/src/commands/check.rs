//! Scene check command

use super::{load_config, load_factory};
use anyhow::{Context, Result};
use std::sync::Arc;
use tessera_check::{CheckRegistry, Diagnostic, Level, MemorySink};
use tessera_scene::{load_scene, LoadedScene};

pub struct CheckArgs {
    pub scene: String,
    pub types: String,
    pub config: Option<String>,
    pub only: Vec<String>,
    pub disable: Vec<String>,
    pub format: String,
}

pub fn run(args: CheckArgs) -> Result<()> {
    if args.format != "text" && args.format != "json" {
        anyhow::bail!("Unknown format: {}", args.format);
    }

    let factory = load_factory(&args.types)?;
    let config = load_config(args.config.as_deref(), &args.only, &args.disable)?;

    let sink = Arc::new(MemorySink::new());
    let mut checks = CheckRegistry::from_config(&config, sink.clone())?;

    if checks.is_empty() {
        println!("No scene checks selected.");
        return Ok(());
    }
    tracing::debug!(checks = ?checks.names(), scene = %args.scene, "running scene checks");

    let scene = load_scene(&args.scene, &factory, &mut checks)
        .with_context(|| format!("Failed to load scene {}", args.scene))?;
    let diagnostics = sink.take();

    if args.format == "json" {
        print_report_json(&scene, &checks, &diagnostics)?;
    } else {
        print_report_text(&scene, &diagnostics);
    }

    if checks.faults() > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report_text(scene: &LoadedScene, diagnostics: &[Diagnostic]) {
    println!(
        "Scene '{}': {} object(s) created",
        scene.metadata.name,
        scene.object_count()
    );

    if diagnostics.is_empty() {
        println!("All checks passed.");
        return;
    }

    println!();
    for diagnostic in diagnostics {
        let level_str = match diagnostic.level {
            Level::Error => "ERROR",
            Level::Warning => "WARN ",
        };

        let mut lines = diagnostic.message.lines();
        println!(
            "[{}] {}: {}",
            level_str,
            diagnostic.source,
            lines.next().unwrap_or("")
        );
        for line in lines {
            println!("{}", line);
        }
    }
}

fn print_report_json(
    scene: &LoadedScene,
    checks: &CheckRegistry,
    diagnostics: &[Diagnostic],
) -> Result<()> {
    let output = serde_json::json!({
        "scene": scene.metadata.name,
        "objects": scene.object_count(),
        "checks": checks.names(),
        "faults": checks.faults(),
        "diagnostics": diagnostics,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
