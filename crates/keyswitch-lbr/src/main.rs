use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use atomicwrites::{AtomicFile, OverwriteBehavior};
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use keyswitch_catalog::{Catalog, PlacementScripts};
use keyswitch_render::LibraryRenderer;
use log::info;

#[derive(Parser)]
#[command(name = "keyswitch-lbr")]
#[command(about = "Generate an EAGLE library of keyboard keyswitch footprints", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", hide = true)]
    debug: bool,

    /// Library file to write
    #[arg(short, long, value_name = "PATH", default_value = "Keyboard.lbr")]
    output: PathBuf,

    /// Render with this template instead of the built-in one
    #[arg(short, long, value_name = "PATH")]
    template: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug, RUST_LOG still wins
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    let catalog = Catalog::build().context("Failed to expand keyswitch catalog")?;

    let renderer = match &cli.template {
        Some(path) => LibraryRenderer::from_path(path)?,
        None => LibraryRenderer::embedded(),
    };
    let library = renderer.render(&catalog.document)?;
    write_library(&cli.output, &library)?;
    info!(
        "Wrote {} packages to {}",
        catalog.document.packages.len(),
        cli.output.display()
    );

    print_scripts(&catalog.scripts);
    Ok(())
}

/// Replace the library file in one step.
fn write_library(path: &Path, contents: &str) -> anyhow::Result<()> {
    AtomicFile::new(path, OverwriteBehavior::AllowOverwrite)
        .write(|f| {
            f.write_all(contents.as_bytes())?;
            f.flush()
        })
        .map_err(|err| anyhow::anyhow!("Failed to write {}: {err}", path.display()))
}

fn print_scripts(scripts: &PlacementScripts) {
    println!("*** You can use this script to add every single footprint to a schematic:");
    println!("{}", scripts.schematic.join("\n"));
    println!("\n\n\n\n\n");
    println!("*** You can use this script to place every single footprint on a board:");
    println!("{}", scripts.board.join("\n"));
}
