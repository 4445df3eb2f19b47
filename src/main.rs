use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use molshapes::{Scene, System, TessellationConfig};


#[derive(Parser)]
#[command(name = "molshapes")]
#[command(version, about = "Ball-and-stick meshes for molecular systems")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print shape, vertex and triangle counts for a system.
    Stats {
        /// System JSON file.
        system: PathBuf,

        /// Tessellation config (JSON). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the merged mesh buffers of a system as JSON.
    Export {
        /// System JSON file.
        system: PathBuf,

        /// Where to write the mesh.
        #[arg(short, long)]
        output: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_scene(system: &Path, config: Option<&Path>) -> Result<Scene> {
    let config = match config {
        Some(path) => TessellationConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TessellationConfig::default(),
    };
    let json = fs::read_to_string(system).with_context(|| format!("failed to read {}", system.display()))?;
    let system = System::from_json(&json).with_context(|| format!("failed to parse {}", system.display()))?;
    let scene = Scene::ball_and_stick(&system, config).context("failed to build scene")?;
    Ok(scene)
}

fn stats(system: &Path, config: Option<&Path>) -> Result<()> {
    let scene = load_scene(system, config)?;
    println!("shapes:    {}", scene.len());
    println!("vertices:  {}", scene.vertex_count());
    println!("triangles: {}", scene.triangle_count());
    Ok(())
}

fn export(system: &Path, output: &Path, config: Option<&Path>) -> Result<()> {
    let scene = load_scene(system, config)?;
    let buffers = scene.merged_buffers();
    let json = serde_json::to_string(&buffers)?;
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;
    log::info!(
        "wrote {} vertices and {} triangles to {}",
        buffers.vertex_count(),
        buffers.triangle_count(),
        output.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { system, config } => stats(&system, config.as_deref()),
        Commands::Export { system, output, config } => export(&system, &output, config.as_deref()),
    }
}
