//! Voxforge command-line front end.
//!
//! # Usage
//!
//! ```bash
//! voxforge list
//! voxforge generate knight --scale 1.5 --format asset --output knight.json
//! voxforge bake "mech boss" --glow "#ff3300" --options bake.toml --format json
//! voxforge skeleton spider
//! voxforge import assets.json --output-dir out/
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` for generation and bake summaries.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use voxforge_bake::{BakeOptions, Baker, LightingRig};
use voxforge_core::{defaults, Palette, Skeleton};
use voxforge_export::{
    export_asset_json, export_baked_model_json, export_vertex_color_format,
    generate_baked_game_code, generate_game_code, import_assets_json, vertex_bytes, VoxelAsset,
};
use voxforge_gen::Archetype;

#[derive(Parser)]
#[command(
    name = "voxforge",
    version,
    about = "Procedural voxel models, light baking and exporters"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every archetype with its category.
    List,
    /// Generate a model and write it as an asset file or game code.
    Generate {
        archetype: Archetype,
        #[arg(long, default_value_t = 1.0)]
        scale: f32,
        #[arg(long, value_enum, default_value_t = GenerateFormat::Asset)]
        format: GenerateFormat,
        #[command(flatten)]
        theme: Theme,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate a model and bake the standard lighting into its colors.
    Bake {
        archetype: Archetype,
        #[arg(long, default_value_t = 1.0)]
        scale: f32,
        #[command(flatten)]
        theme: Theme,
        /// TOML file with bake options; missing keys keep their defaults.
        #[arg(long)]
        options: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = BakeFormat::Code)]
        format: BakeFormat,
        /// Entity name for baked game code.
        #[arg(long)]
        entity: Option<String>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the joints inferred for a generated model as JSON.
    Skeleton {
        archetype: Archetype,
        #[arg(long, default_value_t = 1.0)]
        scale: f32,
    },
    /// Validate an asset file and write game code for each asset in it.
    Import {
        input: PathBuf,
        /// Directory for `<asset id>.ts` files; prints a summary if absent.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GenerateFormat {
    /// Editable asset JSON.
    Asset,
    /// Live-lit three.js module.
    Code,
}

#[derive(Clone, Copy, ValueEnum)]
enum BakeFormat {
    /// Unlit three.js module with literal colors.
    Code,
    /// Baked model JSON document.
    Json,
    /// Vertex-color JSON rows.
    Vertex,
    /// Packed native-endian f32 rows, ten per voxel.
    VertexBin,
}

#[derive(clap::Args)]
struct Theme {
    #[arg(long, default_value = defaults::PRIMARY_COLOR)]
    primary: String,
    #[arg(long, default_value = defaults::SECONDARY_COLOR)]
    secondary: String,
    #[arg(long, default_value = defaults::GLOW_COLOR)]
    glow: String,
}

impl Theme {
    fn palette(&self) -> anyhow::Result<Palette> {
        Palette::parse(&self.primary, &self.secondary, &self.glow).context("invalid theme color")
    }

    fn as_array(&self) -> [&str; 3] {
        [self.primary.as_str(), self.secondary.as_str(), self.glow.as_str()]
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::List => list(),
        Command::Generate {
            archetype,
            scale,
            format,
            theme,
            output,
        } => generate(archetype, scale, format, &theme, output.as_deref()),
        Command::Bake {
            archetype,
            scale,
            theme,
            options,
            format,
            entity,
            output,
        } => bake(
            archetype,
            scale,
            &theme,
            options.as_deref(),
            format,
            entity.as_deref(),
            output.as_deref(),
        ),
        Command::Skeleton { archetype, scale } => {
            let skeleton = Skeleton::from_model(&archetype.generate(scale));
            let json = serde_json::to_string_pretty(&skeleton)
                .context("failed to serialize skeleton")?;
            write_output(None, json.as_bytes())
        }
        Command::Import { input, output_dir } => import(&input, output_dir.as_deref()),
    }
}

fn list() -> anyhow::Result<()> {
    let mut out = String::new();
    for archetype in Archetype::ALL {
        let marker = if archetype.is_randomized() { "  (randomized)" } else { "" };
        out.push_str(&format!(
            "{:<18} {:<10} {}{marker}\n",
            archetype.slug(),
            archetype.category().as_str(),
            archetype.name()
        ));
    }
    write_output(None, out.as_bytes())
}

fn generate(
    archetype: Archetype,
    scale: f32,
    format: GenerateFormat,
    theme: &Theme,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    theme.palette()?;
    let model = archetype.generate(scale);
    if model.is_empty() {
        warn!(%archetype, scale, "scale produced an empty model");
    }
    info!(%archetype, boxes = model.len(), "generated");

    let text = match format {
        GenerateFormat::Asset => {
            let asset = VoxelAsset::from_model(
                archetype.slug(),
                archetype.name(),
                archetype.category().as_str(),
                theme.as_array(),
                &model,
            );
            export_asset_json(&asset).context("failed to serialize asset")?
        }
        GenerateFormat::Code => generate_game_code(
            &model,
            &theme.primary,
            &theme.secondary,
            &theme.glow,
        ),
    };
    write_output(output, text.as_bytes())
}

fn load_options(path: Option<&Path>) -> anyhow::Result<BakeOptions> {
    let Some(path) = path else {
        return Ok(BakeOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("failed to parse bake options in {}", path.display()))
}

fn bake(
    archetype: Archetype,
    scale: f32,
    theme: &Theme,
    options: Option<&Path>,
    format: BakeFormat,
    entity: Option<&str>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let palette = theme.palette()?;
    let options = load_options(options)?;
    let model = archetype.generate(scale);
    let baker = Baker::new(LightingRig::standard(), options);
    let baked = baker
        .bake(&model, &palette)
        .with_context(|| format!("failed to bake {archetype}"))?;
    info!(%archetype, boxes = baked.len(), "baked");

    let entity = entity.unwrap_or_else(|| archetype.name());
    let bytes = match format {
        BakeFormat::Code => generate_baked_game_code(&baked, Some(entity)).into_bytes(),
        BakeFormat::Json => export_baked_model_json(&baked)
            .context("failed to export baked model")?
            .into_bytes(),
        BakeFormat::Vertex => export_vertex_color_format(&baked)
            .context("failed to export vertex colors")?
            .into_bytes(),
        BakeFormat::VertexBin => vertex_bytes(&baked),
    };
    write_output(output, &bytes)
}

fn import(input: &Path, output_dir: Option<&Path>) -> anyhow::Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let assets = import_assets_json(&text)
        .with_context(|| format!("invalid asset file {}", input.display()))?;

    let mut summary = String::new();
    for asset in &assets {
        let model = asset
            .to_model()
            .with_context(|| format!("asset {} does not form a valid model", asset.id))?;
        summary.push_str(&format!(
            "{:<24} {:<10} {} boxes, {} groups\n",
            asset.id,
            asset.asset_type,
            model.len(),
            model.groups.len()
        ));
        if let Some(dir) = output_dir {
            let code = generate_game_code(
                &model,
                &asset.primary_color,
                &asset.secondary_color,
                &asset.glow_color,
            );
            write_output(
                Some(&dir.join(script_file_name(&asset.id)?)),
                code.as_bytes(),
            )?;
        }
    }
    if output_dir.is_none() {
        write_output(None, summary.as_bytes())?;
    }
    Ok(())
}

/// `<id>.ts`, provided the id names a single file inside the output directory.
fn script_file_name(id: &str) -> anyhow::Result<String> {
    let mut components = Path::new(id).components();
    let single = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single || id.contains(['/', '\\']) {
        bail!("asset id {id:?} is not a plain file name");
    }
    Ok(format!("{id}.ts"))
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = bytes.len(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(bytes)
                .context("failed to write to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_ids_become_file_names() {
        assert_eq!(script_file_name("knight").unwrap(), "knight.ts");
        assert_eq!(script_file_name("asset-2").unwrap(), "asset-2.ts");
        assert_eq!(script_file_name("mech.boss").unwrap(), "mech.boss.ts");
    }

    #[test]
    fn ids_that_leave_the_output_dir_are_rejected() {
        for id in ["../../x", "..", ".", "", "/etc/passwd", "a/b", "a\\b", "sub/../x"] {
            assert!(script_file_name(id).is_err(), "{id:?}");
        }
    }
}
