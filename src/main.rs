use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use gridatlas::atlas::{Animation, create_document};
use gridatlas::cli::CliArgs;
use gridatlas::config::{AnimationConfig, GridAtlasConfig, LoadedConfig, relative_to};
use gridatlas::error::GridAtlasError;
use gridatlas::grid::{FrameSize, GridPoint, GridSpec, build_frames};
use gridatlas::output::{DirectorySink, write_atlas};
use gridatlas::sheet::probe_dimensions;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let merged = merge_config_with_args(&args)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Gridatlas v{}", env!("CARGO_PKG_VERSION"));

    // Explicit width wins over probing the image file
    let image_width = match (merged.image_width, &merged.image) {
        (Some(width), _) => f64::from(width),
        (None, Some(path)) => {
            let (width, height) = probe_dimensions(path)?;
            info!("Spritesheet {}: {}x{}", path.display(), width, height);
            f64::from(width)
        }
        (None, None) => return Err(GridAtlasError::MissingImageWidth.into()),
    };

    let frames = build_frames(&merged.spec, image_width, merged.scale)?;
    info!("Laid out {} frames", frames.len());

    // Dangling references still export (as null entries), but tell the user
    for animation in &merged.animations {
        for &index in &animation.frame_indexes {
            if index >= frames.len() {
                warn!(
                    "Animation '{}' references frame {} but only {} frames exist",
                    animation.name,
                    index,
                    frames.len()
                );
            }
        }
    }

    let image_stem = merged.image.as_deref().and_then(file_stem);
    let base_name = merged
        .name
        .clone()
        .or_else(|| image_stem.clone())
        .unwrap_or_else(|| "atlas".to_string());

    let document = create_document(&frames, &merged.animations, merged.scale, image_stem);

    // Create output directory if it doesn't exist
    if !merged.output.exists() {
        fs::create_dir_all(&merged.output)?;
    }

    let sink = DirectorySink::new(merged.output.clone());
    write_atlas(&document, &sink, &base_name)?;
    info!("Generated {}.json", merged.output.join(&base_name).display());

    if let Some(path) = &args.save_config {
        save_merged_config(&merged, path)?;
        info!("Saved config {}", path.display());
    }

    info!("Done!");

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    image: Option<PathBuf>,
    image_width: Option<u32>,
    output: PathBuf,
    name: Option<String>,
    spec: GridSpec,
    scale: f64,
    animations: Vec<Animation>,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CliArgs) -> Result<MergedConfig> {
    // Load config if specified
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Spritesheet: CLI path overrides the config's image
    let image = args
        .image
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_image));

    let image_width = args
        .image_width
        .or_else(|| loaded_config.as_ref().and_then(|lc| lc.config.image_width));

    // Determine output directory: CLI > config > default
    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(LoadedConfig::resolve_output_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    });

    // Output base name stays optional here; the image stem is the fallback
    let name = args
        .name
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(|lc| lc.config.name.clone()));

    // For numeric fields: CLI > config > default. Out-of-range values are
    // rejected by the layout engine, not here.
    let amount = args.amount.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.amount)
            .unwrap_or(0)
    });

    let offset_x = args.offset_x.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.start_offset.x)
            .unwrap_or(0.0)
    });

    let offset_y = args.offset_y.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.start_offset.y)
            .unwrap_or(0.0)
    });

    let gap_x = args.gap_x.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.space_between.x)
            .unwrap_or(0.0)
    });

    let gap_y = args.gap_y.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.space_between.y)
            .unwrap_or(0.0)
    });

    let frame_width = args.frame_width.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.frame_size.width)
            .unwrap_or(0.0)
    });

    let frame_height = args.frame_height.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.frame_size.height)
            .unwrap_or(0.0)
    });

    let frame_name = args.frame_name.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.frame_name.clone())
            .unwrap_or_else(|| "frame".to_string())
    });

    let scale = args.scale.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.scale)
            .unwrap_or(1.0)
    });

    // Animations given on the CLI replace the config's set entirely
    let animations = if !args.animations.is_empty() {
        args.animations
            .iter()
            .map(|spec| Animation {
                name: spec.name.clone(),
                frame_indexes: spec.frame_indexes.clone(),
            })
            .collect()
    } else if let Some(ref lc) = loaded_config {
        lc.config
            .animations
            .iter()
            .map(|config| Animation {
                name: config.name.clone(),
                frame_indexes: config.frames.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    // Verbose is CLI-only
    let verbose = args.verbose;

    Ok(MergedConfig {
        image,
        image_width,
        output,
        name,
        spec: GridSpec {
            amount,
            start_offset: GridPoint {
                x: offset_x,
                y: offset_y,
            },
            space_between: GridPoint { x: gap_x, y: gap_y },
            frame_size: FrameSize {
                width: frame_width,
                height: frame_height,
            },
            frame_name,
        },
        scale,
        animations,
        verbose,
    })
}

/// Write the merged settings back out as a reusable config file.
fn save_merged_config(merged: &MergedConfig, path: &Path) -> Result<()> {
    let base = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let config = GridAtlasConfig {
        version: 1,
        image: merged.image.as_ref().map(|p| relative_to(p, &base)),
        image_width: merged.image_width,
        amount: merged.spec.amount,
        start_offset: merged.spec.start_offset,
        space_between: merged.spec.space_between,
        frame_size: merged.spec.frame_size,
        frame_name: merged.spec.frame_name.clone(),
        scale: merged.scale,
        animations: merged
            .animations
            .iter()
            .map(|animation| AnimationConfig {
                name: animation.name.clone(),
                frames: animation.frame_indexes.clone(),
            })
            .collect(),
        output_dir: relative_to(&merged.output, &base),
        name: merged.name.clone(),
    };

    config.save(path)
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
