use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug, Clone)]
#[command(name = "gridatlas")]
#[command(version, about = "Grid spritesheet atlas generator", long_about = None)]
pub struct CliArgs {
    /// Spritesheet image (width is probed from the file header)
    #[arg(required_unless_present_any = ["image_width", "config"])]
    pub image: Option<PathBuf>,

    /// Load settings from a .gridatlas config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Total number of frames in the grid
    #[arg(short, long)]
    pub amount: Option<u32>,

    /// Width of one frame in pixels, before scaling
    #[arg(long, value_name = "PIXELS")]
    pub frame_width: Option<f64>,

    /// Height of one frame in pixels, before scaling
    #[arg(long, value_name = "PIXELS")]
    pub frame_height: Option<f64>,

    /// Base name for generated frames (frame_0, frame_1, ...) [default: frame]
    #[arg(long)]
    pub frame_name: Option<String>,

    /// Horizontal offset of the first cell from the image origin [default: 0]
    #[arg(long, value_name = "PIXELS")]
    pub offset_x: Option<f64>,

    /// Vertical offset of the first cell from the image origin [default: 0]
    #[arg(long, value_name = "PIXELS")]
    pub offset_y: Option<f64>,

    /// Horizontal gap between adjacent columns [default: 0]
    #[arg(long, value_name = "PIXELS")]
    pub gap_x: Option<f64>,

    /// Vertical gap between adjacent rows [default: 0]
    #[arg(long, value_name = "PIXELS")]
    pub gap_y: Option<f64>,

    /// Scale multiplier applied to frame geometry during layout [default: 1]
    #[arg(long, value_name = "FACTOR")]
    pub scale: Option<f64>,

    /// Use this image width instead of probing the spritesheet file
    #[arg(long, value_name = "PIXELS", conflicts_with = "image")]
    pub image_width: Option<u32>,

    /// Animation as 'name=i,j,k' with 0-based frame indexes (repeatable)
    #[arg(long = "animation", value_name = "SPEC")]
    pub animations: Vec<AnimationSpec>,

    /// Output directory for the atlas file [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base name for the output file ({name}.json) [default: image stem]
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Write the merged settings to a reusable config file
    #[arg(long, value_name = "FILE")]
    pub save_config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One `--animation` argument: a name plus comma-separated frame indexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationSpec {
    pub name: String,
    pub frame_indexes: Vec<usize>,
}

impl FromStr for AnimationSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, indexes) = s
            .split_once('=')
            .ok_or_else(|| format!("expected 'name=i,j,k', got '{}'", s))?;

        if name.is_empty() {
            return Err(format!("animation name is empty in '{}'", s));
        }

        let frame_indexes = indexes
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<usize>()
                    .map_err(|_e| format!("invalid frame index '{}' in '{}'", part, s))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            frame_indexes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_spec_parses() {
        let spec: AnimationSpec = "walk=0,2,1".parse().unwrap();
        assert_eq!(spec.name, "walk");
        assert_eq!(spec.frame_indexes, vec![0, 2, 1]);
    }

    #[test]
    fn test_animation_spec_tolerates_spaces_after_commas() {
        let spec: AnimationSpec = "idle=0, 1, 0".parse().unwrap();
        assert_eq!(spec.frame_indexes, vec![0, 1, 0]);
    }

    #[test]
    fn test_animation_spec_name_may_contain_equals_free_text() {
        let spec: AnimationSpec = "walk-down=3".parse().unwrap();
        assert_eq!(spec.name, "walk-down");
        assert_eq!(spec.frame_indexes, vec![3]);
    }

    #[test]
    fn test_animation_spec_rejects_missing_separator() {
        assert!("walk".parse::<AnimationSpec>().is_err());
    }

    #[test]
    fn test_animation_spec_rejects_empty_name() {
        assert!("=0,1".parse::<AnimationSpec>().is_err());
    }

    #[test]
    fn test_animation_spec_rejects_bad_index() {
        assert!("walk=0,x,1".parse::<AnimationSpec>().is_err());
        assert!("walk=".parse::<AnimationSpec>().is_err());
        assert!("walk=-1".parse::<AnimationSpec>().is_err());
    }
}
