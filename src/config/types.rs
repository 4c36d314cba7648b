use serde::{Deserialize, Serialize};

use crate::grid::{FrameSize, GridPoint};

/// Named animation over 0-based frame indexes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub name: String,
    pub frames: Vec<usize>,
}

/// Gridatlas configuration file structure.
///
/// The image path is relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridAtlasConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Spritesheet image path
    pub image: Option<String>,
    /// Explicit image width in pixels (skips probing the image file)
    pub image_width: Option<u32>,
    /// Total number of frames in the grid
    pub amount: u32,
    /// Pixel offset of the first cell from the image origin
    pub start_offset: GridPoint,
    /// Gap between adjacent columns/rows in pixels
    pub space_between: GridPoint,
    /// Size of one cell before scaling
    pub frame_size: FrameSize,
    /// Base string for generated frame names
    pub frame_name: String,
    /// Scale multiplier applied to frame geometry during layout
    pub scale: f64,
    /// Named animations over frame indexes
    pub animations: Vec<AnimationConfig>,
    /// Output directory for the atlas file
    pub output_dir: String,
    /// Base name for the output file (defaults to the image stem)
    pub name: Option<String>,
}

impl Default for GridAtlasConfig {
    fn default() -> Self {
        Self {
            version: 1,
            image: None,
            image_width: None,
            amount: 0,
            start_offset: GridPoint::default(),
            space_between: GridPoint::default(),
            frame_size: FrameSize {
                width: 0.0,
                height: 0.0,
            },
            frame_name: "frame".to_string(),
            scale: 1.0,
            animations: Vec::new(),
            output_dir: ".".to_string(),
            name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridAtlasConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.frame_name, "frame");
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.output_dir, ".");
        assert!(config.animations.is_empty());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: GridAtlasConfig = serde_json::from_str(
            r#"{
                "image": "hero.png",
                "amount": 8,
                "frame_size": {"width": 32.0, "height": 48.0},
                "animations": [{"name": "walk", "frames": [0, 1, 2, 1]}]
            }"#,
        )
        .unwrap();

        assert_eq!(config.image.as_deref(), Some("hero.png"));
        assert_eq!(config.amount, 8);
        assert_eq!(config.frame_size.width, 32.0);
        assert_eq!(config.frame_size.height, 48.0);
        assert_eq!(config.frame_name, "frame");
        assert_eq!(config.start_offset.x, 0.0);
        assert_eq!(config.animations.len(), 1);
        assert_eq!(config.animations[0].frames, vec![0, 1, 2, 1]);
    }
}
