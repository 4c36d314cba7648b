use log::debug;

use super::{Frame, GridSpec};
use crate::error::GridAtlasError;

/// Derive frame rectangles from a grid spec.
///
/// Frames are produced in row-major order (left-to-right, top-to-bottom);
/// animations reference frames by position in this list, so the ordering is
/// part of the contract. Geometry is pre-multiplied by `scale` for editing;
/// pure and deterministic, no I/O.
pub fn build_frames(
    spec: &GridSpec,
    image_width: f64,
    scale: f64,
) -> Result<Vec<Frame>, GridAtlasError> {
    validate(spec, scale)?;

    let cell_width = spec.frame_size.width + spec.space_between.x;
    let cell_height = spec.frame_size.height + spec.space_between.y;

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "floor of a non-negative finite ratio"
    )]
    let frames_in_row = (image_width / cell_width).floor() as u32;
    if frames_in_row == 0 {
        return Err(GridAtlasError::InvalidLayout {
            cell_width,
            image_width,
        });
    }

    let rows = spec.amount.div_ceil(frames_in_row);
    debug!(
        "Grid layout: {} frames, {} per row, {} rows",
        spec.amount, frames_in_row, rows
    );

    let mut frames = Vec::with_capacity(spec.amount as usize);
    for r in 0..rows {
        for i in 0..frames_in_row {
            let ordinal = r * frames_in_row + i;
            if ordinal >= spec.amount {
                break;
            }

            let column = f64::from(i);
            let row = f64::from(r);
            // The trailing `+ column` / `+ row` adds one extra pixel of
            // separator per preceding column/row on top of space_between.
            // Existing atlases were generated against this term; keep it.
            frames.push(Frame {
                x: (column * cell_width + spec.start_offset.x + column) * scale,
                y: (row * cell_height + spec.start_offset.y + row) * scale,
                width: spec.frame_size.width * scale,
                height: spec.frame_size.height * scale,
                name: format!("{}_{}", spec.frame_name, ordinal),
            });
        }
    }

    Ok(frames)
}

fn validate(spec: &GridSpec, scale: f64) -> Result<(), GridAtlasError> {
    if spec.amount == 0 {
        return Err(GridAtlasError::InvalidSpec {
            field: "amount",
            value: 0.0,
        });
    }

    let positive = [
        ("frame_size.width", spec.frame_size.width),
        ("frame_size.height", spec.frame_size.height),
        ("scale", scale),
    ];
    for (field, value) in positive {
        let valid = value.is_finite() && value > 0.0;
        if !valid {
            return Err(GridAtlasError::InvalidSpec { field, value });
        }
    }

    let non_negative = [
        ("start_offset.x", spec.start_offset.x),
        ("start_offset.y", spec.start_offset.y),
        ("space_between.x", spec.space_between.x),
        ("space_between.y", spec.space_between.y),
    ];
    for (field, value) in non_negative {
        let valid = value.is_finite() && value >= 0.0;
        if !valid {
            return Err(GridAtlasError::InvalidSpec { field, value });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{FrameSize, GridPoint};

    fn spec(amount: u32, width: f64, height: f64, name: &str) -> GridSpec {
        GridSpec {
            amount,
            start_offset: GridPoint::default(),
            space_between: GridPoint::default(),
            frame_size: FrameSize { width, height },
            frame_name: name.to_string(),
        }
    }

    #[test]
    fn test_two_by_two_grid() {
        // 64px wide sheet of 32x32 cells packs 2 per row. The extra
        // one-pixel separator per preceding column/row shifts the second
        // column/row to 33, not 32.
        let frames = build_frames(&spec(4, 32.0, 32.0, "p"), 64.0, 1.0).unwrap();

        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].name, "p_0");
        assert_eq!((frames[0].x, frames[0].y), (0.0, 0.0));
        assert_eq!(frames[1].name, "p_1");
        assert_eq!((frames[1].x, frames[1].y), (33.0, 0.0));
        assert_eq!(frames[2].name, "p_2");
        assert_eq!((frames[2].x, frames[2].y), (0.0, 33.0));
        assert_eq!(frames[3].name, "p_3");
        assert_eq!((frames[3].x, frames[3].y), (33.0, 33.0));

        for frame in &frames {
            assert_eq!(frame.width, 32.0);
            assert_eq!(frame.height, 32.0);
        }
    }

    #[test]
    fn test_row_major_ordering() {
        let frames = build_frames(&spec(7, 16.0, 16.0, "walk"), 48.0, 1.0).unwrap();

        for (k, frame) in frames.iter().enumerate() {
            assert_eq!(frame.name, format!("walk_{}", k));
        }
        // Positions never move backwards within a row
        assert!(frames[1].x > frames[0].x);
        assert!(frames[2].x > frames[1].x);
        // Fourth frame wraps to the next row
        assert_eq!(frames[3].x, frames[0].x);
        assert!(frames[3].y > frames[0].y);
    }

    #[test]
    fn test_count_matches_amount() {
        for amount in [1, 2, 3, 5, 8, 13] {
            let frames = build_frames(&spec(amount, 10.0, 10.0, "f"), 35.0, 1.0).unwrap();
            assert_eq!(frames.len(), amount as usize);
        }
    }

    #[test]
    fn test_offset_and_gap() {
        let grid = GridSpec {
            amount: 2,
            start_offset: GridPoint { x: 4.0, y: 6.0 },
            space_between: GridPoint { x: 2.0, y: 0.0 },
            frame_size: FrameSize {
                width: 10.0,
                height: 10.0,
            },
            frame_name: "f".to_string(),
        };
        let frames = build_frames(&grid, 30.0, 1.0).unwrap();

        // floor(30 / 12) = 2 frames per row
        assert_eq!((frames[0].x, frames[0].y), (4.0, 6.0));
        // x = 1 * (10 + 2) + 4 + 1
        assert_eq!((frames[1].x, frames[1].y), (17.0, 6.0));
    }

    #[test]
    fn test_scale_multiplies_geometry() {
        let unscaled = build_frames(&spec(4, 32.0, 32.0, "p"), 64.0, 1.0).unwrap();
        let scaled = build_frames(&spec(4, 32.0, 32.0, "p"), 64.0, 2.5).unwrap();

        for (a, b) in unscaled.iter().zip(&scaled) {
            assert_eq!(b.x, a.x * 2.5);
            assert_eq!(b.y, a.y * 2.5);
            assert_eq!(b.width, a.width * 2.5);
            assert_eq!(b.height, a.height * 2.5);
            assert_eq!(a.name, b.name);
        }
    }

    #[test]
    fn test_cell_wider_than_image_is_rejected() {
        let result = build_frames(&spec(4, 100.0, 100.0, "f"), 50.0, 1.0);
        assert!(matches!(
            result,
            Err(GridAtlasError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_gap_can_push_cell_past_image_edge() {
        let grid = GridSpec {
            amount: 1,
            start_offset: GridPoint::default(),
            space_between: GridPoint { x: 30.0, y: 0.0 },
            frame_size: FrameSize {
                width: 40.0,
                height: 40.0,
            },
            frame_name: "f".to_string(),
        };
        // 40 + 30 > 64, so not even one column fits
        assert!(matches!(
            build_frames(&grid, 64.0, 1.0),
            Err(GridAtlasError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let result = build_frames(&spec(0, 32.0, 32.0, "f"), 64.0, 1.0);
        assert!(matches!(
            result,
            Err(GridAtlasError::InvalidSpec {
                field: "amount",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_frame_size_is_rejected() {
        let result = build_frames(&spec(4, 0.0, 32.0, "f"), 64.0, 1.0);
        assert!(matches!(
            result,
            Err(GridAtlasError::InvalidSpec {
                field: "frame_size.width",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_offset_is_rejected() {
        let mut grid = spec(4, 32.0, 32.0, "f");
        grid.start_offset.y = -1.0;
        assert!(matches!(
            build_frames(&grid, 64.0, 1.0),
            Err(GridAtlasError::InvalidSpec {
                field: "start_offset.y",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        assert!(matches!(
            build_frames(&spec(4, 32.0, 32.0, "f"), 64.0, 0.0),
            Err(GridAtlasError::InvalidSpec { field: "scale", .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let a = build_frames(&spec(6, 24.0, 24.0, "run"), 100.0, 1.5).unwrap();
        let b = build_frames(&spec(6, 24.0, 24.0, "run"), 100.0, 1.5).unwrap();
        assert_eq!(a, b);
    }
}
