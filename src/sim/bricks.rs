//! Initial brick grid layout

use super::state::{Brick, Stage};
use crate::config::GameConfig;
use crate::consts::MAX_BRICKS;

/// Lay out `rows * columns` bricks row-major across the top of the stage
///
/// Expects a config that passed [`GameConfig::validate`].
pub fn create_bricks(config: &GameConfig, stage: Stage) -> Vec<Brick> {
    let width = config.brick_width(stage);
    let height = config.brick_height;
    let gap = config.brick_gap;

    let count = (config.brick_rows as usize)
        .checked_mul(config.brick_columns as usize)
        .unwrap_or(usize::MAX)
        .min(MAX_BRICKS as usize);
    let mut bricks = Vec::with_capacity(count);
    for row in 0..config.brick_rows {
        for col in 0..config.brick_columns {
            bricks.push(Brick {
                x: col as f32 * (width + gap) + width / 2.0 + gap,
                y: row as f32 * (height + gap) + height / 2.0 + gap + config.brick_top_offset,
                width,
                height,
            });
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bricks() -> Vec<Brick> {
        create_bricks(&GameConfig::default(), Stage::new(800.0, 600.0))
    }

    #[test]
    fn test_grid_size() {
        assert_eq!(bricks().len(), 5 * 7);
    }

    #[test]
    fn test_first_brick() {
        let first = bricks()[0];
        let width = 776.0 / 7.0;
        assert!((first.width - width).abs() < 0.001);
        assert!((first.x - (width / 2.0 + 3.0)).abs() < 0.001);
        // 20/2 + gap 3 + top offset 20
        assert!((first.y - 33.0).abs() < 0.001);
        assert_eq!(first.height, 20.0);
    }

    #[test]
    fn test_row_major_order() {
        let bricks = bricks();
        // Second brick is in the same row, eighth starts the next one
        assert_eq!(bricks[1].y, bricks[0].y);
        assert!(bricks[1].x > bricks[0].x);
        assert!((bricks[7].y - (bricks[0].y + 23.0)).abs() < 0.001);
        assert_eq!(bricks[7].x, bricks[0].x);
    }

    #[test]
    fn test_last_brick_fits_stage() {
        let last = *bricks().last().unwrap();
        let right_edge = last.x + last.width / 2.0;
        // Trailing gap to the stage edge
        assert!((right_edge - 797.0).abs() < 0.01);
    }

    #[test]
    fn test_no_overlap() {
        let bricks = bricks();
        for (i, a) in bricks.iter().enumerate() {
            for b in &bricks[i + 1..] {
                let overlap_x = (a.x - b.x).abs() < (a.width + b.width) / 2.0;
                let overlap_y = (a.y - b.y).abs() < (a.height + b.height) / 2.0;
                assert!(!(overlap_x && overlap_y), "{a:?} overlaps {b:?}");
            }
        }
    }
}
