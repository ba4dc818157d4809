// Lays the sand out on an even grid.
// Visual: a carpet of small squares, `spacing` pixels apart, covering the window.

use crate::color::Hsl;
use crate::types::Particle;

/// Columns and rows for a surface, rounding to the nearest whole cell.
/// Degenerate surfaces (any side <= 0) have no cells.
pub fn grid_dims(width: i32, height: i32, spacing: i32) -> (usize, usize) {
    if width <= 0 || height <= 0 || spacing <= 0 {
        return (0, 0);
    }
    let columns = (width as f64 / spacing as f64).round() as usize;
    let rows = (height as f64 / spacing as f64).round() as usize;
    (columns, rows)
}

/// Fresh particles in row-major order, first one at (0,0).
pub fn build_grid(width: i32, height: i32, spacing: i32, size: i32, color: Hsl) -> Vec<Particle> {
    let (columns, rows) = grid_dims(width, height, spacing);
    (0..columns * rows)
        .map(|i| {
            let x = (i % columns) as i32 * spacing;
            let y = (i / columns) as i32 * spacing;
            Particle::new(x, y, color, size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAND: Hsl = Hsl::new(45, 100, 65);

    #[test]
    fn dims_round_to_nearest() {
        assert_eq!(grid_dims(800, 600, 6), (133, 100)); // 133.33, 100
        assert_eq!(grid_dims(9, 9, 6), (2, 2)); // 1.5 rounds up
    }

    #[test]
    fn degenerate_surface_is_empty() {
        assert!(build_grid(0, 600, 6, 3, SAND).is_empty());
        assert!(build_grid(800, 0, 6, 3, SAND).is_empty());
        assert!(build_grid(-10, -10, 6, 3, SAND).is_empty());
        // 2px wide rounds to zero columns
        assert!(build_grid(2, 600, 6, 3, SAND).is_empty());
    }

    #[test]
    fn row_major_layout() {
        let grid = build_grid(18, 12, 6, 3, SAND);
        let coords: Vec<_> = grid.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(coords, [(0, 0), (6, 0), (12, 0), (0, 6), (6, 6), (12, 6)]);
        assert!(grid.iter().all(|p| p.color == SAND && p.size == 3));
    }
}
