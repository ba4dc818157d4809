//! Property-based tests for the sand grid, colors and the rake rule using proptest
//!
//! Invariants checked across random inputs:
//! - Grid size and row-major ordering
//! - Shading by zero is the identity on the color token
//! - A raked grain moves at most one pixel per tooth per axis
//! - Grains out of the rake's reach never change

use proptest::prelude::*;
use sand_rake::color::Hsl;
use sand_rake::grid::build_grid;
use sand_rake::rake::RakeProfile;
use sand_rake::rule::{rake_particle, Bands};
use sand_rake::types::Particle;

const SPACING: i32 = 6;
const SIZE: i32 = 3;
const SAND: Hsl = Hsl::new(45, 100, 65);

fn any_color() -> impl Strategy<Value = Hsl> {
    (0..360i32, 0..=100i32, -50..150i32).prop_map(|(h, s, l)| Hsl::new(h, s, l))
}

fn any_rake() -> impl Strategy<Value = RakeProfile> {
    prop::collection::vec(-50..50i32, 1..6)
        .prop_map(|teeth| RakeProfile { name: "p".into(), teeth })
}

proptest! {
    #[test]
    fn grid_count_and_order(w in 1..400i32, h in 1..400i32, d in 1..12i32) {
        let grid = build_grid(w, h, d, SIZE, SAND);
        let cols = (w as f64 / d as f64).round() as usize;
        let rows = (h as f64 / d as f64).round() as usize;
        prop_assert_eq!(grid.len(), cols * rows);

        if let Some(first) = grid.first() {
            prop_assert_eq!((first.x, first.y), (0, 0));
        }
        // row-major: strictly increasing (y, x) means every position is distinct
        for pair in grid.windows(2) {
            prop_assert!((pair[0].y, pair[0].x) < (pair[1].y, pair[1].x));
        }
    }

    #[test]
    fn rebuild_is_positionally_identical(w in 1..300i32, h in 1..300i32) {
        let a = build_grid(w, h, SPACING, SIZE, SAND);
        let b = build_grid(w, h, SPACING, SIZE, SAND);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn zero_shade_keeps_token(c in any_color()) {
        prop_assert_eq!(c.shade(0).to_color_string(), c.to_color_string());
    }

    #[test]
    fn shade_keeps_hue_and_saturation(c in any_color(), delta in -100..100i32) {
        let s = c.shade(delta);
        prop_assert_eq!((s.h, s.s, s.l), (c.h, c.s, c.l + delta));
    }

    #[test]
    fn rake_moves_grains_by_small_steps(
        gx in 0..200i32, gy in 0..200i32,
        px in 0..200i32, py in 0..200i32,
        rake in any_rake(),
    ) {
        let bands = Bands::new(SPACING, SIZE);
        let mut p = Particle::new(gx, gy, SAND, SIZE);
        let hit = rake_particle(&mut p, (px, py), &rake, &bands, SAND);

        let teeth = rake.teeth.len() as i32;
        prop_assert!((p.x - gx).abs() <= teeth);
        prop_assert!((p.y - gy).abs() <= teeth);
        prop_assert_eq!(p.size, SIZE);

        let allowed = [SAND, SAND.shade(15), SAND.shade(-35)];
        prop_assert!(allowed.contains(&p.color));
        if !hit {
            prop_assert_eq!(p, Particle::new(gx, gy, SAND, SIZE));
        }
    }

    #[test]
    fn out_of_reach_is_untouched(
        gx in 0..200i32, gy in 0..200i32,
        dx in prop_oneof![-100..0i32, (SPACING + SIZE + 1)..100i32],
        dy in -100..100i32,
        rake in any_rake(),
    ) {
        let bands = Bands::new(SPACING, SIZE);
        let before = Particle::new(gx, gy, SAND.shade(-35), SIZE);
        let mut p = before;
        prop_assert!(!rake_particle(&mut p, (gx + dx, gy + dy), &rake, &bands, SAND));
        prop_assert_eq!(p, before);
    }
}
