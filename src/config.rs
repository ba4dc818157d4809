// Build-time knobs for the sand garden.
// Visual: these decide how dense the sand is, its color, and what the rakes look like.

use crate::color::Hsl;
use std::time::Duration;

pub const SPACING: i32 = 6;                         // grid cell size in pixels
pub const PARTICLE_SIZE: i32 = 3;                   // side of each sand square
pub const BASE_COLOR: Hsl = Hsl::new(45, 100, 65);  // warm sand yellow
pub const STROKE_WIDTH: i32 = 4;                    // rake line thickness
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(50);

pub const WINDOW_TITLE: &str = "Sand Rake";
pub const WINDOW_WIDTH: usize = 800;
pub const WINDOW_HEIGHT: usize = 600;
pub const TARGET_FPS: usize = 60;

/// Built-in rakes, in the order the number keys select them.
pub const RAKES: &[(&str, &[i32])] = &[
    ("rake3", &[-15, 0, 15]),
    ("rake4", &[-30, -10, 10, 30]),
    ("rake5", &[-40, -20, 0, 20, 40]),
];
pub const DEFAULT_RAKE: &str = "rake4";

/// Everything the simulation reads at construction time.
#[derive(Debug, Clone)]
pub struct SandConfig {
    pub spacing: i32,
    pub particle_size: i32,
    pub base_color: Hsl,
    pub stroke_width: i32,
    pub resize_debounce: Duration,
    pub rakes: Vec<(String, Vec<i32>)>,
    pub default_rake: String,
}

impl SandConfig {
    /// Background is the base color pulled 20 points darker.
    pub fn background(&self) -> Hsl {
        self.base_color.shade(-20)
    }
}

impl Default for SandConfig {
    fn default() -> Self {
        Self {
            spacing: SPACING,
            particle_size: PARTICLE_SIZE,
            base_color: BASE_COLOR,
            stroke_width: STROKE_WIDTH,
            resize_debounce: RESIZE_DEBOUNCE,
            rakes: RAKES
                .iter()
                .map(|(name, teeth)| (name.to_string(), teeth.to_vec()))
                .collect(),
            default_rake: DEFAULT_RAKE.to_string(),
        }
    }
}
