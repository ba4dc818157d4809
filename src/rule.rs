// The rake/sand interaction: how a pressed rake pushes and shades nearby grains.
// Visual: grains just ahead of a tooth get nudged and lit, grains behind it sink
// into shadow, which reads as a furrow.

use crate::color::Hsl;
use crate::rake::RakeProfile;
use crate::types::Particle;

const LIGHTEN: i32 = 15;
const DARKEN: i32 = -35;

/// Three back-to-back distance bands measured from 0, upper bounds inclusive:
/// `[0, D/2]`, `(D/2, D/2+size]`, `(D/2+size, D+size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Near,
    Mid,
    Far,
}

#[derive(Debug, Clone, Copy)]
pub struct Bands {
    near: f32,
    mid: f32,
    far: f32,
}

impl Bands {
    pub fn new(spacing: i32, size: i32) -> Self {
        let half = spacing as f32 / 2.0;
        Self {
            near: half,
            mid: half + size as f32,
            far: (spacing + size) as f32,
        }
    }

    /// Negative distances and anything past the far edge are out of reach.
    pub fn classify(&self, d: i32) -> Option<Band> {
        let d = d as f32;
        if d < 0.0 {
            None
        } else if d <= self.near {
            Some(Band::Near)
        } else if d <= self.mid {
            Some(Band::Mid)
        } else if d <= self.far {
            Some(Band::Far)
        } else {
            None
        }
    }
}

/// Horizontal push for a grain `relative_x` pixels left of the pointer.
pub fn push_direction(bands: &Bands, relative_x: i32) -> Option<i32> {
    bands.classify(relative_x).map(|band| match band {
        Band::Near => 1,
        Band::Mid => 0,
        Band::Far => -1,
    })
}

/// Apply every tooth of `rake` to one grain. Returns true if the grain changed.
///
/// Offsets to the pointer are taken once, before any tooth moves the grain,
/// so every tooth sees the same `relative_x` and therefore the same push
/// direction. Teeth apply in profile order: movements add up, the last tooth
/// to hit decides the color.
pub fn rake_particle(
    p: &mut Particle,
    pointer: (i32, i32),
    rake: &RakeProfile,
    bands: &Bands,
    base: Hsl,
) -> bool {
    let relative_x = pointer.0 - p.x;
    let relative_y = pointer.1 - p.y;

    let Some(dir) = push_direction(bands, relative_x) else {
        return false;
    };

    let mut touched = false;
    for &tooth in &rake.teeth {
        let (dy, color) = match bands.classify(relative_y + tooth) {
            Some(Band::Near) => (1, base.shade(LIGHTEN)),
            Some(Band::Mid) => (0, base),
            Some(Band::Far) => (-1, base.shade(DARKEN)),
            None => continue,
        };
        p.x += dir;
        p.y += dy;
        p.color = color;
        touched = true;
    }
    touched
}

/// One pass of the rake over the whole sand bed.
pub fn rake_all(
    particles: &mut [Particle],
    pointer: (i32, i32),
    rake: &RakeProfile,
    bands: &Bands,
    base: Hsl,
) -> usize {
    particles
        .iter_mut()
        .map(|p| rake_particle(p, pointer, rake, bands, base))
        .filter(|&hit| hit)
        .count()
}
