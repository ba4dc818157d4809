// The sand garden itself: grains, pointer, active rake and the per-frame loop.
// Visual: everything you see inside the window except the HUD comes from `tick`.

use crate::color::BLACK;
use crate::config::SandConfig;
use crate::draw::{draw_rake, fill_rect};
use crate::error::Error;
use crate::grid::{build_grid, grid_dims};
use crate::rake::{RakeProfile, RakeRegistry};
use crate::rule::{rake_particle, Bands};
use crate::schedule::Debouncer;
use crate::types::{FrameBuffer, Particle, Pointer};
use log::{debug, info, warn};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,    // built, never started
    Running, // ticking every frame until the process exits
}

pub struct Simulation {
    config: SandConfig,
    bands: Bands,
    rakes: RakeRegistry,
    particles: Vec<Particle>,
    pointer: Pointer,
    surface: (i32, i32),
    dims: (usize, usize), // columns, rows of the last build
    state: LoopState,
    resize: Debouncer<(i32, i32)>,
}

impl Simulation {
    /// Set up an idle simulation for a `width`×`height` surface.
    /// No grains exist until [`Simulation::start`].
    pub fn new(config: SandConfig, width: i32, height: i32) -> Result<Self, Error> {
        let rakes = RakeRegistry::new(&config.rakes, &config.default_rake)?;
        Ok(Self {
            bands: Bands::new(config.spacing, config.particle_size),
            resize: Debouncer::new(config.resize_debounce),
            config,
            rakes,
            particles: Vec::new(),
            pointer: Pointer::default(),
            surface: (width, height),
            dims: (0, 0),
            state: LoopState::Idle,
        })
    }

    /// Lay down the first grid and begin ticking. Only the first call does anything.
    pub fn start(&mut self) {
        if self.state == LoopState::Running {
            debug!("start ignored, already running");
            return;
        }
        self.state = LoopState::Running;
        self.rebuild();
        info!("sand garden started with {}", self.rakes.active().name);
    }

    /// Throw away all grains and lay a fresh grid for the current surface.
    /// The loop keeps running.
    pub fn reset(&mut self) {
        self.state = LoopState::Running;
        self.rebuild();
    }

    /// Note a new surface size. The rebuild waits until resizing has been
    /// quiet for the debounce delay; a newer size cancels an older one.
    pub fn on_resize(&mut self, width: i32, height: i32, now: Instant) {
        debug!("resize to {width}x{height} scheduled");
        self.resize.schedule((width, height), now);
    }

    pub fn set_pointer(&mut self, x: i32, y: i32) {
        self.pointer.pos = Some((x, y));
    }

    pub fn set_engaged(&mut self, engaged: bool) {
        self.pointer.engaged = engaged;
    }

    /// Switch rakes by name. Unknown names are rejected and the current rake stays.
    pub fn select_profile(&mut self, name: &str) -> Result<&RakeProfile, Error> {
        if let Err(e) = self.rakes.select(name) {
            warn!("{e}; keeping {}", self.rakes.active().name);
            return Err(e);
        }
        let rake = self.rakes.active();
        info!("rake {} selected", rake.name);
        Ok(rake)
    }

    /// One frame: apply a due resize, paint background, rake and draw every
    /// grain, then draw the rake glyph. Resizes `fb` to the surface when needed.
    /// Returns how many grains the rake touched.
    pub fn tick(&mut self, fb: &mut FrameBuffer, now: Instant) -> usize {
        if let Some((w, h)) = self.resize.poll(now) {
            self.surface = (w, h);
            if self.state == LoopState::Running {
                self.rebuild();
            }
        }
        if self.state == LoopState::Idle {
            return 0;
        }

        let fw = self.surface.0.max(0) as usize;
        let fh = self.surface.1.max(0) as usize;
        if fb.width != fw || fb.height != fh {
            fb.resize(fw, fh);
        }
        fb.fill(self.config.background().to_pixel());

        let base = self.config.base_color;
        let spacing = self.config.spacing;
        let rake = self.rakes.active();
        let digging = if self.pointer.engaged { self.pointer.pos } else { None };

        let mut raked = 0;
        for p in &mut self.particles {
            if let Some(at) = digging {
                if rake_particle(p, at, rake, &self.bands, base) {
                    raked += 1;
                }
            }
            // centre the grain inside its cell
            let inset = (spacing - p.size) / 2;
            fill_rect(fb, p.x + inset, p.y + inset, p.size, p.size, p.color.to_pixel());
        }

        if let Some((px, py)) = self.pointer.pos {
            draw_rake(fb, px, py, rake, self.config.stroke_width, BLACK);
        }
        raked
    }

    fn rebuild(&mut self) {
        let (w, h) = self.surface;
        let cfg = &self.config;
        self.particles = build_grid(w, h, cfg.spacing, cfg.particle_size, cfg.base_color);
        self.dims = grid_dims(w, h, cfg.spacing);
        if self.particles.is_empty() {
            warn!("surface {w}x{h} too small for any sand");
        } else {
            info!("sand laid: {}x{} grains on {w}x{h}", self.dims.0, self.dims.1);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn active_rake(&self) -> &RakeProfile {
        self.rakes.active()
    }

    pub fn rake_names(&self) -> impl Iterator<Item = &str> {
        self.rakes.names()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Columns and rows of the current grid.
    pub fn dims(&self) -> (usize, usize) {
        self.dims
    }

    pub fn surface(&self) -> (i32, i32) {
        self.surface
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    pub fn config(&self) -> &SandConfig {
        &self.config
    }
}
