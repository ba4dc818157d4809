// Core types shared by the grid, the rake rule and the renderer.

use crate::color::Hsl;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Reallocate for a new surface size. Contents are zeroed.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Pixel at (x,y), or None outside the buffer.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// One grain of sand. Identity is positional; nothing looks up neighbours by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Particle {
    pub x: i32,      // top-left of the particle's grid cell
    pub y: i32,
    pub color: Hsl,  // replaced (never accumulated) by the rake rule
    pub size: i32,   // side of the drawn square
}

impl Particle {
    pub fn new(x: i32, y: i32, color: Hsl, size: i32) -> Self {
        Self { x, y, color, size }
    }
}

/// Where the pointer is and whether the rake is pressed into the sand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pointer {
    pub pos: Option<(i32, i32)>, // None until the first move inside the surface
    pub engaged: bool,
}
