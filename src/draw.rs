// Window + software drawing utilities.
// Visual effects provided here:
// 1) A resizable window that shows the sand bed.
// 2) Filled squares (grains) and thick strokes (the rake).
// 3) A tiny 5x7 bitmap font to render HUD text on top of the sand.

use crate::error::Error;
use crate::rake::RakeProfile;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, ScaleMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

const RAKE_KEYS: [Key; 9] = [
    Key::Key1, Key::Key2, Key::Key3, Key::Key4, Key::Key5,
    Key::Key6, Key::Key7, Key::Key8, Key::Key9,
];

impl Drawer {
    /// Create a resizable window paced at `fps` frames per second.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let opts = WindowOptions {
            resize: true,
            scale_mode: ScaleMode::UpperLeft,
            ..WindowOptions::default()
        };
        let mut window = Window::new(title, width, height, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen, then wait for the next frame slot.
    /// An empty buffer (minimized window) only pumps window events.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        if framebuffer.width == 0 || framebuffer.height == 0 {
            self.window.update();
            return Ok(());
        }
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we’ll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current drawable size in pixels.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Mouse position in window pixels; None while the cursor is outside.
    pub fn mouse_pos(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| (x as i32, y as i32))
    }

    /// Visual: while true, the rake digs into the sand.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Zero-based index of a number key (1..9) pressed this frame.
    pub fn rake_key_pressed(&self) -> Option<usize> {
        RAKE_KEYS
            .iter()
            .position(|&k| self.window.is_key_pressed(k, KeyRepeat::No))
    }

    /// Visual: when pressed, the sand is smoothed back to a fresh grid.
    pub fn r_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::R, KeyRepeat::No)
    }

    pub fn h_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::H, KeyRepeat::No)
    }
}

/* ---------- Software drawing: pixels, rectangles, lines ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill a w×h rectangle with top-left at (x,y), clipped to the buffer.
/// Visual: one grain of sand.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w).min(fb.width as i32);
    let y1 = (y + h).min(fb.height as i32);
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    for row in y0..y1 {
        let ofs = row as usize * fb.width;
        fb.pixels[ofs + x0 as usize..ofs + x1 as usize].fill(color);
    }
}

/// Walk a Bresenham line from (x0,y0) to (x1,y1), calling `plot` per point.
fn bresenham(x0: i32, y0: i32, x1: i32, y1: i32, mut plot: impl FnMut(i32, i32)) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(x0, y0);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Draw a thin line between (x0,y0) and (x1,y1).
pub fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    bresenham(x0, y0, x1, y1, |x, y| put_pixel(fb, x, y, color));
}

/// Draw a `width`-pixel line by stamping a square brush along it.
/// Visual: a chunky stroke like a canvas `lineWidth`.
pub fn stroke_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, width: i32, color: u32) {
    if width <= 1 {
        draw_line(fb, x0, y0, x1, y1, color);
        return;
    }
    let back = width / 2;
    bresenham(x0, y0, x1, y1, |x, y| fill_rect(fb, x - back, y - back, width, width, color));
}

/// Draw the rake at the pointer: teeth, spine and handle in one color.
/// Visual: a comb whose teeth point left, with a short handle up-right.
pub fn draw_rake(fb: &mut FrameBuffer, px: i32, py: i32, rake: &RakeProfile, stroke: i32, color: u32) {
    let tooth_len = stroke * 2;

    // Teeth
    for &t in &rake.teeth {
        stroke_line(fb, px, py + t, px - tooth_len, py + t, stroke, color);
    }

    // Spine between the outermost teeth
    let (lo, hi) = rake.extent();
    stroke_line(fb, px, py + lo - stroke / 2, px, py + hi + stroke / 2, stroke, color);

    // Handle
    stroke_line(fb, px, py, px + stroke * 6, py + stroke * 2, stroke, color);
}

/* ---------- 5x7 bitmap font (what the HUD needs: "RAKE4 | R: RESET | FPS: 60.0") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters used by the HUD
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),

        // Punctuation: space, vertical bar, colon, dot, dash
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ofs, c) in [(1, 0x00000000), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx + ofs, y + ry as i32 + ofs, c);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs (1-pixel spacing).
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: u32 = 0x00_12_34_56;

    #[test]
    fn put_pixel_ignores_out_of_bounds() {
        let mut fb = FrameBuffer::new(4, 4);
        put_pixel(&mut fb, -1, 0, INK);
        put_pixel(&mut fb, 4, 0, INK);
        put_pixel(&mut fb, 0, 4, INK);
        assert!(fb.pixels.iter().all(|&p| p == 0));
        put_pixel(&mut fb, 3, 3, INK);
        assert_eq!(fb.get(3, 3), Some(INK));
    }

    #[test]
    fn fill_rect_clips() {
        let mut fb = FrameBuffer::new(5, 5);
        fill_rect(&mut fb, 3, 3, 4, 4, INK);
        let painted = fb.pixels.iter().filter(|&&p| p == INK).count();
        assert_eq!(painted, 4);
        fill_rect(&mut fb, -10, -10, 3, 3, 0x1);
        assert!(!fb.pixels.contains(&0x1));
    }

    #[test]
    fn thin_line_hits_both_ends() {
        let mut fb = FrameBuffer::new(10, 10);
        draw_line(&mut fb, 1, 1, 8, 5, INK);
        assert_eq!(fb.get(1, 1), Some(INK));
        assert_eq!(fb.get(8, 5), Some(INK));
    }

    #[test]
    fn stroke_has_width() {
        let mut fb = FrameBuffer::new(20, 20);
        stroke_line(&mut fb, 5, 10, 15, 10, 4, INK);
        // rows 8..=11 are covered under a horizontal 4px stroke
        for y in 8..=11 {
            assert_eq!(fb.get(10, y), Some(INK), "y = {y}");
        }
        assert_eq!(fb.get(10, 7), Some(0));
        assert_eq!(fb.get(10, 12), Some(0));
    }

    #[test]
    fn rake_glyph_draws_teeth_spine_and_handle() {
        let mut fb = FrameBuffer::new(100, 100);
        let rake = RakeProfile { name: "r".into(), teeth: vec![-10, 10] };
        draw_rake(&mut fb, 50, 50, &rake, 2, INK);
        assert_eq!(fb.get(46, 40), Some(INK)); // upper tooth tip
        assert_eq!(fb.get(46, 60), Some(INK)); // lower tooth tip
        assert_eq!(fb.get(50, 50), Some(INK)); // spine
        assert_eq!(fb.get(62, 54), Some(INK)); // handle end
        assert_eq!(fb.get(30, 50), Some(0));
    }

    #[test]
    fn text_renders_known_glyphs_only() {
        let mut fb = FrameBuffer::new(40, 10);
        draw_text_5x7(&mut fb, 0, 0, "~", INK);
        assert!(fb.pixels.iter().all(|&p| p == 0));
        draw_text_5x7(&mut fb, 0, 0, "rake", INK);
        assert!(fb.pixels.contains(&INK));
    }
}
