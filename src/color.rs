// HSL colors for the sand.
// Every particle color is the base color with a lightness offset, so the
// whole palette is one hue/saturation pair.

use image::Rgb;

/// Hue in degrees, saturation and lightness in percent.
/// Lightness is deliberately left unclamped; see [`Hsl::to_rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: i32,
    pub s: i32,
    pub l: i32,
}

impl Hsl {
    pub const fn new(h: i32, s: i32, l: i32) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation, lightness moved by `delta`.
    pub const fn shade(self, delta: i32) -> Self {
        Self { h: self.h, s: self.s, l: self.l + delta }
    }

    /// CSS-style token, e.g. `hsl(45,100%,65%)`.
    pub fn to_color_string(self) -> String {
        format!("hsl({},{}%,{}%)", self.h, self.s, self.l)
    }

    /// Convert to 8-bit RGB channels.
    /// Saturation and lightness are clamped to [0,100] here (and only here),
    /// hue wraps around 360.
    pub fn to_rgb(self) -> Rgb<u8> {
        let h = self.h.rem_euclid(360) as f32 / 360.0;
        let s = self.s.clamp(0, 100) as f32 / 100.0;
        let l = self.l.clamp(0, 100) as f32 / 100.0;

        if s == 0.0 {
            let v = channel(l);
            return Rgb([v, v, v]);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb([
            channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            channel(hue_to_channel(p, q, h)),
            channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        ])
    }

    /// Packed `0x00RRGGBB`, ready for the window buffer.
    pub fn to_pixel(self) -> u32 {
        pack_rgb(self.to_rgb())
    }
}

#[inline]
fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 { t += 1.0; }
    if t > 1.0 { t -= 1.0; }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
fn channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Pack RGB channels as 0x00RRGGBB for minifb.
#[inline]
pub fn pack_rgb(rgb: Rgb<u8>) -> u32 {
    let [r, g, b] = rgb.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub const BLACK: u32 = 0x00_00_00_00;
pub const WHITE: u32 = 0x00_FF_FF_FF;
