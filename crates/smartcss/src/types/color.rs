//! Structured color values.

use std::fmt;

/// An RGBA color with straight (non-premultiplied) alpha.
///
/// Colors are written into stylesheets in HSL notation, see
/// [`to_hsl_string`](Self::to_hsl_string).
///
/// # Example
///
/// ```
/// use smartcss::types::Color;
///
/// assert_eq!(Color::RED.to_hsl_string(), "hsl(0, 100%, 50%)");
/// assert_eq!(Color::from_hex("#00800080").unwrap().to_hsl_string(), "hsla(120, 100%, 25%, 0.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from hue (degrees), saturation and lightness (0.0-1.0).
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        Self::from_hsla(h, s, l, 1.0)
    }

    /// Create a color from hue (degrees), saturation, lightness and alpha.
    pub fn from_hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::new(l, l, l, a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            a,
        )
    }

    /// Create a color from a hex string (`#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }

        let channel = |i: usize, width: usize| -> Option<u8> {
            let digits = &hex[i * width..(i + 1) * width];
            let value = u8::from_str_radix(digits, 16).ok()?;
            // #F00 means #FF0000
            Some(if width == 1 { value * 17 } else { value })
        };

        match hex.len() {
            3 => Some(Self::from_rgb8(channel(0, 1)?, channel(1, 1)?, channel(2, 1)?)),
            4 => Some(Self::from_rgba8(
                channel(0, 1)?,
                channel(1, 1)?,
                channel(2, 1)?,
                channel(3, 1)?,
            )),
            6 => Some(Self::from_rgb8(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
            8 => Some(Self::from_rgba8(
                channel(0, 2)?,
                channel(1, 2)?,
                channel(2, 2)?,
                channel(3, 2)?,
            )),
            _ => None,
        }
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to hue (degrees, 0-360), saturation and lightness (0.0-1.0).
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == self.r {
            (self.g - self.b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        };

        (h * 60.0, s, l)
    }

    /// Render as `hsl(h, s%, l%)`, or `hsla(h, s%, l%, a)` when translucent.
    ///
    /// Components are rounded to whole numbers; alpha to two decimals.
    pub fn to_hsl_string(&self) -> String {
        let (h, s, l) = self.to_hsl();
        let h = h.round() as i32;
        let s = (s * 100.0).round() as i32;
        let l = (l * 100.0).round() as i32;

        if self.a >= 1.0 {
            format!("hsl({}, {}%, {}%)", h, s, l)
        } else {
            let a = (self.a.max(0.0) * 100.0).round() / 100.0;
            format!("hsla({}, {}%, {}%, {})", h, s, l, a)
        }
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::from_rgb(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::from_rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::from_rgb(1.0, 0.0, 1.0);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hsl_string())
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_to_hsl() {
        assert_eq!(Color::RED.to_hsl_string(), "hsl(0, 100%, 50%)");
        assert_eq!(Color::GREEN.to_hsl_string(), "hsl(120, 100%, 50%)");
        assert_eq!(Color::BLUE.to_hsl_string(), "hsl(240, 100%, 50%)");
        assert_eq!(Color::WHITE.to_hsl_string(), "hsl(0, 0%, 100%)");
        assert_eq!(Color::BLACK.to_hsl_string(), "hsl(0, 0%, 0%)");
    }

    #[test]
    fn translucent_uses_hsla() {
        let color = Color::RED.with_alpha(0.5);
        assert_eq!(color.to_hsl_string(), "hsla(0, 100%, 50%, 0.5)");
        assert_eq!(color.to_string(), "hsla(0, 100%, 50%, 0.5)");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("f00"), Some(Color::RED));
        assert_eq!(Color::from_hex("#0000FFFF"), Some(Color::BLUE));
        assert_eq!(Color::from_hex("#808080").unwrap().to_hsl_string(), "hsl(0, 0%, 50%)");
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GGGGGG").is_none());
    }

    #[test]
    fn hsl_round_trip() {
        let color = Color::from_hsl(120.0, 1.0, 0.25);
        assert_eq!(color.to_hsl_string(), "hsl(120, 100%, 25%)");

        let gray = Color::from_hsl(200.0, 0.0, 0.5);
        assert_eq!(gray, Color::new(0.5, 0.5, 0.5, 1.0));
    }
}
