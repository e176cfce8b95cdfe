use once_cell::sync::Lazy;

mod hex_color;
mod rgb_color;

pub use hex_color::*;
pub use rgb_color::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Linear-light channels for renderers that shade in linear space.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a as f32 / 255.0,
        ]
    }
}

/// Parses the colour syntaxes computed styles report for borders.
pub fn parse_css_color(raw: &str) -> Option<Color> {
    let raw = raw.trim();
    if raw.starts_with('#') {
        return parse_hex_color(raw);
    }
    if raw.eq_ignore_ascii_case("transparent") {
        return Some(Color::rgba(0, 0, 0, 0));
    }
    parse_rgb_function(raw)
}

static SRGB8_TO_LINEAR: Lazy<[f32; 256]> = Lazy::new(|| {
    let mut t = [0.0f32; 256];
    for (i, slot) in t.iter_mut().enumerate() {
        *slot = srgb_to_linear_f32(i as f32 / 255.0);
    }
    t
});

pub fn srgb_to_linear(c: u8) -> f32 {
    SRGB8_TO_LINEAR[c as usize]
}

pub fn srgb_to_linear_f32(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
