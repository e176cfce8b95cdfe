/// Computed-style properties the mirror reads from the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    Visibility,
    Display,
    Opacity,
    Overflow,
    BorderWidth,
    BorderColor,
}

impl PropertyId {
    pub const ALL: [PropertyId; 6] = [
        Self::Visibility,
        Self::Display,
        Self::Opacity,
        Self::Overflow,
        Self::BorderWidth,
        Self::BorderColor,
    ];

    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Visibility => "visibility",
            Self::Display => "display",
            Self::Opacity => "opacity",
            Self::Overflow => "overflow",
            Self::BorderWidth => "border-width",
            Self::BorderColor => "border-color",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
    Collapse,
}

impl Visibility {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "hidden" => Self::Hidden,
            "collapse" => Self::Collapse,
            _ => Self::Visible,
        }
    }
}

/// Only `none` matters to the mirror; every other value is kept as `Shown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Shown,
    None,
}

impl Display {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "none" => Self::None,
            _ => Self::Shown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
    Clip,
}

impl Overflow {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "hidden" => Self::Hidden,
            "scroll" => Self::Scroll,
            "auto" => Self::Auto,
            "clip" => Self::Clip,
            _ => Self::Visible,
        }
    }
}

/// Reads the numeric prefix of a CSS value the way `parseFloat` does,
/// so `"2px"` gives `2.0` and `"  .5"` gives `0.5`.
pub fn parse_leading_f32(raw: &str) -> Option<f32> {
    let raw = raw.trim_start();
    let bytes = raw.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let fraction_start = end + 1;
        let mut fraction_end = fraction_start;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if fraction_end > fraction_start || has_digits {
            has_digits = has_digits || fraction_end > fraction_start;
            end = fraction_end;
        }
    }
    if !has_digits {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = exponent_end;
        while exponent_end < bytes.len() && bytes[exponent_end].is_ascii_digit() {
            exponent_end += 1;
        }
        if exponent_end > exponent_digits {
            end = exponent_end;
        }
    }
    raw[..end].parse::<f32>().ok()
}
