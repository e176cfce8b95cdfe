use crate::style::color::{Color, parse_css_color};
use crate::style::parsed_style::{Display, Overflow, PropertyId, Visibility, parse_leading_f32};

/// The slice of an element's computed style that drives a resync.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub visibility: Visibility,
    pub display: Display,
    pub opacity: f32,
    pub overflow: Overflow,
    pub border_width: f32,
    /// `None` when the source value is missing or not a colour we read.
    pub border_color: Option<Color>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            visibility: Visibility::Visible,
            display: Display::Shown,
            opacity: 1.0,
            overflow: Overflow::Visible,
            border_width: 0.0,
            border_color: None,
        }
    }
}

impl ComputedStyle {
    /// Opacity to write onto the scene proxy.
    ///
    /// Hidden or undisplayed elements are fully transparent whatever their
    /// `opacity` says.
    pub fn effective_opacity(&self) -> f32 {
        if self.visibility == Visibility::Hidden || self.display == Display::None {
            return 0.0;
        }
        self.opacity
    }

    pub fn clips_overflow(&self) -> bool {
        self.overflow == Overflow::Hidden
    }
}

/// Builds a [`ComputedStyle`] from raw property strings.
///
/// Values that fail to parse keep their initial value; nothing here errors.
pub fn compute_style<F>(mut lookup: F) -> ComputedStyle
where
    F: FnMut(PropertyId) -> Option<String>,
{
    let mut computed = ComputedStyle::default();

    for property in PropertyId::ALL {
        let Some(raw) = lookup(property) else {
            continue;
        };
        match property {
            PropertyId::Visibility => computed.visibility = Visibility::parse(&raw),
            PropertyId::Display => computed.display = Display::parse(&raw),
            PropertyId::Opacity => {
                if let Some(value) = parse_leading_f32(&raw).filter(|value| value.is_finite()) {
                    computed.opacity = value.clamp(0.0, 1.0);
                }
            }
            PropertyId::Overflow => computed.overflow = Overflow::parse(&raw),
            PropertyId::BorderWidth => {
                if let Some(value) = parse_leading_f32(&raw).filter(|value| value.is_finite()) {
                    computed.border_width = value.max(0.0);
                }
            }
            PropertyId::BorderColor => computed.border_color = parse_css_color(&raw),
        }
    }

    computed
}
