use super::Color;

/// Parses `rgb(r, g, b)` and `rgba(r, g, b, a)` with integer channels,
/// the form `getComputedStyle` serialises colours to.
pub fn parse_rgb_function(raw: &str) -> Option<Color> {
    let (args, has_alpha) = if let Some(rest) = raw.strip_prefix("rgba(") {
        (rest, true)
    } else if let Some(rest) = raw.strip_prefix("rgb(") {
        (rest, false)
    } else {
        return None;
    };
    let args = args.strip_suffix(')')?;

    let mut parts = args.split(',').map(str::trim);
    let r = parse_channel(parts.next()?)?;
    let g = parse_channel(parts.next()?)?;
    let b = parse_channel(parts.next()?)?;
    let a = if has_alpha {
        parse_alpha(parts.next()?)?
    } else {
        255
    };
    if parts.next().is_some() {
        return None;
    }
    Some(Color::rgba(r, g, b, a))
}

fn parse_channel(raw: &str) -> Option<u8> {
    if raw.is_empty() || raw.len() > 3 || !raw.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u16>().ok().map(|value| value.min(255) as u8)
}

fn parse_alpha(raw: &str) -> Option<u8> {
    let value = raw.parse::<f32>().ok().filter(|value| value.is_finite())?;
    Some((value.clamp(0.0, 1.0) * 255.0).round() as u8)
}
