use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{ParseError, ParseErrorKind};

use super::Color;

static RGB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba?\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([\d.]+))?\s*\)$").unwrap()
});
static HSL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\s*\(\s*([\d.]+)\s*,\s*([\d.]+)%?\s*,\s*([\d.]+)%?\s*(?:,\s*([\d.]+))?\s*\)$",
    )
    .unwrap()
});
static HSV_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hs[vb]\s*\(\s*([\d.]+)\s*,\s*([\d.]+)%?\s*,\s*([\d.]+)%?\s*\)$").unwrap()
});
static CMYK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^cmyk\s*\(\s*([\d.]+)%?\s*,\s*([\d.]+)%?\s*,\s*([\d.]+)%?\s*,\s*([\d.]+)%?\s*\)$",
    )
    .unwrap()
});
static OKLCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^oklch\s*\(\s*([\d.]+)\s+([\d.]+)\s+([\d.]+)\s*\)$").unwrap()
});
static OKLAB_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^oklab\s*\(\s*([\d.-]+)\s+([\d.-]+)\s+([\d.-]+)\s*\)$").unwrap()
});

/// Parses a color written in any supported notation.
///
/// Recognized: hex (`#f50`, `ff5500`, with optional alpha digits),
/// `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hsv()`/`hsb()`, `cmyk()`,
/// `oklch()`, `oklab()` and the names from
/// [`named_color_names`](super::named_color_names).
pub fn parse(input: &str) -> Result<Color, ParseError> {
    let input = input.trim();
    let lower = input.to_lowercase();

    tracing::debug!(input, "parsing color");

    if lower.starts_with('#') || is_hex_color(&lower) {
        Color::from_hex(&lower)
    } else if lower.starts_with("rgb") {
        parse_rgb(&lower)
    } else if lower.starts_with("hsl") {
        parse_hsl(&lower)
    } else if lower.starts_with("hsv") || lower.starts_with("hsb") {
        parse_hsv(&lower)
    } else if lower.starts_with("cmyk") {
        parse_cmyk(&lower)
    } else if lower.starts_with("oklch") {
        parse_oklch(&lower)
    } else if lower.starts_with("oklab") {
        parse_oklab(&lower)
    } else if let Some(hex) = super::named::lookup(&lower) {
        Color::from_hex(hex)
    } else {
        Err(ParseError::new(ParseErrorKind::UnknownColor).with_snippet(input))
    }
}

impl Color {
    /// Creates a color from `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// The leading `#` is optional and digits are case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseError::new(ParseErrorKind::InvalidHex).with_snippet(hex));
        }

        let channels = match digits.len() {
            3 | 4 => digits
                .chars()
                .filter_map(|c| c.to_digit(16))
                .map(|value| value as u8 * 17)
                .collect::<Vec<_>>(),
            6 | 8 => (0..digits.len())
                .step_by(2)
                .map(|index| u8::from_str_radix(&digits[index..index + 2], 16))
                .collect::<Result<Vec<_>, _>>()?,
            _ => {
                return Err(ParseError::new(ParseErrorKind::InvalidHex)
                    .with_snippet(hex)
                    .with_expected("3, 4, 6, or 8 hex digits"));
            }
        };

        let alpha = channels.get(3).copied().unwrap_or(255);

        Ok(Self::from_rgba(
            channels[0].into(),
            channels[1].into(),
            channels[2].into(),
            f64::from(alpha) / 255.0,
        ))
    }
}

fn is_hex_color(text: &str) -> bool {
    let digits = text.strip_prefix('#').unwrap_or(text);

    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|c| c.is_ascii_hexdigit())
}

fn captures<'h>(
    pattern: &Regex,
    input: &'h str,
    notation: &str,
) -> Result<Captures<'h>, ParseError> {
    pattern.captures(input).ok_or_else(|| {
        ParseError::new(ParseErrorKind::Syntax)
            .with_snippet(input)
            .with_expected(format!("{} notation", notation))
    })
}

fn number(captures: &Captures, index: usize) -> Result<f64, ParseError> {
    Ok(captures[index].parse::<f64>()?)
}

fn optional_number(captures: &Captures, index: usize) -> Result<Option<f64>, ParseError> {
    captures
        .get(index)
        .map(|value| value.as_str().parse::<f64>())
        .transpose()
        .map_err(ParseError::from)
}

fn parse_rgb(input: &str) -> Result<Color, ParseError> {
    let captures = captures(&RGB_PATTERN, input, "rgb(r, g, b)")?;
    let channel = |index: usize| -> Result<i32, ParseError> { Ok(captures[index].parse()?) };
    let alpha = optional_number(&captures, 4)?.unwrap_or(1.0);

    Ok(Color::from_rgba(channel(1)?, channel(2)?, channel(3)?, alpha))
}

fn parse_hsl(input: &str) -> Result<Color, ParseError> {
    let captures = captures(&HSL_PATTERN, input, "hsl(h, s%, l%)")?;
    let color = Color::from_hsl(
        number(&captures, 1)?,
        number(&captures, 2)?,
        number(&captures, 3)?,
    );

    Ok(match optional_number(&captures, 4)? {
        Some(alpha) => color.with_alpha(alpha),
        None => color,
    })
}

fn parse_hsv(input: &str) -> Result<Color, ParseError> {
    let captures = captures(&HSV_PATTERN, input, "hsv(h, s%, v%)")?;

    Ok(Color::from_hsv(
        number(&captures, 1)?,
        number(&captures, 2)?,
        number(&captures, 3)?,
    ))
}

fn parse_cmyk(input: &str) -> Result<Color, ParseError> {
    let captures = captures(&CMYK_PATTERN, input, "cmyk(c%, m%, y%, k%)")?;

    Ok(Color::from_cmyk(
        number(&captures, 1)?,
        number(&captures, 2)?,
        number(&captures, 3)?,
        number(&captures, 4)?,
    ))
}

fn parse_oklch(input: &str) -> Result<Color, ParseError> {
    let captures = captures(&OKLCH_PATTERN, input, "oklch(l c h)")?;

    Ok(Color::from_oklch(
        number(&captures, 1)?,
        number(&captures, 2)?,
        number(&captures, 3)?,
    ))
}

fn parse_oklab(input: &str) -> Result<Color, ParseError> {
    let captures = captures(&OKLAB_PATTERN, input, "oklab(l a b)")?;

    Ok(Color::from_oklab(
        number(&captures, 1)?,
        number(&captures, 2)?,
        number(&captures, 3)?,
    ))
}
