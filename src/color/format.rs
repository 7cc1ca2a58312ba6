use std::{fmt::Display, str::FromStr};

use crate::error::{ParseError, ParseErrorKind};

use super::Color;

/// Target notation for printing a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Hex,
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
    Lab,
    OkLab,
    OkLch,
}

impl Format {
    pub const ALL: [Format; 8] = [
        Self::Hex,
        Self::Rgb,
        Self::Hsl,
        Self::Hsv,
        Self::Cmyk,
        Self::Lab,
        Self::OkLab,
        Self::OkLch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Hsv => "hsv",
            Self::Cmyk => "cmyk",
            Self::Lab => "lab",
            Self::OkLab => "oklab",
            Self::OkLch => "oklch",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();

        if lower == "hsb" {
            return Ok(Self::Hsv);
        }

        Self::ALL
            .into_iter()
            .find(|format| format.name() == lower)
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnknownFormat).with_snippet(s))
    }
}

impl Color {
    pub fn format(&self, format: Format) -> String {
        match format {
            Format::Hex => self.hex(),
            Format::Rgb => self.format_rgb(),
            Format::Hsl => self.format_hsl(),
            Format::Hsv => self.format_hsv(),
            Format::Cmyk => self.format_cmyk(),
            Format::Lab => self.format_lab(),
            Format::OkLab => self.format_oklab(),
            Format::OkLch => self.format_oklch(),
        }
    }

    /// Formats as `rgb(r, g, b)`.
    pub fn format_rgb(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("rgb({}, {}, {})", r, g, b)
    }

    /// Formats as `rgba(r, g, b, a)`.
    pub fn format_rgba(&self) -> String {
        let (r, g, b, a) = self.rgba();
        format!("rgba({}, {}, {}, {:.2})", r, g, b, a)
    }

    pub fn format_hsl(&self) -> String {
        let (h, s, l) = self.hsl();
        format!("hsl({:.1}, {:.1}%, {:.1}%)", h, s, l)
    }

    pub fn format_hsv(&self) -> String {
        let (h, s, v) = self.hsv();
        format!("hsv({:.1}, {:.1}%, {:.1}%)", h, s, v)
    }

    pub fn format_cmyk(&self) -> String {
        let (c, m, y, k) = self.cmyk();
        format!("cmyk({:.1}%, {:.1}%, {:.1}%, {:.1}%)", c, m, y, k)
    }

    pub fn format_lab(&self) -> String {
        let (l, a, b) = self.lab();
        format!("lab({:.1} {:.1} {:.1})", l, a, b)
    }

    pub fn format_oklab(&self) -> String {
        let (l, a, b) = self.oklab();
        format!("oklab({:.3} {:.3} {:.3})", l, a, b)
    }

    pub fn format_oklch(&self) -> String {
        let (l, c, h) = self.oklch();
        format!("oklch({:.3} {:.3} {:.1})", l, c, h)
    }

    /// Lists every notation, one `name: value` line each.
    pub fn format_all(&self) -> String {
        Format::ALL
            .iter()
            .map(|format| format!("{:<8}{}", format!("{}:", format), self.format(*format)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
