//! Color notations and conversions between them.
//!
//! A [`Color`] is stored as sRGB with every channel normalized to `0..=1`.
//! The other color spaces are derived on demand.
mod format;
mod named;
mod parse;

pub use format::Format;
pub use named::named_color_names;
pub use parse::parse;

/// D65 reference white used by the CIE conversions.
const D65_WHITE: (f64, f64, f64) = (0.95047, 1.0, 1.08883);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Color {
    /// Creates an opaque color from 0–255 channels. Out of range values are
    /// clamped.
    pub fn from_rgb(r: i32, g: i32, b: i32) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Creates a color from 0–255 channels and a 0–1 alpha.
    pub fn from_rgba(r: i32, g: i32, b: i32, a: f64) -> Self {
        Self {
            r: clamp_unit(r as f64 / 255.0),
            g: clamp_unit(g as f64 / 255.0),
            b: clamp_unit(b as f64 / 255.0),
            a: clamp_unit(a),
        }
    }

    /// Creates an opaque color from 0–1 channels.
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: 1.0,
        }
    }

    pub fn with_alpha(mut self, a: f64) -> Self {
        self.a = clamp_unit(a);
        self
    }

    pub fn red(&self) -> f64 {
        self.r
    }

    pub fn green(&self) -> f64 {
        self.g
    }

    pub fn blue(&self) -> f64 {
        self.b
    }

    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// Returns 0–255 channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }

    /// Returns 0–255 channels and the 0–1 alpha.
    pub fn rgba(&self) -> (u8, u8, u8, f64) {
        let (r, g, b) = self.rgb();
        (r, g, b, self.a)
    }

    /// Returns `#rrggbb`.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Returns `#rrggbbaa`.
    pub fn hex_alpha(&self) -> String {
        format!("{}{:02x}", self.hex(), to_byte(self.a))
    }

    /// Returns hue in degrees, saturation and lightness in percent.
    pub fn hsl(&self) -> (f64, f64, f64) {
        let (max, min) = self.extremes();
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        (self.hue(max, d), s * 100.0, l * 100.0)
    }

    /// Returns hue in degrees, saturation and value in percent.
    pub fn hsv(&self) -> (f64, f64, f64) {
        let (max, min) = self.extremes();
        let s = if max == 0.0 { 0.0 } else { (max - min) / max };
        let h = if max == min {
            0.0
        } else {
            self.hue(max, max - min)
        };

        (h, s * 100.0, max * 100.0)
    }

    /// Returns cyan, magenta, yellow and key in percent.
    pub fn cmyk(&self) -> (f64, f64, f64, f64) {
        let (max, _) = self.extremes();
        let key = 1.0 - max;

        if key == 1.0 {
            return (0.0, 0.0, 0.0, 100.0);
        }

        let ink = |channel: f64| (1.0 - channel - key) / (1.0 - key) * 100.0;

        (ink(self.r), ink(self.g), ink(self.b), key * 100.0)
    }

    /// Converts the gamma encoded channels to linear light.
    pub fn linear(&self) -> Self {
        Self {
            r: srgb_to_linear(self.r),
            g: srgb_to_linear(self.g),
            b: srgb_to_linear(self.b),
            a: self.a,
        }
    }

    /// Returns CIE XYZ under the D65 illuminant.
    pub fn xyz(&self) -> (f64, f64, f64) {
        let Self { r, g, b, .. } = self.linear();

        (
            r * 0.4124564 + g * 0.3575761 + b * 0.1804375,
            r * 0.2126729 + g * 0.7151522 + b * 0.0721750,
            r * 0.0193339 + g * 0.1191920 + b * 0.9503041,
        )
    }

    /// Returns CIE L*a*b*.
    pub fn lab(&self) -> (f64, f64, f64) {
        let (x, y, z) = self.xyz();
        let (xn, yn, zn) = D65_WHITE;

        let x = lab_f(x / xn);
        let y = lab_f(y / yn);
        let z = lab_f(z / zn);

        (116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }

    pub fn oklab(&self) -> (f64, f64, f64) {
        let Self { r, g, b, .. } = self.linear();

        let l = (0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b).cbrt();
        let m = (0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b).cbrt();
        let s = (0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b).cbrt();

        (
            0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
            1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
            0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
        )
    }

    /// Returns lightness, chroma and hue in degrees (`0..360`).
    pub fn oklch(&self) -> (f64, f64, f64) {
        let (l, a, b) = self.oklab();
        let chroma = (a * a + b * b).sqrt();
        let h = b.atan2(a).to_degrees();
        let h = if h < 0.0 { h + 360.0 } else { h };

        (l, chroma, h)
    }

    /// Creates a color from hue in degrees, saturation and lightness in
    /// percent. The hue wraps around, negative values included.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let s = s / 100.0;
        let l = l / 100.0;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;

        Self::from_hue_chroma(h, chroma, l - chroma / 2.0)
    }

    /// Creates a color from hue in degrees, saturation and value in percent.
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let s = s / 100.0;
        let v = v / 100.0;
        let chroma = v * s;

        Self::from_hue_chroma(h, chroma, v - chroma)
    }

    /// Creates a color from cyan, magenta, yellow and key in percent.
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        let k = k / 100.0;
        let channel = |ink: f64| (1.0 - ink / 100.0) * (1.0 - k);

        Self::from_rgb_f64(channel(c), channel(m), channel(y))
    }

    /// Creates a color from OKLCH with the hue in degrees.
    pub fn from_oklch(l: f64, c: f64, h: f64) -> Self {
        let h = h.to_radians();

        Self::from_oklab(l, c * h.cos(), c * h.sin())
    }

    pub fn from_oklab(l: f64, a: f64, b: f64) -> Self {
        let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
        let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
        let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        let r = 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s;
        let g = -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s;
        let b = -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s;

        Self::from_rgb_f64(linear_to_srgb(r), linear_to_srgb(g), linear_to_srgb(b))
    }

    fn from_hue_chroma(h: f64, chroma: f64, offset: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());

        let (r, g, b) = match h {
            h if h < 60.0 => (chroma, x, 0.0),
            h if h < 120.0 => (x, chroma, 0.0),
            h if h < 180.0 => (0.0, chroma, x),
            h if h < 240.0 => (0.0, x, chroma),
            h if h < 300.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self::from_rgb_f64(r + offset, g + offset, b + offset)
    }

    fn extremes(&self) -> (f64, f64) {
        (
            self.r.max(self.g).max(self.b),
            self.r.min(self.g).min(self.b),
        )
    }

    fn hue(&self, max: f64, delta: f64) -> f64 {
        let sector = if max == self.r {
            let h = (self.g - self.b) / delta;
            if self.g < self.b { h + 6.0 } else { h }
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        sector * 60.0
    }
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn to_byte(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

fn srgb_to_linear(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f64) -> f64 {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;

    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{} != {}",
            actual,
            expected
        );
    }

    fn assert_rgb_near(actual: Color, expected: Color) {
        let (r1, g1, b1) = actual.rgb();
        let (r2, g2, b2) = expected.rgb();

        assert!(
            r1.abs_diff(r2) <= 1 && g1.abs_diff(g2) <= 1 && b1.abs_diff(b2) <= 1,
            "{:?} != {:?}",
            (r1, g1, b1),
            (r2, g2, b2)
        );
    }

    #[test]
    fn test_from_rgb() {
        let cases = [
            ((0, 0, 0), (0.0, 0.0, 0.0)),
            ((255, 255, 255), (1.0, 1.0, 1.0)),
            ((255, 0, 0), (1.0, 0.0, 0.0)),
            ((128, 128, 128), (0.502, 0.502, 0.502)),
            ((300, 300, 300), (1.0, 1.0, 1.0)),
            ((-10, -10, -10), (0.0, 0.0, 0.0)),
        ];

        for ((r, g, b), (want_r, want_g, want_b)) in cases {
            let color = Color::from_rgb(r, g, b);

            assert_close(color.red(), want_r);
            assert_close(color.green(), want_g);
            assert_close(color.blue(), want_b);
            assert_eq!(color.alpha(), 1.0);
        }
    }

    #[test]
    fn test_alpha() {
        assert_eq!(Color::from_rgba(255, 128, 64, 0.5).alpha(), 0.5);
        assert_eq!(Color::from_rgba(255, 128, 64, 0.75).rgba(), (255, 128, 64, 0.75));
        assert_eq!(Color::from_rgb(1, 2, 3).with_alpha(7.0).alpha(), 1.0);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Color::from_rgb(0, 0, 0).hex(), "#000000");
        assert_eq!(Color::from_rgb(255, 255, 255).hex(), "#ffffff");
        assert_eq!(Color::from_rgb(255, 165, 0).hex(), "#ffa500");
        assert_eq!(Color::from_rgba(255, 0, 0, 0.5).hex_alpha(), "#ff000080");
    }

    #[test]
    fn test_hsl() {
        let cases = [
            ((255, 0, 0), (0.0, 100.0, 50.0)),
            ((0, 255, 0), (120.0, 100.0, 50.0)),
            ((0, 0, 255), (240.0, 100.0, 50.0)),
            ((255, 255, 255), (0.0, 0.0, 100.0)),
            ((0, 0, 0), (0.0, 0.0, 0.0)),
            ((128, 128, 128), (0.0, 0.0, 50.2)),
        ];

        for ((r, g, b), (want_h, want_s, want_l)) in cases {
            let (h, s, l) = Color::from_rgb(r, g, b).hsl();

            assert_close(h, want_h);
            assert_close(s, want_s);
            assert_close(l, want_l);
        }
    }

    #[test]
    fn test_hsv() {
        let cases = [
            ((255, 0, 0), (0.0, 100.0, 100.0)),
            ((0, 255, 0), (120.0, 100.0, 100.0)),
            ((0, 0, 255), (240.0, 100.0, 100.0)),
            ((255, 255, 255), (0.0, 0.0, 100.0)),
            ((0, 0, 0), (0.0, 0.0, 0.0)),
        ];

        for ((r, g, b), (want_h, want_s, want_v)) in cases {
            let (h, s, v) = Color::from_rgb(r, g, b).hsv();

            assert_close(h, want_h);
            assert_close(s, want_s);
            assert_close(v, want_v);
        }
    }

    #[test]
    fn test_cmyk() {
        let cases = [
            ((255, 0, 0), (0.0, 100.0, 100.0, 0.0)),
            ((0, 255, 0), (100.0, 0.0, 100.0, 0.0)),
            ((0, 0, 255), (100.0, 100.0, 0.0, 0.0)),
            ((255, 255, 255), (0.0, 0.0, 0.0, 0.0)),
            ((0, 0, 0), (0.0, 0.0, 0.0, 100.0)),
        ];

        for ((r, g, b), (want_c, want_m, want_y, want_k)) in cases {
            let (c, m, y, k) = Color::from_rgb(r, g, b).cmyk();

            assert_close(c, want_c);
            assert_close(m, want_m);
            assert_close(y, want_y);
            assert_close(k, want_k);
        }
    }

    #[test]
    fn test_perceptual_ranges() {
        let color = Color::from_rgb(255, 128, 64);

        let (l, a, b) = color.lab();
        assert!((0.0..=100.0).contains(&l));
        assert!((-128.0..=128.0).contains(&a));
        assert!((-128.0..=128.0).contains(&b));

        let (l, a, b) = color.oklab();
        assert!((0.0..=1.0).contains(&l));
        assert!((-0.5..=0.5).contains(&a));
        assert!((-0.5..=0.5).contains(&b));

        let (l, c, h) = color.oklch();
        assert!((0.0..=1.0).contains(&l));
        assert!(c >= 0.0);
        assert!((0.0..360.0).contains(&h));
    }

    #[test]
    fn test_lab_white() {
        let (l, a, b) = Color::from_rgb(255, 255, 255).lab();

        assert_close(l, 100.0);
        assert!(a.abs() < 0.05, "{}", a);
        assert!(b.abs() < 0.05, "{}", b);
    }

    #[test]
    fn test_from_hsl() {
        let cases = [
            ((0.0, 100.0, 50.0), (255, 0, 0)),
            ((120.0, 100.0, 50.0), (0, 255, 0)),
            ((240.0, 100.0, 50.0), (0, 0, 255)),
            ((0.0, 0.0, 100.0), (255, 255, 255)),
            ((0.0, 0.0, 0.0), (0, 0, 0)),
            ((-60.0, 100.0, 50.0), (255, 0, 255)),
        ];

        for ((h, s, l), expected) in cases {
            assert_eq!(Color::from_hsl(h, s, l).rgb(), expected);
        }
    }

    #[test]
    fn test_from_hsv() {
        let cases = [
            ((0.0, 100.0, 100.0), (255, 0, 0)),
            ((120.0, 100.0, 100.0), (0, 255, 0)),
            ((240.0, 100.0, 100.0), (0, 0, 255)),
            ((0.0, 0.0, 100.0), (255, 255, 255)),
            ((0.0, 0.0, 0.0), (0, 0, 0)),
        ];

        for ((h, s, v), expected) in cases {
            assert_eq!(Color::from_hsv(h, s, v).rgb(), expected);
        }
    }

    #[test]
    fn test_from_cmyk() {
        let cases = [
            ((0.0, 100.0, 100.0, 0.0), (255, 0, 0)),
            ((100.0, 0.0, 100.0, 0.0), (0, 255, 0)),
            ((100.0, 100.0, 0.0, 0.0), (0, 0, 255)),
            ((0.0, 0.0, 0.0, 0.0), (255, 255, 255)),
            ((0.0, 0.0, 0.0, 100.0), (0, 0, 0)),
        ];

        for ((c, m, y, k), expected) in cases {
            assert_eq!(Color::from_cmyk(c, m, y, k).rgb(), expected);
        }
    }

    #[test]
    fn test_oklab_round_trip() {
        let original = Color::from_rgb(128, 64, 192);
        let (l, a, b) = original.oklab();

        assert_rgb_near(Color::from_oklab(l, a, b), original);
    }

    #[test]
    fn test_oklch_round_trip() {
        let original = Color::from_rgb(255, 128, 64);
        let (l, c, h) = original.oklch();

        assert_rgb_near(Color::from_oklch(l, c, h), original);
    }
}
