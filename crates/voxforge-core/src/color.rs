//! Color parsing, formatting and theme-color resolution.
//!
//! Colors are plain RGB triples with channels nominally in `0.0..=1.0`.
//! Values may exceed 1.0 while lighting math accumulates; they are only
//! clamped when formatted.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;

use crate::error::{Error, Result};
use crate::voxel::ColorRef;

/// Default color for custom boxes that carry no color string.
pub const DEFAULT_CUSTOM_COLOR: &str = "#888888";

/// An RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color(pub Vec3);

impl Color {
    /// White.
    pub const WHITE: Self = Self(Vec3::ONE);

    /// Create a color from float channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self(Vec3::new(r, g, b))
    }

    /// Create a color from 8-bit channels.
    #[inline]
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(
            f32::from(rgb[0]) / 255.0,
            f32::from(rgb[1]) / 255.0,
            f32::from(rgb[2]) / 255.0,
        )
    }

    /// The channels as a vector.
    #[inline]
    pub const fn rgb(self) -> Vec3 {
        self.0
    }

    /// Clamp every channel to `0.0..=1.0`.
    #[inline]
    #[must_use]
    pub fn clamped(self) -> Self {
        Self(self.0.clamp(Vec3::ZERO, Vec3::ONE))
    }

    /// Rounded 8-bit channels after clamping.
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = self.clamped().0 * 255.0;
        [
            c.x.round() as u8,
            c.y.round() as u8,
            c.z.round() as u8,
        ]
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Relative luminance (Rec. 709 weights).
    #[inline]
    pub fn luminance(self) -> f32 {
        self.0.dot(Vec3::new(0.2126, 0.7152, 0.0722))
    }

    /// Parse any supported color syntax.
    ///
    /// Accepts `#rgb`, `#rrggbb` (the `#` may be omitted or replaced by
    /// `0x`), `rgb()`/`rgba()` with numeric or percentage channels,
    /// `hsl()`/`hsla()` and a table of CSS named colors. Alpha is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_color(input, "empty string"));
        }
        let lower = trimmed.to_ascii_lowercase();

        if let Some(open) = lower.find('(') {
            if !lower.ends_with(')') {
                return Err(Error::invalid_color(input, "unterminated function"));
            }
            let func = lower[..open].trim();
            let args = split_args(&lower[open + 1..lower.len() - 1]);
            return match func {
                "rgb" | "rgba" => parse_rgb_args(input, &args),
                "hsl" | "hsla" => parse_hsl_args(input, &args),
                other => Err(Error::invalid_color(
                    input,
                    format!("unknown color function `{other}`"),
                )),
            };
        }

        if let Some(rgb) = named_color(&lower) {
            return Ok(Self::from_rgb8(rgb));
        }

        let digits = lower
            .strip_prefix('#')
            .or_else(|| lower.strip_prefix("0x"))
            .unwrap_or(&lower);
        parse_hex_digits(input, digits)
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn parse_hex_digits(input: &str, digits: &str) -> Result<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::invalid_color(input, "not a hex color"));
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).unwrap_or(0);
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
    match digits.len() {
        3 => Ok(Color::from_rgb8([
            nibble(0) * 17,
            nibble(1) * 17,
            nibble(2) * 17,
        ])),
        6 => Ok(Color::from_rgb8([byte(0), byte(2), byte(4)])),
        n => Err(Error::invalid_color(
            input,
            format!("expected 3 or 6 hex digits, found {n}"),
        )),
    }
}

fn split_args(body: &str) -> Vec<&str> {
    body.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_number(input: &str, token: &str) -> Result<f32> {
    let value: f32 = token
        .parse()
        .map_err(|_| Error::invalid_color(input, format!("bad number `{token}`")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_color(input, format!("bad number `{token}`")))
    }
}

/// Channel in `0..=255` or a percentage, mapped to `0.0..=1.0`.
fn parse_channel(input: &str, token: &str) -> Result<f32> {
    let value = match token.strip_suffix('%') {
        Some(pct) => parse_number(input, pct)? / 100.0,
        None => parse_number(input, token)? / 255.0,
    };
    Ok(value.clamp(0.0, 1.0))
}

/// Percentage (with or without `%`) mapped to `0.0..=1.0`.
fn parse_percentage(input: &str, token: &str) -> Result<f32> {
    let digits = token.strip_suffix('%').unwrap_or(token);
    Ok((parse_number(input, digits)? / 100.0).clamp(0.0, 1.0))
}

fn parse_hue(input: &str, token: &str) -> Result<f32> {
    let degrees = if let Some(turns) = token.strip_suffix("turn") {
        parse_number(input, turns)? * 360.0
    } else if let Some(rad) = token.strip_suffix("rad") {
        parse_number(input, rad)?.to_degrees()
    } else {
        parse_number(input, token.strip_suffix("deg").unwrap_or(token))?
    };
    Ok(degrees.rem_euclid(360.0))
}

fn check_arity(input: &str, args: &[&str]) -> Result<()> {
    if args.len() == 3 || args.len() == 4 {
        Ok(())
    } else {
        Err(Error::invalid_color(
            input,
            format!("expected 3 or 4 arguments, found {}", args.len()),
        ))
    }
}

fn parse_rgb_args(input: &str, args: &[&str]) -> Result<Color> {
    check_arity(input, args)?;
    Ok(Color::new(
        parse_channel(input, args[0])?,
        parse_channel(input, args[1])?,
        parse_channel(input, args[2])?,
    ))
}

fn parse_hsl_args(input: &str, args: &[&str]) -> Result<Color> {
    check_arity(input, args)?;
    let h = parse_hue(input, args[0])?;
    let s = parse_percentage(input, args[1])?;
    let l = parse_percentage(input, args[2])?;
    Ok(hsl_to_rgb(h, s, l))
}

/// Convert HSL (hue in degrees, saturation and lightness in `0..=1`).
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Color::new(r + m, g + m, b + m)
}

fn named_color(name: &str) -> Option<[u8; 3]> {
    let rgb = match name {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "lime" => [0, 255, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "cyan" | "aqua" => [0, 255, 255],
        "magenta" | "fuchsia" => [255, 0, 255],
        "gray" | "grey" => [128, 128, 128],
        "silver" => [192, 192, 192],
        "maroon" => [128, 0, 0],
        "olive" => [128, 128, 0],
        "purple" => [128, 0, 128],
        "teal" => [0, 128, 128],
        "navy" => [0, 0, 128],
        "orange" => [255, 165, 0],
        "gold" => [255, 215, 0],
        "brown" => [165, 42, 42],
        "pink" => [255, 192, 203],
        "violet" => [238, 130, 238],
        "indigo" => [75, 0, 130],
        "crimson" => [220, 20, 60],
        "orangered" => [255, 69, 0],
        "darkgreen" => [0, 100, 0],
        "forestgreen" => [34, 139, 34],
        "saddlebrown" => [139, 69, 19],
        "sienna" => [160, 82, 45],
        "skyblue" => [135, 206, 235],
        "lightblue" => [173, 216, 230],
        "darkgray" | "darkgrey" => [169, 169, 169],
        "dimgray" | "dimgrey" => [105, 105, 105],
        _ => return None,
    };
    Some(rgb)
}

/// The three theme colors of an asset, parsed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Resolves [`ColorRef::Primary`].
    pub primary: Color,
    /// Resolves [`ColorRef::Secondary`].
    pub secondary: Color,
    /// Resolves [`ColorRef::Glow`].
    pub glow: Color,
}

impl Palette {
    /// Build a palette from parsed colors.
    pub const fn new(primary: Color, secondary: Color, glow: Color) -> Self {
        Self {
            primary,
            secondary,
            glow,
        }
    }

    /// Parse the three theme color strings.
    pub fn parse(primary: &str, secondary: &str, glow: &str) -> Result<Self> {
        let field = |field: &'static str, value: &str| {
            Color::parse(value).map_err(|e| Error::ThemeColor {
                field,
                source: Box::new(e),
            })
        };
        Ok(Self {
            primary: field("primaryColor", primary)?,
            secondary: field("secondaryColor", secondary)?,
            glow: field("glowColor", glow)?,
        })
    }

    /// Resolve a color reference against this palette.
    pub fn resolve(&self, color: &ColorRef) -> Result<Color> {
        match color {
            ColorRef::Primary => Ok(self.primary),
            ColorRef::Secondary => Ok(self.secondary),
            ColorRef::Glow => Ok(self.glow),
            ColorRef::Custom(value) => Color::parse(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::parse("#ff0000").unwrap().to_rgb8(), [255, 0, 0]);
        assert_eq!(Color::parse("#0f0").unwrap().to_rgb8(), [0, 255, 0]);
        assert_eq!(Color::parse("4A4A5A").unwrap().to_hex(), "#4a4a5a");
        assert_eq!(Color::parse("0x00ffff").unwrap().to_hex(), "#00ffff");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Color::parse("").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("rgb(1, 2)").is_err());
        assert!(Color::parse("cmyk(1, 2, 3, 4)").is_err());
        assert!(Color::parse("rgb(1, 2, 3").is_err());
    }

    #[test]
    fn parses_functional_forms() {
        assert_eq!(
            Color::parse("rgb(255, 128, 0)").unwrap().to_rgb8(),
            [255, 128, 0]
        );
        assert_eq!(
            Color::parse("rgba(0, 0, 255, 0.5)").unwrap().to_rgb8(),
            [0, 0, 255]
        );
        assert_eq!(
            Color::parse("rgb(100%, 0%, 50%)").unwrap().to_rgb8(),
            [255, 0, 128]
        );
        assert_eq!(
            Color::parse("rgb(10 20 30)").unwrap().to_rgb8(),
            [10, 20, 30]
        );
        assert_eq!(
            Color::parse("hsl(0, 100%, 50%)").unwrap().to_rgb8(),
            [255, 0, 0]
        );
        assert_eq!(
            Color::parse("hsl(120, 100%, 25%)").unwrap().to_rgb8(),
            [0, 128, 0]
        );
        assert_eq!(
            Color::parse("HSLA(240deg, 100%, 50%, 1)")
                .unwrap()
                .to_rgb8(),
            [0, 0, 255]
        );
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(Color::parse("cyan").unwrap().to_hex(), "#00ffff");
        assert_eq!(Color::parse("Orange").unwrap().to_rgb8(), [255, 165, 0]);
    }

    #[test]
    fn hex_roundtrip_is_exact() {
        for v in 0..=255u8 {
            let hex = Color::from_rgb8([v, 255 - v, v / 2]).to_hex();
            assert_eq!(Color::parse(&hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn formatting_clamps_and_rounds() {
        assert_eq!(Color::new(1.7, -0.2, 0.5).to_rgb8(), [255, 0, 128]);
        assert_relative_eq!(Color::WHITE.luminance(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn palette_resolves_every_reference() {
        let palette = Palette::parse("#ff0000", "#00ff00", "#0000ff").unwrap();
        assert_eq!(
            palette.resolve(&ColorRef::Primary).unwrap().to_hex(),
            "#ff0000"
        );
        assert_eq!(
            palette.resolve(&ColorRef::Secondary).unwrap().to_hex(),
            "#00ff00"
        );
        assert_eq!(
            palette.resolve(&ColorRef::Glow).unwrap().to_hex(),
            "#0000ff"
        );
        assert_eq!(
            palette
                .resolve(&ColorRef::Custom("#123456".into()))
                .unwrap()
                .to_hex(),
            "#123456"
        );
    }

    #[test]
    fn palette_reports_bad_field() {
        let err = Palette::parse("#fff", "nope", "#000").unwrap_err();
        assert!(matches!(err, Error::ThemeColor { field: "secondaryColor", .. }));
    }
}
