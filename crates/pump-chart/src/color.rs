// File: crates/pump-chart/src/color.rs
// Summary: RGBA color with CSS-style parsing and formatting.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::series::format_value;

/// 8-bit RGB with a fractional alpha in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Alpha as a byte, for raster backends.
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Same color with alpha multiplied by `opacity`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { a: (self.a * opacity).clamp(0.0, 1.0), ..self }
    }

    /// CSS text: `#rrggbb` when opaque, `transparent` for clear black, else `rgba(...)`.
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else if *self == Self::TRANSPARENT {
            "transparent".to_string()
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, format_value(self.a))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        if s == "transparent" {
            return Ok(Self::TRANSPARENT);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(s.clone()));
        }
        if let Some(args) = s.strip_prefix("rgba(").or_else(|| s.strip_prefix("rgb(")) {
            return parse_function(args).ok_or_else(|| ColorError::InvalidFunction(s.clone()));
        }
        match s.as_str() {
            "white" => Ok(Self::WHITE),
            "black" => Ok(Self::rgb(0, 0, 0)),
            _ => Err(ColorError::Unknown(s)),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)? as f64 / 255.0)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)? as f64 / 255.0)),
        _ => None,
    }
}

fn parse_function(args: &str) -> Option<Color> {
    let body = args.strip_suffix(')')?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let channel = |s: &str| s.parse::<u8>().ok();
    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let a = a.parse::<f64>().ok().filter(|a| (0.0..=1.0).contains(a))?;
            Some(Color::rgba(channel(r)?, channel(g)?, channel(b)?, a))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#6a5cff".parse::<Color>().unwrap(), Color::rgb(0x6a, 0x5c, 0xff));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#00000000".parse::<Color>().unwrap(), Color::TRANSPARENT);
    }

    #[test]
    fn parses_rgba_function() {
        let c: Color = "rgba(106, 92, 255, 0.25)".parse().unwrap();
        assert_eq!(c, Color::rgba(106, 92, 255, 0.25));
        assert_eq!(c.to_css(), "rgba(106,92,255,0.25)");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("".parse::<Color>(), Err(ColorError::Empty));
        assert!(matches!("#12".parse::<Color>(), Err(ColorError::InvalidHex(_))));
        assert!(matches!("rgb(1,2)".parse::<Color>(), Err(ColorError::InvalidFunction(_))));
        assert!(matches!("rgba(1,2,3,7)".parse::<Color>(), Err(ColorError::InvalidFunction(_))));
        assert!(matches!("chartreuse".parse::<Color>(), Err(ColorError::Unknown(_))));
    }

    #[test]
    fn css_output() {
        assert_eq!(Color::rgb(0x8b, 0x90, 0xa0).to_css(), "#8b90a0");
        assert_eq!(Color::TRANSPARENT.to_css(), "transparent");
        assert_eq!(Color::WHITE.with_opacity(0.5).alpha_u8(), 128);
    }
}
