use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::domain::error::DomainError;

/// RGBA fill color for the padded canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT_WHITE: Color = Color::new(255, 255, 255, 0);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            // RRGGBB
            6 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            // RRGGBBAA
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    fn parse_decimal(list: &str) -> Option<Self> {
        let channels = list
            .split(',')
            .map(|part| part.trim().parse::<u8>().ok())
            .collect::<Option<Vec<_>>>()?;
        match channels.as_slice() {
            [r, g, b] => Some(Self::new(*r, *g, *b, 255)),
            [r, g, b, a] => Some(Self::new(*r, *g, *b, *a)),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT_WHITE
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Accepts `r,g,b[,a]` in decimal or `#RRGGBB[AA]` in hex.
impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if trimmed.contains(',') {
            Self::parse_decimal(trimmed)
        } else {
            Self::parse_hex(trimmed.trim_start_matches('#'))
        };
        parsed.ok_or_else(|| DomainError::InvalidColor(s.to_string()))
    }
}
