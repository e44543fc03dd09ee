use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}
impl Vec2 {
    pub fn norm(&self) -> f64 {
        self.y.hypot(self.x)
    }
    pub fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    #[cfg(feature = "tiny-skia-png")]
    pub(crate) fn to_pos(self) -> Pos {
        Pos {
            x: self.x as f32,
            y: self.y as f32,
        }
    }
}
impl From<(f64, f64)> for Vec2 {
    fn from(value: (f64, f64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}
impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}
#[derive(Copy, Debug, Clone, PartialEq, Default)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}
impl Pos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
    pub fn splat(c: u8) -> Self {
        Self { r: c, g: c, b: c }
    }
    ///parses "#RRGGBB", the leading '#' is optional
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
    #[cfg(feature = "tiny-skia-png")]
    pub(crate) fn to_col(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, 255)
    }
}
///closed interval per axis, stored as (start, end)
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct Domain {
    pub x: Vec2,
    pub y: Vec2,
}
impl Domain {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
    ///same interval on both axis
    pub fn square(start: f64, end: f64) -> Self {
        Self::new((start, end), (start, end))
    }
}
impl Default for Domain {
    fn default() -> Self {
        Self::square(-3.0, 3.0)
    }
}
///amount of samples along each axis
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub x: usize,
    pub y: usize,
}
impl Resolution {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
    pub fn splat(n: usize) -> Self {
        Self { x: n, y: n }
    }
}
impl Default for Resolution {
    fn default() -> Self {
        Self::splat(100)
    }
}
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Copy, Default)]
pub enum AngleMode {
    ///atan(v/u), only distinguishes the first and fourth quadrant,
    ///so arrows with negative u point the wrong way
    #[default]
    Arctan,
    ///atan2(v, u), the true direction of the vector
    Atan2,
}
impl AngleMode {
    pub fn angle(self, u: f64, v: f64) -> f64 {
        match self {
            AngleMode::Arctan => (v / u).atan(),
            AngleMode::Atan2 => v.atan2(u),
        }
    }
}
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Palette(pub Vec<Color>);
impl Palette {
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        colors
            .iter()
            .map(|c| Color::from_hex(c.as_ref()))
            .collect::<Result<Vec<Color>>>()
            .map(Palette)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, i: usize) -> Option<Color> {
        self.0.get(i).copied()
    }
}
impl Default for Palette {
    fn default() -> Self {
        Palette(vec![
            Color::new(0xC7, 0xE9, 0xB4),
            Color::new(0x7F, 0xCD, 0xBB),
            Color::new(0x41, 0xB6, 0xC4),
            Color::new(0x1D, 0x91, 0xC0),
            Color::new(0x22, 0x5E, 0xA8),
            Color::new(0x0C, 0x2C, 0x84),
        ])
    }
}
///everything needed to turn a vector field into arrows
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SamplerConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub domain: Domain,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resolution: Resolution,
    ///keep every nth row and column of the grid
    pub stride: usize,
    ///speed is divided by this to get the arrow length
    pub divisor: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub palette: Palette,
    #[cfg_attr(feature = "serde", serde(default))]
    pub angle_mode: AngleMode,
}
impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            domain: Domain::default(),
            resolution: Resolution::default(),
            stride: 2,
            divisor: 40.0,
            palette: Palette::default(),
            angle_mode: AngleMode::default(),
        }
    }
}
impl SamplerConfig {
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }
    pub fn divisor(mut self, divisor: f64) -> Self {
        self.divisor = divisor;
        self
    }
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
    pub fn angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }
    ///rejects configs that can not produce a single sample
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(Error::InvalidConfig(msg.to_string()));
        let Domain { x, y } = self.domain;
        if !x.is_finite() || !y.is_finite() {
            return invalid("domain bounds must be finite");
        }
        if self.resolution.x == 0 || self.resolution.y == 0 {
            return invalid("resolution must be non zero");
        }
        if (self.resolution.x > 1 && x.x == x.y) || (self.resolution.y > 1 && y.x == y.y) {
            return invalid("domain must not be empty when sampling more than one point");
        }
        if self.stride == 0 {
            return invalid("stride must be non zero");
        }
        if !(self.divisor.is_finite() && self.divisor > 0.0) {
            return invalid("divisor must be finite and positive");
        }
        if self.palette.is_empty() {
            return invalid("palette must contain at least one color");
        }
        Ok(())
    }
}
///a single arrow
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
}
impl Segment {
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}
