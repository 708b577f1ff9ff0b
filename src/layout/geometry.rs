//! Colors, rectangles and the renderable mosaic layout

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, invalid_parameter};

/// RGB color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl Rgb {
    /// Create a color from its three channels
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` (or `rrggbb`) hex string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not six hexadecimal digits
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_parameter(
                "color",
                &value,
                &"expected six hex digits such as #ff0000",
            ));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<f64> {
            let text = digits
                .get(range)
                .ok_or_else(|| invalid_parameter("color", &value, &"truncated hex color"))?;
            let byte = u8::from_str_radix(text, 16)
                .map_err(|e| invalid_parameter("color", &value, &e))?;
            Ok(f64::from(byte) / 255.0)
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Whether every channel lies in `[0, 1]`
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Convert to 8-bit channels, clamping out-of-range values
    pub fn to_rgb8(&self) -> [u8; 3] {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Axis-aligned rectangle in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

impl Rect {
    /// Create a rectangle from position and size
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Covered area
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the two rectangles share any interior point
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Direction a separator line runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Spans the full grid height between two columns
    Vertical,
    /// Spans the full grid width between two rows
    Horizontal,
}

/// Thin rectangle separating two rows or two columns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparatorLine {
    /// Line direction
    pub orientation: Orientation,
    /// Painted area
    pub rect: Rect,
    /// Solid fill
    pub color: Rgb,
}

/// Filled rectangle for one active cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    /// Source row in the activation mask
    pub row: usize,
    /// Source column in the activation mask
    pub column: usize,
    /// Painted area
    pub rect: Rect,
    /// Solid fill
    pub color: Rgb,
    /// Fill opacity in `[0, 1]`
    pub opacity: f64,
}

/// Named group of shapes sharing the container's size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer<T> {
    /// Display name on the canvas
    pub name: String,
    /// Layer width
    pub width: u32,
    /// Layer height
    pub height: u32,
    /// Shapes in paint order
    pub shapes: Vec<T>,
}

impl<T> Layer<T> {
    /// Create an empty layer
    pub fn new(name: &str, width: u32, height: u32) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            shapes: Vec::new(),
        }
    }

    /// Number of shapes in the layer
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the layer holds no shapes
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Renderable mosaic: a transparent container with the line layer below the cell layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosaicLayout {
    /// Container width
    pub width: u32,
    /// Container height
    pub height: u32,
    /// Edge length of one grid cell after coercion
    pub cell_size: u32,
    /// Separator lines, painted first
    pub lines: Layer<SeparatorLine>,
    /// Cell rectangles, painted over the lines
    pub cells: Layer<CellRect>,
}

impl MosaicLayout {
    /// Container bounds
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}
