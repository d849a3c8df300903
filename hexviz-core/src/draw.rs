//! Style attributes and the narrow drawable-target interface.

use nalgebra::Point3;

use crate::error::Error;
use crate::geometry::Element;

/// Line and text color, named after the standard AutoCAD index palette so
/// both the file and the interactive target can agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Defer to the layer's default color.
    ByLayer,
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    White,
}

impl Color {
    /// AutoCAD color index as written to group 62 (ByLayer is 256).
    pub fn aci(self) -> u16 {
        match self {
            Color::ByLayer => 256,
            Color::Red => 1,
            Color::Yellow => 2,
            Color::Green => 3,
            Color::Cyan => 4,
            Color::Blue => 5,
            Color::Magenta => 6,
            Color::White => 7,
        }
    }
}

/// How bare points are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointStyle {
    Dot,
    Plus,
    X,
    Circle,
    /// Circle with an inscribed X (the classic survey marker).
    CircleX,
}

impl PointStyle {
    /// DXF `$PDMODE` value for this style.
    pub fn pdmode(self) -> i32 {
        match self {
            PointStyle::Dot => 0,
            PointStyle::Plus => 2,
            PointStyle::X => 3,
            PointStyle::Circle => 33,
            PointStyle::CircleX => 35,
        }
    }
}

/// Text attributes for `draw_text`. `height` is in drawing units; `font`
/// and `bold` feed whatever notion of text style a target has.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAttr {
    pub height: f64,
    pub font: Option<String>,
    pub bold: bool,
}

impl Default for TextAttr {
    fn default() -> Self {
        Self {
            height: 1.0,
            font: None,
            bold: false,
        }
    }
}

impl TextAttr {
    pub fn with_height(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }
}

/// The narrow interface every render target exposes.
///
/// Draw calls append primitives under the attributes current at call time.
/// `display` finalizes the target (writes the file, runs the interactive
/// session) and is called exactly once, as the last operation.
pub trait Drawable {
    fn set_linecolor(&mut self, color: Color);

    /// Point rendering style. Targets without point glyphs ignore it.
    fn set_pointstyle(&mut self, _style: PointStyle) {}

    /// Layer for subsequent entities. Meaningful for file targets only.
    fn set_layer(&mut self, _name: &str) {}

    fn draw(&mut self, elements: &[Element]);

    fn draw_text(&mut self, text: &str, at: Point3<f64>, attr: &TextAttr);

    fn display(&mut self) -> Result<(), Error>;
}

/// A registered target plus the one per-target style divergence the
/// pipeline needs: the color its legend is drawn in.
pub struct Target {
    pub drawable: Box<dyn Drawable>,
    pub legend_color: Color,
}

impl Target {
    pub fn new(drawable: Box<dyn Drawable>, legend_color: Color) -> Self {
        Self {
            drawable,
            legend_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aci_matches_the_autocad_palette() {
        assert_eq!(Color::Red.aci(), 1);
        assert_eq!(Color::White.aci(), 7);
        assert_eq!(Color::ByLayer.aci(), 256);
    }

    #[test]
    fn pdmode_encodes_circled_styles_with_the_32_flag() {
        assert_eq!(PointStyle::Dot.pdmode(), 0);
        assert_eq!(PointStyle::X.pdmode(), 3);
        assert_eq!(PointStyle::CircleX.pdmode(), 32 + 3);
    }
}
