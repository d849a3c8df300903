//! Character-cell wireframe rasterizer.
//!
//! Projects drawing elements through a simple orbiting perspective camera
//! and rasterizes them into a character buffer with per-cell colors and a
//! depth test. Drawing to the terminal is left to [`LineRenderer::draw`],
//! which queues crossterm commands on any writer.

use crossterm::{
    cursor,
    style::{Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};
use hexviz_core::{Color, Element, PointStyle};
use nalgebra::{Point3, Rotation3};
use std::io::{self, Write};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 0.5;
/// Screen-height fraction covered by a unit offset at unit distance.
const FOCAL: f64 = 0.7;
/// Geometry closer to the camera than this is clipped.
const NEAR: f64 = 0.1;

/// Camera state mutated by the viewer's input loop.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    pub yaw: f64,
    pub pitch: f64,
    pub magnify: f64,
    pub camera_dist: f64,
}

impl ViewState {
    pub fn new(magnify: f64, camera_dist: f64) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            magnify,
            camera_dist,
        }
    }

    fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_euler_angles(self.pitch, self.yaw, 0.0)
    }
}

/// Off-screen character framebuffer with depth and color per cell.
pub struct LineRenderer {
    width: usize,
    height: usize,
    depth: Vec<f64>,
    chars: Vec<char>,
    colors: Vec<TermColor>,
    bold: Vec<bool>,
}

impl LineRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let cells = width * height;
        Self {
            width,
            height,
            depth: vec![f64::INFINITY; cells],
            chars: vec![' '; cells],
            colors: vec![TermColor::Reset; cells],
            bold: vec![false; cells],
        }
    }

    pub fn clear(&mut self) {
        self.depth.fill(f64::INFINITY);
        self.chars.fill(' ');
        self.colors.fill(TermColor::Reset);
        self.bold.fill(false);
    }

    /// Rasterizes colored elements into the buffer. Points use the marker
    /// character for `style`; lines and polygon edges pick a character from
    /// their screen slope.
    pub fn plot_elements(&mut self, elements: &[(Element, Color)], style: PointStyle, view: &ViewState) {
        for (element, color) in elements {
            let color = term_color(*color);
            match element {
                Element::Point(p) => {
                    if let Some((sx, sy, z)) = self.project(p, view) {
                        self.put(sx.round() as i32, sy.round() as i32, z, marker_char(style), color);
                    }
                }
                Element::Line(a, b) => self.segment(a, b, color, view),
                Element::Polygon(points) => {
                    for pair in points.windows(2) {
                        self.segment(&pair[0], &pair[1], color, view);
                    }
                }
            }
        }
    }

    /// Overlays a text label at the projected anchor point. Labels ignore the
    /// depth test so they stay readable over the wireframe.
    pub fn plot_text(&mut self, text: &str, at: &Point3<f64>, color: Color, bold: bool, view: &ViewState) {
        let Some((sx, sy, _)) = self.project(at, view) else {
            return;
        };
        let x0 = sx.round() as i32;
        let y = sy.round() as i32;
        for (i, ch) in text.chars().enumerate() {
            self.overlay(x0 + i as i32, y, ch, term_color(color), bold);
        }
    }

    /// Queues the buffer contents on `writer` without flushing.
    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.colors[idx]))?;
                if self.bold[idx] {
                    writer.queue(SetAttribute(Attribute::Bold))?;
                }
                writer.queue(Print(self.chars[idx]))?;
                if self.bold[idx] {
                    writer.queue(SetAttribute(Attribute::NormalIntensity))?;
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    /// Orbits the point by yaw/pitch, then projects it onto the screen with
    /// the camera on the +z axis looking at the origin. Returns screen x, y
    /// and view-space depth, or `None` when the point is clipped.
    fn project(&self, p: &Point3<f64>, view: &ViewState) -> Option<(f64, f64, f64)> {
        let rotated = view.rotation() * p;
        let view_z = view.camera_dist - rotated.z;
        if view_z < NEAR {
            return None;
        }
        let focal = self.height as f64 * FOCAL * view.magnify;
        let sx = self.width as f64 / 2.0 + rotated.x * focal / view_z / CELL_ASPECT;
        let sy = self.height as f64 / 2.0 - rotated.y * focal / view_z;
        Some((sx, sy, view_z))
    }

    fn segment(&mut self, a: &Point3<f64>, b: &Point3<f64>, color: TermColor, view: &ViewState) {
        let (Some((x0, y0, z0)), Some((x1, y1, z1))) = (self.project(a, view), self.project(b, view))
        else {
            return;
        };
        let ch = slope_char(x1 - x0, y1 - y0);
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize;
        if steps == 0 {
            self.put(x0.round() as i32, y0.round() as i32, z0, ch, color);
            return;
        }
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = x0 + (x1 - x0) * t;
            let y = y0 + (y1 - y0) * t;
            let z = z0 + (z1 - z0) * t;
            self.put(x.round() as i32, y.round() as i32, z, ch, color);
        }
    }

    fn put(&mut self, x: i32, y: i32, depth: f64, ch: char, color: TermColor) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        if depth < self.depth[idx] {
            self.depth[idx] = depth;
            self.chars[idx] = ch;
            self.colors[idx] = color;
            self.bold[idx] = false;
        }
    }

    fn overlay(&mut self, x: i32, y: i32, ch: char, color: TermColor, bold: bool) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.depth[idx] = f64::NEG_INFINITY;
        self.chars[idx] = ch;
        self.colors[idx] = color;
        self.bold[idx] = bold;
    }
}

fn slope_char(dx: f64, dy: f64) -> char {
    let adx = dx.abs();
    let ady = dy.abs();
    if adx >= 2.0 * ady {
        '-'
    } else if ady >= 2.0 * adx {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        // Screen y grows downward.
        '\\'
    } else {
        '/'
    }
}

fn marker_char(style: PointStyle) -> char {
    match style {
        PointStyle::Dot => '.',
        PointStyle::Plus => '+',
        PointStyle::X => 'x',
        PointStyle::Circle => 'o',
        PointStyle::CircleX => '@',
    }
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::ByLayer | Color::White => TermColor::White,
        Color::Red => TermColor::Red,
        Color::Yellow => TermColor::Yellow,
        Color::Green => TermColor::Green,
        Color::Cyan => TermColor::Cyan,
        Color::Blue => TermColor::Blue,
        Color::Magenta => TermColor::Magenta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewState {
        ViewState::new(1.0, 25.0)
    }

    fn line(a: (f64, f64, f64), b: (f64, f64, f64)) -> Element {
        Element::Line(Point3::new(a.0, a.1, a.2), Point3::new(b.0, b.1, b.2))
    }

    #[test]
    fn horizontal_line_rasterizes_as_dashes_through_the_center_row() {
        let mut renderer = LineRenderer::new(80, 24);
        renderer.plot_elements(
            &[(line((-5.0, 0.0, 0.0), (5.0, 0.0, 0.0)), Color::Red)],
            PointStyle::Dot,
            &view(),
        );
        // Center of an 80x24 buffer is column 40, row 12.
        assert_eq!(renderer.chars[12 * 80 + 40], '-');
        assert_eq!(renderer.colors[12 * 80 + 40], TermColor::Red);
    }

    #[test]
    fn geometry_behind_the_camera_is_clipped() {
        let mut renderer = LineRenderer::new(80, 24);
        renderer.plot_elements(
            &[(line((0.0, 0.0, 30.0), (5.0, 0.0, 40.0)), Color::Red)],
            PointStyle::Dot,
            &view(),
        );
        assert!(renderer.chars.iter().all(|&c| c == ' '));
    }

    #[test]
    fn point_elements_use_the_marker_for_the_style() {
        let mut renderer = LineRenderer::new(80, 24);
        renderer.plot_elements(
            &[(Element::Point(Point3::origin()), Color::White)],
            PointStyle::X,
            &view(),
        );
        assert_eq!(renderer.chars[12 * 80 + 40], 'x');
    }

    #[test]
    fn text_overlays_left_to_right_from_its_anchor() {
        let mut renderer = LineRenderer::new(80, 24);
        renderer.plot_text("42", &Point3::origin(), Color::Yellow, true, &view());
        assert_eq!(renderer.chars[12 * 80 + 40], '4');
        assert_eq!(renderer.chars[12 * 80 + 41], '2');
        assert!(renderer.bold[12 * 80 + 40]);
    }

    #[test]
    fn nearer_geometry_wins_the_depth_test() {
        let mut renderer = LineRenderer::new(80, 24);
        renderer.plot_elements(
            &[
                (line((-5.0, 0.0, 0.0), (5.0, 0.0, 0.0)), Color::Red),
                (line((0.0, -3.0, 5.0), (0.0, 3.0, 5.0)), Color::Blue),
            ],
            PointStyle::Dot,
            &view(),
        );
        // The vertical line sits closer to the camera and crosses the
        // horizontal one at the center cell.
        assert_eq!(renderer.chars[12 * 80 + 40], '|');
        assert_eq!(renderer.colors[12 * 80 + 40], TermColor::Blue);
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut renderer = LineRenderer::new(80, 24);
        renderer.plot_text("hi", &Point3::origin(), Color::White, false, &view());
        renderer.clear();
        assert!(renderer.chars.iter().all(|&c| c == ' '));
        assert!(renderer.depth.iter().all(|&d| d == f64::INFINITY));
    }
}
