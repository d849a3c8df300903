//! Interactive terminal target for hexviz drawings.
//!
//! [`TerminalViewer`] buffers everything drawn into it and runs a blocking
//! wireframe session when [`Drawable::display`] is called: raw mode plus the
//! alternate screen, re-rendering after every input event until the viewer
//! is closed with `q` or Escape.
//!
//! Controls: arrow keys or WASD orbit the camera, `+`/`-` zoom, `0` resets
//! the view.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    terminal,
};
use hexviz_core::{Color, Drawable, Element, Error, PointStyle, TextAttr};
use nalgebra::Point3;
use std::io::{stdout, Write};

pub mod renderer;

pub use renderer::{LineRenderer, ViewState};

/// Orbit step per key press, in radians.
const ROTATE_STEP: f64 = 0.1;
/// Zoom factor per key press.
const ZOOM_STEP: f64 = 1.25;
/// Magnify limits for the zoom keys; rasterization step counts scale with
/// magnification.
const MIN_MAGNIFY: f64 = 0.01;
const MAX_MAGNIFY: f64 = 100.0;

/// Camera setup for a viewer session.
#[derive(Debug, Clone, Copy)]
pub struct ViewerConfig {
    pub magnify: f64,
    pub camera_dist: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            magnify: 1.0,
            camera_dist: 25.0,
        }
    }
}

struct TextItem {
    text: String,
    at: Point3<f64>,
    color: Color,
    bold: bool,
}

/// Drawable target that renders to the terminal as an ASCII wireframe.
pub struct TerminalViewer {
    config: ViewerConfig,
    color: Color,
    point_style: PointStyle,
    elements: Vec<(Element, Color)>,
    texts: Vec<TextItem>,
}

impl TerminalViewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            color: Color::White,
            point_style: PointStyle::Dot,
            elements: Vec::new(),
            texts: Vec::new(),
        }
    }

    fn session(&self) -> Result<(), Error> {
        let (width, height) = terminal::size()?;
        let mut renderer = LineRenderer::new(width as usize, height as usize);
        let mut view = ViewState::new(self.config.magnify, self.config.camera_dist);
        log::debug!(
            "viewer session: {} elements, {} labels",
            self.elements.len(),
            self.texts.len()
        );
        loop {
            self.render_frame(&mut renderer, &view)?;
            match event::read()? {
                Event::Key(KeyEvent { code, .. }) => {
                    if !self.handle_key(code, &mut view) {
                        return Ok(());
                    }
                }
                Event::Resize(w, h) => renderer = LineRenderer::new(w as usize, h as usize),
                _ => {}
            }
        }
    }

    fn render_frame(&self, renderer: &mut LineRenderer, view: &ViewState) -> Result<(), Error> {
        renderer.clear();
        renderer.plot_elements(&self.elements, self.point_style, view);
        for item in &self.texts {
            renderer.plot_text(&item.text, &item.at, item.color, item.bold, view);
        }
        let mut out = stdout();
        renderer.draw(&mut out)?;
        queue!(
            out,
            cursor::MoveTo(0, 0),
            SetForegroundColor(TermColor::Yellow),
            Print(format!(
                "hexviz | magnify {:.2} | arrows/WASD rotate  +/- zoom  0 reset  q quit",
                view.magnify
            )),
            ResetColor
        )?;
        out.flush()?;
        Ok(())
    }

    /// Returns `false` when the session should end.
    fn handle_key(&self, code: KeyCode, view: &mut ViewState) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Up | KeyCode::Char('w') => view.pitch += ROTATE_STEP,
            KeyCode::Down | KeyCode::Char('s') => view.pitch -= ROTATE_STEP,
            KeyCode::Left | KeyCode::Char('a') => view.yaw -= ROTATE_STEP,
            KeyCode::Right | KeyCode::Char('d') => view.yaw += ROTATE_STEP,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                view.magnify = (view.magnify * ZOOM_STEP).min(MAX_MAGNIFY);
            }
            KeyCode::Char('-') => {
                view.magnify = (view.magnify / ZOOM_STEP).max(MIN_MAGNIFY);
            }
            KeyCode::Char('0') => {
                *view = ViewState::new(self.config.magnify, self.config.camera_dist);
            }
            _ => {}
        }
        true
    }
}

impl Default for TerminalViewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Drawable for TerminalViewer {
    fn set_linecolor(&mut self, color: Color) {
        self.color = color;
    }

    fn set_pointstyle(&mut self, style: PointStyle) {
        self.point_style = style;
    }

    fn draw(&mut self, elements: &[Element]) {
        let color = self.color;
        self.elements
            .extend(elements.iter().map(|e| (e.clone(), color)));
    }

    fn draw_text(&mut self, text: &str, at: Point3<f64>, attr: &TextAttr) {
        self.texts.push(TextItem {
            text: text.to_owned(),
            at,
            color: self.color,
            bold: attr.bold,
        });
    }

    fn display(&mut self) -> Result<(), Error> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        let result = self.session();
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_tags_elements_with_the_current_color() {
        let mut viewer = TerminalViewer::default();
        viewer.set_linecolor(Color::Green);
        viewer.draw(&[Element::Point(Point3::origin())]);
        viewer.set_linecolor(Color::Blue);
        viewer.draw(&[Element::Point(Point3::new(1.0, 0.0, 0.0))]);
        let colors: Vec<Color> = viewer.elements.iter().map(|(_, c)| *c).collect();
        assert_eq!(colors, [Color::Green, Color::Blue]);
    }

    #[test]
    fn draw_text_records_the_bold_flag() {
        let mut viewer = TerminalViewer::default();
        viewer.set_linecolor(Color::Yellow);
        viewer.draw_text(
            "title",
            Point3::new(5.0, 15.0, 0.0),
            &TextAttr {
                height: 2.0,
                font: Some("OpenSans".to_owned()),
                bold: true,
            },
        );
        assert_eq!(viewer.texts.len(), 1);
        assert!(viewer.texts[0].bold);
        assert_eq!(viewer.texts[0].color, Color::Yellow);
    }

    #[test]
    fn default_config_matches_the_viewer_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.magnify, 1.0);
        assert_eq!(config.camera_dist, 25.0);
    }

    #[test]
    fn zoom_keys_keep_magnify_within_its_limits() {
        let viewer = TerminalViewer::default();
        let mut view = ViewState::new(1.0, 25.0);

        for _ in 0..100 {
            viewer.handle_key(KeyCode::Char('+'), &mut view);
        }
        assert_eq!(view.magnify, MAX_MAGNIFY);

        for _ in 0..200 {
            viewer.handle_key(KeyCode::Char('-'), &mut view);
        }
        assert_eq!(view.magnify, MIN_MAGNIFY);
    }
}
