pub mod error;
pub mod field;
pub mod sampler;
pub mod types;
#[cfg(feature = "tiny-skia-png")]
mod ui;
pub use crate::error::{Error, Result};
pub use crate::field::{Evaluated, ExampleField, Matrix, Mesh, VectorField, evaluate, linspace};
pub use crate::sampler::{Samples, bucket, sample, sample_evaluated};
pub use crate::types::*;
#[cfg(feature = "tiny-skia-png")]
pub use crate::ui::Data;
#[cfg(feature = "tiny-skia-png")]
use crate::ui::Painter;
#[cfg(feature = "tiny-skia-png")]
use base64::Engine;
///a segment plot of sampled arrows
#[derive(Clone, Debug)]
pub struct Plot {
    pub samples: Samples,
    ///title of the html page
    pub title: String,
    pub line_width: f32,
    pub background_color: Color,
    pub axis_color: Color,
    pub axis_color_light: Color,
    pub anti_alias: bool,
    ///hides the x=0 and y=0 axis
    pub disable_axis: bool,
    ///hides the grid lines
    pub disable_lines: bool,
    ///fraction of the data extent added around it on every side
    pub padding: f64,
}
///maps data coordinates onto the canvas with one scale for both axis
#[cfg(feature = "tiny-skia-png")]
#[derive(Clone, Copy, Debug)]
struct View {
    min: Vec2,
    max: Vec2,
    scale: f64,
    offset: Vec2,
    screen: Vec2,
}
#[cfg(feature = "tiny-skia-png")]
impl View {
    fn new(bounds: Option<(Vec2, Vec2)>, padding: f64, width: f64, height: f64) -> Self {
        let (mut min, mut max) = bounds.unwrap_or((Vec2::splat(-1.0), Vec2::splat(1.0)));
        for (lo, hi) in [(&mut min.x, &mut max.x), (&mut min.y, &mut max.y)] {
            if *hi - *lo <= f64::EPSILON {
                *lo -= 1.0;
                *hi += 1.0;
            }
            let pad = (*hi - *lo) * padding;
            *lo -= pad;
            *hi += pad;
        }
        let span = max - min;
        let scale = (width / span.x).min(height / span.y);
        let offset = Vec2::new(
            (width - span.x * scale) / 2.0,
            (height - span.y * scale) / 2.0,
        );
        Self {
            min,
            max,
            scale,
            offset,
            screen: Vec2::new(width, height),
        }
    }
    fn to_screen(&self, x: f64, y: f64) -> Pos {
        Vec2::new(
            self.offset.x + (x - self.min.x) * self.scale,
            self.screen.y - self.offset.y - (y - self.min.y) * self.scale,
        )
        .to_pos()
    }
    ///power of two spacing giving roughly eight lines across the wider axis
    fn step(&self) -> f64 {
        let span = self.max - self.min;
        2.0f64.powf((span.x.max(span.y) / 8.0).log2().round())
    }
}
impl Plot {
    ///creates a plot with the light mode colors and a line width of 2
    pub fn new(samples: Samples, title: impl Into<String>) -> Self {
        Self {
            samples,
            title: title.into(),
            line_width: 2.0,
            background_color: Color::splat(255),
            axis_color: Color::splat(0),
            axis_color_light: Color::splat(220),
            anti_alias: true,
            disable_axis: false,
            disable_lines: false,
            padding: 0.05,
        }
    }
    //use dark mode default colors
    pub fn set_dark_mode(&mut self) {
        self.axis_color = Color::splat(220);
        self.axis_color_light = Color::splat(35);
        self.background_color = Color::splat(0);
    }
    //use light mode default colors
    pub fn set_light_mode(&mut self) {
        self.axis_color = Color::splat(0);
        self.axis_color_light = Color::splat(220);
        self.background_color = Color::splat(255);
    }
    #[cfg(feature = "tiny-skia-png")]
    fn paint(&self, width: u32, height: u32) -> Result<Painter> {
        let mut painter = Painter::new(self.background_color, self.anti_alias, width, height)?;
        let view = View::new(
            self.samples.bounds(),
            self.padding,
            width as f64,
            height as f64,
        );
        self.write_axis(&mut painter, &view);
        for segment in self.samples.segments() {
            if !segment.is_finite() {
                #[cfg(feature = "tracing")]
                tracing::trace!(?segment, "skipping non finite segment");
                continue;
            }
            let a = view.to_screen(segment.start.x, segment.start.y);
            let b = view.to_screen(segment.end.x, segment.end.y);
            painter.line_segment([a, b], self.line_width, &segment.color);
        }
        Ok(painter)
    }
    #[cfg(feature = "tiny-skia-png")]
    fn write_axis(&self, painter: &mut Painter, view: &View) {
        let (w, h) = (view.screen.x as f32, view.screen.y as f32);
        let step = view.step();
        if !self.disable_lines && step.is_finite() && step > 0.0 {
            let nx = (view.min.x / step).ceil() as isize;
            let mx = (view.max.x / step).floor() as isize;
            for j in nx..=mx {
                let x = view.to_screen(j as f64 * step, 0.0).x;
                painter.vline(x, h, &self.axis_color_light);
            }
            let ny = (view.min.y / step).ceil() as isize;
            let my = (view.max.y / step).floor() as isize;
            for j in ny..=my {
                let y = view.to_screen(0.0, j as f64 * step).y;
                painter.hline(w, y, &self.axis_color_light);
            }
        }
        if !self.disable_axis {
            let o = view.to_screen(0.0, 0.0);
            if (view.min.x..=view.max.x).contains(&0.0) {
                painter.vline(o.x, h, &self.axis_color);
            }
            if (view.min.y..=view.max.y).contains(&0.0) {
                painter.hline(w, o.y, &self.axis_color);
            }
        }
    }
    #[cfg(feature = "tiny-skia-png")]
    ///get png data
    pub fn get_png(&self, width: u32, height: u32) -> Result<Data> {
        let painter = self.paint(width, height)?;
        let data = painter.save_png()?;
        Ok(Data { data })
    }
    #[cfg(feature = "tiny-skia-png")]
    ///a standalone html page with the png inlined
    pub fn get_html(&self, width: u32, height: u32) -> Result<String> {
        let png = self.get_png(width, height)?;
        let encoded = base64::prelude::BASE64_STANDARD.encode(png.as_bytes());
        let title = escape_html(&self.title);
        Ok(format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>{title}</title>\n\
             </head>\n\
             <body>\n\
             <img width=\"{width}\" height=\"{height}\" alt=\"{title}\" src=\"data:image/png;base64,{encoded}\">\n\
             </body>\n\
             </html>\n"
        ))
    }
    #[cfg(feature = "tiny-skia-png")]
    ///writes the html page to path
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P, width: u32, height: u32) -> Result<()> {
        let html = self.get_html(width, height)?;
        std::fs::write(path.as_ref(), html)?;
        #[cfg(feature = "tracing")]
        tracing::info!(path = %path.as_ref().display(), samples = self.samples.len(), "wrote plot");
        Ok(())
    }
}
#[cfg(feature = "tiny-skia-png")]
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
///opens path with the platforms default viewer, does not wait for it to close
pub fn show<P: AsRef<std::path::Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    #[cfg(target_os = "macos")]
    let mut command = std::process::Command::new("open");
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = std::process::Command::new("xdg-open");
    command.arg(path).spawn()?;
    #[cfg(feature = "tracing")]
    tracing::info!(path = %path.display(), "opened plot");
    Ok(())
}
