use crate::error::{Error, Result};
use crate::types::{Color, Pos};
use tiny_skia::{LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};
pub(crate) struct Painter {
    pub(crate) canvas: Pixmap,
    anti_alias: bool,
}
impl Painter {
    pub(crate) fn new(background: Color, anti_alias: bool, width: u32, height: u32) -> Result<Self> {
        let mut canvas = Pixmap::new(width, height)
            .ok_or_else(|| Error::Image(format!("can not allocate a {width}x{height} canvas")))?;
        canvas.fill(background.to_col());
        Ok(Self { canvas, anti_alias })
    }
    fn paint(&self, color: &Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.to_col());
        paint.anti_alias = self.anti_alias;
        paint
    }
    pub(crate) fn line_segment(&mut self, p: [Pos; 2], width: f32, color: &Color) {
        let mut path = PathBuilder::new();
        path.move_to(p[0].x, p[0].y);
        path.line_to(p[1].x, p[1].y);
        let Some(path) = path.finish() else {
            return;
        };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        let paint = self.paint(color);
        self.canvas
            .stroke_path(&path, &paint, &stroke, Transform::default(), None);
    }
    pub(crate) fn vline(&mut self, x: f32, height: f32, color: &Color) {
        self.line_segment([Pos::new(x, 0.0), Pos::new(x, height)], 1.0, color)
    }
    pub(crate) fn hline(&mut self, width: f32, y: f32, color: &Color) {
        self.line_segment([Pos::new(0.0, y), Pos::new(width, y)], 1.0, color)
    }
    pub(crate) fn save_png(&self) -> Result<Vec<u8>> {
        self.canvas
            .encode_png()
            .map_err(|e| Error::Image(e.to_string()))
    }
}
///encoded image bytes
#[derive(Clone, Debug)]
pub struct Data {
    pub data: Vec<u8>,
}
impl Data {
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
