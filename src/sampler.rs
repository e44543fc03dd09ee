use crate::error::Result;
use crate::field::{Evaluated, Mesh, VectorField, evaluate};
use crate::types::{Color, Palette, SamplerConfig, Segment, Vec2};
///arrows ready to be drawn, every vector holds one entry per subsampled grid point
#[derive(Clone, Debug, PartialEq)]
pub struct Samples {
    pub x0: Vec<f64>,
    pub y0: Vec<f64>,
    pub length: Vec<f64>,
    pub angle: Vec<f64>,
    pub x1: Vec<f64>,
    pub y1: Vec<f64>,
    ///index into palette
    pub color: Vec<usize>,
    pub palette: Palette,
}
///runs the whole pipeline: grid, field, subsample, arrows, colors
pub fn sample<F>(config: &SamplerConfig, field: &F) -> Result<Samples>
where
    F: VectorField + ?Sized,
{
    config.validate()?;
    let mesh = Mesh::new(&config.domain, config.resolution);
    let evaluated = evaluate(mesh, field, config.angle_mode);
    sample_evaluated(&evaluated, config)
}
///same as sample but reuses an already evaluated field,
///only the stride, divisor and palette of config are used
pub fn sample_evaluated(evaluated: &Evaluated, config: &SamplerConfig) -> Result<Samples> {
    config.validate()?;
    let stride = config.stride;
    let x0 = evaluated.mesh.x.subsample(stride).flatten();
    let y0 = evaluated.mesh.y.subsample(stride).flatten();
    let length: Vec<f64> = evaluated
        .speed
        .subsample(stride)
        .flatten()
        .into_iter()
        .map(|s| s / config.divisor)
        .collect();
    let angle = evaluated.angle.subsample(stride).flatten();
    let (x1, y1): (Vec<f64>, Vec<f64>) = x0
        .iter()
        .zip(y0.iter())
        .zip(length.iter().zip(angle.iter()))
        .map(|((x, y), (l, a))| {
            let (sin, cos) = a.sin_cos();
            (x + l * cos, y + l * sin)
        })
        .unzip();
    let (min, max) = finite_range(&length);
    let buckets = config.palette.len();
    let color = length.iter().map(|l| bucket(*l, min, max, buckets)).collect();
    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = evaluated.mesh.x.rows,
        cols = evaluated.mesh.x.cols,
        stride,
        samples = x0.len(),
        min_length = min,
        max_length = max,
        "sampled vector field"
    );
    Ok(Samples {
        x0,
        y0,
        length,
        angle,
        x1,
        y1,
        color,
        palette: config.palette.clone(),
    })
}
///maps value linearly from [min, max] onto [0, buckets) and truncates,
///max itself lands in the last bucket instead of one past it.
///+inf lands in the last bucket, nan, -inf and a degenerate range give bucket 0
pub fn bucket(value: f64, min: f64, max: f64, buckets: usize) -> usize {
    if buckets == 0 {
        return 0;
    }
    if value == f64::INFINITY {
        return buckets - 1;
    }
    let range = max - min;
    if !value.is_finite() || !range.is_finite() || range <= 0.0 {
        return 0;
    }
    let t = (value - min) / range * buckets as f64;
    (t.max(0.0) as usize).min(buckets - 1)
}
fn finite_range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(*v), max.max(*v))
        })
}
impl Samples {
    pub fn len(&self) -> usize {
        self.x0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.x0.is_empty()
    }
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.color
            .iter()
            .map(|i| self.palette.get(*i).unwrap_or_default())
    }
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.len()).zip(self.colors()).map(|(i, color)| Segment {
            start: Vec2::new(self.x0[i], self.y0[i]),
            end: Vec2::new(self.x1[i], self.y1[i]),
            color,
        })
    }
    ///bounding box of all finite start and end points as (min, max),
    ///None if there are none
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut min = Vec2::splat(f64::INFINITY);
        let mut max = Vec2::splat(f64::NEG_INFINITY);
        let points = self
            .segments()
            .flat_map(|s| [s.start, s.end])
            .filter(Vec2::is_finite);
        let mut any = false;
        for p in points {
            any = true;
            min = Vec2::new(min.x.min(p.x), min.y.min(p.y));
            max = Vec2::new(max.x.max(p.x), max.y.max(p.y));
        }
        any.then_some((min, max))
    }
}
