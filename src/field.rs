use crate::types::{AngleMode, Domain, Resolution};
#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};
///row major matrix of floats
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}
impl Matrix {
    ///panics if data does not hold rows * cols elements
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), rows * cols, "matrix data does not match shape");
        Self { rows, cols, data }
    }
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> f64,
    {
        let data = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Self { rows, cols, data }
    }
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|a| f(*a)).collect(),
        }
    }
    ///elementwise combination of two equally shaped matrices
    pub fn zip_map<F>(&self, other: &Matrix, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(self.shape(), other.shape(), "matrix shapes differ");
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }
    ///keeps every nth row and column starting at the first,
    ///giving ceil(rows / n) x ceil(cols / n)
    pub fn subsample(&self, stride: usize) -> Self {
        assert!(stride != 0, "stride must be non zero");
        let rows = self.rows.div_ceil(stride);
        let cols = self.cols.div_ceil(stride);
        Self::from_fn(rows, cols, |i, j| {
            self.data[i * stride * self.cols + j * stride]
        })
    }
    pub fn flatten(self) -> Vec<f64> {
        self.data
    }
}
///n evenly spaced values from start to end inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + i as f64 * delta
                    }
                })
                .collect()
        }
    }
}
///coordinate grid, x varies down the rows and y across the columns
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub x: Matrix,
    pub y: Matrix,
}
impl Mesh {
    pub fn new(domain: &Domain, resolution: Resolution) -> Self {
        let xs = linspace(domain.x.x, domain.x.y, resolution.x);
        let ys = linspace(domain.y.x, domain.y.y, resolution.y);
        let x = Matrix::from_fn(xs.len(), ys.len(), |i, _| xs[i]);
        let y = Matrix::from_fn(xs.len(), ys.len(), |_, j| ys[j]);
        Self { xs, ys, x, y }
    }
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }
}
///a function from the plane to a vector (u, v)
pub trait VectorField: Sync {
    fn eval(&self, x: f64, y: f64) -> (f64, f64);
}
impl<F> VectorField for F
where
    F: Fn(f64, f64) -> (f64, f64) + Sync,
{
    fn eval(&self, x: f64, y: f64) -> (f64, f64) {
        self(x, y)
    }
}
///u = -1 - x^2 + y, v = 1 + x - y^2
#[derive(Clone, Copy, Debug, Default)]
pub struct ExampleField;
impl VectorField for ExampleField {
    fn eval(&self, x: f64, y: f64) -> (f64, f64) {
        (-1.0 - x * x + y, 1.0 + x - y * y)
    }
}
///a field sampled over every point of a mesh
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluated {
    pub mesh: Mesh,
    pub u: Matrix,
    pub v: Matrix,
    pub speed: Matrix,
    pub angle: Matrix,
}
pub fn evaluate<F>(mesh: Mesh, field: &F, angle_mode: AngleMode) -> Evaluated
where
    F: VectorField + ?Sized,
{
    let (rows, cols) = mesh.shape();
    let (xs, ys) = (&mesh.xs, &mesh.ys);
    #[cfg(feature = "rayon")]
    let uv: Vec<(f64, f64)> = (0..rows)
        .into_par_iter()
        .flat_map_iter(|i| (0..cols).map(move |j| field.eval(xs[i], ys[j])))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let uv: Vec<(f64, f64)> = (0..rows)
        .flat_map(|i| (0..cols).map(move |j| field.eval(xs[i], ys[j])))
        .collect();
    let (u, v): (Vec<f64>, Vec<f64>) = uv.into_iter().unzip();
    let u = Matrix::new(rows, cols, u);
    let v = Matrix::new(rows, cols, v);
    let speed = u.zip_map(&v, |u, v| (u * u + v * v).sqrt());
    let angle = u.zip_map(&v, |u, v| angle_mode.angle(u, v));
    Evaluated {
        mesh,
        u,
        v,
        speed,
        angle,
    }
}
