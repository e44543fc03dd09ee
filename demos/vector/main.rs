use quiver::*;
const WIDTH: u32 = 800;
const PATH: &str = "vector.html";
fn main() -> Result<()> {
    let palette = Palette::from_hex(&[
        "#C7E9B4", "#7FCDBB", "#41B6C4", "#1D91C0", "#225EA8", "#0C2C84",
    ])?;
    let config = SamplerConfig::default()
        .domain(Domain::square(-3.0, 3.0))
        .resolution(Resolution::splat(100))
        .stride(2)
        .divisor(40.0)
        .palette(palette);
    let samples = sample(&config, &f)?;
    let plot = Plot::new(samples, "vector.py example");
    plot.save(PATH, WIDTH, WIDTH)?;
    if let Err(e) = show(PATH) {
        eprintln!("wrote {PATH} but could not open it: {e}");
    }
    Ok(())
}
fn f(x: f64, y: f64) -> (f64, f64) {
    (-1.0 - x * x + y, 1.0 + x - y * y)
}
