use quiver::*;
#[test]
fn linspace_hits_both_ends() {
    let xs = linspace(-3.0, 3.0, 100);
    assert_eq!(xs.len(), 100);
    assert_eq!(xs[0], -3.0);
    assert_eq!(xs[99], 3.0);
    assert!(xs.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    assert!(linspace(2.0, 5.0, 0).is_empty());
    assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}
#[test]
fn mesh_rows_follow_x() {
    let mesh = Mesh::new(&Domain::new((0.0, 1.0), (10.0, 20.0)), Resolution::new(2, 3));
    assert_eq!(mesh.shape(), (2, 3));
    assert_eq!(mesh.x.row(0), &[0.0, 0.0, 0.0]);
    assert_eq!(mesh.x.row(1), &[1.0, 1.0, 1.0]);
    assert_eq!(mesh.y.row(0), &[10.0, 15.0, 20.0]);
    assert_eq!(mesh.y.get(1, 2), Some(20.0));
    assert_eq!(mesh.y.get(2, 0), None);
}
#[test]
fn subsample_keeps_first_of_each_stride() {
    let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    let s = m.subsample(2);
    assert_eq!(s.shape(), (2, 2));
    assert_eq!(s.flatten(), vec![0.0, 2.0, 6.0, 8.0]);
    let m = Matrix::from_fn(4, 5, |i, j| (i * 5 + j) as f64);
    assert_eq!(m.subsample(3).flatten(), vec![0.0, 3.0, 15.0, 18.0]);
    assert_eq!(m.subsample(1), m);
}
#[test]
fn elementwise_ops() {
    let a = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    let b = a.map(|x| x * 10.0);
    assert_eq!(b.data, vec![10.0, 20.0, 30.0, 40.0]);
    assert_eq!(a.zip_map(&b, |x, y| y - x).data, vec![9.0, 18.0, 27.0, 36.0]);
}
#[test]
#[should_panic]
fn zip_map_rejects_mismatched_shapes() {
    let a = Matrix::new(2, 2, vec![0.0; 4]);
    let b = Matrix::new(1, 4, vec![0.0; 4]);
    a.zip_map(&b, |x, y| x + y);
}
#[test]
fn example_field_formula() {
    assert_eq!(ExampleField.eval(0.0, 0.0), (-1.0, 1.0));
    assert_eq!(ExampleField.eval(2.0, 1.0), (-4.0, 2.0));
    let closure = |x: f64, y: f64| (x, y);
    assert_eq!(closure.eval(1.5, -2.0), (1.5, -2.0));
}
#[test]
fn evaluate_matches_pointwise() {
    let mesh = Mesh::new(&Domain::square(-3.0, 3.0), Resolution::new(9, 4));
    let e = evaluate(mesh.clone(), &ExampleField, AngleMode::Atan2);
    for i in 0..9 {
        for j in 0..4 {
            let (u, v) = ExampleField.eval(mesh.xs[i], mesh.ys[j]);
            assert_eq!(e.u.get(i, j), Some(u));
            assert_eq!(e.v.get(i, j), Some(v));
            assert_eq!(e.angle.get(i, j), Some(v.atan2(u)));
        }
    }
}
#[test]
fn dyn_field() {
    let field: Box<dyn VectorField> = Box::new(ExampleField);
    let config = SamplerConfig::default().resolution(Resolution::splat(4));
    assert_eq!(sample(&config, field.as_ref()).unwrap().len(), 4);
}
