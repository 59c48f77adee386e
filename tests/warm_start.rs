#![allow(non_snake_case)]

use lpform::{algebra::*, model::*};

const INF: f64 = f64::INFINITY;

fn load_model(dualize: DualizePolicy) -> LpModel {
    let A = CscMatrix::from(&[
        [1., 1.], //
        [1., 2.],
        [1., -1.],
    ]);
    let settings = ModelSettingsBuilder::default()
        .dualize(dualize)
        .build()
        .unwrap();

    LpModel::load(
        &A,
        &[2., 8., 0.],
        &['>', '<', '='],
        0.,
        &[1., 1.],
        &[0., -INF],
        &[INF, 4.],
        &settings,
    )
    .unwrap()
}

struct Point {
    x: Vec<f64>,
    xl: Vec<f64>,
    xu: Vec<f64>,
    slack: Vec<f64>,
    y: Vec<f64>,
    zl: Vec<f64>,
    zu: Vec<f64>,
}

impl Point {
    fn feasible() -> Self {
        Self {
            x: vec![1.5, 1.5],
            xl: vec![1.5, INF],
            xu: vec![INF, 2.5],
            slack: vec![-1., 3.5, 0.],
            y: vec![1., -0.5, 0.3],
            zl: vec![0.2, 0.],
            zu: vec![0., 0.1],
        }
    }

    fn partial(&self) -> PartialInteriorPoint<'_> {
        PartialInteriorPoint {
            x: Some(&self.x),
            xl: Some(&self.xl),
            xu: Some(&self.xu),
            slack: Some(&self.slack),
            y: Some(&self.y),
            zl: Some(&self.zl),
            zu: Some(&self.zu),
        }
    }
}

#[test]
fn test_ipm_starting_point() {
    let model = load_model(DualizePolicy::Never);
    assert!(!model.dualized());

    let p = Point::feasible();
    let s = model.presolve_ipm_starting_point(&p.partial()).unwrap();

    assert_eq!(s.x, vec![1.5, -1.5, -1., 3.5, 0.]);
    assert_eq!(s.xl, vec![1.5, 2.5, INF, 3.5, 0.]);
    assert_eq!(s.xu, vec![INF, INF, 1., INF, 0.]);
    assert_eq!(s.y, vec![1., -0.5, 0.3]);
    assert_eq!(s.zl, vec![0.2, 0.1, 0., 0.5, 0.]);
    assert_eq!(s.zu, vec![0., 0., 1., 0., 0.]);

    let u = model.postsolve_interior_solution(&s);
    assert_eq!(u.x, p.x);
    assert_eq!(u.xl, p.xl);
    assert_eq!(u.xu, p.xu);
    assert_eq!(u.slack, p.slack);
    assert_eq!(u.y, p.y);
    assert_eq!(u.zl, p.zl);
    assert_eq!(u.zu, p.zu);

    // the point is primal feasible but not dual feasible
    let info = model.evaluate_interior_solution(&s);
    assert_eq!(info.abs_presidual, 0.);
    assert!(info.abs_dresidual > 1.);
}

#[test]
fn test_ipm_starting_point_missing_vector() {
    let model = load_model(DualizePolicy::Never);
    let p = Point::feasible();

    let mut partial = p.partial();
    partial.zu = None;
    let err = model.presolve_ipm_starting_point(&partial).unwrap_err();
    assert_eq!(err, ModelError::ArgumentNull("zu"));
    assert_eq!(err.code(), 102);

    let mut partial = p.partial();
    partial.x = None;
    assert_eq!(
        model.presolve_ipm_starting_point(&partial).unwrap_err(),
        ModelError::ArgumentNull("x")
    );
}

#[test]
fn test_ipm_starting_point_rejections() {
    let model = load_model(DualizePolicy::Never);

    let reject = |edit: &dyn Fn(&mut Point)| {
        let mut p = Point::feasible();
        edit(&mut p);
        model.presolve_ipm_starting_point(&p.partial()).unwrap_err()
    };

    assert_eq!(
        reject(&|p| p.xl[0] = -1.),
        ModelError::InvalidVector("xl")
    );
    // finite distance to the infinite lower bound of the flipped variable
    assert_eq!(reject(&|p| p.xl[1] = 3.), ModelError::InvalidVector("xu"));
    assert_eq!(
        reject(&|p| p.xu[0] = 1.),
        ModelError::InvalidVector("xu")
    );
    assert_eq!(
        reject(&|p| p.slack[2] = 0.1),
        ModelError::InvalidVector("slack")
    );
    assert_eq!(
        reject(&|p| p.slack[0] = 1.),
        ModelError::InvalidVector("slack")
    );
    assert_eq!(reject(&|p| p.y[1] = 0.5), ModelError::InvalidVector("y"));
    assert_eq!(
        reject(&|p| p.x[0] = f64::NAN),
        ModelError::InvalidVector("x")
    );
    assert_eq!(
        reject(&|p| p.zl[0] = -0.1),
        ModelError::InvalidVector("zl")
    );
    // nonzero dual for the infinite upper bound of variable 0
    assert_eq!(reject(&|p| p.zu[0] = 1.), ModelError::InvalidVector("zu"));
    assert_eq!(
        reject(&|p| p.x = vec![1.5]),
        ModelError::InvalidDimension("x")
    );
}

#[test]
fn test_ipm_starting_point_dualized() {
    let model = load_model(DualizePolicy::Always);
    assert!(model.dualized());

    let p = Point::feasible();
    let err = model.presolve_ipm_starting_point(&p.partial()).unwrap_err();
    assert!(matches!(err, ModelError::NotImplemented(_)));
    assert_eq!(err.code(), 109);

    // null arguments are reported before the form is checked
    let mut partial = p.partial();
    partial.y = None;
    assert_eq!(
        model.presolve_ipm_starting_point(&partial).unwrap_err(),
        ModelError::ArgumentNull("y")
    );
}
