#![allow(non_snake_case)]

use lpform::{algebra::*, model::*};

fn load_model() -> LpModel {
    let A = CscMatrix::from(&[[1., 1.], [1., -1.]]);
    LpModel::load(
        &A,
        &[1., 0.],
        &['<', '='],
        0.,
        &[1., 1.],
        &[0., 0.],
        &[f64::INFINITY; 2],
        &ModelSettings::default(),
    )
    .unwrap()
}

#[test]
fn api_dim_check_working() {
    let model = load_model();
    let s = SolverPoint::new(model.rows(), model.cols());
    let _ = model.postsolve_point(&s);
}

#[test]
#[should_panic]
fn api_dim_check_bad_x() {
    let model = load_model();
    let mut s = SolverPoint::new(model.rows(), model.cols());
    s.x.pop();
    let _ = model.postsolve_point(&s);
}

#[test]
#[should_panic]
fn api_dim_check_bad_y() {
    let model = load_model();
    let mut s = SolverInteriorPoint::new(model.rows(), model.cols());
    s.y.push(0.);
    let _ = model.postsolve_interior_solution(&s);
}

#[test]
#[should_panic]
fn api_dim_check_bad_zu() {
    let model = load_model();
    let mut s = SolverInteriorPoint::new(model.rows(), model.cols());
    s.zu.pop();
    let _ = model.evaluate_interior_solution(&s);
}

#[test]
#[should_panic]
fn api_dim_check_bad_basis() {
    let model = load_model();
    let basis = vec![BasisStatus::Basic; model.rows() + model.cols() - 1];
    let _ = model.postsolve_basis(&basis);
}

#[test]
#[should_panic]
fn api_dim_check_bad_basic_solution() {
    let model = load_model();
    let s = SolverPoint::new(model.rows(), model.cols() + 1);
    let basis = vec![BasisStatus::Basic; model.rows() + model.cols()];
    let _ = model.evaluate_basic_solution(&s, &basis);
}
