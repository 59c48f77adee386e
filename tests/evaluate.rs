#![allow(non_snake_case)]

use lpform::{algebra::*, model::*};

const INF: f64 = f64::INFINITY;

fn settings(dualize: DualizePolicy) -> ModelSettings {
    ModelSettingsBuilder::default()
        .dualize(dualize)
        .build()
        .unwrap()
}

#[test]
fn test_interior_solution_primal() {
    // min x0 + x1 + 0.5 st x0 + x1 >= 2, x >= 0
    let A = CscMatrix::from(&[[1., 1.]]);
    let model = LpModel::load(
        &A,
        &[2.],
        &['>'],
        0.5,
        &[1., 1.],
        &[0., 0.],
        &[INF, INF],
        &ModelSettings::default(),
    )
    .unwrap();
    assert!(!model.dualized());

    let mut s = SolverInteriorPoint::new(model.rows(), model.cols());
    s.x = vec![1., 1., 0.];
    s.xl = vec![1., 1., INF];
    s.xu = vec![INF, INF, 0.];
    s.y = vec![1.];
    s.zl = vec![0., 0., 0.];
    s.zu = vec![0., 0., 1.];

    let info = model.evaluate_interior_solution(&s);
    assert_eq!(info.abs_presidual, 0.);
    assert_eq!(info.abs_dresidual, 0.);
    assert_eq!(info.rel_presidual, 0.);
    assert_eq!(info.pobjval, 2.5);
    assert_eq!(info.dobjval, 2.5);
    assert_eq!(info.rel_objgap, 0.);
    assert_eq!(info.complementarity, 0.);
    assert_eq!(info.normx, 1.);
    assert_eq!(info.normy, 1.);
    assert_eq!(info.normz, 0.);

    let u = model.postsolve_interior_solution(&s);
    assert_eq!(u.x, vec![1., 1.]);
    assert_eq!(u.slack, vec![0.]);
    assert_eq!(u.y, vec![1.]);

    // move off the optimum along x0
    s.x[0] = 2.;
    s.xl[0] = 2.;
    let info = model.evaluate_interior_solution(&s);
    assert_eq!(info.abs_presidual, 1.);
    assert_eq!(info.rel_presidual, 1. / 3.);
    assert_eq!(info.pobjval, 3.5);
}

#[test]
fn test_interior_solution_dual() {
    // min x st x >= 1, 0 <= x <= 3
    let A = CscMatrix::from(&[[1.]]);
    let model = LpModel::load(
        &A,
        &[1.],
        &['>'],
        0.,
        &[1.],
        &[0.],
        &[3.],
        &settings(DualizePolicy::Always),
    )
    .unwrap();
    assert!(model.dualized());
    assert_eq!((model.rows(), model.cols()), (1, 2));

    let mut s = SolverInteriorPoint::new(model.rows(), model.cols());
    s.x = vec![1., 0., 0.];
    s.y = vec![-1.];
    s.xl = vec![1., 0., 0.];
    s.xu = vec![INF; 3];
    s.zl = vec![0., 2., 1.];
    s.zu = vec![0.; 3];

    let u = model.postsolve_interior_solution(&s);
    assert_eq!(u.x, vec![1.]);
    assert_eq!(u.y, vec![1.]);
    assert_eq!(u.slack, vec![0.]);
    assert_eq!(u.xl, vec![1.]);
    assert_eq!(u.xu, vec![2.]);
    assert_eq!(u.zl, vec![0.]);
    assert_eq!(u.zu, vec![0.]);

    let info = model.evaluate_interior_solution(&s);
    assert_eq!(info.abs_presidual, 0.);
    assert_eq!(info.abs_dresidual, 0.);
    assert_eq!(info.pobjval, 1.);
    assert_eq!(info.dobjval, 1.);
}

// max x0 + x1 st x0 + 2 x1 <= 4, 0 <= x0 <= 3, x1 >= 0
fn load_basic_model() -> LpModel {
    let A = CscMatrix::from(&[[1., 2.]]);
    LpModel::load(
        &A,
        &[4.],
        &['<'],
        0.,
        &[-1., -1.],
        &[0., 0.],
        &[3., INF],
        &settings(DualizePolicy::Never),
    )
    .unwrap()
}

fn basic_point() -> SolverPoint {
    SolverPoint {
        x: vec![3. - 1e-12, 0.5, 1e-13],
        y: vec![-0.5],
        z: vec![-0.5, 1e-14, 0.5],
    }
}

#[test]
fn test_basic_solution() {
    use BasisStatus::*;
    let model = load_basic_model();
    let basis = [NonbasicUpper, Basic, NonbasicLower];

    let u = model.postsolve_basic_solution(&basic_point(), &basis);
    assert_eq!(u.x, vec![3., 0.5]);
    assert_eq!(u.slack, vec![0.]);
    assert_eq!(u.y, vec![-0.5]);
    assert_eq!(u.z, vec![-0.5, 0.]);

    let info = model.evaluate_basic_solution(&basic_point(), &basis);
    assert_eq!(info.objval, -3.5);
    assert_eq!(info.primal_infeas, 0.);
    assert_eq!(info.dual_infeas, 0.);

    // a variable at its lower bound with a negative reduced cost
    let basis = [NonbasicLower, Basic, NonbasicLower];
    let info = model.evaluate_basic_solution(&basic_point(), &basis);
    assert_eq!(info.dual_infeas, 0.5);
    assert_eq!(info.primal_infeas, 0.);
}

#[test]
fn test_basic_solution_dual() {
    use BasisStatus::*;

    // the same problem as load_basic_model, in dual form
    let A = CscMatrix::from(&[[1., 2.]]);
    let model = LpModel::load(
        &A,
        &[4.],
        &['<'],
        0.,
        &[-1., -1.],
        &[0., 0.],
        &[3., INF],
        &settings(DualizePolicy::Always),
    )
    .unwrap();
    assert!(model.dualized());
    assert_eq!(model.user().boxed_vars, vec![0]);
    assert_eq!((model.rows(), model.cols()), (2, 2));

    // columns: row dual | upper bound of x0 | lower bounds of x0, x1
    let basis = [Basic, Basic, NonbasicLower, NonbasicLower];
    let point = SolverPoint {
        x: vec![-0.5, 0.5, 0., 1e-14],
        y: vec![-3. + 1e-12, -0.5],
        z: vec![1e-13, 0., 3., 0.5],
    };

    let ubasis = model.postsolve_basis(&basis);
    assert_eq!(ubasis.constraints, vec![ConstraintStatus::Nonbasic]);
    assert_eq!(ubasis.variables, vec![NonbasicUpper, Basic]);

    let u = model.postsolve_basic_solution(&point, &basis);
    assert_eq!(u.x, vec![3., 0.5]);
    assert_eq!(u.slack, vec![0.]);
    assert_eq!(u.y, vec![-0.5]);
    assert_eq!(u.z, vec![-0.5, 0.]);

    let info = model.evaluate_basic_solution(&point, &basis);
    assert_eq!(info.objval, -3.5);
    assert_eq!(info.primal_infeas, 0.);
    assert_eq!(info.dual_infeas, 0.);

    // x0 at its lower bound with a negative reduced cost
    let basis = [Basic, NonbasicLower, Basic, NonbasicLower];
    let ubasis = model.postsolve_basis(&basis);
    assert_eq!(ubasis.variables, vec![NonbasicLower, Basic]);
    let info = model.evaluate_basic_solution(&point, &basis);
    assert_eq!(info.dual_infeas, 0.5);
    assert_eq!(info.primal_infeas, 0.);
    assert_eq!(info.objval, -0.5);
}

#[test]
fn test_basis_primal() {
    use BasisStatus::*;
    let model = load_basic_model();

    let ubasis = model.postsolve_basis(&[NonbasicUpper, Basic, NonbasicLower]);
    assert_eq!(ubasis.constraints, vec![ConstraintStatus::Nonbasic]);
    assert_eq!(ubasis.variables, vec![NonbasicUpper, Basic]);

    let ubasis = model.postsolve_basis(&[Basic, NonbasicLower, Basic]);
    assert_eq!(ubasis.constraints, vec![ConstraintStatus::Basic]);
    assert_eq!(ubasis.variables, vec![Basic, NonbasicLower]);
}

#[test]
fn test_basis_dual_with_flip() {
    use BasisStatus::*;

    // x0 <= 5 is flipped, x1 is free
    let A = CscMatrix::from(&[[1., 1.]]);
    let model = LpModel::load(
        &A,
        &[1.],
        &['='],
        0.,
        &[1., 1.],
        &[-INF, -INF],
        &[5., INF],
        &settings(DualizePolicy::Always),
    )
    .unwrap();
    assert!(model.dualized());
    assert_eq!((model.rows(), model.cols()), (2, 1));

    let ubasis = model.postsolve_basis(&[NonbasicLower, Basic, Basic]);
    assert_eq!(ubasis.constraints, vec![ConstraintStatus::Basic]);
    assert_eq!(ubasis.variables, vec![NonbasicUpper, Superbasic]);

    let ubasis = model.postsolve_basis(&[Basic, NonbasicLower, NonbasicLower]);
    assert_eq!(ubasis.constraints, vec![ConstraintStatus::Nonbasic]);
    assert_eq!(ubasis.variables, vec![Basic, Basic]);
}

#[test]
fn test_solver_space_residuals() {
    let model = load_basic_model();
    let form = model.form();

    let x = [3., 0.5, 0.];
    assert_eq!(primal_residual(form, &x), 0.);
    assert_eq!(primal_infeasibility(form, &x), 0.);
    assert_eq!(primal_infeasibility(form, &[4., 0.5, -1.]), 1.);

    let y = [-0.5];
    let z = [-0.5, 0., 0.5];
    assert_eq!(dual_residual(form, &y, &z), 0.);
    assert_eq!(dual_infeasibility(form, &x, &z), 0.);
    // x0 off its upper bound with a negative reduced cost
    assert_eq!(dual_infeasibility(form, &[2., 0.5, 0.], &z), 0.5);
}
