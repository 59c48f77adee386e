#![allow(non_snake_case)]

use lpform::{algebra::*, model::*};

const INF: f64 = f64::INFINITY;

#[test]
fn test_two_variable_lp() {
    let A = CscMatrix::from(&[[1., 1.]]);
    let settings = ModelSettings::default();

    let model = LpModel::load(
        &A,
        &[10.],
        &['<'],
        0.,
        &[1., 1.],
        &[0., 0.],
        &[INF, INF],
        &settings,
    )
    .unwrap();

    assert!(model.scaling().flipped_vars.is_empty());
    assert!(model.scaling().is_unscaled());
    assert!(!model.dualized());

    let form = model.form();
    assert_eq!(form.formulation, Formulation::Primal);
    assert_eq!((form.rows(), form.cols()), (1, 2));
    assert_eq!(form.AI, CscMatrix::from(&[[1., 1., 1.]]));
    assert_eq!(form.lb[2], 0.);
    assert_eq!(form.ub[2], INF);
    assert_eq!(form.c, vec![1., 1., 0.]);
    assert_eq!(form.b, vec![10.]);

    let info = model.info();
    assert_eq!(
        info,
        ModelInfo {
            num_var: 2,
            num_constr: 1,
            num_entries: 2,
            num_rows_solver: 1,
            num_cols_solver: 3,
            num_entries_solver: 3,
            dualized: false,
            dense_cols: 0,
        }
    );
}

#[test]
fn test_flipped_variable() {
    let A = CscMatrix::from(&[[3.]]);
    let settings = ModelSettings::default();

    let model =
        LpModel::load(&A, &[10.], &['<'], 0., &[2.], &[-INF], &[5.], &settings).unwrap();

    let scaled = model.scaled();
    assert_eq!(model.scaling().flipped_vars.indices(), &[0]);
    assert_eq!(scaled.lb, vec![-5.]);
    assert_eq!(scaled.ub, vec![INF]);
    assert_eq!(scaled.obj, vec![-2.]);
    assert_eq!(scaled.A, CscMatrix::from(&[[-3.]]));

    // solver value x' = 2 is user value x = -2
    let mut point = SolverPoint::new(model.rows(), model.cols());
    point.x[0] = 2.;
    let upoint = model.postsolve_point(&point);
    assert_eq!(upoint.x, vec![-2.]);
}

#[test]
fn test_rejects_row_index_out_of_range() {
    let A = CscMatrix {
        m: 2,
        n: 2,
        colptr: vec![0, 1, 2],
        rowval: vec![0, 2],
        nzval: vec![1., 1.],
    };
    let err = LpModel::load(
        &A,
        &[1., 1.],
        &['=', '='],
        0.,
        &[1., 1.],
        &[0., 0.],
        &[1., 1.],
        &ModelSettings::default(),
    )
    .unwrap_err();
    assert_eq!(err, ModelError::InvalidMatrix(SparseFormatError::BadRowval));
    assert_eq!(err.code(), 104);
}

#[test]
fn test_rejects_inconsistent_bounds() {
    let A = CscMatrix::from(&[[1.]]);
    let err = LpModel::load(
        &A,
        &[1.],
        &['='],
        0.,
        &[1.],
        &[5.],
        &[3.],
        &ModelSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::InvalidVector(_)));
    assert_eq!(err.code(), 105);
}

#[test]
fn test_rejects_unknown_constraint_type() {
    let A = CscMatrix::from(&[[1.], [1.]]);
    let err = LpModel::load(
        &A,
        &[1., 1.],
        &['<', '?'],
        0.,
        &[1.],
        &[0.],
        &[1.],
        &ModelSettings::default(),
    )
    .unwrap_err();
    assert_eq!(err, ModelError::InvalidVector("constr_type"));
}

#[test]
fn test_rejects_other_malformed_input() {
    let A = CscMatrix::from(&[[1., 2.]]);
    let settings = ModelSettings::default();
    let load = |A: &CscMatrix<f64>, rhs: &[f64], lb: &[f64]| {
        LpModel::load(A, rhs, &['<'], 0., &[1., 1.], lb, &[INF, INF], &settings)
    };

    // no variables
    let E = CscMatrix::<f64>::spalloc((1, 0), 0);
    let err = LpModel::load(&E, &[1.], &['<'], 0., &[], &[], &[], &settings).unwrap_err();
    assert_eq!(err.code(), 103);

    assert_eq!(
        load(&A, &[INF], &[0., 0.]).unwrap_err(),
        ModelError::InvalidVector("rhs")
    );
    assert_eq!(
        load(&A, &[1.], &[f64::NAN, 0.]).unwrap_err(),
        ModelError::InvalidVector("lb")
    );
    assert_eq!(
        load(&A, &[1.], &[0.]).unwrap_err(),
        ModelError::InvalidDimension("lb")
    );

    let mut bad = A.clone();
    bad.nzval[1] = f64::NAN;
    assert_eq!(
        load(&bad, &[1.], &[0., 0.]).unwrap_err(),
        ModelError::InvalidMatrix(SparseFormatError::BadNzval)
    );

    let mut bad = A.clone();
    bad.colptr = vec![0, 2, 1];
    assert_eq!(
        load(&bad, &[1.], &[0., 0.]).unwrap_err(),
        ModelError::InvalidMatrix(SparseFormatError::BadColptr)
    );
}

#[test]
fn test_empty_constraint_set() {
    let A = CscMatrix::<f64>::spalloc((0, 2), 0);
    let model = LpModel::load(
        &A,
        &[],
        &[],
        1.,
        &[1., -1.],
        &[0., -INF],
        &[1., INF],
        &ModelSettings::default(),
    )
    .unwrap();

    assert_eq!(model.rows(), 0);
    assert_eq!(model.user().num_free_var, 1);
    assert_eq!(model.user().boxed_vars, vec![0]);
    assert!(!model.dualized());
}

#[test]
fn test_dualization_policy() {
    // more than twice as many constraints as variables
    let A = CscMatrix::from(&[[1.], [2.], [-1.]]);
    let rhs = [1., 4., 0.];
    let ct = ['<', '<', '>'];

    let load = |settings: &ModelSettings| {
        LpModel::load(&A, &rhs, &ct, 0., &[1.], &[0.], &[3.], settings).unwrap()
    };

    let model = load(&ModelSettings::default());
    assert!(model.dualized());
    assert_eq!((model.rows(), model.cols()), (1, 4));
    assert_eq!(model.info().num_cols_solver, 5);

    let settings = ModelSettingsBuilder::default()
        .dualize(DualizePolicy::Never)
        .build()
        .unwrap();
    let model = load(&settings);
    assert!(!model.dualized());
    assert_eq!((model.rows(), model.cols()), (3, 1));
}

#[test]
fn test_scaled_model_leaves_user_model_intact() {
    let A = CscMatrix::from(&[[1e4, 1.], [1e-3, 1.]]);
    let model = LpModel::load(
        &A,
        &[1., 2.],
        &['<', '>'],
        0.,
        &[1., 1.],
        &[0., 0.],
        &[INF, INF],
        &ModelSettings::default(),
    )
    .unwrap();

    assert!(!model.scaling().is_unscaled());
    assert_eq!(model.user().A, A);
    assert_ne!(model.scaled().A, A);

    // scaled matrix is diag(rowscale) * A * diag(colscale)
    let s = model.scaling();
    let mut B = A.clone();
    B.lrscale(&s.rowscale, &s.colscale);
    assert_eq!(model.scaled().A, B);

    let settings = ModelSettingsBuilder::default().scale(false).build().unwrap();
    let model = LpModel::load(
        &A,
        &[1., 2.],
        &['<', '>'],
        0.,
        &[1., 1.],
        &[0., 0.],
        &[INF, INF],
        &settings,
    )
    .unwrap();
    assert!(model.scaling().is_unscaled());
    assert_eq!(model.scaled().A, A);
}

#[test]
fn test_multiply_with_scaled_matrix() {
    let A = CscMatrix::from(&[[1., 2.], [0., 3.], [4., 0.]]);
    for policy in [DualizePolicy::Never, DualizePolicy::Always] {
        let settings = ModelSettingsBuilder::default()
            .dualize(policy)
            .build()
            .unwrap();
        let model = LpModel::load(
            &A,
            &[1., 1., 1.],
            &['<'; 3],
            0.,
            &[1., 1.],
            &[0., 0.],
            &[INF, INF],
            &settings,
        )
        .unwrap();

        let mut y = vec![1.; 3];
        model.multiply_with_scaled_matrix(&[1., -1.], 2., &mut y, MatrixShape::N);
        assert_eq!(y, vec![-1., -5., 9.]);

        let mut x = vec![0.; 2];
        model.multiply_with_scaled_matrix(&[1., 1., 1.], 1., &mut x, MatrixShape::T);
        assert_eq!(x, vec![5., 5.]);
    }
}
