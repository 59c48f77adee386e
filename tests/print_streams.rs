#![allow(non_snake_case)]

use lpform::{algebra::*, io::ConfigurablePrintTarget, model::*};
use std::io::{Read, Seek, SeekFrom};

const INF: f64 = f64::INFINITY;

fn load_model(settings: &ModelSettings) -> LpModel {
    let A = CscMatrix::from(&[
        [1., 2., 0.], //
        [0., 1e-2, 4.],
    ]);
    LpModel::load(
        &A,
        &[1., 0.],
        &['<', '='],
        0.,
        &[1., 0., -3.],
        &[0., -INF, -INF],
        &[INF, 8., INF],
        settings,
    )
    .unwrap()
}

#[test]
fn test_print_to_buffer() {
    let mut model = load_model(&ModelSettings::default());
    model.print_to_buffer();
    model.print_summary().unwrap();

    let out = model.get_print_buffer().unwrap();
    assert!(out.starts_with("Input"));
    assert!(out.contains("variables            = 3"));
    assert!(out.contains("free variables       = 1"));
    assert!(out.contains("equality constraints = 1"));
    assert!(out.contains("matrix range         = [1e-02, 4e+00]"));
    assert!(out.contains("rhs range            = [1e+00, 1e+00]"));
    assert!(out.contains("bounds range         = [8e+00, 8e+00]"));
    assert!(out.contains("dualized model       = no"));
    assert!(out.contains("scaling factors"));

    // a second summary is appended to the buffer
    model.print_summary().unwrap();
    let out = model.get_print_buffer().unwrap();
    assert_eq!(out.matches("Preprocessing").count(), 2);
}

#[test]
fn test_quiet_load_prints_on_request() {
    // verbose is off by default, so loading writes nothing
    let mut model = load_model(&ModelSettings::default());
    model.print_to_buffer();
    assert!(model.get_print_buffer().unwrap().is_empty());

    model.print_summary().unwrap();
    let out = model.get_print_buffer().unwrap();
    assert!(out.starts_with("Input"));
}

#[test]
fn test_print_without_scaling() {
    let settings = ModelSettingsBuilder::default().scale(false).build().unwrap();
    let mut model = load_model(&settings);
    model.print_to_buffer();
    model.print_summary().unwrap();

    let out = model.get_print_buffer().unwrap();
    assert!(out.contains("Preprocessing"));
    assert!(!out.contains("scaling factors"));
}

#[test]
fn test_print_buffer_not_configured() {
    let mut model = load_model(&ModelSettings::default());
    model.print_to_sink();
    model.print_summary().unwrap();
    assert!(model.get_print_buffer().is_err());
}

#[test]
fn test_print_to_file() {
    let mut model = load_model(&ModelSettings::default());
    let mut file = tempfile::tempfile().unwrap();
    model.print_to_file(file.try_clone().unwrap());
    model.print_summary().unwrap();

    let mut out = String::new();
    file.seek(SeekFrom::Start(0)).unwrap();
    file.read_to_string(&mut out).unwrap();
    assert!(out.starts_with("Input"));
    assert!(out.contains("Preprocessing"));
}

#[test]
fn test_print_to_stream() {
    let mut model = load_model(&ModelSettings::default());
    let file = tempfile::NamedTempFile::new().unwrap();
    model.print_to_stream(Box::new(file.reopen().unwrap()));
    model.print_summary().unwrap();

    let out = std::fs::read_to_string(file.path()).unwrap();
    assert!(out.contains("matrix entries       = 4"));
}
