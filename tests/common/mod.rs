//! Shared fixtures for integration tests

pub mod test_helpers;

use transport_rs::prelude::*;

/// Canonical symmetric tracer pulse used throughout the integration tests
///
/// With the default parameters (length 10 cm, flow 1 mL/min, porosity 0.4)
/// the pore-volume total is 4.0, `C0` is 10, the normalized curve is
/// `[0, 0.5, 1.0, 0.5, 0]`, and the half-maximum crossing sits at row 1
/// (0.25 pore volumes).
pub fn tracer_pulse_table() -> SampleTable {
    SampleTable::from_rows(vec![
        SampleRow::new(0.0, 0.0),
        SampleRow::new(1.0, 5.0),
        SampleRow::new(2.0, 10.0),
        SampleRow::new(3.0, 5.0),
        SampleRow::new(4.0, 0.0),
    ])
}

/// CSV rendition of [`tracer_pulse_table`]
pub fn tracer_pulse_csv() -> &'static str {
    "time,concentration\n0,0\n1,5\n2,10\n3,5\n4,0\n"
}

/// The parameters the canonical expectations are computed with
pub fn tracer_pulse_params() -> ExperimentParams {
    ExperimentParams::new(10.0, 1.0, 0.4)
}
