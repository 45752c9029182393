use serde::Deserialize;

/// Raw mortgage simulation body. `term` stays a float here so that a
/// fractional value is reported as a range error instead of a serde
/// rejection.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SimulationPayload {
    pub capital: Option<f64>,
    pub rate: Option<f64>,
    pub term: Option<f64>,
}

/// Validated simulation input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInput {
    pub capital: f64,
    /// Nominal annual rate as a percentage (3.5 means 3.5%).
    pub rate: f64,
    pub term_years: u32,
}
