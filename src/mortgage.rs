/// Monthly payment for a fixed-rate amortizing loan (French system).
///
/// `annual_rate_percent` is the nominal annual rate as a percentage
/// (3.5 means 3.5%). A zero rate degenerates to straight division of the
/// principal over the term, which the general formula cannot express.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: u32) -> f64 {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let term_months = f64::from(term_years) * 12.0;
    if monthly_rate == 0.0 {
        principal / term_months
    } else {
        principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-term_months))
    }
}
