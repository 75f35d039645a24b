/// A total-energy reading taken after `iteration` full sweeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub iteration: usize,
    pub energy: f64,
}
