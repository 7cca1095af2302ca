//! Display formatting shared by the CLI and the GUI.
//!
//! The datasheet prints bare shortest-form numbers for flow and power
//! (0.065, 23, 1.5) and a one-decimal PSI figure next to the bar value.

use ps_core::units::bar_to_psi;

/// Flow rate with unit, shortest form ("0.065 L/min", "23 L/min").
pub fn flow_text(lpm: f64) -> String {
    format!("{} L/min", lpm)
}

/// Pressure in bar with unit, shortest form.
pub fn pressure_text(bar: f64) -> String {
    format!("{} bar", bar)
}

/// Derived PSI figure, always one decimal place (5 bar -> "72.5 psi").
pub fn psi_text(bar: f64) -> String {
    format!("{:.1} psi", bar_to_psi(bar))
}

/// Motor power with unit, shortest form.
pub fn power_text(kw: f64) -> String {
    format!("{} kW", kw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn psi_is_one_decimal() {
        assert_eq!(psi_text(5.0), "72.5 psi");
        assert_eq!(psi_text(10.0), "145.0 psi");
    }

    #[test]
    fn shortest_form_numbers() {
        assert_eq!(flow_text(0.065), "0.065 L/min");
        assert_eq!(flow_text(23.0), "23 L/min");
        assert_eq!(pressure_text(5.0), "5 bar");
        assert_eq!(power_text(0.55), "0.55 kW");
    }
}
