use ps_core::units::{FlowRate, Power, Pressure, bar, kw, lpm};

/// One row of the PDS product table.
///
/// Numeric fields carry the datasheet units directly (L/min, bar, kW);
/// the accessor methods lift them into `uom` quantities for callers that
/// want dimensional safety.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PumpModel {
    pub model: &'static str,
    pub max_flow_lpm: f64,
    pub max_pressure_bar: f64,
    pub motor_power_kw: f64,
}

impl PumpModel {
    #[inline]
    pub fn max_flow(&self) -> FlowRate {
        lpm(self.max_flow_lpm)
    }

    #[inline]
    pub fn max_pressure(&self) -> Pressure {
        bar(self.max_pressure_bar)
    }

    #[inline]
    pub fn motor_power(&self) -> Power {
        kw(self.motor_power_kw)
    }

    /// Derived PSI figure for the pressure column (datasheet factor).
    #[inline]
    pub fn max_pressure_psi(&self) -> f64 {
        ps_core::units::bar_to_psi(self.max_pressure_bar)
    }

    /// Case-insensitive substring match on the model identifier.
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }
        self.model.to_ascii_lowercase().contains(&query)
    }
}

pub const CATALOG_LEN: usize = 11;

const PDS_CATALOG: [PumpModel; CATALOG_LEN] = [
    PumpModel {
        model: "PDS-006",
        max_flow_lpm: 0.065,
        max_pressure_bar: 10.0,
        motor_power_kw: 0.25,
    },
    PumpModel {
        model: "PDS-01",
        max_flow_lpm: 0.1,
        max_pressure_bar: 10.0,
        motor_power_kw: 0.25,
    },
    PumpModel {
        model: "PDS-02",
        max_flow_lpm: 0.2,
        max_pressure_bar: 10.0,
        motor_power_kw: 0.25,
    },
    PumpModel {
        model: "PDS-05",
        max_flow_lpm: 0.5,
        max_pressure_bar: 10.0,
        motor_power_kw: 0.25,
    },
    PumpModel {
        model: "PDS-1",
        max_flow_lpm: 1.2,
        max_pressure_bar: 5.0,
        motor_power_kw: 0.25,
    },
    PumpModel {
        model: "PDS-3",
        max_flow_lpm: 2.5,
        max_pressure_bar: 5.0,
        motor_power_kw: 0.25,
    },
    PumpModel {
        model: "PDS-5",
        max_flow_lpm: 5.5,
        max_pressure_bar: 5.0,
        motor_power_kw: 0.25,
    },
    PumpModel {
        model: "PDS-10",
        max_flow_lpm: 10.5,
        max_pressure_bar: 5.0,
        motor_power_kw: 0.55,
    },
    PumpModel {
        model: "PDS-20",
        max_flow_lpm: 23.0,
        max_pressure_bar: 5.0,
        motor_power_kw: 0.75,
    },
    PumpModel {
        model: "PDS-40",
        max_flow_lpm: 37.0,
        max_pressure_bar: 5.0,
        motor_power_kw: 1.5,
    },
    PumpModel {
        model: "PDS-50",
        max_flow_lpm: 52.0,
        max_pressure_bar: 5.0,
        motor_power_kw: 1.5,
    },
];

/// The full catalog, in datasheet order. Datasheet order is also the
/// tie-break order used by the selection engine.
pub fn all() -> &'static [PumpModel] {
    &PDS_CATALOG
}

/// Look up a catalog entry by its exact model identifier.
pub fn by_model(model: &str) -> Option<&'static PumpModel> {
    PDS_CATALOG.iter().find(|m| m.model == model)
}
