//! Catalog filtering and ranking.

use ps_catalog::PumpModel;
use ps_core::PsError;
use ps_core::numeric::{Real, ensure_finite};
use thiserror::Error;

pub type SelectResult<T> = Result<T, SelectError>;

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("Non-finite {field} requirement: {value}")]
    NonFinite { field: &'static str, value: f64 },
}

// The foundation's finiteness check names the offending quantity; carry
// that name through as the field label frontends report on.
impl From<PsError> for SelectError {
    fn from(err: PsError) -> Self {
        let PsError::NonFinite { what, value } = err;
        SelectError::NonFinite { field: what, value }
    }
}

/// Number of ranked entries surfaced to the user.
pub const SHORTLIST_LEN: usize = 5;

/// A validated requirement pair.
///
/// Negative and zero requirements are legal; they simply tend to match the
/// whole catalog. There is no upper-bound sanity check: a requirement above
/// the largest catalog entry correctly yields an empty ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub flow_lpm: Real,
    pub pressure_bar: Real,
}

impl Query {
    /// Build a query, rejecting NaN and infinite requirements.
    pub fn new(flow_lpm: Real, pressure_bar: Real) -> SelectResult<Self> {
        let flow_lpm = ensure_finite(flow_lpm, "flow rate")?;
        let pressure_bar = ensure_finite(pressure_bar, "pressure")?;
        Ok(Self {
            flow_lpm,
            pressure_bar,
        })
    }

    /// True when the model meets or exceeds both requirements.
    #[inline]
    pub fn qualifies(&self, model: &PumpModel) -> bool {
        model.max_flow_lpm >= self.flow_lpm && model.max_pressure_bar >= self.pressure_bar
    }
}

/// The ordered outcome of one query.
///
/// Entries borrow the static catalog. An empty ranking is a valid outcome
/// (no model meets both requirements), not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    matches: Vec<&'static PumpModel>,
}

impl Ranking {
    /// All qualifying models, ascending by maximum flow rate.
    pub fn matches(&self) -> &[&'static PumpModel] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The least-oversized qualifying model, if any.
    pub fn recommended(&self) -> Option<&'static PumpModel> {
        self.matches.first().copied()
    }

    /// The first `SHORTLIST_LEN` entries of the ranking.
    pub fn shortlist(&self) -> &[&'static PumpModel] {
        &self.matches[..self.matches.len().min(SHORTLIST_LEN)]
    }
}

/// Rank the catalog against a query.
///
/// The sort is stable: models with equal maximum flow keep their datasheet
/// order.
pub fn rank(query: &Query) -> Ranking {
    let mut matches: Vec<&'static PumpModel> = ps_catalog::all()
        .iter()
        .filter(|m| query.qualifies(m))
        .collect();
    matches.sort_by(|a, b| a.max_flow_lpm.total_cmp(&b.max_flow_lpm));
    Ranking { matches }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(f: f64, p: f64) -> Query {
        Query::new(f, p).unwrap()
    }

    #[test]
    fn zero_query_matches_whole_catalog() {
        let ranking = rank(&q(0.0, 0.0));
        assert_eq!(ranking.len(), ps_catalog::CATALOG_LEN);
        assert_eq!(ranking.recommended().unwrap().model, "PDS-006");
    }

    #[test]
    fn oversized_flow_yields_empty_ranking() {
        let ranking = rank(&q(100.0, 10.0));
        assert!(ranking.is_empty());
        assert!(ranking.recommended().is_none());
        assert!(ranking.shortlist().is_empty());
    }

    #[test]
    fn mid_range_query_spans_pds05_to_pds50() {
        let ranking = rank(&q(0.5, 5.0));
        let models: Vec<&str> = ranking.matches().iter().map(|m| m.model).collect();
        assert_eq!(
            models,
            [
                "PDS-05", "PDS-1", "PDS-3", "PDS-5", "PDS-10", "PDS-20", "PDS-40", "PDS-50"
            ]
        );
        assert_eq!(ranking.recommended().unwrap().model, "PDS-05");
    }

    #[test]
    fn high_pressure_query_excludes_five_bar_models() {
        let ranking = rank(&q(0.0, 7.0));
        assert_eq!(ranking.len(), 4);
        assert!(ranking.matches().iter().all(|m| m.max_pressure_bar >= 7.0));
    }

    #[test]
    fn negative_requirements_are_valid() {
        let ranking = rank(&q(-1.0, -1.0));
        assert_eq!(ranking.len(), ps_catalog::CATALOG_LEN);
    }

    #[test]
    fn shortlist_caps_at_five() {
        let ranking = rank(&q(0.0, 0.0));
        assert_eq!(ranking.shortlist().len(), SHORTLIST_LEN);
        assert_eq!(ranking.shortlist()[0].model, "PDS-006");
    }

    #[test]
    fn non_finite_requirements_are_rejected() {
        assert!(Query::new(f64::NAN, 1.0).is_err());
        assert!(Query::new(1.0, f64::INFINITY).is_err());
        let err = Query::new(f64::NAN, 1.0).unwrap_err();
        assert!(format!("{err}").contains("flow rate"));
    }

    #[test]
    fn validation_keeps_field_label_from_core_check() {
        // Query validation delegates to ps_core::ensure_finite; the label
        // it was called with must survive as SelectError's field.
        let SelectError::NonFinite { field, .. } = Query::new(1.0, f64::NAN).unwrap_err();
        assert_eq!(field, "pressure");

        let err: SelectError = ps_core::PsError::NonFinite {
            what: "flow rate",
            value: f64::INFINITY,
        }
        .into();
        let SelectError::NonFinite { field, value } = err;
        assert_eq!(field, "flow rate");
        assert!(value.is_infinite());
    }
}
