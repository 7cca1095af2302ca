//! Form lifecycle shared by both frontends.
//!
//! A `Session` owns the raw input texts, the outcome of the last completed
//! query, and the transient highlighted-entry state. The outcome is a
//! tri-state: `None` means no query has completed yet, `Some` with an empty
//! ranking means a query ran and nothing qualified. Frontends need the
//! distinction to render the "no match" notice only after a completed query.

use crate::error::{AppError, AppResult, Field};
use ps_catalog::PumpModel;
use ps_select::{Query, Ranking, rank};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub flow_text: String,
    pub pressure_text: String,
    outcome: Option<Ranking>,
    selected: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse both inputs and run the engine.
    ///
    /// On any parse failure the error names the offending field and the
    /// previous outcome and selection are left untouched; the user retries
    /// with corrected input. On success the highlighted entry moves to the
    /// recommended model (or clears when nothing qualifies).
    pub fn submit(&mut self) -> AppResult<&Ranking> {
        let flow = parse_field(Field::FlowRate, &self.flow_text)?;
        let pressure = parse_field(Field::Pressure, &self.pressure_text)?;
        let query = Query::new(flow, pressure)?;

        let ranking = rank(&query);
        debug!(
            flow_lpm = query.flow_lpm,
            pressure_bar = query.pressure_bar,
            matches = ranking.len(),
            "query completed"
        );

        self.selected = if ranking.is_empty() { None } else { Some(0) };
        Ok(&*self.outcome.insert(ranking))
    }

    /// Clear inputs, outcome, and selection back to the initial state.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.flow_text.clear();
        self.pressure_text.clear();
        self.outcome = None;
        self.selected = None;
    }

    /// Highlight a different shortlist entry. Does not re-filter.
    pub fn select_entry(&mut self, index: usize) -> AppResult<()> {
        let len = self
            .outcome
            .as_ref()
            .map(|r| r.shortlist().len())
            .unwrap_or(0);
        if index >= len {
            return Err(AppError::SelectionOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Outcome of the last completed query, if any.
    pub fn outcome(&self) -> Option<&Ranking> {
        self.outcome.as_ref()
    }

    /// True once a query has completed, even one with no matches.
    pub fn has_queried(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The currently highlighted catalog entry.
    pub fn selected_model(&self) -> Option<&'static PumpModel> {
        let ranking = self.outcome.as_ref()?;
        ranking.shortlist().get(self.selected?).copied()
    }
}

fn parse_field(field: Field, text: &str) -> AppResult<f64> {
    let value: f64 = text.trim().parse().map_err(|_| AppError::InvalidInput {
        field,
        text: text.to_string(),
    })?;
    // "inf" and "NaN" parse as f64 but are not usable requirements
    if !value.is_finite() {
        return Err(AppError::InvalidInput {
            field,
            text: text.to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queried_session(flow: &str, pressure: &str) -> Session {
        let mut s = Session::new();
        s.flow_text = flow.to_string();
        s.pressure_text = pressure.to_string();
        s.submit().unwrap();
        s
    }

    #[test]
    fn initial_state_has_no_outcome() {
        let s = Session::new();
        assert!(!s.has_queried());
        assert!(s.outcome().is_none());
        assert!(s.selected_model().is_none());
    }

    #[test]
    fn submit_selects_recommended_entry() {
        let s = queried_session("0.5", "5");
        assert_eq!(s.selected_index(), Some(0));
        assert_eq!(s.selected_model().unwrap().model, "PDS-05");
    }

    #[test]
    fn empty_outcome_is_distinct_from_no_query() {
        let s = queried_session("100", "10");
        assert!(s.has_queried());
        assert!(s.outcome().unwrap().is_empty());
        assert!(s.selected_model().is_none());
    }

    #[test]
    fn invalid_input_names_field_and_preserves_outcome() {
        let mut s = queried_session("0.5", "5");
        s.flow_text = "abc".to_string();
        let err = s.submit().unwrap_err();
        match err {
            AppError::InvalidInput { field, .. } => assert_eq!(field, Field::FlowRate),
            other => panic!("unexpected error: {other}"),
        }
        // Prior results stay on screen
        assert_eq!(s.outcome().unwrap().len(), 8);
        assert_eq!(s.selected_model().unwrap().model, "PDS-05");
    }

    #[test]
    fn non_finite_text_is_invalid_input() {
        let mut s = Session::new();
        s.flow_text = "inf".to_string();
        s.pressure_text = "5".to_string();
        assert!(s.submit().is_err());
        assert!(!s.has_queried());
    }

    #[test]
    fn pressure_field_reported_second() {
        let mut s = Session::new();
        s.flow_text = "1".to_string();
        s.pressure_text = "".to_string();
        match s.submit().unwrap_err() {
            AppError::InvalidInput { field, .. } => assert_eq!(field, Field::Pressure),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn select_entry_moves_highlight_within_shortlist() {
        let mut s = queried_session("0", "0");
        s.select_entry(3).unwrap();
        assert_eq!(s.selected_model().unwrap().model, "PDS-05");

        let err = s.select_entry(5).unwrap_err();
        match err {
            AppError::SelectionOutOfRange { index, len } => {
                assert_eq!((index, len), (5, 5));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn select_entry_without_query_is_out_of_range() {
        let mut s = Session::new();
        assert!(s.select_entry(0).is_err());
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = queried_session("0.5", "5");
        s.reset();
        assert!(s.flow_text.is_empty());
        assert!(s.pressure_text.is_empty());
        assert!(!s.has_queried());
        assert!(s.selected_model().is_none());
    }

    #[test]
    fn inputs_tolerate_surrounding_whitespace() {
        let s = queried_session(" 0.5 ", "\t5\n");
        assert_eq!(s.outcome().unwrap().len(), 8);
    }
}
