use serde::Serialize;

use crate::circuit::Sequence;
use crate::ohms_law::Electrical;
use crate::session::{Session, Solution};

/// Everything known about a circuit after one session.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub circuit: String,
    /// Plain series chain without unknowns.
    pub simple: bool,
    pub components: Sequence,
    pub req_known: f64,
    pub unknown_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Solution>,
    pub equivalent_resistance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electrical: Option<Electrical>,
}

impl Report {
    pub fn new(
        session: &Session,
        solution: Option<Solution>,
        electrical: Option<Electrical>,
    ) -> Self {
        Report {
            circuit: session.circuit().to_string(),
            simple: session.sequence().is_simple(),
            components: session.sequence().clone(),
            req_known: session.req_known(),
            unknown_count: session.unknowns().count(),
            equivalent_resistance: session.equivalent_resistance(solution.as_ref()),
            solution,
            electrical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ohms_law;

    #[test]
    fn test_report_without_unknown() {
        let session = Session::open("+10_20-").unwrap();
        let report = Report::new(&session, None, None);
        assert!(report.simple);
        assert_eq!(report.req_known, 30.0);
        assert_eq!(report.equivalent_resistance, 30.0);
        assert_eq!(report.unknown_count, 0);
        assert_eq!(report.components.len(), 4);
    }

    #[test]
    fn test_report_uses_measured_total_after_solve() {
        let session = Session::open("+10_x-").unwrap();
        let solution = session.solve(35.0).unwrap();
        let electrical = ohms_law::complete(35.0, None, Some(7.0)).unwrap();
        let report = Report::new(&session, solution, Some(electrical));

        assert!(!report.simple);
        assert_eq!(report.equivalent_resistance, 35.0);
        assert_eq!(report.electrical.unwrap().current, Some(0.2));
    }

    #[test]
    fn test_json_skips_absent_sections() {
        let session = Session::open("+10_20-").unwrap();
        let json = serde_json::to_value(Report::new(&session, None, None)).unwrap();
        assert!(json.get("solution").is_none());
        assert!(json.get("electrical").is_none());
        assert_eq!(json["components"][0]["kind"], "generator_lead");
    }
}
