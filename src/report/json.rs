use super::Report;
use serde_json::json;

pub fn to_json(report: Report<'_>) -> Result<String, serde_json::Error> {
    match report {
        Report::Score(report) => serde_json::to_string_pretty(report),
        Report::Portfolio(report) => serde_json::to_string_pretty(report),
        Report::Allocation(report) => serde_json::to_string_pretty(report),
        Report::Weights(table) => serde_json::to_string_pretty(&json!({
            "weights": table,
            "total": table.total(),
        })),
        Report::Industries(industries) => serde_json::to_string_pretty(industries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{assess, ParameterSet, WeightTable};
    use crate::types::report::ScoreReport;

    #[test]
    fn json_score_report_contains_score_and_header() {
        let params = ParameterSet::uniform(8).expect("uniform should build");
        let report = ScoreReport::new(assess(&params, &WeightTable::standard()), None);

        let rendered = to_json(Report::Score(&report)).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["assessment"]["score"], 8.0);
        assert_eq!(value["assessment"]["classification"], "high");
        assert!(value["generated_at"].is_string());
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn json_weights_include_total() {
        let table = WeightTable::standard();
        let rendered = to_json(Report::Weights(&table)).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["total"], 60);
        assert_eq!(value["weights"]["Market Growth Potential"], 12);
    }
}
