use super::{FilterReport, Formatter};

/// One JSON object per filter, full `f64` precision
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &FilterReport) -> String {
        serde_json::to_string(report)
            .unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}
