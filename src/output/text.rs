use super::{FilterReport, Formatter};

pub struct TextFormatter {
    precision: usize,
}

impl TextFormatter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &FilterReport) -> String {
        let title = match (report.side, report.member) {
            (Some(side), Some(k)) => format!("{} boundary k={}", side, k),
            _ => format!("{} interior", report.kind),
        };
        let mut out = format!(
            "{} (order {}) on [{}, {}]",
            title, report.order, report.left, report.right
        );
        for (index, value) in (report.left..=report.right).zip(&report.coefficients) {
            out.push_str(&format!(
                "\n  {:>4}: {:>+.*}",
                index,
                self.precision,
                value
            ));
        }
        out
    }
}
