mod csv;
mod json;
mod text;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

use crate::filters::{BoundaryFilter, InteriorFilter, InteriorVariant, ScalingFilter, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Flattened view of one filter for presentation
#[derive(Debug, Clone, serde::Serialize)]
pub struct FilterReport {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    pub order: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<usize>,
    pub left: isize,
    pub right: isize,
    pub coefficients: Vec<f64>,
}

impl FilterReport {
    pub fn interior(filter: &InteriorFilter) -> Self {
        let kind = match filter.variant() {
            InteriorVariant::Symmlet => "symmlet",
            InteriorVariant::Standard => "standard",
        };
        Self::from_filter(kind, None, None, filter)
    }

    pub fn boundary(filter: &BoundaryFilter<'_>) -> Self {
        Self::from_filter(
            "boundary",
            Some(filter.side()),
            Some(filter.index()),
            filter,
        )
    }

    fn from_filter(
        kind: &'static str,
        side: Option<Side>,
        member: Option<usize>,
        filter: &impl ScalingFilter,
    ) -> Self {
        let support = filter.support();
        Self {
            kind,
            side,
            order: filter.vanishing_moments(),
            member,
            left: support.left(),
            right: support.right(),
            coefficients: filter.coefficients(),
        }
    }
}

pub trait Formatter: Send {
    fn format(&self, report: &FilterReport) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, precision: usize) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(precision)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter::new(precision)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::BoundaryFilterFamily;

    #[test]
    fn test_interior_report() {
        let filter = InteriorFilter::new(2, true).unwrap();
        let report = FilterReport::interior(&filter);
        assert_eq!(report.kind, "symmlet");
        assert_eq!((report.left, report.right), (-1, 2));
        assert_eq!(report.coefficients, filter.coefficients());
        assert!(report.side.is_none());
    }

    #[test]
    fn test_boundary_report() {
        let family = BoundaryFilterFamily::new(Side::Right, 3).unwrap();
        let member = family.filter(1).unwrap();
        let report = FilterReport::boundary(&member);
        assert_eq!(report.kind, "boundary");
        assert_eq!(report.side, Some(Side::Right));
        assert_eq!(report.member, Some(1));
        assert_eq!((report.left, report.right), (-5, 0));
        assert_eq!(report.coefficients.len(), 6);
    }
}
