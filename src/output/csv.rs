use super::{FilterReport, Formatter};

/// One row per coefficient
pub struct CsvFormatter {
    precision: usize,
}

impl CsvFormatter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, report: &FilterReport) -> String {
        let side = report.side.map_or(String::new(), |s| s.to_string());
        let member = report.member.map_or(String::new(), |k| k.to_string());
        (report.left..=report.right)
            .zip(&report.coefficients)
            .map(|(index, value)| {
                format!(
                    "{},{},{},{},{},{:.*}",
                    report.kind, side, report.order, member, index, self.precision, value
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(&self) -> Option<&'static str> {
        Some("kind,side,order,member,index,coefficient")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Side;

    #[test]
    fn test_csv_rows() {
        let report = FilterReport {
            kind: "boundary",
            side: Some(Side::Right),
            order: 2,
            member: Some(1),
            left: -3,
            right: 0,
            coefficients: vec![0.125, 0.25, 0.5, 1.0],
        };
        let csv = CsvFormatter::new(3).format(&report);
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], "boundary,right,2,1,-3,0.125");
        assert_eq!(rows[3], "boundary,right,2,1,0,1.000");
    }

    #[test]
    fn test_csv_header_matches_columns() {
        let header = CsvFormatter::new(3).header().unwrap();
        assert_eq!(header.split(',').count(), 6);
    }
}
