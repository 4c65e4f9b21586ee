use daubechies_filters::output::{FilterReport, OutputFormat, create_formatter};
use daubechies_filters::{
    BoundaryFilterFamily, FilterConfig, InteriorFilter, IntervalFilterBank, ScalingFilter, Side,
};
use std::thread;

#[test]
fn test_concurrent_construction() {
    let handles: Vec<_> = (2..=8)
        .flat_map(|order| {
            [Side::Left, Side::Right].into_iter().map(move |side| {
                thread::spawn(move || {
                    let family = BoundaryFilterFamily::new(side, order).unwrap();
                    let interior = InteriorFilter::new(order, true).unwrap();
                    (family, interior)
                })
            })
        })
        .collect();

    for handle in handles {
        let (family, interior) = handle.join().unwrap();
        assert_eq!(family.vanishing_moments(), interior.vanishing_moments());
        let again =
            BoundaryFilterFamily::new(family.side(), family.vanishing_moments() as i32).unwrap();
        assert_eq!(family, again);
    }
}

#[test]
fn test_bank_from_toml() {
    let config = FilterConfig::from_toml_str(
        r#"
        order = 3
        sides = ["left", "right"]
        "#,
    )
    .unwrap();
    let bank = IntervalFilterBank::from_config(&config).unwrap();

    assert_eq!(bank.interior().support().left(), -2);
    assert_eq!(bank.boundary(Side::Left).support().right(), 5);
    assert_eq!(bank.boundary(Side::Right).support().left(), -5);
}

#[test]
fn test_reports_for_every_member() {
    let bank = IntervalFilterBank::new(4, true).unwrap();
    let formatter = create_formatter(OutputFormat::Csv, 12);

    let mut lines = 0;
    lines += formatter
        .format(&FilterReport::interior(bank.interior()))
        .lines()
        .count();
    for side in [Side::Left, Side::Right] {
        for member in bank.boundary(side).members() {
            let report = FilterReport::boundary(&member);
            assert_eq!(report.coefficients.len(), member.len());
            lines += formatter.format(&report).lines().count();
        }
    }

    // 8 interior taps plus 5 + 7 + 9 + 11 per side
    assert_eq!(lines, 8 + 2 * 32);
}

#[test]
fn test_uniform_access_through_trait() {
    fn total_len(filters: &[&dyn ScalingFilter]) -> usize {
        filters.iter().map(|f| f.len()).sum()
    }

    let interior = InteriorFilter::new(2, true).unwrap();
    let family = BoundaryFilterFamily::new(Side::Left, 2).unwrap();
    let first = family.filter(0).unwrap();
    let second = family.filter(1).unwrap();

    assert_eq!(total_len(&[&interior, &first, &second]), 4 + 3 + 5);
}
