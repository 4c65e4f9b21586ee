//! Tabulated least-asymmetric (symmlet) scaling filters, orders 2 through 8
//!
//! Stored in analysis order; index 0 of each table sits at support position
//! `-order + 1`. Orders 2 and 3 coincide with the time-reversed Daubechies
//! filters.

static SYM2: [f64; 4] = [
    -0.12940952255126037,
    0.2241438680420134,
    0.8365163037378079,
    0.48296291314453416,
];

static SYM3: [f64; 6] = [
    0.03522629188570953,
    -0.08544127388202666,
    -0.13501102001025458,
    0.45987750211849154,
    0.8068915093110925,
    0.33267055295008263,
];

static SYM4: [f64; 8] = [
    -0.07576571478950221,
    -0.029635527646002493,
    0.497618667632775,
    0.8037387518051321,
    0.29785779560530606,
    -0.09921954357663353,
    -0.012603967262031304,
    0.032223100604051466,
];

static SYM5: [f64; 10] = [
    0.027333068344998768,
    0.02951949092570626,
    -0.039134249302313844,
    0.19939753397685558,
    0.7234076904040407,
    0.633978963456792,
    0.01660210576451085,
    -0.17532808990805623,
    -0.021101834024689042,
    0.019538882735249827,
];

static SYM6: [f64; 12] = [
    0.015404109327044824,
    0.0034907120842221626,
    -0.11799011114852002,
    -0.04831174258569806,
    0.49105594192797375,
    0.787641141028651,
    0.3379294217281658,
    -0.07263752278637658,
    -0.02106029251237085,
    0.04472490177078139,
    0.0017677118642540077,
    -0.00780070832503238,
];

static SYM7: [f64; 14] = [
    0.002681814568260147,
    -0.001047384888679738,
    -0.012636303403240567,
    0.030515513165877885,
    0.06789269350122057,
    -0.04955283493704283,
    0.017441255086835708,
    0.5361019170905692,
    0.7677643170048829,
    0.2886296317506479,
    -0.14004724044293365,
    -0.10780823770328972,
    0.0040102448715223955,
    0.010268176708464817,
];

static SYM8: [f64; 16] = [
    -0.0033824159510050028,
    -0.0005421323318000107,
    0.03169508781152599,
    0.007607487324976609,
    -0.14329423835127267,
    -0.061273359067811076,
    0.4813596512590534,
    0.777185751699628,
    0.36444189483617895,
    -0.0519458381078818,
    -0.027219029917103486,
    0.04913717967373029,
    0.0038087520138944896,
    -0.014952258337062199,
    -0.0003029205147241331,
    0.001889950332767689,
];

/// Tabulated symmlet of the given order, if any
pub fn symmlet_table(order: usize) -> Option<&'static [f64]> {
    match order {
        2 => Some(&SYM2),
        3 => Some(&SYM3),
        4 => Some(&SYM4),
        5 => Some(&SYM5),
        6 => Some(&SYM6),
        7 => Some(&SYM7),
        8 => Some(&SYM8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::SQRT_2;

    #[test]
    fn test_table_lengths() {
        for order in 2..=8 {
            assert_eq!(symmlet_table(order).unwrap().len(), 2 * order);
        }
        assert!(symmlet_table(1).is_none());
        assert!(symmlet_table(9).is_none());
    }

    #[test]
    fn test_tables_are_orthonormal() {
        for order in 2..=8 {
            let h = symmlet_table(order).unwrap();
            let n = h.len();
            assert_abs_diff_eq!(h.iter().sum::<f64>(), SQRT_2, epsilon = 1e-10);
            assert_abs_diff_eq!(h.iter().map(|x| x * x).sum::<f64>(), 1.0, epsilon = 1e-10);
            for shift in 1..order {
                let dot: f64 = (0..n - 2 * shift).map(|k| h[k] * h[k + 2 * shift]).sum();
                assert_abs_diff_eq!(dot, 0.0, epsilon = 1e-10);
            }
        }
    }
}
