//! Properties of the t-test across random samples.

use numlab_stats::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn p_value_is_a_probability(data in prop::collection::vec(-50.0f64..50.0, 2..40), mu0 in -50.0f64..50.0) {
        prop_assume!(sample_std_dev(&data).unwrap() > 1e-9);
        let result = one_sample_t_test(&data, mu0).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.p_value));
        prop_assert_eq!(result.df, (data.len() - 1) as f64);
    }

    #[test]
    fn testing_the_sample_mean_gives_p_one(data in prop::collection::vec(-50.0f64..50.0, 2..40)) {
        prop_assume!(sample_std_dev(&data).unwrap() > 1e-9);
        let mean = sample_mean(&data).unwrap();
        let result = one_sample_t_test(&data, mean).unwrap();
        prop_assert!(result.t_statistic.abs() < 1e-9);
        prop_assert!(result.p_value > 1.0 - 1e-6);
    }

    #[test]
    fn cdf_is_monotone(df in 0.5f64..60.0, a in -20.0f64..20.0, b in -20.0f64..20.0) {
        let t = StudentT::new(df).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(t.cdf(lo).unwrap() <= t.cdf(hi).unwrap() + 1e-14);
    }
}

#[test]
fn shifted_population_is_detected() {
    // Mean 105 against H0: mu = 100 with n = 300 has power close to 1.
    let data = normal_sample(105.0, 15.0, 300, 42).unwrap();
    let result = one_sample_t_test(&data, 100.0).unwrap();
    assert!(result.reject_null(0.05), "{result}");
}

#[test]
fn sample_moments_track_the_population() {
    let data = normal_sample(105.0, 15.0, 20_000, 7).unwrap();
    let mean = sample_mean(&data).unwrap();
    let sd = sample_std_dev(&data).unwrap();
    assert!((mean - 105.0).abs() < 0.5, "mean {mean}");
    assert!((sd - 15.0).abs() < 0.5, "sd {sd}");
}
