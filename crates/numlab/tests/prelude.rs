//! One pass through every topic via the facade prelude.

use approx::assert_relative_eq;
use numlab::prelude::*;

#[test]
fn analysis_is_reachable() {
    let roots = quadratic_roots(1.0, -3.0, 2.0).unwrap();
    assert!(verify_roots(&[2.0, -3.0, 1.0], &roots, 1e-12).passed);
    assert!(verify_round_trip(&[1.0, 0.0, -1.0, 0.5], 1e-12));
}

#[test]
fn algebra_is_reachable() {
    let group = AdditiveGroup::<7>::new().unwrap();
    assert_eq!(check_group_axioms(&group).unwrap().order, 7);
    assert_eq!(primes_in_range(10, 20), vec![11, 13, 17, 19]);
}

#[test]
fn geometry_is_reachable() {
    let l1 = Line::through(&Point::new(0.0, 0.0), &Point::new(10.0, 10.0)).unwrap();
    let l2 = Line::through(&Point::new(0.0, 10.0), &Point::new(10.0, 0.0)).unwrap();
    let hit = intersect_lines(&l1, &l2, Tolerances::default().geometry_epsilon).unwrap();
    assert_eq!(hit.to_string(), "(5.00, 5.00)");
}

#[test]
fn info_is_reachable() {
    assert_relative_eq!(entropy(&[0.5, 0.5]), 1.0, epsilon = 1e-10);
    let mut word = encode([1, 0, 1, 1]).unwrap();
    word.flip(5).unwrap();
    assert_eq!(decode(word).data, [1, 0, 1, 1]);
}

#[test]
fn stats_is_reachable() {
    let data = normal_sample(0.0, 1.0, 10, 1).unwrap();
    let result = one_sample_t_test(&data, 0.0).unwrap();
    assert!((0.0..=1.0).contains(&result.p_value));
}
