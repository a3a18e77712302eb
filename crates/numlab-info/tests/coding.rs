//! Hamming(7,4) and entropy properties over all inputs or random ones.

use numlab_info::hamming::CODE_LEN;
use numlab_info::prelude::*;
use proptest::prelude::*;

fn all_messages() -> impl Iterator<Item = [u8; 4]> {
    (0u8..16).map(|n| [n >> 3 & 1, n >> 2 & 1, n >> 1 & 1, n & 1])
}

#[test]
fn every_single_bit_error_is_corrected() {
    for message in all_messages() {
        let clean = encode(message).unwrap();
        for index in 0..CODE_LEN {
            let mut received = clean;
            received.flip(index).unwrap();
            assert_eq!(syndrome(&received), index + 1);

            let outcome = decode(received);
            assert_eq!(outcome.data, message, "message {message:?}, flipped {index}");
            assert_eq!(outcome.corrected_position, Some(index + 1));
        }
    }
}

#[test]
fn codewords_are_at_least_three_bits_apart() {
    let words: Vec<_> = all_messages().map(|m| encode(m).unwrap().bits()).collect();
    for (i, a) in words.iter().enumerate() {
        for b in &words[i + 1..] {
            let distance = a.iter().zip(b).filter(|(x, y)| x != y).count();
            assert!(distance >= 3);
        }
    }
}

fn distribution(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..1.0, len).prop_map(|w| {
        let total: f64 = w.iter().sum();
        w.into_iter().map(|x| x / total).collect()
    })
}

proptest! {
    #[test]
    fn gibbs_inequality_holds(
        (p, q) in (2usize..8).prop_flat_map(|n| (distribution(n), distribution(n)))
    ) {
        prop_assert!(validate_distribution(&p, 1e-9).is_ok());
        prop_assert!(verify_gibbs_inequality(&p, &q).unwrap().passed);
        prop_assert!(kl_divergence(&p, &q).unwrap() >= -1e-9);
    }

    #[test]
    fn entropy_is_bounded_by_log_of_support(p in (1usize..16).prop_flat_map(distribution)) {
        let h = entropy(&p);
        prop_assert!(h >= -1e-9);
        prop_assert!(h <= (p.len() as f64).log2() + 1e-9);
    }
}
