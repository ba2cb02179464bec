// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use rstest::rstest;
use statinfo::estimators::traits::{GlobalValue, OptionalLocalValues};
use statinfo::{
    EstimatorConfig, InfoError, LogBase, MutualInformation, PadPolicy, entropy, multi_info,
    multi_info_with, mutual_info, mutual_info_with,
};

use crate::test_helpers::generate_random_data;

#[rstest]
#[case(vec![0, 0, 1, 1, 0, 1, 0, 1])]
#[case(vec![1, 1, 2, 2, 3, 3])]
#[case(generate_random_data(100, 5, 42))]
fn mutual_information_with_itself_is_entropy(#[case] x: Vec<i32>) {
    assert_eq!(mutual_info(&x, &x, 1).unwrap(), entropy(&x, 1).unwrap());
}

#[test]
fn independent_pattern_has_zero_mutual_information() {
    // Every (x, y) combination appears exactly once
    let x = [0, 0, 1, 1];
    let y = [0, 1, 0, 1];
    assert_abs_diff_eq!(mutual_info(&x, &y, 1).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn mutual_information_is_symmetric() {
    let x = generate_random_data(200, 4, 5);
    let y: Vec<i32> = x.iter().zip(generate_random_data(200, 2, 6)).map(|(a, b)| a / 2 + b).collect();
    let xy = mutual_info(&x, &y, 1).unwrap();
    let yx = mutual_info(&y, &x, 1).unwrap();
    assert_abs_diff_eq!(xy, yx, epsilon = 1e-12);
    assert!(xy > 0.0);
}

#[test]
fn block_mutual_information_delegates_to_multi_information() {
    let x = generate_random_data(150, 3, 8);
    let y = generate_random_data(150, 3, 9);
    for k in [2, 3] {
        assert_eq!(
            mutual_info(&x, &y, k).unwrap(),
            multi_info(&[x.as_slice(), y.as_slice()], k).unwrap()
        );
    }
}

#[test]
fn pad_policies_differ_on_unequal_lengths() {
    let x = [0, 1, 0, 1, 1, 0];
    let y = [0, 1, 0, 1];
    let padded = mutual_info(&x, &y, 1).unwrap();
    let truncated = mutual_info_with(
        &x,
        &y,
        1,
        &EstimatorConfig::default().with_pad_policy(PadPolicy::Truncate),
    )
    .unwrap();
    // Truncated pairs are (0,0),(1,1),(0,0),(1,1): H(X,Y) = 1 bit, and the
    // marginals only see the first four observations of x
    let expected_truncated = entropy(&x[..4], 1).unwrap() + entropy(&y, 1).unwrap() - 1.0;
    assert_abs_diff_eq!(truncated, expected_truncated, epsilon = 1e-12);
    assert!((padded - truncated).abs() > 1e-6);
}

#[rstest]
#[case(vec![0, 1, 2, 3], vec![0])]
#[case(vec![0, 1, 0, 1, 1, 0], vec![0, 1, 0, 1])]
#[case(generate_random_data(120, 4, 14), generate_random_data(70, 3, 15))]
fn truncated_mutual_information_is_bounded_by_marginals(#[case] x: Vec<i32>, #[case] y: Vec<i32>) {
    let truncate = EstimatorConfig::default().with_pad_policy(PadPolicy::Truncate);
    let mi = mutual_info_with(&x, &y, 1, &truncate).unwrap();
    assert_eq!(mi, multi_info_with(&[x.as_slice(), y.as_slice()], 1, &truncate).unwrap());

    let len = x.len().min(y.len());
    let h_x = entropy(&x[..len], 1).unwrap();
    let h_y = entropy(&y[..len], 1).unwrap();
    assert!(mi >= -1e-12);
    assert!(mi <= h_x.min(h_y) + 1e-12, "MI {mi} exceeds min(H(X), H(Y)) = {}", h_x.min(h_y));
}

#[test]
fn nats_are_bits_times_ln2() {
    let x = generate_random_data(80, 3, 12);
    let y = generate_random_data(80, 3, 13);
    let bits = mutual_info(&x, &y, 1).unwrap();
    let nats = mutual_info_with(
        &x,
        &y,
        1,
        &EstimatorConfig::default().with_log_base(LogBase::Nats),
    )
    .unwrap();
    assert_abs_diff_eq!(nats, bits * 2f64.ln(), epsilon = 1e-12);
}

#[test]
fn local_mutual_information_averages_to_global() {
    let x = generate_random_data(64, 4, 20);
    let y = generate_random_data(64, 4, 21);
    let est = MutualInformation::new_discrete(&x, &y, 1, &EstimatorConfig::default()).unwrap();
    assert!(est.supports_local());
    let locals = est.local_values_opt().unwrap();
    assert_eq!(locals.len(), 64);
    assert_abs_diff_eq!(locals.mean().unwrap(), est.global_value(), epsilon = 1e-12);
}

#[test]
fn local_values_need_equal_lengths() {
    let x = [0, 1, 0];
    let y = [0, 1];
    let est = MutualInformation::new_discrete(&x, &y, 1, &EstimatorConfig::default()).unwrap();
    assert!(!est.supports_local());
    assert!(matches!(
        est.local_values_opt(),
        Err(InfoError::LengthMismatch { .. })
    ));
}

#[test]
fn invalid_block_order_is_rejected_before_estimation() {
    let empty: [i32; 0] = [];
    assert_eq!(
        mutual_info(&empty, &empty, 0),
        Err(InfoError::InvalidBlockOrder("k must be positive".into()))
    );
    assert!(matches!(
        mutual_info(&[0, 1], &[1, 0], 2.5),
        Err(InfoError::InvalidBlockOrder(_))
    ));
}
