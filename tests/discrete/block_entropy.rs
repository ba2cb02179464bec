// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use rstest::rstest;
use statinfo::estimators::{GlobalValue, InfoError, LocalValues};
use statinfo::{Entropy, entropy};

use crate::test_helpers::generate_random_data;

#[test]
fn block_entropy_of_constant_series_is_zero() {
    assert_eq!(entropy(&[4, 4, 4, 4, 4], 3).unwrap(), 0.0);
}

#[test]
fn block_entropy_divides_by_block_length() {
    // Windows: 001, 011, 110, 100, 001, 011 -> counts 2,2,1,1 over 6
    let data = [0, 0, 1, 1, 0, 0, 1, 1];
    let p = [2.0 / 6.0, 2.0 / 6.0, 1.0 / 6.0, 1.0 / 6.0];
    let h_block: f64 = p.iter().map(|&p: &f64| -p * p.log2()).sum();
    assert_abs_diff_eq!(entropy(&data, 3).unwrap(), h_block / 3.0, epsilon = 1e-12);
}

#[test]
fn periodic_series_has_vanishing_rate() {
    // Period-2 process: only two distinct blocks whatever the block length
    let data: Vec<u8> = (0..200).map(|i| (i % 2) as u8).collect();
    let h1 = entropy(&data, 1).unwrap();
    let h4 = entropy(&data, 4).unwrap();
    let h8 = entropy(&data, 8).unwrap();
    assert_abs_diff_eq!(h1, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(h4, 0.25, epsilon = 1e-3);
    assert!(h8 < h4);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
fn block_entropy_is_bounded_by_order_one_entropy_for_iid_data(#[case] k: usize) {
    let data = generate_random_data(2000, 3, 11);
    let h1 = entropy(&data, 1).unwrap();
    let hk = entropy(&data, k).unwrap();
    assert!(hk >= 0.0);
    assert!(hk <= h1 + 1e-3);
}

#[test]
fn float_block_order_with_integral_value_is_accepted() {
    let data = [0, 1, 1, 0, 1];
    assert_eq!(entropy(&data, 2.0).unwrap(), entropy(&data, 2).unwrap());
}

#[test]
fn series_shorter_than_block_is_empty() {
    assert_eq!(entropy(&[0, 1], 3), Err(InfoError::EmptySeries));
}

#[test]
fn block_local_values_average_to_rate() {
    let data = generate_random_data(120, 4, 3);
    let est = Entropy::new_block(&data, 3).unwrap();
    assert_eq!(est.len(), data.len() - 2);
    assert_abs_diff_eq!(est.global_from_local(), est.global_value(), epsilon = 1e-12);
}
