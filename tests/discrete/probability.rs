// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use num::rational::Ratio;
use rstest::rstest;
use statinfo::{
    ExactProbability, InfoError, Probabilities, frequencies, probability, probability_with,
};

use crate::test_helpers::generate_random_data;

#[test]
fn exact_probabilities_of_small_series() {
    let p = probability(&[0, 0, 1], true).unwrap();
    let mut exact = p.as_exact().unwrap().to_vec();
    exact.sort();
    assert_eq!(exact, vec![Ratio::new(1, 3), Ratio::new(2, 3)]);
}

#[test]
fn float_probabilities_follow_first_occurrence() {
    let p = probability(&["b", "a", "b", "b"], false).unwrap();
    assert_eq!(p, Probabilities::Float(vec![0.75, 0.25]));
}

#[rstest]
#[case(generate_random_data(10, 3, 1))]
#[case(generate_random_data(997, 13, 2))]
#[case(generate_random_data(5000, 100, 3))]
fn probabilities_sum_to_one(#[case] data: Vec<i32>) {
    let exact = probability_with::<_, ExactProbability>(&data).unwrap();
    let total: Ratio<u64> = exact.iter().copied().sum();
    assert_eq!(total, Ratio::from_integer(1));

    let float = probability(&data, false).unwrap().to_f64_vec();
    assert_abs_diff_eq!(float.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    assert_eq!(float.len(), exact.len());
}

#[test]
fn frequencies_count_every_observation() {
    let data = [3, 1, 3, 3, 2];
    let freq = frequencies(&data).unwrap();
    assert_eq!(freq, vec![(&3, 3), (&1, 1), (&2, 1)]);
    assert_eq!(freq.iter().map(|(_, c)| c).sum::<usize>(), data.len());
}

#[test]
fn composite_observations_are_counted_structurally() {
    let data = vec![vec![0, 1], vec![0, 1], vec![1, 1]];
    let p = probability(&data, true).unwrap();
    assert_eq!(p.as_exact().unwrap(), &[Ratio::new(2, 3), Ratio::new(1, 3)]);
}

#[test]
fn empty_series_has_no_probabilities() {
    let data: Vec<u8> = Vec::new();
    assert_eq!(probability(&data, true), Err(InfoError::EmptySeries));
    assert!(frequencies(&data).is_err());
}
