// ABOUTME: Integration tests for adaptive load recommendations and one-rep-max estimation
// ABOUTME: Covers fatigue discount, RPE adjustment, plate rounding and input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_training_engine::config::training::AdaptiveLoadConfig;
use pierre_training_engine::errors::ErrorCode;
use pierre_training_engine::models::{RecoveryProfile, SessionFeedback};
use pierre_training_engine::{
    calculate_adaptive_load, estimate_one_rep_max, AdaptiveLoadCalculator,
};

const EPSILON: f64 = 1e-9;

fn profile(recovery_rate: f64) -> RecoveryProfile {
    RecoveryProfile::new(recovery_rate, 100.0)
}

fn feedback(rpe: f64) -> SessionFeedback {
    SessionFeedback::new(rpe, 3000.0)
}

#[test]
fn test_target_rpe_in_first_week_keeps_base_weight() {
    let rec = calculate_adaptive_load(100.0, 1, &profile(1.0), &feedback(8.0)).unwrap();

    assert!((rec.recommended_weight - 100.0).abs() < EPSILON);
    assert!(rec.percentage_change.abs() < EPSILON);
    assert_eq!(rec.reasoning.len(), 1);
}

#[test]
fn test_high_rpe_reduces_and_low_rpe_increases() {
    let hard = calculate_adaptive_load(100.0, 1, &profile(1.0), &feedback(9.0)).unwrap();
    let easy = calculate_adaptive_load(100.0, 1, &profile(1.0), &feedback(7.0)).unwrap();

    assert!((hard.recommended_weight - 95.0).abs() < EPSILON);
    assert!((easy.recommended_weight - 102.5).abs() < EPSILON);
    assert!(hard.recommended_weight < easy.recommended_weight);
    assert!((easy.percentage_change - 2.5).abs() < EPSILON);
}

#[test]
fn test_rpe_monotonicity_across_weeks_and_recovery() {
    for week in 1..=5 {
        for rate in [0.8, 1.0, 1.5] {
            let hard = calculate_adaptive_load(100.0, week, &profile(rate), &feedback(9.0)).unwrap();
            let easy = calculate_adaptive_load(100.0, week, &profile(rate), &feedback(7.0)).unwrap();
            assert!(
                hard.recommended_weight < easy.recommended_weight,
                "week {week}, rate {rate}"
            );
        }
    }
}

#[test]
fn test_fatigue_discount_is_applied_first_and_explained() {
    let rec = calculate_adaptive_load(100.0, 3, &profile(1.0), &feedback(9.0)).unwrap();

    // 100 * 0.9 * 0.95 = 85.5, rounded to the nearest 2.5
    assert!((rec.recommended_weight - 85.0).abs() < EPSILON);
    assert_eq!(rec.reasoning.len(), 2);
    assert!(rec.reasoning[0].starts_with("Week 3 of mesocycle"));
    assert!(rec.reasoning[1].contains("RPE 9.0"));
    assert!((rec.percentage_change + 15.0).abs() < EPSILON);
}

#[test]
fn test_faster_recovery_shrinks_the_discount() {
    let slow = calculate_adaptive_load(200.0, 4, &profile(0.8), &feedback(8.0)).unwrap();
    let fast = calculate_adaptive_load(200.0, 4, &profile(1.5), &feedback(8.0)).unwrap();

    assert!(fast.recommended_weight > slow.recommended_weight);
}

#[test]
fn test_recommendations_land_on_plate_increments() {
    for base in [47.3, 61.0, 100.0, 142.7, 225.0] {
        for week in 1..=4 {
            for rpe in [6.0, 8.0, 9.5] {
                let rec =
                    calculate_adaptive_load(base, week, &profile(1.2), &feedback(rpe)).unwrap();
                let plates = rec.recommended_weight / 2.5;
                assert!(
                    (plates - plates.round()).abs() < EPSILON,
                    "{} is not a multiple of 2.5",
                    rec.recommended_weight
                );
            }
        }
    }
}

#[test]
fn test_custom_rounding_increment() {
    let config = AdaptiveLoadConfig {
        rounding_increment: 5.0,
        ..AdaptiveLoadConfig::default()
    };
    let rec =
        AdaptiveLoadCalculator::calculate(100.0, 1, &profile(1.0), &feedback(7.0), &config)
            .unwrap();

    // 103 rounds to 105 on a 5.0 grid
    assert!((rec.recommended_weight - 105.0).abs() < EPSILON);
}

#[test]
fn test_small_weights_never_round_to_zero() {
    let rec = calculate_adaptive_load(1.0, 1, &profile(1.0), &feedback(8.0)).unwrap();

    assert!((rec.recommended_weight - 2.5).abs() < EPSILON);
    assert!((rec.percentage_change - 150.0).abs() < EPSILON);
    assert_eq!(rec.reasoning.len(), 2);
    assert!(rec.reasoning[1].contains("smallest increment"));
}

#[test]
fn test_invalid_recovery_rate_is_rejected() {
    for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = calculate_adaptive_load(100.0, 2, &profile(rate), &feedback(8.0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRecoveryRate, "rate {rate}");
    }
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let cases = [
        (0.0, 1, 8.0),
        (-20.0, 1, 8.0),
        (f64::NAN, 1, 8.0),
        (100.0, 0, 8.0),
        (100.0, 1, 10.5),
        (100.0, 1, -1.0),
    ];
    for (base, week, rpe) in cases {
        let err = calculate_adaptive_load(base, week, &profile(1.0), &feedback(rpe)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "{base} / {week} / {rpe}");
    }
}

#[test]
fn test_discount_collapsing_weight_is_rejected() {
    // 29 weeks at recovery 0.1 would discount 1450% of the base weight
    let err = calculate_adaptive_load(100.0, 30, &profile(0.1), &feedback(8.0)).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_one_rep_max_estimate() {
    let top_single = estimate_one_rep_max(140.0, 1, 10.0).unwrap();
    assert!((top_single - 140.0).abs() < EPSILON);

    let five_at_ten = estimate_one_rep_max(100.0, 5, 10.0).unwrap();
    assert!((five_at_ten - 100.0 * (1.0 + 5.0 / 30.0)).abs() < EPSILON);

    // Two reps in reserve count as extra reps
    let five_at_eight = estimate_one_rep_max(100.0, 5, 8.0).unwrap();
    assert!((five_at_eight - 100.0 * (1.0 + 7.0 / 30.0)).abs() < EPSILON);
    assert!(five_at_eight > five_at_ten);
}

#[test]
fn test_one_rep_max_validation() {
    assert_eq!(
        estimate_one_rep_max(0.0, 5, 8.0).unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert!(estimate_one_rep_max(100.0, 0, 8.0).is_err());
    assert!(estimate_one_rep_max(100.0, 5, 11.0).is_err());
}
