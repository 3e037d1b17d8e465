//! Accuracy regression tests for fastwarp.
//!
//! These tests verify that algorithmic changes do not alter exact DTW
//! distances or the FastDTW approximation contract. Reference values were
//! hand-computed from the DP recurrence and are hardcoded to catch
//! regressions.

use fastwarp::{Dtw, DtwError, FastDtw, Sequence};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn seq(values: Vec<f64>) -> Sequence {
    Sequence::new(values, 1).expect("valid test sequence")
}

// ---------------------------------------------------------------------------
// a) exact_distances_match_known_values
// ---------------------------------------------------------------------------

/// Verify exact DTW distances for 10 univariate pairs against hand-computed
/// reference values (accumulated |a - b| along the optimal warp).
#[test]
fn exact_distances_match_known_values() {
    let pairs: Vec<(Sequence, Sequence)> = vec![
        (seq(vec![0.0, 0.0, 0.0]), seq(vec![1.0, 1.0, 1.0])),         // constant offset
        (seq(vec![0.0, 1.0, 0.0]), seq(vec![0.0, 0.0, 0.0])),         // single peak
        (seq(vec![1.0, 2.0, 3.0, 4.0]), seq(vec![1.0, 2.0, 3.0, 4.0])), // identical
        (seq(vec![1.0, 2.0, 3.0]), seq(vec![3.0, 2.0, 1.0])),         // reversed
        (seq(vec![0.0, 5.0, 0.0, 5.0]), seq(vec![5.0, 0.0, 5.0, 0.0])), // alternating
        (seq(vec![1.0]), seq(vec![5.0])),                             // single point
        (seq(vec![0.0, 0.0, 1.0]), seq(vec![1.0, 0.0, 0.0])),         // shifted peak
        (seq(vec![0.0, 1.0, 2.0, 3.0, 4.0]), seq(vec![0.0, 0.0, 0.0, 0.0, 4.0])), // late ramp
        (seq(vec![10.0, 10.0, 10.0]), seq(vec![10.1, 9.9, 10.0])),    // tiny perturbation
        (seq(vec![0.0, 3.0, 0.0, 3.0, 0.0]), seq(vec![3.0, 0.0, 3.0, 0.0, 3.0])), // opposite phase
    ];

    let expected: Vec<f64> = vec![
        3.0,  // [0,0,0] vs [1,1,1]: three diagonal steps of cost 1
        1.0,  // single peak absorbed by one cell
        0.0,  // identical
        4.0,  // reversed ramp
        10.0, // alternating, two unavoidable misses of cost 5
        4.0,  // |1 - 5|
        2.0,  // shifted peak
        4.0,  // late ramp warps the flat prefix
        0.2,  // 0.1 + 0.1 + 0.0
        6.0,  // opposite phase, two misses of cost 3
    ];

    let dtw = Dtw::euclidean();
    for (i, ((a, b), &exp)) in pairs.iter().zip(expected.iter()).enumerate() {
        let dist = dtw.distance(a.as_view(), b.as_view()).unwrap().value();
        assert!(
            (dist - exp).abs() < 1e-10,
            "pair {i}: got {dist:.15}, expected {exp:.15}"
        );
    }
}

// ---------------------------------------------------------------------------
// b) multivariate_exact_distance
// ---------------------------------------------------------------------------

/// 2-D points: the diagonal alignment costs one step of length sqrt(2).
#[test]
fn multivariate_exact_distance() {
    let a = Sequence::from_rows(&[vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();
    let b = Sequence::from_rows(&[vec![0.0, 0.0], vec![2.0, 2.0]]).unwrap();
    let dist = Dtw::euclidean().distance(a.as_view(), b.as_view()).unwrap();
    assert!((dist.value() - 2.0_f64.sqrt()).abs() < 1e-10);
}

// ---------------------------------------------------------------------------
// c) fastdtw_reference_scenarios
// ---------------------------------------------------------------------------

/// Constant offset of 1 per step, 6 steps on the diagonal: exact and fast
/// results both equal 6.0 at radius 1.
#[test]
fn fast_and_exact_agree_on_constant_offset() {
    let a = seq(vec![0.0; 6]);
    let b = seq(vec![1.0; 6]);
    let exact = Dtw::euclidean().distance(a.as_view(), b.as_view()).unwrap();
    let fast = FastDtw::new(1).distance(a.as_view(), b.as_view()).unwrap();
    assert!((exact.value() - 6.0).abs() < 1e-10);
    assert!((fast.value() - 6.0).abs() < 1e-10);
}

/// A radius large enough to push min_size past both lengths must reproduce
/// the exact distance bit-for-bit via the fallback path.
#[test]
fn fast_with_large_radius_equals_exact() {
    let a = seq((0..10).map(|i| (i as f64 * 0.7).sin()).collect());
    let b = seq((0..12).map(|i| (i as f64 * 0.6).cos()).collect());
    let exact = Dtw::euclidean().distance(a.as_view(), b.as_view()).unwrap();
    let fast = FastDtw::new(10).distance(a.as_view(), b.as_view()).unwrap();
    assert_eq!(fast.value(), exact.value());
}

/// The windowed search can only restrict the set of admissible paths, so
/// the approximation is never below the exact optimum.
#[test]
fn fast_is_upper_bound_on_exact() {
    let a = seq((0..64).map(|i| (i as f64 * 0.2).sin()).collect());
    let b = seq((0..48).map(|i| (i as f64 * 0.25).sin() + 0.1).collect());
    let exact = Dtw::euclidean().distance(a.as_view(), b.as_view()).unwrap();

    for radius in [1usize, 2, 4] {
        let fast = FastDtw::new(radius).distance(a.as_view(), b.as_view()).unwrap();
        assert!(fast.value() >= 0.0);
        assert!(
            fast.value() >= exact.value() - 1e-10,
            "radius {radius}: fast {} below exact {}",
            fast.value(),
            exact.value()
        );
    }
}

/// Radius 0 above the fallback threshold is the documented escape hatch:
/// empty coarse path, empty window, unreachable terminal cell.
#[test]
fn fast_radius_zero_is_unreachable() {
    let a = seq(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    let b = seq(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    let fast = FastDtw::new(0).distance(a.as_view(), b.as_view()).unwrap();
    assert!(!fast.is_finite());
}

// ---------------------------------------------------------------------------
// d) input validation across the public surface
// ---------------------------------------------------------------------------

#[test]
fn dimension_mismatch_is_rejected_not_truncated() {
    let a = Sequence::from_rows(&[vec![0.0, 0.0], vec![1.0, 1.0]]).unwrap();
    let b = Sequence::from_rows(&[vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0]]).unwrap();

    let exact = Dtw::euclidean().distance(a.as_view(), b.as_view());
    assert!(matches!(
        exact,
        Err(DtwError::DimensionMismatch { left: 2, right: 3 })
    ));

    let fast = FastDtw::new(1).distance(a.as_view(), b.as_view());
    assert!(matches!(
        fast,
        Err(DtwError::DimensionMismatch { left: 2, right: 3 })
    ));
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(
        Sequence::from_rows(&[]),
        Err(DtwError::EmptySequence)
    ));
    assert!(matches!(
        Sequence::new(vec![], 1),
        Err(DtwError::EmptySequence)
    ));
}

// ---------------------------------------------------------------------------
// e) batch pairwise consistency
// ---------------------------------------------------------------------------

/// The parallel pairwise matrix must agree with individual distance calls
/// for both the exact and the approximate aligner.
#[test]
fn pairwise_matrices_match_individual_calls() {
    let sequences: Vec<Sequence> = (0..5)
        .map(|k| seq((0..20).map(|i| ((i * (k + 1)) as f64 * 0.15).sin()).collect()))
        .collect();

    let exact = Dtw::euclidean();
    let matrix = exact.pairwise(&sequences).unwrap();
    for (i, j, d) in matrix.pairs() {
        let direct = exact
            .distance(sequences[i].as_view(), sequences[j].as_view())
            .unwrap();
        assert!(
            (d.value() - direct.value()).abs() < 1e-10,
            "exact mismatch at ({i}, {j})"
        );
    }

    let fast = FastDtw::new(2);
    let matrix = fast.pairwise(&sequences).unwrap();
    for (i, j, d) in matrix.pairs() {
        let direct = fast
            .distance(sequences[i].as_view(), sequences[j].as_view())
            .unwrap();
        assert!(
            (d.value() - direct.value()).abs() < 1e-10,
            "fast mismatch at ({i}, {j})"
        );
    }
}

// ---------------------------------------------------------------------------
// f) zero self-distance
// ---------------------------------------------------------------------------

#[test]
fn self_distance_is_zero() {
    let dtw = Dtw::euclidean();
    for values in [
        vec![1.0, 2.0, 3.0],
        vec![0.0; 10],
        (0..25).map(|i| (i as f64).sqrt()).collect(),
    ] {
        let s = seq(values);
        let dist = dtw.distance(s.as_view(), s.as_view()).unwrap();
        assert!((dist.value() - 0.0).abs() < 1e-10);
    }
}
