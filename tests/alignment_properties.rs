//! Exhaustive checks of the linear-space aligner against the quadratic one.
//!
//! Every pair of sequences over ACGT up to length 3 is aligned, plus a fixed
//! set of longer pseudo-random pairs so the recursion actually splits.

use hirschberg_align::{
    backward_costs, forward_costs, full_align, hirschberg, hirschberg_with_stats, Cost,
    CostConfig, CostModel,
};

const ALPHABET: &[u8] = b"ACGT";

fn reference_model() -> CostModel {
    CostConfig::embedded()
        .expect("embedded config parses")
        .to_model()
        .expect("embedded config is complete")
}

/// Asymmetric costs with non-free identities
fn skewed_model() -> CostModel {
    CostModel::from_fn(
        ALPHABET,
        |s| Cost::from(s % 5) + 1,
        |a, b| {
            if a == b {
                Cost::from(a % 2)
            } else {
                Cost::from(a % 7) * 2 + Cost::from(b % 3)
            }
        },
    )
    .expect("valid alphabet")
}

/// All sequences over ACGT with length at most `max_len`
fn all_sequences(max_len: usize) -> Vec<Vec<u8>> {
    let mut out = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * ALPHABET.len());
        for seq in &frontier {
            for &s in ALPHABET {
                let mut longer: Vec<u8> = seq.clone();
                longer.push(s);
                next.push(longer);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

/// Deterministic pseudo-random sequence from a linear congruential generator
fn lcg_sequence(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            ALPHABET[((state >> 33) % 4) as usize]
        })
        .collect()
}

fn longer_pairs() -> Vec<(Vec<u8>, Vec<u8>)> {
    (0..24u64)
        .map(|i| {
            let n = 5 + (i as usize * 7) % 40;
            let m = 3 + (i as usize * 11) % 45;
            (lcg_sequence(i * 2 + 1, n), lcg_sequence(i * 2 + 2, m))
        })
        .collect()
}

fn check_pair(x: &[u8], y: &[u8], model: &CostModel) {
    let expected = full_align(x, y, model).unwrap();
    let result = hirschberg(x, y, model).unwrap();

    let label = format!(
        "x={:?} y={:?}",
        String::from_utf8_lossy(x),
        String::from_utf8_lossy(y)
    );
    assert_eq!(result.cost, expected.cost, "cost mismatch for {label}");
    assert!(result.is_alignment_of(x, y), "malformed alignment for {label}");
    assert_eq!(
        result.column_cost(model).unwrap(),
        result.cost,
        "column costs do not add up for {label}"
    );
    assert!(expected.is_alignment_of(x, y), "malformed full alignment for {label}");
    assert_eq!(expected.column_cost(model).unwrap(), expected.cost);
}

#[test]
fn test_exhaustive_short_pairs_reference_costs() {
    let model = reference_model();
    let sequences = all_sequences(3);
    for x in &sequences {
        for y in &sequences {
            check_pair(x, y, &model);
        }
    }
}

#[test]
fn test_exhaustive_short_pairs_asymmetric_costs() {
    let model = skewed_model();
    assert!(!model.is_symmetric());
    let sequences = all_sequences(3);
    for x in &sequences {
        for y in &sequences {
            check_pair(x, y, &model);
        }
    }
}

#[test]
fn test_longer_pairs_match_full_alignment() {
    for model in [reference_model(), skewed_model()] {
        for (x, y) in longer_pairs() {
            check_pair(&x, &y, &model);
        }
    }
}

#[test]
fn test_swapping_inputs_with_transposed_costs() {
    let model = skewed_model();
    let transposed = model.transposed();
    for (x, y) in longer_pairs() {
        let forward = hirschberg(&x, &y, &model).unwrap();
        let swapped = hirschberg(&y, &x, &transposed).unwrap();
        assert_eq!(forward.cost, swapped.cost);
        // The swapped rows are an alignment of (y, x) with the same cost.
        assert_eq!(
            forward.swapped().column_cost(&transposed).unwrap(),
            forward.cost
        );
    }
}

#[test]
fn test_every_split_row_recovers_optimal_cost() {
    let model = reference_model();
    for (x, y) in longer_pairs() {
        let total = full_align(&x, &y, &model).unwrap().cost;
        let m = y.len();
        for i in 0..=x.len() {
            let forward = forward_costs(&x[..i], &y, &model).unwrap();
            let backward = backward_costs(&x[i..], &y, &model).unwrap();
            let best = (0..=m).map(|j| forward[j] + backward[m - j]).min().unwrap();
            assert_eq!(best, total, "split at row {i}");
        }
    }
}

#[test]
fn test_sweep_rows_stay_linear() {
    let model = reference_model();
    let x = lcg_sequence(99, 600);
    let y = lcg_sequence(100, 150);

    let (result, stats) = hirschberg_with_stats(&x, &y, &model).unwrap();
    assert_eq!(result.cost, full_align(&x, &y, &model).unwrap().cost);

    // Two rows over the longest y segment, never anything proportional to |x|*|y|.
    assert!(stats.peak_row_cells <= 2 * (y.len() + 1));
    assert!(stats.sweeps >= 2);
    assert!(stats.base_cases >= 2);
}

#[test]
fn test_degenerate_inputs() {
    let model = reference_model();

    let both_empty = hirschberg(b"", b"", &model).unwrap();
    assert!(both_empty.is_empty());
    assert_eq!(both_empty.cost, 0);

    let only_x = hirschberg(b"GATTACA", b"", &model).unwrap();
    assert_eq!(only_x.aligned_b_str(), "-------");
    assert_eq!(only_x.cost, 11);

    let identical = hirschberg(b"ACGTACGT", b"ACGTACGT", &model).unwrap();
    assert_eq!(identical.cost, 0);
    assert_eq!(identical.aligned_a, identical.aligned_b);
}

#[test]
fn test_undefined_symbol_fails_both_aligners() {
    let model = reference_model();
    assert!(full_align(b"ACGN", b"ACG", &model).is_err());
    assert!(hirschberg(b"ACGTACGT", b"ACGNACGT", &model).is_err());
}
