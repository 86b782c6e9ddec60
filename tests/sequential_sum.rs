use float_pitfalls::{
    kahan_sequential,
    neumaier_sequential,
    random_sequence,
    repeated_sum,
    sequential_sum,
    sequential_sum_by,
    KahanAccumulator,
    SequenceConfig,
};

#[test]
fn sequential_sum_is_bitwise_deterministic() {
    let values = random_sequence::<f64>(&SequenceConfig::new(10_000, 7));

    let first = sequential_sum(&values);
    for _ in 0..5 {
        assert_eq!(sequential_sum(&values).to_bits(), first.to_bits());
    }
}

#[test]
fn empty_input_sums_to_zero() {
    let empty: [f32; 0] = [];
    assert_eq!(sequential_sum(&empty), 0.0);
    assert_eq!(kahan_sequential(&empty), 0.0);
    assert_eq!(neumaier_sequential(&empty), 0.0);
    assert_eq!(repeated_sum(0.1f64, 0), 0.0);
}

#[test]
fn sequential_sum_by_matches_slice_version() {
    let values = random_sequence::<f32>(&SequenceConfig::new(5_000, 3));
    let by_index = sequential_sum_by(values.len(), |i| values[i]);
    assert_eq!(by_index.to_bits(), sequential_sum(&values).to_bits());
}

#[test]
fn ten_tenths_do_not_make_one() {
    assert_eq!(repeated_sum(0.1f64, 10), 0.999_999_999_999_999_9);
    assert_eq!(repeated_sum(0.1f32, 10), 1.000_000_1);
}

#[test]
fn single_precision_drifts_over_a_million_terms() {
    let single = repeated_sum(0.1f32, 1_000_000);
    let double = repeated_sum(0.1f64, 1_000_000);

    assert_eq!(single, 100_958.34);
    assert!((double - 100_000.0).abs() < 1e-4);
}

#[test]
fn large_value_swallows_small_one_in_plain_sum() {
    assert_eq!(sequential_sum(&[1e16, 1.0, -1e16]), 0.0);
}

#[test]
fn kahan_step_tracks_lost_low_bits() {
    let mut acc = KahanAccumulator::new();
    acc.add(1e16);
    acc.add(1.0);

    assert_eq!(acc.total(), 1e16);
    assert_eq!(acc.compensation(), -1.0);

    acc.add(1.0);
    assert_eq!(acc.total(), 1e16 + 2.0);
    assert_eq!(acc.compensation(), 0.0);
}

#[test]
fn kahan_recovers_many_small_terms_after_a_large_one() {
    let mut values = vec![1e16f64];
    values.extend(std::iter::repeat(1.0).take(1_000));

    assert_eq!(sequential_sum(&values), 1e16);
    assert_eq!(kahan_sequential(&values), 1e16 + 1_000.0);
    assert_eq!(neumaier_sequential(&values), 1e16 + 1_000.0);
}

#[test]
fn kahan_keeps_a_million_tenths_close() {
    let total = kahan_sequential(&vec![0.1f32; 1_000_000]);
    assert!((total - 100_000.0).abs() <= 0.05, "kahan total {total}");
}
