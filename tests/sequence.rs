use float_pitfalls::{constant_sequence, random_sequence, tenth, DoubleDouble, SequenceConfig};

#[test]
fn same_seed_gives_same_sequence() {
    let config = SequenceConfig::new(1_000, 0);
    assert_eq!(random_sequence::<f64>(&config), random_sequence::<f64>(&config));
}

#[test]
fn different_seeds_differ() {
    let a = random_sequence::<f64>(&SequenceConfig::new(100, 0));
    let b = random_sequence::<f64>(&SequenceConfig::new(100, 1));
    assert_ne!(a, b);
}

#[test]
fn values_are_in_unit_interval() {
    let values = random_sequence::<f64>(&SequenceConfig::new(10_000, 5));
    assert_eq!(values.len(), 10_000);
    assert!(values.iter().all(|&v| (0.0..1.0).contains(&v)));

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    assert!((mean - 0.5).abs() < 0.02);
}

#[test]
fn narrow_types_see_rounded_draws() {
    let config = SequenceConfig::new(500, 9);
    let wide = random_sequence::<f64>(&config);
    let narrow = random_sequence::<f32>(&config);
    let extended = random_sequence::<DoubleDouble>(&config);

    for i in 0..config.len {
        assert_eq!(narrow[i], wide[i] as f32);
        assert_eq!(extended[i].to_f64(), wide[i]);
    }
}

#[test]
fn constant_and_tenth() {
    assert_eq!(constant_sequence(0.25f32, 3), vec![0.25, 0.25, 0.25]);
    assert!(constant_sequence(1.0f64, 0).is_empty());

    assert_eq!(tenth::<f32>(), 0.1f32);
    assert_eq!(tenth::<f64>(), 0.1f64);
    assert_eq!(tenth::<DoubleDouble>().hi(), 0.1f64);
}
