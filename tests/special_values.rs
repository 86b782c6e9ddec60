use float_pitfalls::{nan_bits_f32, nan_bits_f64, DoubleDouble, Precision, PrecisionReport};

fn check_report<T: Precision>(report: &PrecisionReport<T>) {
    assert!(report.min_subnormal_is_subnormal, "{}", report.name);
    assert!(report.zeros_compare_equal);
    assert!(report.neg_zero.is_sign_negative());
    assert!(!report.pos_zero.is_sign_negative());
    assert!(!report.nan_equals_itself);

    assert!(report.one_over_pos_zero.is_infinite() && !report.one_over_pos_zero.is_sign_negative());
    assert!(report.one_over_neg_zero.is_infinite() && report.one_over_neg_zero.is_sign_negative());
    assert!(report.zero_over_zero.is_nan());
    assert!(report.ln_zero.is_infinite() && report.ln_zero.is_sign_negative());
    assert!(report.ln_negative.is_nan());
    assert!(report.sqrt_negative.is_nan());
    assert!(report.inf_minus_inf.is_nan());
    assert!(report.max_doubled.is_infinite());
    assert_eq!(report.half_min_subnormal, T::zero());
    assert!(report.min_subnormal < report.min_normal);
}

#[test]
fn native_reports_match_ieee_limits() {
    let single = PrecisionReport::<f32>::of();
    check_report(&single);
    assert_eq!(single.name, "float");
    assert_eq!(single.bits, 32);
    assert_eq!(single.mantissa_digits, 24);
    assert_eq!(single.epsilon, f32::EPSILON);
    assert_eq!(single.max, f32::MAX);
    assert_eq!(single.min_normal, f32::MIN_POSITIVE);

    let double = PrecisionReport::<f64>::of();
    check_report(&double);
    assert_eq!(double.name, "double");
    assert_eq!(double.bits, 64);
    assert_eq!((double.min_exp, double.max_exp), (f64::MIN_EXP, f64::MAX_EXP));
    assert_eq!(double.epsilon, f64::EPSILON);
    assert_eq!(double.min_subnormal, f64::from_bits(1));
}

#[test]
fn double_double_report_behaves_like_native_types() {
    let report = PrecisionReport::<DoubleDouble>::of();
    check_report(&report);
    assert_eq!(report.bits, 128);
    assert_eq!(report.mantissa_digits, 106);
    assert!(report.epsilon < DoubleDouble::from_f64(f64::EPSILON));
}

#[test]
fn report_text_lists_the_special_cases() {
    let text = PrecisionReport::<f64>::of().to_string();

    assert!(text.starts_with("double (64 bits)"));
    assert!(text.contains("1 / -0:                 -inf"));
    assert!(text.contains("0 / 0:                  NaN"));
    assert!(text.ends_with("NaN == NaN:             false"));
}

#[test]
fn nan_bit_patterns() {
    let single = nan_bits_f32();
    assert_eq!(single.quiet, 0x7FC0_0000);
    assert_eq!(single.signaling, 0x7FA0_0000);
    assert!(f32::from_bits(single.after_arithmetic as u32).is_nan());

    let double = nan_bits_f64();
    assert_eq!(double.quiet, 0x7FF8_0000_0000_0000);
    assert_eq!(double.signaling, 0x7FF4_0000_0000_0000);
    assert!(f64::from_bits(double.after_arithmetic).is_nan());

    assert!(double.to_string().starts_with("quiet NaN 0x7FF8000000000000"));
}
