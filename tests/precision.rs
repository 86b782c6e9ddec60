use float_pitfalls::{DoubleDouble, Precision};

fn check_degenerate_operations<T: Precision>() {
    let zero = T::zero();
    let one = T::one();

    let pos_inf = one / zero;
    assert!(pos_inf.is_infinite() && !pos_inf.is_sign_negative(), "{}: 1/+0", T::NAME);

    let neg_inf = one / T::neg_zero();
    assert!(neg_inf.is_infinite() && neg_inf.is_sign_negative(), "{}: 1/-0", T::NAME);

    assert!((zero / zero).is_nan(), "{}: 0/0", T::NAME);
    assert!((-one).sqrt().is_nan(), "{}: sqrt(-1)", T::NAME);
    assert!((-one).ln().is_nan(), "{}: ln(-1)", T::NAME);

    let ln_zero = zero.ln();
    assert!(ln_zero.is_infinite() && ln_zero.is_sign_negative(), "{}: ln(0)", T::NAME);

    assert!((T::infinity() - T::infinity()).is_nan(), "{}: inf - inf", T::NAME);
    assert!((T::max_value() * T::from_f64(2.0)).is_infinite(), "{}: overflow", T::NAME);
}

fn check_subnormals<T: Precision>() {
    let tiny = T::min_subnormal();
    assert!(tiny > T::zero());
    assert!(tiny.is_subnormal());
    assert!(!T::min_positive().is_subnormal());
    assert!(tiny < T::min_positive());
}

#[test]
fn degenerate_operations_give_special_values() {
    check_degenerate_operations::<f32>();
    check_degenerate_operations::<f64>();
    check_degenerate_operations::<DoubleDouble>();
}

#[test]
fn subnormal_range_sits_below_smallest_normal() {
    check_subnormals::<f32>();
    check_subnormals::<f64>();
    check_subnormals::<DoubleDouble>();
}

#[test]
fn halving_native_limits() {
    assert_eq!(f32::min_subnormal() / 2.0, 0.0);
    assert_eq!(f64::min_subnormal() / 2.0, 0.0);
    assert!((f32::min_positive() / 2.0).is_subnormal());
    assert!((f64::min_positive() / 2.0).is_subnormal());
}

#[test]
fn epsilon_is_the_gap_above_one() {
    assert_ne!(1.0f32 + <f32 as Precision>::epsilon(), 1.0);
    assert_eq!(1.0f32 + <f32 as Precision>::epsilon() / 2.0, 1.0);
    assert_ne!(1.0f64 + <f64 as Precision>::epsilon(), 1.0);
    assert_eq!(1.0f64 + <f64 as Precision>::epsilon() / 2.0, 1.0);

    let dd_eps = DoubleDouble::epsilon();
    assert_eq!(dd_eps.to_f64(), 2f64.powi(-104));
    assert_ne!(DoubleDouble::ONE + dd_eps, DoubleDouble::ONE);
}

#[test]
fn storage_and_digit_constants() {
    assert_eq!(f32::BITS, 32);
    assert_eq!(<f64 as Precision>::BITS, 64);
    assert_eq!(DoubleDouble::BITS, 128);

    assert_eq!(<f32 as Precision>::MANTISSA_DIGITS, 24);
    assert_eq!(<f64 as Precision>::MANTISSA_DIGITS, 53);
    assert_eq!(DoubleDouble::MANTISSA_DIGITS, 106);

    assert_eq!(<f32 as Precision>::DECIMAL_DIGITS, 6);
    assert_eq!(<f64 as Precision>::DECIMAL_DIGITS, 15);
}

#[test]
fn zeros_compare_equal_but_keep_their_sign() {
    assert_eq!(f64::zero(), f64::neg_zero());
    assert!(f64::neg_zero().is_sign_negative());
    assert_eq!(DoubleDouble::zero(), DoubleDouble::neg_zero());
    assert!(DoubleDouble::neg_zero().is_sign_negative());
}

#[test]
fn conversions_round_to_nearest() {
    assert_eq!(f32::from_f64(0.1), 0.1f32);
    assert_eq!(Precision::to_f64(0.5f32), 0.5);
    assert_eq!(DoubleDouble::from_f64(0.1).to_f64(), 0.1);
}

#[test]
fn fixed_point_text_of_native_types() {
    assert_eq!(0.5f32.to_fixed(3), "0.500");
    assert_eq!(0.1f32.to_fixed(10), "0.1000000015");
    assert_eq!(0.1f64.to_fixed(20), "0.10000000000000000555");
    assert_eq!(f64::nan().to_fixed(5), "NaN");
}
