use crate::errors::AugmentError;
use crate::utils::traits::element::PoolElement;
use crate::{assert_err, assert_image_close};
use ndarray::array;

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓像素元素类型的回转↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
#[test]
fn test_from_f64_clamped_rounds_ties_to_even_for_integers() {
    assert_eq!(u8::from_f64_clamped(49.5), 50);
    assert_eq!(u8::from_f64_clamped(50.5), 50);
    assert_eq!(u8::from_f64_clamped(50.51), 51);
    assert_eq!(u16::from_f64_clamped(2.5), 2);
    assert_eq!(u32::from_f64_clamped(3.5), 4);
}

#[test]
fn test_from_f64_clamped_clamps_to_type_range() {
    assert_eq!(u8::from_f64_clamped(300.0), 255);
    assert_eq!(u8::from_f64_clamped(-7.0), 0);
    assert_eq!(u16::from_f64_clamped(70000.0), u16::MAX);
    assert_eq!(u8::from_f64_clamped(f64::NAN), 0);
}

#[test]
fn test_from_f64_clamped_keeps_fraction_for_floats() {
    assert_eq!(f32::from_f64_clamped(0.25), 0.25);
    assert_eq!(f64::from_f64_clamped(49.5), 49.5);
    assert!(f32::from_f64_clamped(f64::NAN).is_nan());
}

#[test]
fn test_as_f64() {
    assert_eq!(200u8.as_f64(), 200.0);
    assert_eq!(0.5f32.as_f64(), 0.5);
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑像素元素类型的回转↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓测试宏自身↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
#[test]
fn test_assert_err_macro() {
    let result: Result<(), AugmentError> = Err(AugmentError::InvalidState("shape为空".to_string()));
    assert_err!(result);
    assert_err!(result, AugmentError::InvalidState("shape为空"));
    assert_err!(result, AugmentError::InvalidState(msg) if msg.contains("shape"));
}

#[test]
fn test_assert_image_close_macro() {
    let actual = array![[[50u8], [121]]];
    let expected = array![[[49u8], [120]]];
    assert_image_close!(actual, expected, 1);
}

#[test]
#[should_panic]
fn test_assert_image_close_macro_rejects_large_diff() {
    let actual = array![[[50u8], [125]]];
    let expected = array![[[50u8], [120]]];
    assert_image_close!(actual, expected, 1);
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑测试宏自身↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/
