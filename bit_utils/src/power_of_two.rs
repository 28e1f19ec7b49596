use num_traits::PrimInt;

/// True when `value` is a positive power of two.
///
/// Zero and every negative value are not powers of two.
///
/// # Examples
///
/// ```
/// use bit_utils::is_power_of_two;
///
/// assert!(is_power_of_two(1u8));
/// assert!(is_power_of_two(1i64 << 60));
/// assert!(!is_power_of_two(0i32));
/// assert!(!is_power_of_two(i8::MIN));
/// ```
#[inline]
pub fn is_power_of_two<T: PrimInt>(value: T) -> bool {
    if value <= T::zero() {
        return false;
    }
    value & (value - T::one()) == T::zero()
}
