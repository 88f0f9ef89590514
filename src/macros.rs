//! Macro definitions used internally by this crate.

/// Implement [`BitSource`][`crate::BitSource`] for primitive integers by widening them to a
/// [`BigInt`][`num_bigint::BigInt`] and splitting off its limbs.
macro_rules! impl_bit_source_for_primitive {
    ($($int:ty),+ $(,)?) => {
        $(
            impl $crate::BitSource for $int {
                #[inline]
                fn to_limbs(&self) -> alloc::borrow::Cow<'_, [$crate::Limb]> {
                    alloc::borrow::Cow::Owned($crate::digits::split_limbs(
                        &num_bigint::BigInt::from(*self),
                    ))
                }
            }
        )+
    };
}
