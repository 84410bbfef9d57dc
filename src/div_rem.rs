use std::cmp::min;

use num_traits::PrimInt;

/// Division where the quotient saturates at `max_quotient` and the excess is left in the
/// remainder. This is what lets the last (leap) period of each calendar cycle absorb its extra
/// day without branching.
pub(crate) trait ClampedDivRem<Q: Ord>: Sized {
    type Quotient;
    fn clamped_div_rem(self, divisor: Self, max_quotient: Q) -> (Q, Self);
}

impl<T, Q> ClampedDivRem<Q> for T
where
    T: PrimInt + TryInto<Q>,
    Q: Ord + Into<T> + Copy,
{
    type Quotient = Q;
    fn clamped_div_rem(self, divisor: T, max_quotient: Self::Quotient) -> (Self::Quotient, Self) {
        let quotient = min(self / divisor, max_quotient.into());
        let remainder = self - quotient * divisor;
        let quotient: Self::Quotient = match quotient.try_into() {
            Ok(x) => x,
            Err(_) => panic!("quotient is too large"),
        };
        (quotient, remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_the_clamp() {
        assert_eq!(700_u32.clamped_div_rem(365, 3_u8), (1, 335));
        assert_eq!(0_u32.clamped_div_rem(365, 3_u8), (0, 0));
    }

    #[test]
    fn excess_stays_in_the_remainder() {
        // The fourth year of a quadrennium is the leap year, so day 1460 is its 366th day.
        assert_eq!(1460_u16.clamped_div_rem(365, 3_u8), (3, 365));
        assert_eq!(146_096_u32.clamped_div_rem(36_524, 3_u8), (3, 36_524));
    }
}
