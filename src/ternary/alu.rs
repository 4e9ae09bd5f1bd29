//! The trit arithmetic/logic unit.
//!
//! Every function here is pure and total over {0, 1, 2}. The gates delegate to
//! the methods on [`Trit`]; the arithmetic functions always hand back the
//! carry or borrow next to the digit so the caller decides what to do with it.

use crate::ternary::{Row, Trit};

/// `2 - t`
#[inline]
pub fn not(t: Trit) -> Trit {
    t.not()
}

/// `min(a, b)`
#[inline]
pub fn and(a: Trit, b: Trit) -> Trit {
    a.and(b)
}

/// `max(a, b)`
#[inline]
pub fn or(a: Trit, b: Trit) -> Trit {
    a.or(b)
}

/// `(a + b) mod 3`
#[inline]
pub fn xor(a: Trit, b: Trit) -> Trit {
    a.xor(b)
}

/// `NOT(AND(a, b))`
#[inline]
pub fn nand(a: Trit, b: Trit) -> Trit {
    a.nand(b)
}

/// `NOT(OR(a, b))`
#[inline]
pub fn nor(a: Trit, b: Trit) -> Trit {
    a.nor(b)
}

/// `a` if both agree, otherwise 1.
#[inline]
pub fn consensus(a: Trit, b: Trit) -> Trit {
    a.consensus(b)
}

/// `(t + 1) mod 3`
#[inline]
pub fn cycle(t: Trit) -> Trit {
    t.cycle()
}

/// Add two trits with a carry-in, returning (digit, carry_out).
#[inline]
pub fn add(a: Trit, b: Trit, carry_in: Trit) -> (Trit, Trit) {
    a.full_add(b, carry_in)
}

/// Subtract `b` and a borrow-in from `a`, returning (digit, borrow_out).
#[inline]
pub fn subtract(a: Trit, b: Trit, borrow_in: Trit) -> (Trit, Trit) {
    a.full_sub(b, borrow_in)
}

/// Add two rows digit by digit, returning (result, overflow).
///
/// The carry ripples from x = 0 upwards; whatever is left after the most
/// significant digit is the overflow.
pub fn add_rows(a: &Row, b: &Row) -> (Row, Trit) {
    let mut digits = [Trit::Low; Row::WIDTH];
    let mut carry = Trit::Low;

    for ((digit, &x), &y) in digits.iter_mut().zip(a.trits()).zip(b.trits()) {
        let (sum, new_carry) = add(x, y, carry);
        *digit = sum;
        carry = new_carry;
    }

    (Row::from_trits(digits), carry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn t(v: u8) -> Trit {
        Trit::from_value(v as i64)
    }

    #[test]
    fn test_not_scenario() {
        assert_eq!(not(t(0)), t(2));
        assert_eq!(not(t(1)), t(1));
        assert_eq!(not(t(2)), t(0));
    }

    #[test]
    fn test_single_add() {
        assert_eq!(add(t(2), t(2), t(0)), (t(1), t(1)));
        assert_eq!(add(t(2), t(2), t(1)), (t(2), t(1)));
        assert_eq!(add(t(1), t(1), t(0)), (t(2), t(0)));
    }

    #[test]
    fn test_single_subtract() {
        assert_eq!(subtract(t(0), t(1), t(0)), (t(2), t(1)));
        assert_eq!(subtract(t(2), t(1), t(0)), (t(1), t(0)));
        assert_eq!(subtract(t(1), t(2), t(0)), (t(2), t(1)));
    }

    #[test]
    fn test_carry_in_of_two_stays_total() {
        // 2 + 2 + 2 = 6 = 0 + 2*3
        assert_eq!(add(t(2), t(2), t(2)), (t(0), t(2)));
        // 0 - 2 - 2 = -4 = 2 - 2*3
        assert_eq!(subtract(t(0), t(2), t(2)), (t(2), t(2)));
    }

    #[test]
    fn test_add_rows_ripple() {
        let a = Row::from_digits([2, 1, 0, 2]);
        let b = Row::from_digits([1, 2, 2, 1]);
        let (sum, overflow) = add_rows(&a, &b);

        assert_eq!(sum.digits(), [0, 1, 0, 1]);
        assert_eq!(overflow, Trit::Mid);
    }

    #[test]
    fn test_add_rows_no_overflow() {
        let (sum, overflow) = add_rows(&Row::from_u32(40), &Row::from_u32(40));
        assert_eq!(sum.to_u32(), 80);
        assert!(overflow.is_zero());
    }

    #[test]
    fn test_nand_nor_compose() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                assert_eq!(nand(a, b), not(and(a, b)));
                assert_eq!(nor(a, b), not(or(a, b)));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_add_rows_matches_integer_sum(a in 0u32..=80, b in 0u32..=80) {
            let (sum, overflow) = add_rows(&Row::from_u32(a), &Row::from_u32(b));
            prop_assert_eq!(sum.to_u32() + 81 * overflow.to_u8() as u32, a + b);
        }

        #[test]
        fn prop_add_rows_commutes(a in 0u32..=80, b in 0u32..=80) {
            let ab = add_rows(&Row::from_u32(a), &Row::from_u32(b));
            let ba = add_rows(&Row::from_u32(b), &Row::from_u32(a));
            prop_assert_eq!(ab, ba);
        }
    }
}
