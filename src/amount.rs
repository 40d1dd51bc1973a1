//! Fixed point amounts, 6 decimals to match the settlement token.
use crate::errors::Error;

pub const DECIMALS: u32 = 6;
pub const UNIT: i128 = 1_000_000;

pub(crate) fn check_positive_amount(amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

pub(crate) fn add(a: i128, b: i128) -> Result<i128, Error> {
    if a < 0 || b < 0 {
        return Err(Error::InvalidAmount);
    }
    a.checked_add(b).ok_or(Error::Overflow)
}

// amounts never go negative, so b > a is an underflow
pub(crate) fn sub(a: i128, b: i128) -> Result<i128, Error> {
    if a < 0 || b < 0 {
        return Err(Error::InvalidAmount);
    }
    if b > a {
        return Err(Error::Underflow);
    }
    Ok(a - b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rejects_overflow() {
        assert_eq!(add(i128::MAX, 1), Err(Error::Overflow));
        assert_eq!(add(8_750_000, 8_750_000), Ok(17_500_000));
    }

    #[test]
    fn sub_rejects_underflow() {
        assert_eq!(sub(350 * UNIT, 350 * UNIT), Ok(0));
        assert_eq!(sub(8_750_000, 8_750_001), Err(Error::Underflow));
    }

    #[test]
    fn negative_inputs_are_invalid() {
        assert_eq!(add(-1, 1), Err(Error::InvalidAmount));
        assert_eq!(sub(1, -1), Err(Error::InvalidAmount));
        assert_eq!(check_positive_amount(0), Err(Error::InvalidAmount));
        assert_eq!(check_positive_amount(1), Ok(()));
    }
}
