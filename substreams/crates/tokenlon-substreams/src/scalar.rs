use std::{ops::Div, str::FromStr};

use substreams::scalar::{BigDecimal, BigInt};

/// Significant digits kept by graph `BigDecimal` values.
const DECIMAL_PRECISION: u64 = 34;

/// Amounts travel through the protobuf messages as decimal strings.
pub fn parse_bigint(value: &str) -> BigInt {
    BigInt::from_str(value).unwrap_or_else(|_| {
        substreams::log::debug!("invalid integer {:?}, reading it as zero", value);
        BigInt::zero()
    })
}

pub fn parse_bigdecimal(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap_or_else(|_| {
        substreams::log::debug!("invalid decimal {:?}, reading it as zero", value);
        BigDecimal::zero()
    })
}

/// Staking token balance over staking share supply. Zero while nothing is staked.
pub fn scale_index(balance: &BigInt, supply: &BigInt) -> BigDecimal {
    if supply.is_zero() {
        return BigDecimal::zero();
    }
    balance
        .to_decimal(0)
        .div(supply.to_decimal(0))
        .with_prec(DECIMAL_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bigint() {
        assert_eq!(parse_bigint("1000000000000000000000"), BigInt::from_str("1000000000000000000000").unwrap());
        assert_eq!(parse_bigint(""), BigInt::zero());
        assert_eq!(parse_bigint("0x12"), BigInt::zero());
    }

    #[test]
    fn test_scale_index() {
        let supply = BigInt::from(2u64);
        assert_eq!(scale_index(&BigInt::from(3u64), &supply), BigDecimal::from_str("1.5").unwrap());
        assert_eq!(scale_index(&BigInt::from(3u64), &BigInt::zero()), BigDecimal::zero());
    }

    #[test]
    fn test_scale_index_keeps_graph_precision() {
        let index = scale_index(&BigInt::from(2u64), &BigInt::from(3u64));
        let digits = index.to_string().trim_start_matches("0.").len();
        assert_eq!(digits, 34);
    }
}
