/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 DBHub.io contributors
 */

use anyhow::anyhow;
use openssl::asn1::Asn1Integer;
use openssl::bn::{BigNum, MsbOption};

/// Draw a serial number uniformly from `[0, 2^128)`.
///
/// Collision checking against previously issued serials is intentionally
/// not done here, the random space is large enough for this use case.
pub fn random_128() -> anyhow::Result<Asn1Integer> {
    random_128_bn()?
        .to_asn1_integer()
        .map_err(|e| anyhow!("failed to convert bn to asn1 integer: {e}"))
}

fn random_128_bn() -> anyhow::Result<BigNum> {
    let mut bn = BigNum::new().map_err(|e| anyhow!("failed to create big num: {e}"))?;
    bn.rand(128, MsbOption::MAYBE_ZERO, false)
        .map_err(|e| anyhow!("failed to generate random big num: {e}"))?;
    Ok(bn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_128_in_range() {
        for _ in 0..64 {
            let bn = random_128_bn().unwrap();
            assert!(bn.num_bits() <= 128);
            assert!(!bn.is_negative());
        }
    }

    #[test]
    fn random_128_distinct() {
        let a = random_128_bn().unwrap();
        let b = random_128_bn().unwrap();
        assert_ne!(a, b);
    }
}
