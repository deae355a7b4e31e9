// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Modular arithmetic over the BLS12-381 prime fields.
//!
//! [`FieldElement`] wraps an arkworks prime field element. Arkworks keeps
//! every value in Montgomery form reduced into `[0, modulus)`, so the
//! wrapper only has to guard the boundaries: decoding rejects encodings
//! that are `>= modulus` instead of silently reducing them.
//!
//! # Hex format
//!
//! [`FieldElement::to_hex`] produces `0x`-prefixed big-endian hex padded
//! to the full field width. [`FieldElement::from_hex`] accepts both
//! `0x`-prefixed and raw hex and zero-pads short inputs.

use core::fmt;
use core::str::FromStr;

use ark_ff::{BigInteger, PrimeField};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ArithmeticError, ArithmeticResult};

/// An integer modulo the prime of `F`, always canonically reduced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement<F: PrimeField>(F);

impl<F: PrimeField> FieldElement<F> {
    /// Width of the big-endian encoding in bytes.
    pub const BYTES: usize = <F::BigInt as BigInteger>::NUM_LIMBS * 8;

    pub fn zero() -> Self {
        Self(F::zero())
    }

    pub fn one() -> Self {
        Self(F::one())
    }

    pub fn from_u64(value: u64) -> Self {
        Self(F::from(value))
    }

    /// Decode a fixed-width big-endian encoding. Values `>= modulus` are
    /// rejected rather than reduced.
    pub fn from_be_bytes(bytes: &[u8]) -> ArithmeticResult<Self> {
        if bytes.len() != Self::BYTES {
            return Err(ArithmeticError::InvalidLength {
                expected: Self::BYTES,
                actual: bytes.len(),
            });
        }
        let value = F::from_be_bytes_mod_order(bytes);
        if value.into_bigint().to_bytes_be() != bytes {
            return Err(ArithmeticError::NonCanonical);
        }
        Ok(Self(value))
    }

    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.into_bigint().to_bytes_be()
    }

    pub fn from_hex(s: &str) -> ArithmeticResult<Self> {
        let bytes = decode_hex(s)?;
        if bytes.len() > Self::BYTES {
            return Err(ArithmeticError::InvalidLength {
                expected: Self::BYTES,
                actual: bytes.len(),
            });
        }
        let mut padded = vec![0u8; Self::BYTES - bytes.len()];
        padded.extend_from_slice(&bytes);
        Self::from_be_bytes(&padded)
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_be_bytes()))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn add(&self, other: &Self) -> Self {
        Self(self.0 + other.0)
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self(self.0 - other.0)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self(self.0 * other.0)
    }

    pub fn neg(&self) -> Self {
        Self(-self.0)
    }

    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Multiplicative inverse; zero has none.
    pub fn inv(&self) -> ArithmeticResult<Self> {
        self.0
            .inverse()
            .map(Self)
            .ok_or(ArithmeticError::DivisionByZero)
    }

    pub fn pow(&self, exponent: u64) -> Self {
        Self(self.0.pow([exponent]))
    }

    pub fn inner(&self) -> &F {
        &self.0
    }

    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F: PrimeField> From<F> for FieldElement<F> {
    fn from(value: F) -> Self {
        Self(value)
    }
}

impl<F: PrimeField> fmt::Display for FieldElement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<F: PrimeField> FromStr for FieldElement<F> {
    type Err = ArithmeticError;

    /// Accepts hex (`0x…`) or a decimal `u64`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("0x") {
            return Self::from_hex(s);
        }
        s.parse::<u64>()
            .map(Self::from_u64)
            .map_err(|_| ArithmeticError::InvalidHex(s.to_string()))
    }
}

impl<F: PrimeField> Serialize for FieldElement<F> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, F: PrimeField> Deserialize<'de> for FieldElement<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Decode `0x`-prefixed or raw hex; odd-length input gets a leading zero.
pub(crate) fn decode_hex(s: &str) -> ArithmeticResult<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    if s.is_empty() {
        return Err(ArithmeticError::InvalidHex("no hex digits".into()));
    }
    let result = if s.len() % 2 == 1 {
        hex::decode(format!("0{s}"))
    } else {
        hex::decode(s)
    };
    result.map_err(|e| ArithmeticError::InvalidHex(e.to_string()))
}
