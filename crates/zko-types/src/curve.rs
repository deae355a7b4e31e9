// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Points on BLS12-381 G1 and its twist G2.
//!
//! A [`CurvePoint`] can only be built through a validating constructor, so
//! every value of the type lies on its curve and in the prime-order
//! subgroup. The point at infinity has a single representation.
//!
//! # Byte order
//!
//! Uncompressed arkworks canonical form (the zcash BLS12-381 layout):
//! 96 bytes for G1, 192 bytes for G2.

use core::fmt;
use core::hash::{Hash, Hasher};

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ArithmeticError, ArithmeticResult};
use crate::field::{decode_hex, FieldElement};

/// A validated affine point of the curve described by `P`.
pub struct CurvePoint<P: SWCurveConfig>(Affine<P>);

impl<P: SWCurveConfig> CurvePoint<P> {
    /// The additive identity (point at infinity).
    pub fn identity() -> Self {
        Self(Affine::identity())
    }

    pub fn generator() -> Self {
        Self(Affine::generator())
    }

    /// Build a point from affine coordinates, rejecting anything off the
    /// curve or outside the prime-order subgroup.
    pub fn from_coordinates(x: P::BaseField, y: P::BaseField) -> ArithmeticResult<Self> {
        Self::try_from(Affine::new_unchecked(x, y))
    }

    /// Size of the uncompressed encoding in bytes.
    pub fn encoded_len() -> usize {
        Affine::<P>::identity().uncompressed_size()
    }

    pub fn from_uncompressed(bytes: &[u8]) -> ArithmeticResult<Self> {
        let expected = Self::encoded_len();
        if bytes.len() != expected {
            return Err(ArithmeticError::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        // deserialize_uncompressed validates curve and subgroup membership
        Affine::<P>::deserialize_uncompressed(bytes)
            .map(Self)
            .map_err(|_| ArithmeticError::InvalidPoint)
    }

    pub fn to_uncompressed(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::encoded_len());
        self.0
            .serialize_uncompressed(&mut bytes)
            .expect("serializing into a Vec cannot fail");
        bytes
    }

    pub fn from_hex(s: &str) -> ArithmeticResult<Self> {
        Self::from_uncompressed(&decode_hex(s)?)
    }

    /// Raw hex of the uncompressed encoding, no prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_uncompressed())
    }

    pub fn is_identity(&self) -> bool {
        self.0.infinity
    }

    pub fn add(&self, other: &Self) -> Self {
        Self((self.0.into_group() + other.0).into_affine())
    }

    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Flip the sign of the y coordinate; the identity maps to itself.
    pub fn negate(&self) -> Self {
        Self(-self.0)
    }

    /// Variable-time double-and-add. All scalars on this path are public.
    pub fn scalar_mul(&self, scalar: &FieldElement<P::ScalarField>) -> Self {
        Self(self.0.mul_bigint(scalar.inner().into_bigint()).into_affine())
    }

    pub fn as_affine(&self) -> &Affine<P> {
        &self.0
    }

    pub fn into_affine(self) -> Affine<P> {
        self.0
    }
}

impl<P: SWCurveConfig> TryFrom<Affine<P>> for CurvePoint<P> {
    type Error = ArithmeticError;

    fn try_from(point: Affine<P>) -> Result<Self, Self::Error> {
        if point.infinity {
            return Ok(Self::identity());
        }
        if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
            return Err(ArithmeticError::InvalidPoint);
        }
        Ok(Self(point))
    }
}

impl<P: SWCurveConfig> From<CurvePoint<P>> for Affine<P> {
    fn from(point: CurvePoint<P>) -> Self {
        point.0
    }
}

impl<P: SWCurveConfig> Clone for CurvePoint<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: SWCurveConfig> Copy for CurvePoint<P> {}

impl<P: SWCurveConfig> PartialEq for CurvePoint<P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<P: SWCurveConfig> Eq for CurvePoint<P> {}

impl<P: SWCurveConfig> Hash for CurvePoint<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<P: SWCurveConfig> fmt::Debug for CurvePoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return f.write_str("CurvePoint(infinity)");
        }
        write!(f, "CurvePoint({})", self.to_hex())
    }
}

impl<P: SWCurveConfig> Serialize for CurvePoint<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, P: SWCurveConfig> Deserialize<'de> for CurvePoint<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
