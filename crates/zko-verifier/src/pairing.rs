// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Optimal ate pairing on BLS12-381.
//!
//! Inputs are [`G1Point`]/[`G2Point`], which cannot hold off-curve or
//! wrong-subgroup points, so every pairing here runs on validated data.

use ark_bls12_381::{Bls12_381, G1Affine, G2Affine};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ff::One;
use zko_types::{G1Point, G2Point};

/// Element of the target group (a subgroup of `Fq12*`), written
/// multiplicatively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetElement(PairingOutput<Bls12_381>);

impl TargetElement {
    pub fn identity() -> Self {
        Self(PairingOutput(<Bls12_381 as Pairing>::TargetField::one()))
    }

    pub fn mul(&self, other: &Self) -> Self {
        // arkworks writes the target group additively
        Self(self.0 + other.0)
    }

    pub fn is_identity(&self) -> bool {
        self.0 .0.is_one()
    }
}

/// `e(p, q)`
pub fn pairing(p: &G1Point, q: &G2Point) -> TargetElement {
    TargetElement(Bls12_381::pairing(*p.as_affine(), *q.as_affine()))
}

/// True iff `Π e(p_i, q_i) == 1`.
///
/// One shared Miller loop over every pair, then a single final
/// exponentiation. The empty product is the identity.
pub fn multi_pairing_check(pairs: &[(G1Point, G2Point)]) -> bool {
    if pairs.is_empty() {
        return true;
    }
    let (g1, g2): (Vec<G1Affine>, Vec<G2Affine>) = pairs
        .iter()
        .map(|(p, q)| (*p.as_affine(), *q.as_affine()))
        .unzip();
    let miller = Bls12_381::multi_miller_loop(g1, g2);
    Bls12_381::final_exponentiation(miller)
        .map(|out| out.0.is_one())
        .unwrap_or(false)
}
