// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verification key, proof, and the write-once key store.

use std::sync::OnceLock;

use ark_bls12_381::Bls12_381;
use zko_types::{G1Point, G2Point};

use crate::error::{VerifierError, VerifierResult};

/// Groth16 verification key for BLS12-381
///
/// IC is a unified vector: ic[0] is the constant term, ic[1..] are coefficients
/// for public inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationKey {
    alpha_g1: G1Point,
    beta_g2: G2Point,
    gamma_g2: G2Point,
    delta_g2: G2Point,
    ic: Vec<G1Point>,
}

impl VerificationKey {
    pub fn new(
        alpha_g1: G1Point,
        beta_g2: G2Point,
        gamma_g2: G2Point,
        delta_g2: G2Point,
        ic: Vec<G1Point>,
    ) -> VerifierResult<Self> {
        if ic.is_empty() {
            return Err(VerifierError::MalformedInput(
                "verification key needs at least ic[0]".into(),
            ));
        }
        Ok(Self { alpha_g1, beta_g2, gamma_g2, delta_g2, ic })
    }

    pub fn alpha_g1(&self) -> &G1Point {
        &self.alpha_g1
    }

    pub fn beta_g2(&self) -> &G2Point {
        &self.beta_g2
    }

    pub fn gamma_g2(&self) -> &G2Point {
        &self.gamma_g2
    }

    pub fn delta_g2(&self) -> &G2Point {
        &self.delta_g2
    }

    pub fn ic(&self) -> &[G1Point] {
        &self.ic
    }

    pub fn num_public_inputs(&self) -> usize {
        self.ic.len() - 1
    }
}

impl TryFrom<&ark_groth16::VerifyingKey<Bls12_381>> for VerificationKey {
    type Error = VerifierError;

    fn try_from(vk: &ark_groth16::VerifyingKey<Bls12_381>) -> Result<Self, Self::Error> {
        let ic = vk
            .gamma_abc_g1
            .iter()
            .map(|p| G1Point::try_from(*p))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(
            G1Point::try_from(vk.alpha_g1)?,
            G2Point::try_from(vk.beta_g2)?,
            G2Point::try_from(vk.gamma_g2)?,
            G2Point::try_from(vk.delta_g2)?,
            ic,
        )
    }
}

/// Groth16 proof for BLS12-381
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof {
    pub a: G1Point,
    pub b: G2Point,
    pub c: G1Point,
}

impl TryFrom<&ark_groth16::Proof<Bls12_381>> for Proof {
    type Error = VerifierError;

    fn try_from(proof: &ark_groth16::Proof<Bls12_381>) -> Result<Self, Self::Error> {
        Ok(Self {
            a: G1Point::try_from(proof.a)?,
            b: G2Point::try_from(proof.b)?,
            c: G1Point::try_from(proof.c)?,
        })
    }
}

/// Holds the deployment's verification key. Loaded exactly once; after
/// that any number of readers may share it without locking.
#[derive(Debug, Default)]
pub struct VerificationKeyStore {
    key: OnceLock<VerificationKey>,
}

impl VerificationKeyStore {
    pub const fn new() -> Self {
        Self { key: OnceLock::new() }
    }

    pub fn load(&self, vk: VerificationKey) -> VerifierResult<()> {
        self.key
            .set(vk)
            .map_err(|_| VerifierError::AlreadyInitialized)
    }

    pub fn get(&self) -> VerifierResult<&VerificationKey> {
        self.key.get().ok_or(VerifierError::Uninitialized)
    }

    pub fn is_loaded(&self) -> bool {
        self.key.get().is_some()
    }
}
