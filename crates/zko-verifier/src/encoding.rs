// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Hex wire format for verification keys, proofs and public inputs.
//!
//! The same strings feed the CLI's JSON files and the Soroban contract,
//! which decodes them via `BytesN<N>::from_array`.
//!
//! # Byte order
//!
//! - **G1/G2 points**: uncompressed arkworks canonical form
//!   (96 bytes = 192 hex chars, 192 bytes = 384 hex chars).
//! - **Scalars**: big-endian, 32 bytes = 64 hex chars, no prefix, to
//!   match Soroban's `Fr::from_bytes`.

use serde::{Deserialize, Serialize};
use zko_types::{G1Point, G2Point, Scalar};

use crate::error::VerifierError;
use crate::keys::{Proof, VerificationKey};

/// Serialized verification key (hex strings)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationKeyHex {
    pub alpha_g1: String,
    pub beta_g2: String,
    pub gamma_g2: String,
    pub delta_g2: String,
    /// ic\[0\] = constant term, ic\[1..\] = public input coefficients
    pub ic: Vec<String>,
}

/// Serialized Groth16 proof (hex strings)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofHex {
    pub a: String,
    pub b: String,
    pub c: String,
}

impl From<&VerificationKey> for VerificationKeyHex {
    fn from(vk: &VerificationKey) -> Self {
        Self {
            alpha_g1: vk.alpha_g1().to_hex(),
            beta_g2: vk.beta_g2().to_hex(),
            gamma_g2: vk.gamma_g2().to_hex(),
            delta_g2: vk.delta_g2().to_hex(),
            ic: vk.ic().iter().map(G1Point::to_hex).collect(),
        }
    }
}

impl TryFrom<&VerificationKeyHex> for VerificationKey {
    type Error = VerifierError;

    fn try_from(svk: &VerificationKeyHex) -> Result<Self, Self::Error> {
        let ic = svk
            .ic
            .iter()
            .map(|h| G1Point::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        VerificationKey::new(
            G1Point::from_hex(&svk.alpha_g1)?,
            G2Point::from_hex(&svk.beta_g2)?,
            G2Point::from_hex(&svk.gamma_g2)?,
            G2Point::from_hex(&svk.delta_g2)?,
            ic,
        )
    }
}

impl From<&Proof> for ProofHex {
    fn from(proof: &Proof) -> Self {
        Self {
            a: proof.a.to_hex(),
            b: proof.b.to_hex(),
            c: proof.c.to_hex(),
        }
    }
}

impl TryFrom<&ProofHex> for Proof {
    type Error = VerifierError;

    fn try_from(sp: &ProofHex) -> Result<Self, Self::Error> {
        Ok(Self {
            a: G1Point::from_hex(&sp.a)?,
            b: G2Point::from_hex(&sp.b)?,
            c: G1Point::from_hex(&sp.c)?,
        })
    }
}

/// Scalar as 64 big-endian hex chars, no prefix
pub fn scalar_to_hex(scalar: &Scalar) -> String {
    hex_without_prefix(&scalar.to_hex())
}

pub fn scalars_to_hex(scalars: &[Scalar]) -> Vec<String> {
    scalars.iter().map(scalar_to_hex).collect()
}

fn hex_without_prefix(s: &str) -> String {
    s.strip_prefix("0x").unwrap_or(s).to_string()
}
