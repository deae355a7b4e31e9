// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier using Soroban BLS12-381 host functions

use crate::error::LedgerError;
use crate::types::{Proof, VerificationKey};
use soroban_sdk::crypto::bls12_381::{Fr, G1Affine};
use soroban_sdk::{BytesN, Env, Vec};

/// Verify a Groth16 proof using BLS12-381 pairing check
///
/// Algorithm:
/// 1. Compute L = IC[0] + MSM(IC[1..], public_inputs)
/// 2. Check: e(-A,B) * e(alpha,beta) * e(L,gamma) * e(C,delta) == 1
///
/// Same equation as the native verifier, so both accept exactly the same
/// proofs. Off-curve points never get here: the host rejects them when the
/// arguments are decoded.
pub fn verify_groth16(
    env: &Env,
    vk: &VerificationKey,
    proof: &Proof,
    public_inputs: &Vec<Fr>,
) -> Result<bool, LedgerError> {
    if public_inputs.len() + 1 != vk.ic.len() {
        return Err(LedgerError::MalformedInput);
    }
    let bls = env.crypto().bls12_381();

    let ic_0: G1Affine = vk.ic.get(0).ok_or(LedgerError::MalformedInput)?;
    let l = if public_inputs.is_empty() {
        ic_0
    } else {
        let msm = bls.g1_msm(vk.ic.slice(1..), public_inputs.clone());
        bls.g1_add(&ic_0, &msm)
    };

    // -A via scalar mul by -1
    let neg_one = bls.fr_sub(&fr_from_u64(env, 0), &fr_from_u64(env, 1));
    let neg_a = bls.g1_mul(&proof.a, &neg_one);

    let g1_points: Vec<G1Affine> =
        Vec::from_array(env, [neg_a, vk.alpha_g1.clone(), l, proof.c.clone()]);
    let g2_points = Vec::from_array(
        env,
        [
            proof.b.clone(),
            vk.beta_g2.clone(),
            vk.gamma_g2.clone(),
            vk.delta_g2.clone(),
        ],
    );

    Ok(bls.pairing_check(g1_points, g2_points))
}

/// BLS12-381 scalar modulus r, big-endian
const FR_MODULUS: [u8; 32] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

/// Decode big-endian scalars. `Fr::from_bytes` reduces mod r, so encodings
/// `>= r` are rejected here first.
pub fn canonical_scalars(
    env: &Env,
    encoded: &Vec<BytesN<32>>,
) -> Result<Vec<Fr>, LedgerError> {
    let mut scalars = Vec::new(env);
    for bytes in encoded.iter() {
        if bytes.to_array() >= FR_MODULUS {
            return Err(LedgerError::MalformedInput);
        }
        scalars.push_back(Fr::from_bytes(bytes));
    }
    Ok(scalars)
}

fn fr_from_u64(env: &Env, value: u64) -> Fr {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&value.to_be_bytes());
    Fr::from_bytes(BytesN::from_array(env, &bytes))
}
