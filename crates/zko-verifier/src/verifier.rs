// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier using the native BLS12-381 pairing engine

use tracing::debug;
use zko_types::{G1Point, Scalar};

use crate::error::{VerifierError, VerifierResult};
use crate::keys::{Proof, VerificationKey};
use crate::pairing::multi_pairing_check;

/// Verify a Groth16 proof using BLS12-381 pairing check
///
/// Algorithm:
/// 1. Compute L = IC[0] + Σ public_inputs[i] · IC[i+1]
/// 2. Check: e(-A,B) * e(alpha,beta) * e(L,gamma) * e(C,delta) == 1
///
/// A wrong-arity input vector is a caller error (`MalformedInput`); a
/// well-formed proof that does not check out is `Ok(false)`. Pure: no
/// state is read or written besides the arguments.
pub fn verify_groth16(
    vk: &VerificationKey,
    proof: &Proof,
    public_inputs: &[Scalar],
) -> VerifierResult<bool> {
    let l = prepare_inputs(vk, public_inputs)?;

    let pairs = [
        (proof.a.negate(), proof.b),
        (*vk.alpha_g1(), *vk.beta_g2()),
        (l, *vk.gamma_g2()),
        (proof.c, *vk.delta_g2()),
    ];
    let verified = multi_pairing_check(&pairs);
    debug!(inputs = public_inputs.len(), verified, "groth16 pairing check");
    Ok(verified)
}

/// L = IC[0] + Σ public_inputs[i] · IC[i+1]
pub fn prepare_inputs(vk: &VerificationKey, public_inputs: &[Scalar]) -> VerifierResult<G1Point> {
    let ic = vk.ic();
    if public_inputs.len() + 1 != ic.len() {
        return Err(VerifierError::MalformedInput(format!(
            "expected {} public inputs, got {}",
            ic.len() - 1,
            public_inputs.len()
        )));
    }
    Ok(ic[1..]
        .iter()
        .zip(public_inputs)
        .fold(ic[0], |acc, (point, input)| acc.add(&point.scalar_mul(input))))
}
