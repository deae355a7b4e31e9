// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! zko-circuit: reference proving side for order public inputs.
//!
//! The ledger only checks proofs. This crate plays the external proving
//! system: trusted setup, proof generation and an off-chain sanity check,
//! all for [`QuadraticCircuit`].

pub mod quadratic;

use ark_bls12_381::{Bls12_381, Fr};
use ark_groth16::{Groth16, PreparedVerifyingKey, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystem, SynthesisError};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};
use zko_types::Scalar;

pub use quadratic::QuadraticCircuit;

/// Number of public inputs the circuit exposes.
pub const NUM_PUBLIC_INPUTS: usize = 4;

/// Public inputs for a quadratic-root proof
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicInputs {
    pub a: Fr,
    pub b: Fr,
    pub c: Fr,
    pub out: Fr,
}

impl PublicInputs {
    pub fn to_vec(&self) -> Vec<Fr> {
        vec![self.a, self.b, self.c, self.out]
    }

    pub fn to_scalars(&self) -> Vec<Scalar> {
        self.to_vec().into_iter().map(Scalar::from).collect()
    }

    /// Interpret a ledger input vector `[a, b, c, out]`.
    pub fn from_scalars(inputs: &[Scalar]) -> Option<Self> {
        match inputs {
            [a, b, c, out] => Some(Self {
                a: a.into_inner(),
                b: b.into_inner(),
                c: c.into_inner(),
                out: out.into_inner(),
            }),
            _ => None,
        }
    }
}

/// Run Groth16 trusted setup for the quadratic circuit
pub fn setup<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(ProvingKey<Bls12_381>, VerifyingKey<Bls12_381>), SynthesisError> {
    Groth16::<Bls12_381>::circuit_specific_setup(QuadraticCircuit::empty(), rng)
}

/// Generate a Groth16 proof that `root` solves `a·x² + b·x + c`
pub fn prove<R: RngCore + CryptoRng>(
    pk: &ProvingKey<Bls12_381>,
    a: Fr,
    b: Fr,
    c: Fr,
    root: Fr,
    rng: &mut R,
) -> Result<(ark_groth16::Proof<Bls12_381>, PublicInputs), SynthesisError> {
    let circuit = QuadraticCircuit {
        a: Some(a),
        b: Some(b),
        c: Some(c),
        root: Some(root),
    };
    let out = circuit.output().ok_or(SynthesisError::AssignmentMissing)?;
    let proof = Groth16::<Bls12_381>::prove(pk, circuit, rng)?;
    Ok((proof, PublicInputs { a, b, c, out }))
}

/// Verify a proof off-chain with the arkworks verifier
pub fn verify_offchain(
    vk: &VerifyingKey<Bls12_381>,
    proof: &ark_groth16::Proof<Bls12_381>,
    public_inputs: &PublicInputs,
) -> bool {
    let pvk = PreparedVerifyingKey::from(vk.clone());
    Groth16::<Bls12_381>::verify_with_processed_vk(&pvk, &public_inputs.to_vec(), proof)
        .unwrap_or(false)
}

/// Count constraints in the quadratic circuit
pub fn constraint_count() -> Result<usize, SynthesisError> {
    let cs = ConstraintSystem::<Fr>::new_ref();
    cs.set_optimization_goal(ark_relations::r1cs::OptimizationGoal::Constraints);
    cs.set_mode(ark_relations::r1cs::SynthesisMode::Setup);
    QuadraticCircuit::empty().generate_constraints(cs.clone())?;
    Ok(cs.num_constraints())
}
