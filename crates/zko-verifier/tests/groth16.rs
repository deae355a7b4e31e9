// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Native verifier against proofs from the reference prover

use ark_bls12_381::Fr;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use zko_types::Scalar;
use zko_verifier::{
    verify_groth16, Proof, ProofHex, VerificationKey, VerificationKeyHex, VerifierError,
};

fn test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

struct TestScenario {
    vk: VerificationKey,
    proof: Proof,
    inputs: Vec<Scalar>,
}

/// x = 4 solves x² + x + 1 = 21, i.e. public inputs [1, 1, 1, 21]
fn setup_and_prove() -> TestScenario {
    let mut rng = test_rng();
    let one = Fr::from(1u64);
    let (pk, vk) = zko_circuit::setup(&mut rng).unwrap();
    let (proof, pi) = zko_circuit::prove(&pk, one, one, one, Fr::from(4u64), &mut rng).unwrap();
    assert!(zko_circuit::verify_offchain(&vk, &proof, &pi));

    TestScenario {
        vk: VerificationKey::try_from(&vk).unwrap(),
        proof: Proof::try_from(&proof).unwrap(),
        inputs: pi.to_scalars(),
    }
}

#[test]
fn honest_proof_verifies() {
    let s = setup_and_prove();
    assert_eq!(s.vk.num_public_inputs(), 4);
    assert_eq!(s.inputs[3], Scalar::from_u64(21));
    assert_eq!(verify_groth16(&s.vk, &s.proof, &s.inputs), Ok(true));
}

#[test]
fn perturbed_input_rejected() {
    let s = setup_and_prove();
    for i in 0..s.inputs.len() {
        let mut inputs = s.inputs.clone();
        inputs[i] = inputs[i].add(&Scalar::one());
        assert_eq!(verify_groth16(&s.vk, &s.proof, &inputs), Ok(false), "input {i}");
    }
}

#[test]
fn swapped_proof_elements_rejected() {
    let s = setup_and_prove();
    let forged = Proof { a: s.proof.c, b: s.proof.b, c: s.proof.a };
    assert_eq!(verify_groth16(&s.vk, &forged, &s.inputs), Ok(false));

    let negated = Proof { a: s.proof.a.negate(), ..s.proof };
    assert_eq!(verify_groth16(&s.vk, &negated, &s.inputs), Ok(false));
}

#[test]
fn verification_is_pure() {
    let s = setup_and_prove();
    let first = verify_groth16(&s.vk, &s.proof, &s.inputs);
    let second = verify_groth16(&s.vk, &s.proof, &s.inputs);
    assert_eq!(first, second);
    assert_eq!(first, Ok(true));
}

#[test]
fn wrong_arity_is_malformed_not_false() {
    let s = setup_and_prove();
    let short = &s.inputs[..3];
    assert!(matches!(
        verify_groth16(&s.vk, &s.proof, short),
        Err(VerifierError::MalformedInput(_))
    ));
}

#[test]
fn hex_transport_preserves_verification() {
    let s = setup_and_prove();
    let svk = VerificationKeyHex::from(&s.vk);
    let sp = ProofHex::from(&s.proof);
    let vk = VerificationKey::try_from(&svk).unwrap();
    let proof = Proof::try_from(&sp).unwrap();
    assert_eq!(verify_groth16(&vk, &proof, &s.inputs), Ok(true));
}
