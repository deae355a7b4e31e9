// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Contract tests: init, create, attach, status lifecycle, verify

use soroban_sdk::crypto::bls12_381::{G1Affine, G2Affine};
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::{vec, Address, BytesN, Env, IntoVal, String, Val, Vec};
use zko_contract::{
    LedgerError, OrderPlaced, OrderStatus, OrderStatusUpdated, OrderVerified, Proof,
    VerificationKey, ZkoLedger, ZkoLedgerClient,
};
use zko_verifier::{scalars_to_hex, ProofHex, VerificationKeyHex};

type StdString = std::string::String;

// ── Hex helpers ──

fn hex_to_g1(env: &Env, h: &str) -> G1Affine {
    let bytes: [u8; 96] = hex::decode(h).unwrap().try_into().unwrap();
    G1Affine::from_bytes(BytesN::from_array(env, &bytes))
}

fn hex_to_g2(env: &Env, h: &str) -> G2Affine {
    let bytes: [u8; 192] = hex::decode(h).unwrap().try_into().unwrap();
    G2Affine::from_bytes(BytesN::from_array(env, &bytes))
}

fn hex_to_fr(env: &Env, h: &str) -> BytesN<32> {
    let bytes: [u8; 32] = hex::decode(h).unwrap().try_into().unwrap();
    BytesN::from_array(env, &bytes)
}

fn build_soroban_vk(env: &Env, svk: &VerificationKeyHex) -> VerificationKey {
    let mut ic = Vec::new(env);
    for ic_hex in &svk.ic {
        ic.push_back(hex_to_g1(env, ic_hex));
    }
    VerificationKey {
        alpha_g1: hex_to_g1(env, &svk.alpha_g1),
        beta_g2: hex_to_g2(env, &svk.beta_g2),
        gamma_g2: hex_to_g2(env, &svk.gamma_g2),
        delta_g2: hex_to_g2(env, &svk.delta_g2),
        ic,
    }
}

fn build_soroban_proof(env: &Env, sp: &ProofHex) -> Proof {
    Proof {
        a: hex_to_g1(env, &sp.a),
        b: hex_to_g2(env, &sp.b),
        c: hex_to_g1(env, &sp.c),
    }
}

fn build_inputs(env: &Env, inputs: &[StdString]) -> Vec<BytesN<32>> {
    let mut out = Vec::new(env);
    for h in inputs {
        out.push_back(hex_to_fr(env, h));
    }
    out
}

// ── Test scenario: quadratic circuit, x = 4, inputs [1, 1, 1, 21] ──

use ark_bls12_381::Fr as ArkFr;
use ark_std::rand::{rngs::StdRng, SeedableRng};

fn test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

struct TestScenario {
    svk: VerificationKeyHex,
    proof: ProofHex,
    public_inputs: std::vec::Vec<StdString>,
}

fn setup_and_prove() -> TestScenario {
    let mut rng = test_rng();
    let one = ArkFr::from(1u64);
    let (pk, vk) = zko_circuit::setup(&mut rng).unwrap();
    let (proof, pi) = zko_circuit::prove(&pk, one, one, one, ArkFr::from(4u64), &mut rng).unwrap();
    assert!(zko_circuit::verify_offchain(&vk, &proof, &pi));

    let vk = zko_verifier::VerificationKey::try_from(&vk).unwrap();
    let proof = zko_verifier::Proof::try_from(&proof).unwrap();
    TestScenario {
        svk: VerificationKeyHex::from(&vk),
        proof: ProofHex::from(&proof),
        public_inputs: scalars_to_hex(&pi.to_scalars()),
    }
}

struct Deployed<'a> {
    env: Env,
    contract_id: Address,
    client: ZkoLedgerClient<'a>,
    customer: Address,
}

fn deploy(scenario: &TestScenario, init: bool) -> Deployed<'static> {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(ZkoLedger, ());
    let client = ZkoLedgerClient::new(&env, &contract_id);
    if init {
        client.init(&build_soroban_vk(&env, &scenario.svk));
    }
    let customer = Address::generate(&env);
    Deployed { env, contract_id, client, customer }
}

/// The single event the last invocation should have published
fn expected_event(
    d: &Deployed,
    topic: &'static str,
    data: impl IntoVal<Env, Val>,
) -> Vec<(Address, Vec<Val>, Val)> {
    vec![
        &d.env,
        (d.contract_id.clone(), (topic,).into_val(&d.env), data.into_val(&d.env)),
    ]
}

fn place(d: &Deployed, inputs: &Vec<BytesN<32>>) -> u64 {
    d.client.create_order(
        &d.customer,
        &String::from_str(&d.env, "Test Product"),
        &1,
        &100,
        &String::from_str(&d.env, "John Doe"),
        inputs,
    )
}

// ── Tests ──

#[test]
fn place_verify_complete() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, true);
    let inputs = build_inputs(&d.env, &scenario.public_inputs);

    assert_eq!(place(&d, &inputs), 1);
    let placed = OrderPlaced {
        order_id: 1,
        product: String::from_str(&d.env, "Test Product"),
        quantity: 1,
        total_cost: 100,
        status: OrderStatus::Pending,
        customer_name: String::from_str(&d.env, "John Doe"),
        content_pointer: String::from_str(&d.env, ""),
    };
    assert_eq!(d.env.events().all(), expected_event(&d, "placed", placed));
    assert_eq!(d.client.order_count(), 1);

    let proof = build_soroban_proof(&d.env, &scenario.proof);
    assert!(d.client.verify_order(&1, &proof));
    let verified = OrderVerified { order_id: 1, verified: true };
    assert_eq!(d.env.events().all(), expected_event(&d, "verified", verified));
    assert_eq!(d.client.get_order(&1).status, OrderStatus::Verified);

    d.client.update_status(&d.customer, &1, &OrderStatus::Completed);
    let updated = OrderStatusUpdated { order_id: 1, new_status: OrderStatus::Completed };
    assert_eq!(d.env.events().all(), expected_event(&d, "status", updated));
    assert_eq!(d.client.get_order(&1).status, OrderStatus::Completed);

    assert_eq!(
        d.client.try_update_status(&d.customer, &1, &OrderStatus::Pending),
        Err(Ok(LedgerError::InvalidTransition))
    );
}

#[test]
fn ids_are_sequential() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, true);
    let inputs = build_inputs(&d.env, &scenario.public_inputs);
    for expected in 1..=3u64 {
        assert_eq!(place(&d, &inputs), expected);
    }
    assert_eq!(d.client.order_count(), 3);
}

#[test]
fn reverify_keeps_status() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, true);
    let inputs = build_inputs(&d.env, &scenario.public_inputs);
    place(&d, &inputs);

    let proof = build_soroban_proof(&d.env, &scenario.proof);
    assert!(d.client.verify_order(&1, &proof));
    assert!(d.client.verify_order(&1, &proof));
    assert_eq!(d.client.get_order(&1).status, OrderStatus::Verified);
}

#[test]
fn verify_wrong_input() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, true);
    // proof was made for [1, 1, 1, 21]
    let zero = BytesN::from_array(&d.env, &[0u8; 32]);
    let wrong = Vec::from_array(&d.env, [zero.clone(), zero.clone(), zero.clone(), zero]);
    place(&d, &wrong);

    let proof = build_soroban_proof(&d.env, &scenario.proof);
    assert!(!d.client.verify_order(&1, &proof));
    let failed = OrderVerified { order_id: 1, verified: false };
    assert_eq!(d.env.events().all(), expected_event(&d, "verified", failed));
    assert_eq!(d.client.get_order(&1).status, OrderStatus::Pending);
}

#[test]
fn verify_missing_order() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, true);
    let proof = build_soroban_proof(&d.env, &scenario.proof);
    assert_eq!(
        d.client.try_verify_order(&999, &proof),
        Err(Ok(LedgerError::NotFound))
    );
}

#[test]
fn verify_before_init() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, false);
    let inputs = build_inputs(&d.env, &scenario.public_inputs);
    place(&d, &inputs);

    let proof = build_soroban_proof(&d.env, &scenario.proof);
    assert_eq!(
        d.client.try_verify_order(&1, &proof),
        Err(Ok(LedgerError::Uninitialized))
    );
    assert_eq!(d.client.try_get_vk().err(), Some(Ok(LedgerError::Uninitialized)));
}

#[test]
fn double_init_rejected() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, true);
    let vk = build_soroban_vk(&d.env, &scenario.svk);
    assert_eq!(d.client.try_init(&vk), Err(Ok(LedgerError::AlreadyInitialized)));
}

#[test]
fn wrong_arity_rejected() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, true);
    let short = build_inputs(&d.env, &scenario.public_inputs[..3]);
    let result = d.client.try_create_order(
        &d.customer,
        &String::from_str(&d.env, "Test Product"),
        &1,
        &100,
        &String::from_str(&d.env, "John Doe"),
        &short,
    );
    assert_eq!(result, Err(Ok(LedgerError::MalformedInput)));
    assert_eq!(d.client.order_count(), 0);
}

#[test]
fn non_canonical_input_rejected() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, true);
    let mut inputs = build_inputs(&d.env, &scenario.public_inputs);
    // r itself, which Fr::from_bytes would reduce to zero
    let modulus = hex_to_fr(
        &d.env,
        "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
    );
    inputs.set(3, modulus);
    let result = d.client.try_create_order(
        &d.customer,
        &String::from_str(&d.env, "Test Product"),
        &1,
        &100,
        &String::from_str(&d.env, "John Doe"),
        &inputs,
    );
    assert_eq!(result, Err(Ok(LedgerError::MalformedInput)));

    inputs.set(3, BytesN::from_array(&d.env, &[0xff; 32]));
    assert_eq!(
        d.client.try_create_order(
            &d.customer,
            &String::from_str(&d.env, "Test Product"),
            &1,
            &100,
            &String::from_str(&d.env, "John Doe"),
            &inputs,
        ),
        Err(Ok(LedgerError::MalformedInput))
    );
    assert_eq!(d.client.order_count(), 0);
}

#[test]
fn only_owner_updates_status() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, true);
    let inputs = build_inputs(&d.env, &scenario.public_inputs);
    place(&d, &inputs);

    let stranger = Address::generate(&d.env);
    assert_eq!(
        d.client.try_update_status(&stranger, &1, &OrderStatus::Rejected),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(d.env.events().all(), Vec::<(Address, Vec<Val>, Val)>::new(&d.env));
    assert_eq!(d.client.get_order(&1).status, OrderStatus::Pending);
    assert_eq!(
        d.client.try_update_status(&d.customer, &1, &OrderStatus::Verified),
        Err(Ok(LedgerError::InvalidTransition))
    );
    assert_eq!(
        d.client.try_update_status(&d.customer, &7, &OrderStatus::Rejected),
        Err(Ok(LedgerError::NotFound))
    );
}

#[test]
fn content_pointer_set_once() {
    let scenario = setup_and_prove();
    let d = deploy(&scenario, true);
    let inputs = build_inputs(&d.env, &scenario.public_inputs);
    place(&d, &inputs);

    let cid = String::from_str(&d.env, "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG");
    assert_eq!(
        d.client.try_attach_content_pointer(&1, &String::from_str(&d.env, "")),
        Err(Ok(LedgerError::MalformedInput))
    );
    d.client.attach_content_pointer(&1, &cid);
    assert_eq!(d.client.get_order(&1).content_pointer, cid);
    assert_eq!(
        d.client.try_attach_content_pointer(&1, &cid),
        Err(Ok(LedgerError::AlreadySet))
    );
    assert_eq!(
        d.client.try_attach_content_pointer(&2, &cid),
        Err(Ok(LedgerError::NotFound))
    );
}
