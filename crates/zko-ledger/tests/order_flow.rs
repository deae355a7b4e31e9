// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! End-to-end: off-chain prove → ledger verify → status lifecycle

use ark_bls12_381::Fr;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use zko_ledger::{
    LedgerError, LedgerEvent, OrderLedger, OrderRequest, OrderStatus, Principal,
};
use zko_types::Scalar;
use zko_verifier::{Proof, VerificationKey, VerifierError};

fn test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

struct TestScenario {
    vk: VerificationKey,
    proof: Proof,
    inputs: Vec<Scalar>,
}

fn setup_and_prove() -> TestScenario {
    let mut rng = test_rng();
    let one = Fr::from(1u64);
    let (pk, vk) = zko_circuit::setup(&mut rng).unwrap();
    let (proof, pi) = zko_circuit::prove(&pk, one, one, one, Fr::from(4u64), &mut rng).unwrap();
    TestScenario {
        vk: VerificationKey::try_from(&vk).unwrap(),
        proof: Proof::try_from(&proof).unwrap(),
        inputs: pi.to_scalars(),
    }
}

fn request(inputs: Vec<Scalar>) -> OrderRequest {
    OrderRequest {
        product: "Test Product".into(),
        quantity: 1,
        total_cost: 100,
        customer_name: "John Doe".into(),
        public_inputs: inputs,
    }
}

fn ledger_for(s: &TestScenario) -> OrderLedger {
    let ledger = OrderLedger::new();
    ledger.load_verification_key(s.vk.clone()).unwrap();
    ledger
}

#[test]
fn place_verify_complete() {
    let s = setup_and_prove();
    let mut ledger = ledger_for(&s);
    let customer = Principal::new("customer");

    assert_eq!(s.inputs, [1, 1, 1, 21].map(Scalar::from_u64).to_vec());
    let id = ledger.create_order(&customer, request(s.inputs.clone())).unwrap().value;
    assert_eq!(id, 1);
    assert_eq!(ledger.order_count(), 1);

    let receipt = ledger.verify_order(&customer, 1, &s.proof).unwrap();
    assert!(receipt.value);
    assert_eq!(receipt.events, vec![LedgerEvent::OrderVerified { order_id: 1, verified: true }]);
    assert_eq!(ledger.get_order(1).unwrap().status, OrderStatus::Verified);

    let receipt = ledger.update_status(&customer, 1, OrderStatus::Completed).unwrap();
    assert_eq!(
        receipt.events,
        vec![LedgerEvent::OrderStatusUpdated { order_id: 1, new_status: OrderStatus::Completed }]
    );
    assert_eq!(ledger.get_order(1).unwrap().status, OrderStatus::Completed);

    assert_eq!(
        ledger.update_status(&customer, 1, OrderStatus::Pending),
        Err(LedgerError::InvalidTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::Pending
        })
    );
    assert_eq!(ledger.get_order(1).unwrap().status, OrderStatus::Completed);
}

#[test]
fn any_caller_may_verify() {
    let s = setup_and_prove();
    let mut ledger = ledger_for(&s);
    ledger.create_order(&Principal::new("customer"), request(s.inputs.clone())).unwrap();

    let stranger = Principal::new("stranger");
    assert!(ledger.verify_order(&stranger, 1, &s.proof).unwrap().value);
    assert_eq!(ledger.get_order(1).unwrap().status, OrderStatus::Verified);
}

#[test]
fn reverify_is_idempotent() {
    let s = setup_and_prove();
    let mut ledger = ledger_for(&s);
    let customer = Principal::new("customer");
    ledger.create_order(&customer, request(s.inputs.clone())).unwrap();

    assert!(ledger.verify_order(&customer, 1, &s.proof).unwrap().value);
    let again = ledger.verify_order(&customer, 1, &s.proof).unwrap();
    assert!(again.value);
    // only the verification event, no status transition
    assert_eq!(again.events, vec![LedgerEvent::OrderVerified { order_id: 1, verified: true }]);
    assert_eq!(ledger.get_order(1).unwrap().status, OrderStatus::Verified);
    assert!(!ledger
        .events()
        .iter()
        .any(|e| matches!(e, LedgerEvent::OrderStatusUpdated { .. })));
}

#[test]
fn failed_proof_recorded_without_transition() {
    let s = setup_and_prove();
    let mut ledger = ledger_for(&s);
    let customer = Principal::new("customer");

    // proof was made for out = 21
    let mut inputs = s.inputs.clone();
    inputs[3] = Scalar::from_u64(22);
    ledger.create_order(&customer, request(inputs)).unwrap();

    let receipt = ledger.verify_order(&customer, 1, &s.proof).unwrap();
    assert!(!receipt.value);
    assert_eq!(receipt.events, vec![LedgerEvent::OrderVerified { order_id: 1, verified: false }]);
    assert_eq!(ledger.get_order(1).unwrap().status, OrderStatus::Pending);

    // the customer can still reject it
    ledger.update_status(&customer, 1, OrderStatus::Rejected).unwrap();
    let after = ledger.verify_order(&customer, 1, &s.proof).unwrap();
    assert!(!after.value);
    assert_eq!(ledger.get_order(1).unwrap().status, OrderStatus::Rejected);
}

#[test]
fn valid_proof_does_not_reopen_rejected_order() {
    let s = setup_and_prove();
    let mut ledger = ledger_for(&s);
    let customer = Principal::new("customer");
    ledger.create_order(&customer, request(s.inputs.clone())).unwrap();
    ledger.update_status(&customer, 1, OrderStatus::Rejected).unwrap();

    assert!(ledger.verify_order(&customer, 1, &s.proof).unwrap().value);
    assert_eq!(ledger.get_order(1).unwrap().status, OrderStatus::Rejected);
}

#[test]
fn verify_missing_order_is_not_found() {
    let s = setup_and_prove();
    let mut ledger = ledger_for(&s);
    let customer = Principal::new("customer");
    ledger.create_order(&customer, request(s.inputs.clone())).unwrap();
    let before = ledger.events().len();

    assert_eq!(
        ledger.verify_order(&customer, 999, &s.proof).unwrap_err(),
        LedgerError::NotFound(999)
    );
    assert_eq!(ledger.events().len(), before);
}

#[test]
fn verify_without_key_is_uninitialized() {
    let s = setup_and_prove();
    let mut ledger = OrderLedger::new();
    let customer = Principal::new("customer");
    ledger.create_order(&customer, request(s.inputs.clone())).unwrap();

    assert_eq!(
        ledger.verify_order(&customer, 1, &s.proof).unwrap_err(),
        LedgerError::Keys(VerifierError::Uninitialized)
    );
    assert_eq!(ledger.get_order(1).unwrap().status, OrderStatus::Pending);
}

#[test]
fn key_loads_only_once() {
    let s = setup_and_prove();
    let ledger = ledger_for(&s);
    assert_eq!(
        ledger.load_verification_key(s.vk.clone()),
        Err(LedgerError::Keys(VerifierError::AlreadyInitialized))
    );
}

#[test]
fn wrong_arity_rejected_at_creation() {
    let s = setup_and_prove();
    let mut ledger = ledger_for(&s);
    let customer = Principal::new("customer");

    let err = ledger
        .create_order(&customer, request(s.inputs[..3].to_vec()))
        .unwrap_err();
    assert!(matches!(err, LedgerError::MalformedInput(_)));
    assert_eq!(ledger.order_count(), 0);
    assert!(ledger.events().is_empty());
}

#[test]
fn wrong_arity_order_fails_verification_as_malformed() {
    let s = setup_and_prove();
    // created before the key is loaded, so arity is not checked yet
    let mut ledger = OrderLedger::new();
    let customer = Principal::new("customer");
    ledger.create_order(&customer, request(s.inputs[..2].to_vec())).unwrap();
    ledger.load_verification_key(s.vk.clone()).unwrap();

    let err = ledger.verify_order(&customer, 1, &s.proof).unwrap_err();
    assert!(matches!(err, LedgerError::MalformedInput(_)));
    assert_eq!(ledger.events().len(), 1);
    assert_eq!(ledger.get_order(1).unwrap().status, OrderStatus::Pending);
}
