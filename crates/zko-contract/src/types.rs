// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Contract-side types: verification key, proof, orders and events

use soroban_sdk::crypto::bls12_381::{Fr, G1Affine, G2Affine};
use soroban_sdk::{contracttype, Address, String, Vec};

/// Groth16 verification key for BLS12-381
///
/// IC is a unified vector: ic[0] is the constant term, ic[1..] are coefficients
/// for public inputs.
#[contracttype]
#[derive(Clone, Debug)]
pub struct VerificationKey {
    pub alpha_g1: G1Affine,
    pub beta_g2: G2Affine,
    pub gamma_g2: G2Affine,
    pub delta_g2: G2Affine,
    pub ic: Vec<G1Affine>,
}

/// Groth16 proof for BLS12-381
#[contracttype]
#[derive(Clone, Debug)]
pub struct Proof {
    pub a: G1Affine,
    pub b: G2Affine,
    pub c: G1Affine,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum OrderStatus {
    Pending = 0,
    Verified = 1,
    Completed = 2,
    Rejected = 3,
}

impl OrderStatus {
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Verified) | (Pending, Rejected) | (Verified, Completed)
        )
    }
}

/// Stored order record. An empty `content_pointer` means none is attached.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Order {
    pub id: u64,
    pub product: String,
    pub quantity: u64,
    pub total_cost: u64,
    pub status: OrderStatus,
    pub customer_name: String,
    pub customer: Address,
    pub public_inputs: Vec<Fr>,
    pub content_pointer: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OrderPlaced {
    pub order_id: u64,
    pub product: String,
    pub quantity: u64,
    pub total_cost: u64,
    pub status: OrderStatus,
    pub customer_name: String,
    pub content_pointer: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OrderStatusUpdated {
    pub order_id: u64,
    pub new_status: OrderStatus,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OrderVerified {
    pub order_id: u64,
    pub verified: bool,
}
