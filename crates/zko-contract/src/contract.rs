// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! ZKO ledger contract: orders gated by a Groth16 verification key

use crate::error::LedgerError;
use crate::types::{
    Order, OrderPlaced, OrderStatus, OrderStatusUpdated, OrderVerified, Proof, VerificationKey,
};
use crate::verifier::{canonical_scalars, verify_groth16};
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env, String, Vec};

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Vk,
    NextId,
    Order(u64),
}

const PERSISTENT_TTL: u32 = 535_680; // ~30 days
const PERSISTENT_THRESHOLD: u32 = 267_840; // ~15 days

#[contract]
pub struct ZkoLedger;

#[contractimpl]
impl ZkoLedger {
    /// Store the verification key; callable once
    pub fn init(env: Env, vk: VerificationKey) -> Result<(), LedgerError> {
        if env.storage().instance().has(&DataKey::Vk) {
            return Err(LedgerError::AlreadyInitialized);
        }
        if vk.ic.is_empty() {
            return Err(LedgerError::MalformedInput);
        }
        env.storage().instance().set(&DataKey::Vk, &vk);
        Self::bump_instance(&env);
        Ok(())
    }

    /// Place a new order owned by `caller`, returns its id. Public inputs
    /// are 32-byte big-endian scalars and must be below the field modulus.
    pub fn create_order(
        env: Env,
        caller: Address,
        product: String,
        quantity: u64,
        total_cost: u64,
        customer_name: String,
        public_inputs: Vec<BytesN<32>>,
    ) -> Result<u64, LedgerError> {
        caller.require_auth();
        let public_inputs = canonical_scalars(&env, &public_inputs)?;
        if let Some(vk) = env
            .storage()
            .instance()
            .get::<_, VerificationKey>(&DataKey::Vk)
        {
            if public_inputs.len() + 1 != vk.ic.len() {
                return Err(LedgerError::MalformedInput);
            }
        }

        let id: u64 = env.storage().instance().get(&DataKey::NextId).unwrap_or(1);
        let order = Order {
            id,
            product,
            quantity,
            total_cost,
            status: OrderStatus::Pending,
            customer_name,
            customer: caller,
            public_inputs,
            content_pointer: String::from_str(&env, ""),
        };
        Self::save_order(&env, &order);
        env.storage().instance().set(&DataKey::NextId, &(id + 1));
        Self::bump_instance(&env);

        env.events().publish(
            ("placed",),
            OrderPlaced {
                order_id: id,
                product: order.product,
                quantity: order.quantity,
                total_cost: order.total_cost,
                status: order.status,
                customer_name: order.customer_name,
                content_pointer: order.content_pointer,
            },
        );
        Ok(id)
    }

    /// Attach the off-chain metadata pointer; set once, by the order's owner
    pub fn attach_content_pointer(
        env: Env,
        order_id: u64,
        pointer: String,
    ) -> Result<(), LedgerError> {
        if pointer.len() == 0 {
            return Err(LedgerError::MalformedInput);
        }
        let mut order = Self::load_order(&env, order_id)?;
        order.customer.require_auth();
        if order.content_pointer.len() != 0 {
            return Err(LedgerError::AlreadySet);
        }
        order.content_pointer = pointer;
        Self::save_order(&env, &order);
        Ok(())
    }

    /// Move an order along its lifecycle; only the owner may do this
    pub fn update_status(
        env: Env,
        caller: Address,
        order_id: u64,
        new_status: OrderStatus,
    ) -> Result<(), LedgerError> {
        caller.require_auth();
        let mut order = Self::load_order(&env, order_id)?;
        if caller != order.customer {
            return Err(LedgerError::Unauthorized);
        }
        // Verified is only reachable through verify_order
        if new_status == OrderStatus::Verified || !order.status.can_transition_to(new_status) {
            return Err(LedgerError::InvalidTransition);
        }
        order.status = new_status;
        Self::save_order(&env, &order);
        env.events()
            .publish(("status",), OrderStatusUpdated { order_id, new_status });
        Ok(())
    }

    /// Check `proof` against the order's public inputs and record the outcome
    pub fn verify_order(env: Env, order_id: u64, proof: Proof) -> Result<bool, LedgerError> {
        let mut order = Self::load_order(&env, order_id)?;
        let vk = Self::get_vk(env.clone())?;
        let verified = verify_groth16(&env, &vk, &proof, &order.public_inputs)?;

        if verified && order.status == OrderStatus::Pending {
            order.status = OrderStatus::Verified;
            Self::save_order(&env, &order);
        }
        Self::bump_instance(&env);
        env.events()
            .publish(("verified",), OrderVerified { order_id, verified });
        Ok(verified)
    }

    pub fn get_order(env: Env, order_id: u64) -> Result<Order, LedgerError> {
        Self::load_order(&env, order_id)
    }

    /// Number of orders placed so far
    pub fn order_count(env: Env) -> u64 {
        let next: u64 = env.storage().instance().get(&DataKey::NextId).unwrap_or(1);
        next - 1
    }

    pub fn get_vk(env: Env) -> Result<VerificationKey, LedgerError> {
        env.storage()
            .instance()
            .get(&DataKey::Vk)
            .ok_or(LedgerError::Uninitialized)
    }
}

impl ZkoLedger {
    fn load_order(env: &Env, order_id: u64) -> Result<Order, LedgerError> {
        let key = DataKey::Order(order_id);
        let order = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(LedgerError::NotFound)?;
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_THRESHOLD, PERSISTENT_TTL);
        Ok(order)
    }

    fn save_order(env: &Env, order: &Order) {
        let key = DataKey::Order(order.id);
        env.storage().persistent().set(&key, order);
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_THRESHOLD, PERSISTENT_TTL);
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(PERSISTENT_THRESHOLD, PERSISTENT_TTL);
    }
}
