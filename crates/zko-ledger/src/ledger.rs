// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! The order registry.
//!
//! Mutating operations take `&mut self` and either commit completely
//! (state change plus journal entry) or return an error with nothing
//! applied. The host serializes transactions; readers borrow `&self` and
//! therefore only ever see committed state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use zko_verifier::{VerificationKey, VerificationKeyStore};

use crate::error::{LedgerError, LedgerResult};
use crate::events::{LedgerEvent, Receipt};
use crate::order::{Order, OrderRequest, Principal};
use crate::status::OrderStatus;

#[derive(Debug)]
pub struct OrderLedger {
    next_id: u64,
    orders: BTreeMap<u64, Order>,
    journal: Vec<LedgerEvent>,
    pub(crate) keys: VerificationKeyStore,
}

/// Persistable ledger state. The verification key is not part of it; the
/// host reloads the key after [`OrderLedger::restore`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    pub next_id: u64,
    pub orders: Vec<Order>,
    pub journal: Vec<LedgerEvent>,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            orders: BTreeMap::new(),
            journal: Vec::new(),
            keys: VerificationKeyStore::new(),
        }
    }

    pub fn keys(&self) -> &VerificationKeyStore {
        &self.keys
    }

    /// Install the deployment's verification key; allowed once.
    pub fn load_verification_key(&self, vk: VerificationKey) -> LedgerResult<()> {
        let inputs = vk.num_public_inputs();
        self.keys.load(vk)?;
        info!(public_inputs = inputs, "verification key loaded");
        Ok(())
    }

    /// Allocate the next id and store a `Pending` order owned by `caller`.
    pub fn create_order(
        &mut self,
        caller: &Principal,
        request: OrderRequest,
    ) -> LedgerResult<Receipt<u64>> {
        if let Ok(vk) = self.keys.get() {
            if request.public_inputs.len() != vk.num_public_inputs() {
                debug!(
                    expected = vk.num_public_inputs(),
                    got = request.public_inputs.len(),
                    "create_order rejected: input arity"
                );
                return Err(LedgerError::MalformedInput(format!(
                    "expected {} public inputs, got {}",
                    vk.num_public_inputs(),
                    request.public_inputs.len()
                )));
            }
        }

        let id = self.next_id;
        let order = Order::new(id, caller.clone(), request);
        let event = LedgerEvent::placed(&order);
        self.orders.insert(id, order);
        self.next_id += 1;

        info!(order_id = id, customer = %caller, "order placed");
        Ok(self.commit(id, vec![event]))
    }

    /// Record the content-store reference for an order. Write-once.
    pub fn attach_content_pointer(
        &mut self,
        order_id: u64,
        pointer: impl Into<String>,
    ) -> LedgerResult<Receipt<()>> {
        let pointer = pointer.into();
        if pointer.is_empty() {
            return Err(LedgerError::MalformedInput("content pointer is empty".into()));
        }
        let order = self
            .orders
            .get_mut(&order_id)
            .ok_or(LedgerError::NotFound(order_id))?;
        if order.content_pointer.is_some() {
            debug!(order_id, "attach_content_pointer rejected: already set");
            return Err(LedgerError::AlreadySet(order_id));
        }
        info!(order_id, pointer = %pointer, "content pointer attached");
        order.content_pointer = Some(pointer);
        Ok(self.commit((), Vec::new()))
    }

    /// Customer-driven status change.
    pub fn update_status(
        &mut self,
        caller: &Principal,
        order_id: u64,
        new_status: OrderStatus,
    ) -> LedgerResult<Receipt<()>> {
        let order = self
            .orders
            .get_mut(&order_id)
            .ok_or(LedgerError::NotFound(order_id))?;
        if order.customer != *caller {
            debug!(order_id, caller = %caller, "update_status rejected: not the customer");
            return Err(LedgerError::Unauthorized { order_id });
        }
        // Verified is reserved for a successful proof check
        if new_status == OrderStatus::Verified || !order.status.can_transition_to(new_status) {
            debug!(order_id, from = %order.status, to = %new_status, "update_status rejected");
            return Err(LedgerError::InvalidTransition {
                from: order.status,
                to: new_status,
            });
        }

        order.status = new_status;
        info!(order_id, status = %new_status, "order status updated");
        Ok(self.commit(
            (),
            vec![LedgerEvent::OrderStatusUpdated { order_id, new_status }],
        ))
    }

    pub fn get_order(&self, order_id: u64) -> LedgerResult<&Order> {
        self.orders
            .get(&order_id)
            .ok_or(LedgerError::NotFound(order_id))
    }

    pub fn order_count(&self) -> u64 {
        self.next_id - 1
    }

    /// Orders in id order.
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Every event emitted so far, in commit order.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.journal
    }

    pub fn snapshot(&self) -> LedgerState {
        LedgerState {
            next_id: self.next_id,
            orders: self.orders.values().cloned().collect(),
            journal: self.journal.clone(),
        }
    }

    /// Rebuild a ledger from a snapshot, checking the id invariants:
    /// ids are exactly `1..next_id` with no gaps or repeats.
    pub fn restore(state: LedgerState) -> LedgerResult<Self> {
        let mut orders = BTreeMap::new();
        for order in state.orders {
            let id = order.id;
            if orders.insert(id, order).is_some() {
                return Err(LedgerError::MalformedInput(format!(
                    "snapshot repeats order {id}"
                )));
            }
        }
        let expected = state.next_id.checked_sub(1).ok_or_else(|| {
            LedgerError::MalformedInput("snapshot next_id must be at least 1".into())
        })?;
        if orders.len() as u64 != expected || orders.keys().copied().ne(1..state.next_id) {
            return Err(LedgerError::MalformedInput(format!(
                "snapshot orders do not match ids 1..{}",
                state.next_id
            )));
        }
        Ok(Self {
            next_id: state.next_id,
            orders,
            journal: state.journal,
            keys: VerificationKeyStore::new(),
        })
    }

    pub(crate) fn commit<T>(&mut self, value: T, events: Vec<LedgerEvent>) -> Receipt<T> {
        self.journal.extend(events.iter().cloned());
        Receipt { value, events }
    }

    pub(crate) fn order_mut(&mut self, order_id: u64) -> LedgerResult<&mut Order> {
        self.orders
            .get_mut(&order_id)
            .ok_or(LedgerError::NotFound(order_id))
    }
}
