// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Ledger ↔ verifier binding: checks a proof against an order's stored
//! public inputs and records the outcome.
//!
//! The check itself is pure ([`verify_groth16`]); only the recording step
//! touches ledger state.

use tracing::info;
use zko_verifier::{verify_groth16, Proof};

use crate::error::LedgerResult;
use crate::events::{LedgerEvent, Receipt};
use crate::ledger::OrderLedger;
use crate::order::Principal;
use crate::status::OrderStatus;

impl OrderLedger {
    /// Verify `proof` for order `order_id` and record the result.
    ///
    /// Any caller may ask. A passing proof moves a `Pending` order to
    /// `Verified`; any other status is left alone. `OrderVerified` is
    /// emitted for every completed check, passing or not.
    pub fn verify_order(
        &mut self,
        caller: &Principal,
        order_id: u64,
        proof: &Proof,
    ) -> LedgerResult<Receipt<bool>> {
        let order = self.get_order(order_id)?;
        let vk = self.keys.get()?;
        let verified = verify_groth16(vk, proof, &order.public_inputs)?;
        self.record_verification(caller, order_id, verified)
    }

    fn record_verification(
        &mut self,
        caller: &Principal,
        order_id: u64,
        verified: bool,
    ) -> LedgerResult<Receipt<bool>> {
        let order = self.order_mut(order_id)?;
        if verified && order.status == OrderStatus::Pending {
            order.status = OrderStatus::Verified;
        }
        info!(order_id, caller = %caller, verified, status = %order.status, "order verification recorded");
        Ok(self.commit(
            verified,
            vec![LedgerEvent::OrderVerified { order_id, verified }],
        ))
    }
}
