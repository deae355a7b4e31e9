// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Events emitted by committed ledger transactions.

use serde::{Deserialize, Serialize};

use crate::order::Order;
use crate::status::OrderStatus;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum LedgerEvent {
    OrderPlaced {
        order_id: u64,
        product: String,
        quantity: u64,
        total_cost: u64,
        status: OrderStatus,
        customer_name: String,
        content_pointer: Option<String>,
    },
    OrderStatusUpdated {
        order_id: u64,
        new_status: OrderStatus,
    },
    OrderVerified {
        order_id: u64,
        verified: bool,
    },
}

impl LedgerEvent {
    pub(crate) fn placed(order: &Order) -> Self {
        LedgerEvent::OrderPlaced {
            order_id: order.id,
            product: order.product.clone(),
            quantity: order.quantity,
            total_cost: order.total_cost,
            status: order.status,
            customer_name: order.customer_name.clone(),
            content_pointer: order.content_pointer.clone(),
        }
    }

    pub fn order_id(&self) -> u64 {
        match self {
            LedgerEvent::OrderPlaced { order_id, .. }
            | LedgerEvent::OrderStatusUpdated { order_id, .. }
            | LedgerEvent::OrderVerified { order_id, .. } => *order_id,
        }
    }
}

/// Result of a committed transaction together with exactly the events it
/// emitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt<T> {
    pub value: T,
    pub events: Vec<LedgerEvent>,
}
