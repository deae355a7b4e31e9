// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Order records and caller identities.

use core::fmt;

use serde::{Deserialize, Serialize};
use zko_types::Scalar;

use crate::status::OrderStatus;

/// An authenticated caller identity. Opaque beyond equality; the
/// surrounding execution environment vouches for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Caller-supplied fields of a new order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub product: String,
    pub quantity: u64,
    pub total_cost: u64,
    pub customer_name: String,
    pub public_inputs: Vec<Scalar>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub product: String,
    pub quantity: u64,
    pub total_cost: u64,
    pub status: OrderStatus,
    pub customer_name: String,
    /// Only this principal may change `status`.
    pub customer: Principal,
    pub public_inputs: Vec<Scalar>,
    /// Reference to metadata held by the content store; set at most once.
    pub content_pointer: Option<String>,
}

impl Order {
    pub(crate) fn new(id: u64, customer: Principal, request: OrderRequest) -> Self {
        Self {
            id,
            product: request.product,
            quantity: request.quantity,
            total_cost: request.total_cost,
            status: OrderStatus::Pending,
            customer_name: request.customer_name,
            customer,
            public_inputs: request.public_inputs,
            content_pointer: None,
        }
    }
}
