// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    AlreadyInitialized = 1,
    Uninitialized = 2,
    NotFound = 3,
    Unauthorized = 4,
    InvalidTransition = 5,
    AlreadySet = 6,
    /// Wrong public-input arity, empty `ic`, or empty content pointer
    MalformedInput = 7,
}
