// ABOUTME: Error handling re-exports from nutrilens-core
// ABOUTME: Keeps crate::errors paths stable for the client, services, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! # Unified Error Handling
//!
//! Error codes, the `AppError` type, and the JSON error envelope live in
//! `nutrilens-core` so that every workspace crate shares them.

pub use nutrilens_core::errors::*;
