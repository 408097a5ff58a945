// ABOUTME: Application constants re-exported from nutrilens-core
// ABOUTME: Domain modules for macro factors, pH scale, serving units, env names, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Application constants organized by domain

pub use nutrilens_core::constants::*;
