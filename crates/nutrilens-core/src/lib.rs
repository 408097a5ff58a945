// ABOUTME: Core types and constants for the nutrilens nutrition analysis workspace
// ABOUTME: Foundation crate with error handling, nutrition data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

#![deny(unsafe_code)]

//! # Nutrilens Core
//!
//! Foundation crate providing shared types and constants for the nutrilens
//! workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Caloric factors, pH scale bounds, and service names
//! - **models**: Nutrition query results, allergens, and food suggestions

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models for nutrition query results
pub mod models;
