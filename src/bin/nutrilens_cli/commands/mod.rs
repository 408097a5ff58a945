// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors
// ABOUTME: Re-exports command modules for nutrilens-cli
// ABOUTME: Provides offline analysis commands and API-backed fetch/search commands

pub mod analysis;
pub mod api;
