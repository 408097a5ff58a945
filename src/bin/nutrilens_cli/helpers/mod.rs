// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors
// ABOUTME: Re-exports helper modules for nutrilens-cli
// ABOUTME: Provides text and JSON output formatting

pub mod display;
