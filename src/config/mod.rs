// ABOUTME: Configuration module for the picker client
// ABOUTME: Re-exports the environment-driven client configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! All settings come from environment variables; command-line flags override them
//! after loading.

/// Environment-driven client configuration
pub mod environment;

pub use environment::ClientConfig;
