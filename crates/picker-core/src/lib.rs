// ABOUTME: Core types and constants for the Recipe Picker client
// ABOUTME: Foundation crate with error handling, recipe models, and API constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Picker Core
//!
//! Foundation crate providing shared types and constants for the Recipe Picker
//! client. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ApiError`
//! - **constants**: Endpoint paths, query limits, and environment variable names
//! - **models**: Recipe payloads exchanged with the recipe backend

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe, similar-recipe, and request/response envelope models
pub mod models;
