// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for recipe-picker
// ABOUTME: Provides the suggest, generate, render, and session commands

pub mod generate;
pub mod render;
pub mod session;
pub mod suggest;
