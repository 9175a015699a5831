// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for recipe-picker
// ABOUTME: Provides terminal display formatting for the picker state

pub mod display;
