// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Field weights live in `core`; ordering and truncation live in `ranking`.

mod core;
pub mod ranking;

pub use self::core::*;
