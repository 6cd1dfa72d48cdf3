// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for evaluations and truth tables.

pub mod json;
pub mod text;
