// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod asserts;
mod env;

pub(crate) use asserts::{assert_frame_invariants, line_ranges, origins};
pub(crate) use env::{letters, resolver, words, TestEnv};
