/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bit-level storage: machine-word utilities, rank/select bit vectors, and
//! balanced-parentheses sequences.

mod word;
pub use word::Word;

pub mod ops;

mod bit_vec;
pub use bit_vec::{BitVec, Bitvector};

mod parentheses;
pub use parentheses::Parentheses;
