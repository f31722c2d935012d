/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]
#![allow(clippy::type_complexity)]

pub mod array;
pub mod bits;
pub mod dlx;
pub mod extent;
pub mod mem;
pub mod pools;
pub mod trees;

pub mod prelude {
    pub use crate::array::Array;
    pub use crate::bits::{BitVec, Bitvector, Parentheses, Word};
    pub use crate::dlx::{ChoiceHeuristic, Dlx, Mrv};
    pub use crate::extent::{Amortized, Extent, Growth};
    pub use crate::mem::{
        Allocate, AllocError, ArenaAlloc, Deallocate, MemoryView, Reallocate, SystemAlloc,
    };
    pub use crate::pools::{ForwardListPool, ListPool, LIMIT};
    pub use crate::trees::{
        tree_height, tree_step, tree_weight, BalancedBinaryTree, Bicursor,
        BidirectionalBicursor, BinaryLouds, DfVisit, LinkTree, LinkedBicursor, Louds,
    };
}
