/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Balanced-parentheses queries over the 40-bit reference sequence.

use anyhow::Result;
use compacta::bits::{BitVec, Bitvector, Parentheses};

fn reference_sequence() -> Result<Parentheses<BitVec>> {
    let mut bits = BitVec::try_with_len(40)?;
    for i in [
        0, 1, 2, 4, 7, 8, 9, 10, 11, 13, 15, 19, 22, 23, 24, 26, 27, 30, 32, 37,
    ] {
        bits.set(i, true);
    }
    Ok(Parentheses::new(bits))
}

#[test]
fn test_excess() -> Result<()> {
    let p = reference_sequence()?;
    assert_eq!(p.len(), 40);
    assert_eq!(p.excess(8), 3);
    assert_eq!(p.excess(21), 2);
    assert_eq!(p.segment_excess(8, 21), 0);
    Ok(())
}

#[test]
fn test_find_excess() -> Result<()> {
    let p = reference_sequence()?;
    assert_eq!(p.find_excess(7, -1), Some(36));
    assert_eq!(p.find_excess_backward(36, 0), Some(6));
    Ok(())
}

#[test]
fn test_matching_parentheses() -> Result<()> {
    let p = reference_sequence()?;
    assert_eq!(p.find_closing(7), Some(36));
    assert_eq!(p.find_opening(36), 7);
    assert_eq!(p.find_enclosing(22), Some(7));
    Ok(())
}

#[test]
fn test_segments() -> Result<()> {
    let p = reference_sequence()?;
    assert_eq!(p.segment_min(8, 36), 21);
    assert_eq!(p.segment_max(8, 36), 11);
    assert_eq!(p.segment_min_count(7, 35), 2);
    assert_eq!(p.segment_min_select(7, 35, 0), Some(7));
    assert_eq!(p.segment_min_select(7, 35, 1), Some(21));
    assert_eq!(p.segment_min_select(7, 35, 2), None);
    Ok(())
}

#[test]
fn test_small_sequences() -> Result<()> {
    // "(())": opens at 0 and 1.
    let mut bits = BitVec::<usize>::try_with_len(4)?;
    bits.set(0, true);
    bits.set(1, true);
    let p = Parentheses::new(bits);
    assert_eq!(p.excess(0), 1);
    assert_eq!(p.excess(3), 0);
    assert_eq!(p.find_closing(0), Some(3));
    assert_eq!(p.find_closing(1), Some(2));
    assert_eq!(p.find_opening(2), 1);
    assert_eq!(p.find_opening(3), 0);
    assert_eq!(p.find_enclosing(1), Some(0));
    assert_eq!(p.find_enclosing(0), None);

    // "()()": two top-level pairs.
    let mut bits = BitVec::<usize>::try_with_len(4)?;
    bits.set(0, true);
    bits.set(2, true);
    let p = Parentheses::new(bits);
    assert_eq!(p.find_closing(0), Some(1));
    assert_eq!(p.find_closing(2), Some(3));
    assert_eq!(p.find_opening(3), 2);
    assert_eq!(p.find_enclosing(2), None);
    assert_eq!(p.segment_min(0, 4), 1);
    Ok(())
}
