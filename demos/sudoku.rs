/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Solves a Sudoku grid by reduction to exact cover.
//!
//! Every empty cell, missing (row, digit), (column, digit) and
//! (block, digit) becomes an item; every consistent placement of a digit in
//! an empty cell becomes an option covering four items. The unique exact
//! cover is the unique completion of the grid.

use anyhow::{ensure, Result};
use compacta::dlx::Dlx;
use itertools::iproduct;

const GRID: &[u8] = concat!(
    "..3", ".1.", "...", //
    "415", "...", ".9.", //
    "2.6", "5..", "3..", //
    "5..", ".8.", "..9", //
    ".7.", "9..", ".32", //
    ".38", "..4", ".6.", //
    "...", "26.", "4.3", //
    "...", "3..", "..8", //
    "32.", "..7", "95.",
)
.as_bytes();

const POS: i32 = 0 << 28;
const ROW: i32 = 1 << 28;
const COL: i32 = 2 << 28;
const BLK: i32 = 3 << 28;

fn digit(grid: &[u8], i: usize, j: usize) -> Option<u32> {
    (grid[i * 9 + j] as char).to_digit(10)
}

fn items(grid: &[u8]) -> Vec<i32> {
    let mut items = Vec::new();
    for (i, j) in iproduct!(0..9, 0..9) {
        if digit(grid, i, j).is_none() {
            items.push(POS + ((i as i32) << 8) + j as i32);
        }
    }
    for (i, k) in iproduct!(0..9, 1..10u32) {
        if !(0..9).any(|j| digit(grid, i, j) == Some(k)) {
            items.push(ROW + ((i as i32) << 8) + k as i32);
        }
    }
    for (j, k) in iproduct!(0..9, 1..10u32) {
        if !(0..9).any(|i| digit(grid, i, j) == Some(k)) {
            items.push(COL + ((j as i32) << 8) + k as i32);
        }
    }
    for (b, k) in iproduct!(0..9usize, 1..10u32) {
        let (y, x) = ((b / 3) * 3, (b % 3) * 3);
        if !iproduct!(0..3, 0..3).any(|(r, c)| digit(grid, y + r, x + c) == Some(k)) {
            items.push(BLK + ((b as i32) << 8) + k as i32);
        }
    }
    items
}

fn options(items: &[i32]) -> Vec<Vec<usize>> {
    let find = |key: i32| items.iter().position(|&item| item == key);
    let mut options = Vec::new();
    for (i, j, k) in iproduct!(0..9usize, 0..9usize, 1..10usize) {
        let cell = find(POS + ((i as i32) << 8) + j as i32);
        let row = find(ROW + ((i as i32) << 8) + k as i32);
        let col = find(COL + ((j as i32) << 8) + k as i32);
        let blk = find(BLK + (((3 * (i / 3) + j / 3) as i32) << 8) + k as i32);
        if let (Some(p), Some(r), Some(c), Some(b)) = (cell, row, col, blk) {
            options.push(vec![p, r, c, b]);
        }
    }
    options
}

fn main() -> Result<()> {
    env_logger::init();

    let items = items(GRID);
    let options = options(&items);
    let mut solver = Dlx::new(items.len(), options.iter().map(|o| o.iter().copied()))?;
    let solutions = solver.collect_solutions()?;
    ensure!(solutions.len() == 1, "the grid has {} completions", solutions.len());

    let mut grid = GRID.to_vec();
    for &id in solutions[0].iter() {
        let option = &options[id as usize - 1];
        let cell = items[option[0]];
        let (i, j) = (((cell & 0xff00) >> 8) as usize, (cell & 0xff) as usize);
        grid[i * 9 + j] = b'0' + (items[option[1]] & 0xff) as u8;
    }
    for row in grid.chunks(9) {
        println!("{}", core::str::from_utf8(row)?);
    }
    Ok(())
}
