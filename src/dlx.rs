/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Dancing-links exact-cover solver (Knuth's Algorithm X).
//!
//! Given `n` items and a family of options, each option covering a subset
//! of the items, the solver enumerates every subfamily of options covering
//! each item exactly once.
//!
//! The whole problem lives in one node buffer: a spacer node, one header
//! per item maintaining a circular vertical list of the option rows
//! containing it (with the remaining-row count in its `top` field), one
//! node per (option, item) incidence, spacer nodes between options whose
//! negated `top` is the option's 1-based identifier, and a trailer of item
//! headers forming the circular horizontal list of *active* items. Every
//! link is an index into the buffer, so the layout can be relocated without
//! rewriting anything.
//!
//! The search itself is the classic unlink/relink dance expressed as an
//! explicit state machine over levels, keeping no recursion and exactly one
//! candidate row per level in the `solution` stack.

use core::fmt;

use crate::array::Array;
use crate::mem::AllocError;

#[derive(Clone, Copy, Default, Debug)]
struct Node {
    top: isize,
    ulink: isize,
    dlink: isize,
}

/// Chooses which active item to cover next.
pub trait ChoiceHeuristic {
    /// Returns an active item index, given the previously chosen item and
    /// the list of active items with their remaining-option counts.
    fn choose(&self, current: isize, active: ActiveItems<'_>) -> isize;
}

/// Minimum remaining values: the active item with the fewest remaining
/// options, ties broken by first occurrence in the active list.
#[derive(Clone, Copy, Debug, Default)]
pub struct Mrv;

impl ChoiceHeuristic for Mrv {
    fn choose(&self, current: isize, active: ActiveItems<'_>) -> isize {
        let mut best = current;
        let mut min = isize::MAX;
        for (item, count) in active {
            if count < min {
                min = count;
                best = item;
            }
            if min == 0 {
                break;
            }
        }
        best
    }
}

/// An exact-cover problem in dancing-links layout.
///
/// # Examples
///
/// The classic seven-item instance with its unique cover:
///
/// ```
/// use compacta::dlx::Dlx;
///
/// let options: [&[usize]; 6] = [
///     &[2, 4], &[0, 3, 6], &[1, 2, 5], &[0, 3, 5], &[1, 6], &[3, 4, 6],
/// ];
/// let mut solver = Dlx::new(7, options.iter().map(|o| o.iter().copied()))?;
/// let mut found = Vec::new();
/// solver.solve(|_, choices| found.extend(choices));
/// found.sort();
/// assert_eq!(found, [1, 4, 5]); // 1-based option identifiers
/// # Ok::<(), compacta::mem::AllocError>(())
/// ```
#[derive(Debug)]
pub struct Dlx {
    data: Array<Node>,
    /// One candidate row node per level of the partial solution.
    solution: Array<isize>,
    /// Index of the head of the circular active-item list in the trailer.
    items_first: isize,
    n_items: usize,
    n_options: usize,
}

impl Dlx {
    /// Lays out the problem for `n_items` items (numbered from 0) and the
    /// given options, each an iterator over the item indices it covers.
    ///
    /// The solver does not validate its input: duplicate items within an
    /// option or empty options produce no solutions or ill-formed layouts.
    pub fn new<O, I>(n_items: usize, options: O) -> Result<Self, AllocError>
    where
        O: IntoIterator<Item = I>,
        I: IntoIterator<Item = usize>,
    {
        let mut data: Array<Node> = Array::new();
        data.push(Node::default())?;
        // Item headers: circular vertical lists, initially self-loops.
        for k in 1..=n_items as isize {
            data.push(Node {
                top: 0,
                ulink: k,
                dlink: k,
            })?;
        }
        // Spacer preceding the first option.
        data.push(Node::default())?;

        let mut p = data.len() as isize - 1;
        let mut n_options = 0usize;
        for option in options {
            let mut j = 0isize;
            for item in option {
                debug_assert!(item < n_items, "item {item} out of range ({n_items})");
                let i = item as isize + 1;
                j += 1;
                let idx = p + j;
                let prev = data[i as usize].ulink;
                data.push(Node {
                    top: i,
                    ulink: prev,
                    dlink: i,
                })?;
                data[i as usize].top += 1;
                data[i as usize].ulink = idx;
                data[prev as usize].dlink = idx;
            }
            n_options += 1;
            // The previous spacer's dlink bounds this option from below;
            // the new spacer's ulink bounds it from above.
            data[p as usize].dlink = p + j;
            data.push(Node {
                top: -(n_options as isize),
                ulink: p + 1,
                dlink: 0,
            })?;
            p += j + 1;
        }

        // Trailer: the circular horizontal list of active items.
        let f = data.len() as isize;
        data.push(Node {
            top: 0,
            ulink: f + n_items as isize,
            dlink: if n_items > 0 { f + 1 } else { f },
        })?;
        for k in 1..=n_items as isize {
            data.push(Node {
                top: k,
                ulink: f + k - 1,
                dlink: f + k + 1,
            })?;
        }
        let last = data.len() - 1;
        data[last].dlink = f;

        let mut solution = Array::new();
        solution.resize(n_options, 0)?;

        log::debug!(
            "dancing links: {} nodes for {} items and {} options",
            data.len(),
            n_items,
            n_options
        );

        Ok(Dlx {
            data,
            solution,
            items_first: f,
            n_items,
            n_options,
        })
    }

    /// Returns the number of items.
    pub fn num_items(&self) -> usize {
        self.n_items
    }

    /// Returns the number of options.
    pub fn num_options(&self) -> usize {
        self.n_options
    }

    /// Returns an iterator over the active items and their remaining-option
    /// counts.
    pub fn active_items(&self) -> ActiveItems<'_> {
        ActiveItems {
            dlx: self,
            pos: self.items_first,
        }
    }

    fn unlink(&mut self, x: isize) {
        let Node { ulink, dlink, .. } = self.data[x as usize];
        self.data[ulink as usize].dlink = dlink;
        self.data[dlink as usize].ulink = ulink;
    }

    fn relink(&mut self, x: isize) {
        let Node { ulink, dlink, .. } = self.data[x as usize];
        self.data[ulink as usize].dlink = x;
        self.data[dlink as usize].ulink = x;
    }

    /// Detaches every other node of the option containing `p` from its
    /// column, decrementing the column counts.
    fn hide(&mut self, p: isize) {
        let mut q = p + 1;
        while q != p {
            let x = self.data[q as usize].top;
            if x <= 0 {
                // Spacer: wrap back to the first node of the option.
                q = self.data[q as usize].ulink;
            } else {
                self.unlink(q);
                self.data[x as usize].top -= 1;
                q += 1;
            }
        }
    }

    /// Exact inverse of [`hide`](Dlx::hide), walking the other way.
    fn unhide(&mut self, p: isize) {
        let mut q = p - 1;
        while q != p {
            let x = self.data[q as usize].top;
            if x <= 0 {
                q = self.data[q as usize].dlink;
            } else {
                self.relink(q);
                self.data[x as usize].top += 1;
                q -= 1;
            }
        }
    }

    /// Covers item `i`: hides every option containing it and removes it
    /// from the active list.
    fn cover(&mut self, i: isize) {
        let mut p = self.data[i as usize].dlink;
        while p != i {
            self.hide(p);
            p = self.data[p as usize].dlink;
        }
        self.unlink(self.items_first + i);
    }

    /// Exact inverse of [`cover`](Dlx::cover).
    fn uncover(&mut self, i: isize) {
        self.relink(self.items_first + i);
        let mut p = self.data[i as usize].ulink;
        while p != i {
            self.unhide(p);
            p = self.data[p as usize].ulink;
        }
    }

    /// Runs the search with the [`Mrv`] heuristic, invoking `visitor` for
    /// every solution with the depth and the 1-based option identifiers.
    pub fn solve<V>(&mut self, visitor: V)
    where
        V: FnMut(usize, SolutionChoices<'_>),
    {
        self.solve_with(&Mrv, visitor);
    }

    /// Runs the search with the given item-choice heuristic.
    ///
    /// The visitor receives the current depth `l` and an iterator yielding,
    /// per level, the 1-based identifier of the chosen option. The solver is
    /// left in its initial state afterwards, so it can be run again.
    pub fn solve_with<H, V>(&mut self, heuristic: &H, mut visitor: V)
    where
        H: ChoiceHeuristic,
        V: FnMut(usize, SolutionChoices<'_>),
    {
        enum State {
            Enter,
            Try,
            Retry,
            Backtrack,
            Leave,
        }

        if self.n_items > 0 && self.n_options == 0 {
            return;
        }

        let mut i: isize = 1;
        let mut l: usize = 0;
        let mut solutions = 0usize;
        let mut state = State::Enter;
        loop {
            state = match state {
                State::Enter => {
                    if self.data[self.items_first as usize].dlink == self.items_first {
                        solutions += 1;
                        log::trace!("solution at level {}", l);
                        visitor(
                            l,
                            SolutionChoices {
                                data: self.data.as_slice(),
                                solution: &self.solution.as_slice()[..l],
                                pos: 0,
                            },
                        );
                        State::Leave
                    } else {
                        i = heuristic.choose(i, self.active_items());
                        self.cover(i);
                        self.solution[l] = self.data[i as usize].dlink;
                        State::Try
                    }
                }
                State::Try => {
                    if self.solution[l] == i {
                        State::Backtrack
                    } else {
                        // Cover the other items of the candidate row.
                        let row = self.solution[l];
                        let mut p = row + 1;
                        while p != row {
                            let x = self.data[p as usize].top;
                            if x <= 0 {
                                p = self.data[p as usize].ulink;
                            } else {
                                self.cover(x);
                                p += 1;
                            }
                        }
                        l += 1;
                        State::Enter
                    }
                }
                State::Retry => {
                    // Uncover the other items of the abandoned row, then
                    // advance to the next row of the same column.
                    let row = self.solution[l];
                    let mut p = row - 1;
                    while p != row {
                        let x = self.data[p as usize].top;
                        if x <= 0 {
                            p = self.data[p as usize].dlink;
                        } else {
                            self.uncover(x);
                            p -= 1;
                        }
                    }
                    i = self.data[row as usize].top;
                    self.solution[l] = self.data[row as usize].dlink;
                    State::Try
                }
                State::Backtrack => {
                    self.uncover(i);
                    State::Leave
                }
                State::Leave => {
                    if l > 0 {
                        l -= 1;
                        State::Retry
                    } else {
                        break;
                    }
                }
            };
        }
        log::debug!("search finished with {} solution(s)", solutions);
    }

    /// Convenience wrapper collecting every solution as its list of 1-based
    /// option identifiers, in search order.
    pub fn collect_solutions(&mut self) -> Result<Array<Array<isize>>, AllocError> {
        let mut out: Array<Array<isize>> = Array::new();
        let mut failure = None;
        self.solve(|_, choices| {
            let mut one = Array::new();
            for id in choices {
                if let Err(err) = one.push(id) {
                    failure = Some(err);
                    return;
                }
            }
            if let Err(err) = out.push(one) {
                failure = Some(err);
            }
        });
        match failure {
            Some(err) => Err(err),
            None => Ok(out),
        }
    }
}

/// Iterator over the active items of a [`Dlx`], yielding
/// `(item index, remaining-option count)` pairs; item indices are 1-based
/// as in the node layout.
pub struct ActiveItems<'a> {
    dlx: &'a Dlx,
    pos: isize,
}

impl Iterator for ActiveItems<'_> {
    type Item = (isize, isize);

    fn next(&mut self) -> Option<(isize, isize)> {
        self.pos = self.dlx.data[self.pos as usize].dlink;
        if self.pos == self.dlx.items_first {
            return None;
        }
        let item = self.pos - self.dlx.items_first;
        Some((item, self.dlx.data[item as usize].top))
    }
}

/// Iterator over the option identifiers of a (partial) solution, one per
/// level; identifiers are 1-based in option insertion order.
pub struct SolutionChoices<'a> {
    data: &'a [Node],
    solution: &'a [isize],
    pos: usize,
}

impl Iterator for SolutionChoices<'_> {
    type Item = isize;

    fn next(&mut self) -> Option<isize> {
        if self.pos == self.solution.len() {
            return None;
        }
        // Walk forward to the option's closing spacer, whose top is the
        // negated identifier.
        let mut s = self.solution[self.pos];
        while self.data[s as usize].top > 0 {
            s += 1;
        }
        self.pos += 1;
        Some(-self.data[s as usize].top)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.solution.len() - self.pos;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SolutionChoices<'_> {}

impl fmt::Debug for SolutionChoices<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolutionChoices")
            .field("levels", &self.solution.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trivial_cover() -> Result<(), AllocError> {
        // Two items, one option covering both.
        let mut solver = Dlx::new(2, [[0usize, 1]])?;
        let solutions = solver.collect_solutions()?;
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].as_slice(), &[1]);
        Ok(())
    }

    #[test]
    fn test_no_solution() -> Result<(), AllocError> {
        // Item 1 is not covered by any option.
        let mut solver = Dlx::new(2, [[0usize]])?;
        let solutions = solver.collect_solutions()?;
        assert!(solutions.is_empty());
        Ok(())
    }

    #[test]
    fn test_no_options() -> Result<(), AllocError> {
        let options: [[usize; 1]; 0] = [];
        let mut solver = Dlx::new(1, options)?;
        let solutions = solver.collect_solutions()?;
        assert!(solutions.is_empty());
        Ok(())
    }

    #[test]
    fn test_empty_problem_has_empty_solution() -> Result<(), AllocError> {
        let options: [[usize; 1]; 0] = [];
        let mut solver = Dlx::new(0, options)?;
        let solutions = solver.collect_solutions()?;
        assert_eq!(solutions.len(), 1);
        assert!(solutions[0].is_empty());
        Ok(())
    }

    #[test]
    fn test_multiple_solutions() -> Result<(), AllocError> {
        // Two disjoint ways to cover {0, 1}: {0}+{1} or {0, 1}.
        let options: [&[usize]; 3] = [&[0], &[1], &[0, 1]];
        let mut solver = Dlx::new(2, options.iter().map(|o| o.iter().copied()))?;
        let mut all = Vec::new();
        solver.solve(|_, choices| {
            let mut one: Vec<isize> = choices.collect();
            one.sort();
            all.push(one);
        });
        all.sort();
        assert_eq!(all, [vec![1, 2], vec![3]]);
        Ok(())
    }

    #[test]
    fn test_active_items_counts() -> Result<(), AllocError> {
        let options: [&[usize]; 3] = [&[0], &[1], &[0, 1]];
        let solver = Dlx::new(2, options.iter().map(|o| o.iter().copied()))?;
        let active: Vec<(isize, isize)> = solver.active_items().collect();
        assert_eq!(active, [(1, 2), (2, 2)]);
        Ok(())
    }

    #[test]
    fn test_solver_state_is_restored() -> Result<(), AllocError> {
        let options: [&[usize]; 6] = [
            &[2, 4],
            &[0, 3, 6],
            &[1, 2, 5],
            &[0, 3, 5],
            &[1, 6],
            &[3, 4, 6],
        ];
        let mut solver = Dlx::new(7, options.iter().map(|o| o.iter().copied()))?;
        let first = solver.collect_solutions()?;
        let second = solver.collect_solutions()?;
        assert_eq!(first, second);
        Ok(())
    }
}
