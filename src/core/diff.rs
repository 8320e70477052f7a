//! # Keyed list diffing
//!
//! Screens never replace a displayed list wholesale. A fresh result is
//! diffed against what is shown and applied as a sequence of patches:
//!
//! ```text
//! old: [A, B, C, D]          new: [A, C', E, D]
//!
//! Remove { index: 1 }        [A, C, D]        B gone
//! Update { index: 1, C' }    [A, C', D]       same key, new content
//! Insert { index: 2, E }     [A, C', E, D]
//! ```
//!
//! Rows whose key survives keep their relative order, and rows that did not
//! change produce no patch at all.

/// Identity of a row across refreshes.
pub trait Keyed {
    type Key: PartialEq;
    fn key(&self) -> &Self::Key;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Remove { index: usize },
    Insert { index: usize, item: T },
    Update { index: usize, item: T },
}

/// Computes patches that turn `old` into `new` when applied in order.
///
/// Kept rows are the longest common subsequence of keys, so reordering
/// shows up as remove + insert rather than a cascade of updates.
pub fn diff<T: Keyed + PartialEq + Clone>(old: &[T], new: &[T]) -> Vec<Patch<T>> {
    let matched = longest_common_keys(old, new);

    let mut patches = Vec::new();

    // Removals back to front so earlier indices stay valid
    let mut kept_old = vec![false; old.len()];
    for &(i, _) in &matched {
        kept_old[i] = true;
    }
    for index in (0..old.len()).rev() {
        if !kept_old[index] {
            patches.push(Patch::Remove { index });
        }
    }

    // What remains is exactly the matched rows in order; walk `new` and
    // fill in around them.
    let mut next_match = matched.iter().peekable();
    for (index, item) in new.iter().enumerate() {
        match next_match.peek() {
            Some(&&(i, j)) if j == index => {
                next_match.next();
                if old[i] != *item {
                    patches.push(Patch::Update {
                        index,
                        item: item.clone(),
                    });
                }
            }
            _ => patches.push(Patch::Insert {
                index,
                item: item.clone(),
            }),
        }
    }

    patches
}

/// Index pairs `(old, new)` of the longest common subsequence of keys.
fn longest_common_keys<T: Keyed>(old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let (n, m) = (old.len(), new.len());
    // lengths[i][j] = LCS length of old[i..] and new[j..]
    let mut lengths = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lengths[i][j] = if old[i].key() == new[j].key() {
                lengths[i + 1][j + 1] + 1
            } else {
                lengths[i + 1][j].max(lengths[i][j + 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(lengths[0][0]);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old[i].key() == new[j].key() {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if lengths[i + 1][j] >= lengths[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}

/// A displayed list that changes only through patches.
#[derive(Debug, Clone)]
pub struct ListModel<T> {
    items: Vec<T>,
    /// Rows inserted or updated by the most recent `apply`.
    touched: Vec<usize>,
}

impl<T> Default for ListModel<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            touched: Vec::new(),
        }
    }
}

impl<T: Keyed + PartialEq + Clone> ListModel<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the list in line with `fresh`, returning the patches applied.
    pub fn apply(&mut self, fresh: &[T]) -> Vec<Patch<T>> {
        let patches = diff(&self.items, fresh);
        self.touched.clear();
        for patch in &patches {
            match patch {
                Patch::Remove { index } => {
                    self.items.remove(*index);
                }
                Patch::Insert { index, item } => {
                    self.items.insert(*index, item.clone());
                    self.touched.push(*index);
                }
                Patch::Update { index, item } => {
                    self.items[*index] = item.clone();
                    self.touched.push(*index);
                }
            }
        }
        patches
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_touched(&self, index: usize) -> bool {
        self.touched.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        key: &'static str,
        value: u32,
    }

    impl Keyed for Row {
        type Key = &'static str;
        fn key(&self) -> &Self::Key {
            &self.key
        }
    }

    fn rows(pairs: &[(&'static str, u32)]) -> Vec<Row> {
        pairs.iter()
            .map(|&(key, value)| Row { key, value })
            .collect()
    }

    #[test]
    fn test_identical_lists_produce_no_patches() {
        let list = rows(&[("a", 1), ("b", 2)]);
        assert!(diff(&list, &list).is_empty());
    }

    #[test]
    fn test_initial_load_is_all_inserts_in_order() {
        let new = rows(&[("a", 1), ("b", 2)]);
        let patches = diff(&[], &new);
        assert_eq!(
            patches,
            vec![
                Patch::Insert {
                    index: 0,
                    item: new[0].clone()
                },
                Patch::Insert {
                    index: 1,
                    item: new[1].clone()
                },
            ]
        );
    }

    #[test]
    fn test_documented_example() {
        let old = rows(&[("A", 0), ("B", 0), ("C", 0), ("D", 0)]);
        let new = rows(&[("A", 0), ("C", 1), ("E", 0), ("D", 0)]);
        let patches = diff(&old, &new);
        assert_eq!(
            patches,
            vec![
                Patch::Remove { index: 1 },
                Patch::Update {
                    index: 1,
                    item: new[1].clone()
                },
                Patch::Insert {
                    index: 2,
                    item: new[2].clone()
                },
            ]
        );
    }

    #[test]
    fn test_only_changed_row_is_touched() {
        let mut model = ListModel::new();
        model.apply(&rows(&[("a", 1), ("b", 2), ("c", 3)]));
        assert!(model.is_touched(0) && model.is_touched(2));

        model.apply(&rows(&[("a", 1), ("b", 5), ("c", 3)]));
        assert!(!model.is_touched(0));
        assert!(model.is_touched(1));
        assert!(!model.is_touched(2));
    }

    #[test]
    fn test_apply_reaches_target_for_assorted_edits() {
        let cases: Vec<(Vec<Row>, Vec<Row>)> = vec![
            (rows(&[("a", 1), ("b", 1)]), rows(&[])),
            (rows(&[("a", 1), ("b", 1), ("c", 1)]), rows(&[("c", 1), ("b", 1), ("a", 1)])),
            (rows(&[("a", 1)]), rows(&[("x", 1), ("a", 2), ("y", 1)])),
            (rows(&[("a", 1), ("a", 2)]), rows(&[("a", 2)])),
        ];
        for (old, new) in cases {
            let mut model = ListModel::new();
            model.apply(&old);
            model.apply(&new);
            assert_eq!(model.items(), new.as_slice());
        }
    }

    #[test]
    fn test_reorder_keeps_longest_run() {
        let old = rows(&[("a", 1), ("b", 1), ("c", 1)]);
        let new = rows(&[("b", 1), ("c", 1), ("a", 1)]);
        let patches = diff(&old, &new);
        // b and c stay put; only a moves
        assert_eq!(patches.len(), 2);
        assert_eq!(patches[0], Patch::Remove { index: 0 });
        assert_eq!(
            patches[1],
            Patch::Insert {
                index: 2,
                item: new[2].clone()
            }
        );
    }
}
