//! Assembly of flat keyword rows into the broad → long-tail tree.
//!
//! Keywords are fetched in a single query and grouped in memory. A row
//! without a parent is a root (broad keyword); a row with a parent is
//! appended to that parent's children (long-tail keywords). A row whose
//! parent is not among the fetched rows is dropped from the tree.
//!
//! Ordering is never changed: roots and siblings keep the order in which
//! the rows were supplied.

use std::collections::HashMap;

use crate::types::DbId;

/// A row that can be placed in the keyword tree.
pub trait TreeRow {
    fn id(&self) -> DbId;
    fn parent_id(&self) -> Option<DbId>;
}

/// One keyword plus the keywords that name it as their parent.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordNode<T> {
    pub keyword: T,
    pub children: Vec<KeywordNode<T>>,
}

impl<T> KeywordNode<T> {
    /// Number of keywords in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(KeywordNode::node_count).sum::<usize>()
    }
}

/// Group `rows` into a forest of broad keywords with their long-tails.
///
/// Runs in a single pass over the rows with an id lookup table.
pub fn build_tree<T: TreeRow>(rows: Vec<T>) -> Vec<KeywordNode<T>> {
    let index: HashMap<DbId, usize> = rows
        .iter()
        .enumerate()
        .map(|(pos, row)| (row.id(), pos))
        .collect();

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); rows.len()];
    let mut roots = Vec::new();
    for (pos, row) in rows.iter().enumerate() {
        match row.parent_id() {
            None => roots.push(pos),
            Some(parent) => {
                if let Some(&parent_pos) = index.get(&parent) {
                    children[parent_pos].push(pos);
                }
            }
        }
    }

    let mut slots: Vec<Option<T>> = rows.into_iter().map(Some).collect();
    roots
        .into_iter()
        .filter_map(|pos| assemble(pos, &children, &mut slots))
        .collect()
}

fn assemble<T>(
    pos: usize,
    children: &[Vec<usize>],
    slots: &mut [Option<T>],
) -> Option<KeywordNode<T>> {
    let keyword = slots[pos].take()?;
    let kids = children[pos]
        .iter()
        .filter_map(|&child| assemble(child, children, slots))
        .collect();
    Some(KeywordNode {
        keyword,
        children: kids,
    })
}
