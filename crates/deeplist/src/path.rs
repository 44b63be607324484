//! Index paths: addressing entries at any depth of the item tree.
//!
//! A raw path is whatever a caller hands in. Components may be negative,
//! counting from the end of their level, and may run past either end. A
//! normalized [`IndexPath`] always addresses an entry that exists, unless the
//! tree is empty, in which case it is `[0]`.

use std::fmt;

use crate::tree::Entry;

/// A normalized path through the item tree. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexPath(Vec<usize>);

impl Default for IndexPath {
    fn default() -> Self {
        Self::root()
    }
}

impl IndexPath {
    /// The path to the first top-level entry.
    pub fn root() -> Self {
        Self(vec![0])
    }

    /// The path to a top-level entry.
    pub fn top_level(index: usize) -> Self {
        Self(vec![index])
    }

    /// The components of the path.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// The top-level component.
    pub fn top(&self) -> usize {
        self.0.first().copied().unwrap_or(0)
    }

    /// Number of components. A top-level entry has depth 1.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The components as raw, signed indices.
    pub fn to_raw(&self) -> Vec<isize> {
        self.0.iter().map(|&i| i as isize).collect()
    }

    /// Is `self` equal to, or an ancestor of, `other`?
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<Vec<usize>> for IndexPath {
    fn from(mut v: Vec<usize>) -> Self {
        if v.is_empty() {
            v.push(0);
        }
        Self(v)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Clamp one raw component into `[0, len - 1]`, counting negative values from
/// the end. `len` must be non-zero.
pub fn clamp_index(raw: isize, len: usize) -> usize {
    let last = len.saturating_sub(1) as isize;
    let i = if raw < 0 { len as isize + raw } else { raw };
    i.clamp(0, last) as usize
}

/// Turn a raw path into a path that addresses an existing entry.
///
/// Each component is clamped to its level. Descent stops at an entry without
/// a non-empty sub-list, dropping any remaining components. The display flag
/// of sub-lists is not consulted, and nothing is modified. An empty raw path
/// means `[0]`.
pub fn normalize(raw: &[isize], items: &[Entry]) -> IndexPath {
    let raw = if raw.is_empty() { &[0][..] } else { raw };
    let mut out = Vec::with_capacity(raw.len());
    let mut level = items;
    for &component in raw {
        if level.is_empty() {
            break;
        }
        let i = clamp_index(component, level.len());
        out.push(i);
        level = level[i].children();
    }
    IndexPath::from(out)
}

/// Look up the entry a normalized path addresses, without modifying anything.
/// Returns `None` if the path leads nowhere, which for a normalized path only
/// happens on an empty tree.
pub fn peek<'a>(path: &[usize], items: &'a [Entry]) -> Option<&'a Entry> {
    let (&last, parents) = path.split_last()?;
    let mut level = items;
    for &i in parents {
        level = level.get(i)?.children();
    }
    level.get(last)
}

/// An entry reached by [`resolve`], together with the level it lives in.
#[derive(Debug)]
pub struct Resolved<'a> {
    /// The addressed entry.
    pub entry: &'a Entry,
    /// The entry and its siblings.
    pub siblings: &'a [Entry],
}

/// Look up the entry a normalized path addresses, revealing it: every
/// sub-list passed through on the way down has its display flag set.
pub fn resolve<'a>(path: &[usize], items: &'a mut [Entry]) -> Option<Resolved<'a>> {
    let (&last, parents) = path.split_last()?;
    let mut level = items;
    for &i in parents {
        let sub = level.get_mut(i)?.sub_list.as_mut()?;
        if !sub.display {
            tracing::debug!("revealing sub-list at component {}", i);
            sub.display = true;
        }
        level = &mut sub.items;
    }
    let siblings: &'a [Entry] = level;
    Some(Resolved {
        entry: siblings.get(last)?,
        siblings,
    })
}
