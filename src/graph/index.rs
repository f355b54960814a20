//! Strongly-typed indices and direction tags for chain graphs.
//!
//! Chain graphs address their arenas with plain integers. The newtypes here
//! keep node and edge positions from being mixed up, and carry the reserved
//! sentinel value that terminates adjacency chains in place of a null
//! pointer.

/// A strongly-typed index for a node in a [`ChainGraph`](super::ChainGraph).
///
/// Indices are dense: the `k`-th call to `add_node` on a graph returns
/// `NodeIx::new(k)`, and nothing is ever removed. An index is only
/// meaningful for the graph that issued it; using it against another graph
/// is a caller error (bounds-checked, but the answer is for the wrong node).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIx(usize);

impl NodeIx {
    /// The reserved "no such node" sentinel. Never a valid arena position.
    pub const INVALID: Self = Self(usize::MAX);

    /// Wraps a raw arena position.
    #[inline(always)]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the raw arena position.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns `true` if this is the [`INVALID`](Self::INVALID) sentinel.
    #[inline(always)]
    pub const fn is_invalid(self) -> bool {
        self.0 == usize::MAX
    }
}

/// A strongly-typed index for an edge in a [`ChainGraph`](super::ChainGraph).
///
/// Also the link type of the intrusive adjacency chains: every chain head
/// and chain link is either a valid `EdgeIx` or [`EdgeIx::INVALID`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIx(usize);

impl EdgeIx {
    /// The chain terminator and "no such edge" lookup result.
    pub const INVALID: Self = Self(usize::MAX);

    /// Wraps a raw arena position.
    #[inline(always)]
    pub const fn new(ix: usize) -> Self {
        Self(ix)
    }

    /// Returns the raw arena position.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns `true` if this is the [`INVALID`](Self::INVALID) sentinel.
    #[inline(always)]
    pub const fn is_invalid(self) -> bool {
        self.0 == usize::MAX
    }
}

/// The two directions in which a node's edges can be enumerated.
///
/// Node records hold one chain head per direction, and edge records hold
/// one chain link per direction; the discriminant doubles as the slot
/// index into those `[_; 2]` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Edges where the node is the source.
    Outgoing = 0,
    /// Edges where the node is the target.
    Incoming = 1,
}

/// Both directions, in slot order. Handy for loops over the two chains.
pub const DIRECTIONS: [Direction; 2] = [Direction::Outgoing, Direction::Incoming];

impl Direction {
    /// Returns the chain slot for this direction (`0` or `1`).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the other direction.
    #[inline(always)]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Outgoing => Self::Incoming,
            Self::Incoming => Self::Outgoing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_never_a_valid_position() {
        assert!(NodeIx::INVALID.is_invalid());
        assert!(EdgeIx::INVALID.is_invalid());
        assert_eq!(EdgeIx::INVALID.index(), usize::MAX);
        assert!(!NodeIx::new(0).is_invalid());
        assert!(!EdgeIx::new(0).is_invalid());
    }

    #[test]
    fn direction_slots_and_opposites() {
        assert_eq!(Direction::Outgoing.index(), 0);
        assert_eq!(Direction::Incoming.index(), 1);
        assert_eq!(Direction::Outgoing.opposite(), Direction::Incoming);
        assert_eq!(Direction::Incoming.opposite(), Direction::Outgoing);
        assert_eq!(DIRECTIONS[0], Direction::Outgoing);
        assert_eq!(DIRECTIONS[1], Direction::Incoming);
    }

    #[test]
    fn indices_are_ordered_by_position() {
        assert!(NodeIx::new(1) < NodeIx::new(2));
        assert!(EdgeIx::new(7) < EdgeIx::INVALID);
    }
}
