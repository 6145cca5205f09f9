//! The two-parent value pair attached to a pedigree member.

/// An immutable pair of parent identifiers.
///
/// Slot order is significant for storage but carries no meaning for queries:
/// "is a parent of" does not distinguish slot 1 from slot 2, so comparisons
/// should go through [`ParentPair::contains`] or [`ParentPair::same_pair`]
/// rather than field-by-field equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParentPair<T> {
    /// The first parent slot.
    pub parent1: T,
    /// The second parent slot.
    pub parent2: T,
}

impl<T> ParentPair<T> {
    /// Create a pair from two parent identifiers.
    ///
    /// The pair itself accepts any two values; graph operations reject
    /// degenerate pairs (same identifier twice) at the call site.
    pub const fn new(parent1: T, parent2: T) -> Self {
        Self { parent1, parent2 }
    }

    /// Both slots as a two-element array, in slot order.
    pub const fn as_array(&self) -> [&T; 2] {
        [&self.parent1, &self.parent2]
    }
}

impl<T: PartialEq> ParentPair<T> {
    /// Returns `true` if either slot holds `member`.
    pub fn contains(&self, member: &T) -> bool {
        self.parent1 == *member || self.parent2 == *member
    }

    /// Order-insensitive pair comparison: `{a, b}` matches `{b, a}`.
    pub fn same_pair(&self, other: &Self) -> bool {
        (self.parent1 == other.parent1 && self.parent2 == other.parent2)
            || (self.parent1 == other.parent2 && self.parent2 == other.parent1)
    }

    /// Returns `true` if both slots hold the same identifier.
    ///
    /// Degenerate pairs are rejected by every graph operation that accepts a
    /// pair, since a member may never record the same parent twice.
    pub fn is_degenerate(&self) -> bool {
        self.parent1 == self.parent2
    }
}

#[cfg(test)]
mod tests {
    use super::ParentPair;

    #[test]
    fn contains_checks_both_slots() {
        let pair = ParentPair::new("sire", "dam");
        assert!(pair.contains(&"sire"));
        assert!(pair.contains(&"dam"));
        assert!(!pair.contains(&"foal"));
    }

    #[test]
    fn same_pair_ignores_slot_order() {
        let ab = ParentPair::new("a", "b");
        let ba = ParentPair::new("b", "a");
        assert!(ab.same_pair(&ba));
        assert!(ab.same_pair(&ab));
        assert!(!ab.same_pair(&ParentPair::new("a", "c")));
    }

    #[test]
    fn field_equality_is_slot_sensitive() {
        // Eq on the struct compares slots positionally; order-insensitive
        // comparison must go through same_pair.
        assert_ne!(ParentPair::new("a", "b"), ParentPair::new("b", "a"));
    }

    #[test]
    fn degenerate_pair_detected() {
        assert!(ParentPair::new(7u32, 7u32).is_degenerate());
        assert!(!ParentPair::new(7u32, 8u32).is_degenerate());
    }
}
