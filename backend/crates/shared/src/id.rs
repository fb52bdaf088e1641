//! Typed Numeric IDs
//!
//! Database-assigned `BIGINT` keys wrapped with a marker type so ids of
//! different entities cannot be swapped.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Numeric id tagged with the entity it belongs to
///
/// ```
/// use kernel::id::MemberNo;
///
/// let member_no = MemberNo::new(42);
/// assert_eq!(member_no.get(), 42);
/// assert_eq!(member_no.to_string(), "42");
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Raw value for binding into queries
    pub const fn get(&self) -> i64 {
        self.value
    }
}

// Manual impls: markers are bare unit structs and should not need derives.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

/// Marker types
pub mod markers {
    pub struct Member;
}

pub type MemberNo = Id<markers::Member>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_copy_and_eq() {
        let a = MemberNo::new(7);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, MemberNo::new(8));
    }

    #[test]
    fn test_hash_by_value() {
        let set: HashSet<MemberNo> = [MemberNo::new(1), MemberNo::from(1), MemberNo::new(2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", MemberNo::new(3)), "Id(3)");
    }
}
