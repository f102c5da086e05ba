//! Operation tags that policies can subscribe to.

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// Set of balance-mutating operations.
///
/// Tags combine with `|`, so a policy guarding both directions can
/// declare `PolicyOperation::DEPOSIT | PolicyOperation::WITHDRAW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PolicyOperation(u8);

impl PolicyOperation {
    pub const NONE: Self = Self(0);
    pub const DEPOSIT: Self = Self(0b01);
    pub const WITHDRAW: Self = Self(0b10);
    pub const ALL: Self = Self(0b11);

    /// True when every operation in `other` is also in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the two sets share at least one operation
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for PolicyOperation {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for PolicyOperation {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for PolicyOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NONE => write!(f, "none"),
            Self::DEPOSIT => write!(f, "deposit"),
            Self::WITHDRAW => write!(f, "withdraw"),
            _ => write!(f, "deposit|withdraw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_set() {
        let both = PolicyOperation::DEPOSIT | PolicyOperation::WITHDRAW;
        assert_eq!(both, PolicyOperation::ALL);
        assert!(both.contains(PolicyOperation::DEPOSIT));
        assert!(both.contains(PolicyOperation::WITHDRAW));
    }

    #[test]
    fn test_disjoint_tags() {
        assert!(!PolicyOperation::DEPOSIT.intersects(PolicyOperation::WITHDRAW));
        assert!((PolicyOperation::DEPOSIT & PolicyOperation::WITHDRAW).is_empty());
        assert!(PolicyOperation::ALL.intersects(PolicyOperation::WITHDRAW));
    }

    #[test]
    fn test_display() {
        assert_eq!(PolicyOperation::WITHDRAW.to_string(), "withdraw");
        assert_eq!(PolicyOperation::ALL.to_string(), "deposit|withdraw");
    }
}
