//! A fixed-size bitset of digits
//!
//! Candidate elimination deals with sets of [`Digit`s](crate::Digit) all the
//! time. A `u16` bitmask stores such a set compactly and makes the central
//! question of the elimination pass, "is exactly one candidate left?", a
//! popcount away.

use crate::board::Digit;

/// Set of digits, backed by a bitmask.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct DigitSet(u16);

/// Returned by [`DigitSet::unique`] if the set contains no digit at all.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Empty;

impl DigitSet {
    /// Set containing all nine digits.
    pub const ALL: DigitSet = DigitSet(0o777);

    /// Empty set.
    pub const NONE: DigitSet = DigitSet(0);

    /// Checks if `digit` is in the set.
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & bit(digit) != 0
    }

    /// Adds `digit` to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= bit(digit);
    }

    /// Deletes `digit` from the set, if present.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !bit(digit);
    }

    /// Returns the set of digits in this set that aren't present in `other`.
    pub fn without(self, other: DigitSet) -> DigitSet {
        DigitSet(self.0 & !other.0)
    }

    /// Returns the number of digits in the set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks if the set contains no digit.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the digit contained in the set, if it contains exactly one.
    ///
    /// `Ok(None)` means more than one digit remains, `Err(Empty)` means none
    /// does.
    pub fn unique(self) -> Result<Option<Digit>, Empty> {
        match self.len() {
            0 => Err(Empty),
            1 => Ok(Some(Digit::from_index(self.0.trailing_zeros() as u8))),
            _ => Ok(None),
        }
    }
}

#[inline]
fn bit(digit: Digit) -> u16 {
    1 << digit.as_index()
}

/// Iterator over the digits in a [`DigitSet`], in ascending order.
#[derive(Copy, Clone, Debug)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_index(idx))
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl std::iter::FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = DigitSet::NONE;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = DigitSet::NONE;
        assert!(set.is_empty());
        set.insert(Digit::new(5));
        set.insert(Digit::new(5));
        assert_eq!(set.len(), 1);
        assert!(set.contains(Digit::new(5)));
        set.remove(Digit::new(5));
        assert!(set.is_empty());
        // removing an absent digit is a no-op
        set.remove(Digit::new(3));
        assert_eq!(set, DigitSet::NONE);
    }

    #[test]
    fn unique() {
        assert_eq!(DigitSet::NONE.unique(), Err(Empty));
        assert_eq!(DigitSet::ALL.unique(), Ok(None));
        let set: DigitSet = std::iter::once(Digit::new(9)).collect();
        assert_eq!(set.unique(), Ok(Some(Digit::new(9))));
    }

    #[test]
    fn iteration_is_ascending() {
        let digits: Vec<u8> = DigitSet::ALL.into_iter().map(Digit::get).collect();
        assert_eq!(digits, (1..10).collect::<Vec<_>>());

        let set: DigitSet = [7, 2, 4].iter().map(|&d| Digit::new(d)).collect();
        let digits: Vec<u8> = set.into_iter().map(Digit::get).collect();
        assert_eq!(digits, vec![2, 4, 7]);
    }
}
