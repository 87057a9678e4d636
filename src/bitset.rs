//! Typed bitsets over cells and digits
//!
//! The solver spends nearly all of its time manipulating sets of [`Digit`s](crate::board::Digit)
//! (candidate masks) and sets of [`Cell`s](crate::board::Cell) (the collapsed-cell marker).
//! Raw integers would do the job but make it far too easy to mix up masks of
//! different kinds or widths, so each element type gets its own set type wrapping
//! exactly as much storage as it needs.

use crate::board::{Cell, Digit};
use crate::errors::Unsolvable;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A fixed-capacity set of cells or digits, stored as a bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Set<T: SetElement>(pub(crate) T::Storage);

/// Iterator over the elements contained in a [`Set`], in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Iter<T: SetElement>(T::Storage);

impl<T: SetElement> IntoIterator for Set<T>
where
    Iter<T>: Iterator,
{
    type Item = <Iter<T> as Iterator>::Item;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.0)
    }
}

// Each op comes in four flavors: set-set, set-element and the
// assigning versions of both.
macro_rules! impl_set_ops {
    ( $( $op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident );* $(;)* ) => {
        $(
            impl<T: SetElement> $op for Set<T> {
                type Output = Self;

                #[inline(always)]
                fn $fn(self, rhs: Self) -> Self {
                    Set($op::$fn(self.0, rhs.0))
                }
            }

            impl<T: SetElement> $op<T> for Set<T> {
                type Output = Self;

                #[inline(always)]
                fn $fn(self, rhs: T) -> Self {
                    $op::$fn(self, rhs.as_set())
                }
            }

            impl<T: SetElement> $op_assign for Set<T> {
                #[inline(always)]
                fn $fn_assign(&mut self, rhs: Self) {
                    $op_assign::$fn_assign(&mut self.0, rhs.0)
                }
            }

            impl<T: SetElement> $op_assign<T> for Set<T> {
                #[inline(always)]
                fn $fn_assign(&mut self, rhs: T) {
                    $op_assign::$fn_assign(self, rhs.as_set())
                }
            }
        )*
    };
}

impl_set_ops!(
    BitAnd, bitand, BitAndAssign, bitand_assign;
    BitOr, bitor, BitOrAssign, bitor_assign;
    BitXor, bitxor, BitXorAssign, bitxor_assign;
);

impl<T: SetElement> Not for Set<T> {
    type Output = Self;

    // the complement must not leak bits above ALL
    fn not(self) -> Self {
        Set(!self.0 & <T as SetElement>::ALL)
    }
}

/// Error returned by [`Set::unique`] on a set with no elements
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Empty;

impl From<Empty> for Unsolvable {
    fn from(_: Empty) -> Unsolvable {
        Unsolvable
    }
}

impl<T: SetElement> Set<T>
where
    // TODO: implement the traits for Set and Iter manually, bounded on
    //       T::Storage; the derives bound them on T
    Self: PartialEq + Copy,
{
    /// The set of all possible elements.
    pub const ALL: Set<T> = Set(<T as SetElement>::ALL);

    /// The empty set.
    pub const NONE: Set<T> = Set(<T as SetElement>::NONE);

    /// Builds a set directly from a bit mask.
    ///
    /// # Panic
    /// Panics, if bits outside of [`Set::ALL`] are set.
    pub fn from_bits(mask: T::Storage) -> Self {
        assert!(mask & !<T as SetElement>::ALL == <T as SetElement>::NONE);
        Set(mask)
    }

    /// The raw bit mask of this set.
    pub fn bits(self) -> T::Storage {
        self.0
    }

    /// The elements of this set that are not in `other`.
    pub fn without(self, other: Self) -> Self {
        Set(self.0 & !other.0)
    }

    /// Checks if every element of `other` is also in `self`.
    pub fn contains(&self, other: impl Into<Self>) -> bool {
        let rhs = other.into().0;
        self.0 & rhs == rhs
    }

    /// Number of elements in the set.
    pub fn len(&self) -> u8 {
        T::popcount(self.0) as u8
    }

    /// Whether the set contains no element at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Whether the set contains every possible element.
    pub fn is_full(&self) -> bool {
        *self == Self::ALL
    }

    /// The sole element of the set, if the set is a singleton.
    ///
    /// Returns `Err(Empty)` for an empty set and `Ok(None)` when there is
    /// more than one element.
    pub fn unique(self) -> Result<Option<T>, Empty>
    where
        Iter<T>: Iterator<Item = T>,
    {
        match self.len() {
            0 => Err(Empty),
            1 => Ok(self.into_iter().next()),
            _ => Ok(None),
        }
    }

    /// The smallest element of the set.
    ///
    /// # Panic
    /// Panics on an empty set.
    pub(crate) fn one_possibility(self) -> T
    where
        Iter<T>: Iterator<Item = T>,
    {
        self.into_iter().next().expect("empty set")
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////

/// Element types a [`Set`] can hold
#[allow(missing_docs)]
pub trait SetElement: Sized + seal::Sealed {
    const ALL: Self::Storage;
    const NONE: Self::Storage;

    type Storage: BitAnd<Output = Self::Storage>
        + BitAndAssign
        + BitOr<Output = Self::Storage>
        + BitOrAssign
        + BitXor<Output = Self::Storage>
        + BitXorAssign
        + Not<Output = Self::Storage>
        + PartialOrd
        + Copy;

    fn popcount(bits: Self::Storage) -> u32;
    fn as_set(self) -> Set<Self>;
}

mod seal {
    pub trait Sealed {}
    impl Sealed for super::Cell {}
    impl Sealed for super::Digit {}
}

macro_rules! impl_set_element {
    ( $( $type:ty => $storage:ty, $all:expr );* $(;)* ) => {
        $(
            impl SetElement for $type {
                const ALL: $storage = $all;
                const NONE: $storage = 0;

                type Storage = $storage;

                fn popcount(bits: $storage) -> u32 {
                    bits.count_ones()
                }

                fn as_set(self) -> Set<Self> {
                    Set(1 << self.as_index() as u8)
                }
            }

            impl $type {
                /// The singleton set containing only this element.
                pub fn as_set(self) -> Set<Self> {
                    SetElement::as_set(self)
                }
            }
        )*
    };
}

impl_set_element!(
    // cells use 81 of the 128 bits
    Cell => u128, 0o777_777_777___777_777_777___777_777_777;
    // digits use 9 of the 16 bits
    Digit => u16, 0o777;
);

macro_rules! impl_set_iter {
    ( $( $type:ty => $from_index:expr ),* $(,)* ) => {
        $(
            impl Iterator for Iter<$type> {
                type Item = $type;

                fn next(&mut self) -> Option<$type> {
                    if self.0 == 0 {
                        return None;
                    }
                    let index = self.0.trailing_zeros() as u8;
                    // clear the lowest set bit
                    self.0 &= self.0 - 1;
                    Some($from_index(index))
                }
            }
        )*
    };
}

// a generic impl would need a bit_pos -> element function on SetElement
impl_set_iter!(
    Cell => Cell::new,
    Digit => Digit::from_index,
);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn digit_set_iterates_in_ascending_order() {
        let set = Set::<Digit>::from_bits(0b100010010);
        let digits = set.into_iter().map(Digit::get).collect::<Vec<_>>();
        assert_eq!(digits, [2, 5, 9]);
    }

    #[test]
    fn cell_set_iterates_in_ascending_order() {
        let set = Cell::new(0).as_set() | Cell::new(40) | Cell::new(80);
        let cells = set.into_iter().map(Cell::get).collect::<Vec<_>>();
        assert_eq!(cells, [0, 40, 80]);
    }

    #[test]
    fn unique_distinguishes_empty_single_multiple() {
        assert_eq!(Set::<Digit>::NONE.unique(), Err(Empty));
        assert_eq!(Digit::new(4).as_set().unique(), Ok(Some(Digit::new(4))));
        assert_eq!(Set::<Digit>::ALL.unique(), Ok(None));
    }

    #[test]
    fn not_is_complement() {
        let collapsed = Cell::new(0).as_set() | Cell::new(80).as_set();
        let open = !collapsed;
        assert_eq!(open.len(), 79);
        assert!(!open.contains(Cell::new(0).as_set()));
        assert!(open.contains(Cell::new(40).as_set()));
    }
}
