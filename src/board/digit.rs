use std::fmt;
use std::num::NonZeroU8;

/// One of the nine symbols that go into sudoku cells.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Creates the digit with the given value.
    ///
    /// # Panic
    /// Panics, if `digit` is outside `1..=9`.
    pub fn new(digit: u8) -> Self {
        match Self::new_checked(digit) {
            Some(digit) => digit,
            None => panic!("digit out of range 1..=9: {}", digit),
        }
    }

    /// Creates the digit with the given value, if it is one of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        match digit {
            1..=9 => NonZeroU8::new(digit).map(Digit),
            _ => None,
        }
    }

    /// Creates the digit with index `idx`, i.e. the digit `idx + 1`.
    ///
    /// # Panic
    /// Panics, if `idx` is outside `0..=8`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Digit::new(idx + 1)
    }

    /// Returns an iterator over all nine digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=9).map(Digit::new)
    }

    /// The digit as a number in `1..=9`.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// The digit as an index in `0..=8`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
