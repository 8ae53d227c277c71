//! The two board axes.
//!
//! Files run `A..=H` from white's left to right, ranks run `1..=8` from
//! white's side to black's. Both are ordered enums whose index arithmetic
//! fails closed: stepping past either edge yields `None`.

use std::fmt;

/// Board column, `A` through `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// Board row, `One` through `Eight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl File {
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: i8) -> Option<File> {
        if index < 0 || index > 7 {
            return None;
        }
        Some(File::ALL[index as usize])
    }

    /// The file `delta` columns away, or `None` past the A or H edge.
    #[inline]
    pub const fn add(self, delta: i8) -> Option<File> {
        match (self as i8).checked_add(delta) {
            Some(index) => File::from_index(index),
            None => None,
        }
    }

    /// Signed column distance from `self` to `target`.
    #[inline]
    pub const fn difference(self, target: File) -> i8 {
        target as i8 - self as i8
    }

    pub fn from_char(c: char) -> Option<File> {
        match c.to_ascii_uppercase() {
            letter @ 'A'..='H' => File::from_index((letter as u8 - b'A') as i8),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn from_index(index: i8) -> Option<Rank> {
        if index < 0 || index > 7 {
            return None;
        }
        Some(Rank::ALL[index as usize])
    }

    /// The rank `delta` rows away, or `None` past rank 1 or rank 8.
    #[inline]
    pub const fn add(self, delta: i8) -> Option<Rank> {
        match (self as i8).checked_add(delta) {
            Some(index) => Rank::from_index(index),
            None => None,
        }
    }

    /// Signed row distance from `self` to `target`.
    #[inline]
    pub const fn difference(self, target: Rank) -> i8 {
        target as i8 - self as i8
    }

    /// The rank as printed on the board (`1..=8`).
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_char(c: char) -> Option<Rank> {
        match c {
            digit @ '1'..='8' => Rank::from_index((digit as u8 - b'1') as i8),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
