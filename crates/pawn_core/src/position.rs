use std::fmt;
use std::str::FromStr;

use crate::{error::PositionParseError, piece::Color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Both neighbouring files that exist, left to right.
    pub fn neighbours(self) -> impl Iterator<Item = File> {
        [self.previous(), self.next()].into_iter().flatten()
    }

    pub fn is_adjacent(self, other: File) -> bool {
        self.index().abs_diff(other.index()) == 1
    }

    pub fn from_char(c: char) -> Result<Self, PositionParseError> {
        match c.to_ascii_uppercase() {
            letter @ 'A'..='H' => Ok(Self::ALL[(letter as u8 - b'A') as usize]),
            _ => Err(PositionParseError::UnexpectedFile(c)),
        }
    }

    pub fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// One step in the direction `color` travels: White goes up, Black goes down.
    pub fn advance(self, color: Color) -> Option<Self> {
        match color {
            Color::White => self.next(),
            Color::Black => self.previous(),
        }
    }

    /// The rank a pawn of `color` cannot advance from.
    pub fn last_for(color: Color) -> Self {
        match color {
            Color::White => Rank::Eight,
            Color::Black => Rank::One,
        }
    }

    pub fn from_char(c: char) -> Result<Self, PositionParseError> {
        match c {
            digit @ '1'..='8' => Ok(Self::ALL[(digit as u8 - b'1') as usize]),
            _ => Err(PositionParseError::UnexpectedRank(c)),
        }
    }

    pub fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub file: File,
    pub rank: Rank,
}

impl Position {
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    /// Every square, files A to H, and within a file ranks 1 to 8.
    pub fn all() -> impl Iterator<Item = Position> {
        File::ALL
            .into_iter()
            .flat_map(|file| Rank::ALL.into_iter().map(move |rank| Position { file, rank }))
    }

    /// Index into the file-major board encoding.
    pub fn index(self) -> usize {
        self.file.index() * 8 + self.rank.index()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Some(Self {
            file: File::from_index(index / 8)?,
            rank: Rank::from_index(index % 8)?,
        })
    }

    /// The square one step ahead for a pawn of `color`.
    pub fn advanced(self, color: Color) -> Option<Self> {
        self.rank.advance(color).map(|rank| Position { file: self.file, rank })
    }

    pub fn diagonals(self, color: Color) -> Vec<Position> {
        let Some(rank) = self.rank.advance(color) else {
            return Vec::new();
        };
        self.file
            .neighbours()
            .map(|file| Position { file, rank })
            .collect()
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Ok(Self {
                file: File::from_char(file)?,
                rank: Rank::from_char(rank)?,
            }),
            _ => Err(PositionParseError::BadLength(s.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn file_navigation_stops_at_the_edges() {
        assert_eq!(File::A.previous(), None);
        assert_eq!(File::A.next(), Some(File::B));
        assert_eq!(File::H.next(), None);
        assert_eq!(File::H.previous(), Some(File::G));
    }

    #[test]
    fn rank_advance_depends_on_color() {
        assert_eq!(Rank::Two.advance(Color::White), Some(Rank::Three));
        assert_eq!(Rank::Two.advance(Color::Black), Some(Rank::One));
        assert_eq!(Rank::Eight.advance(Color::White), None);
        assert_eq!(Rank::One.advance(Color::Black), None);
    }

    #[test]
    fn diagonals_on_the_edge_file() {
        assert_eq!(pos("A2").diagonals(Color::White), vec![pos("B3")]);
        assert_eq!(pos("H7").diagonals(Color::Black), vec![pos("G6")]);
        assert_eq!(pos("D4").diagonals(Color::White), vec![pos("C5"), pos("E5")]);
    }

    #[test]
    fn diagonals_past_the_last_rank_are_empty() {
        assert!(pos("D8").diagonals(Color::White).is_empty());
        assert!(pos("D1").diagonals(Color::Black).is_empty());
    }

    #[test]
    fn parse_and_display() {
        let p = pos("c4");
        assert_eq!(p, Position::new(File::C, Rank::Four));
        assert_eq!(p.to_string(), "C4");
    }

    #[test]
    fn malformed_positions_are_rejected() {
        assert_eq!(
            "I4".parse::<Position>(),
            Err(PositionParseError::UnexpectedFile('I'))
        );
        assert_eq!(
            "A9".parse::<Position>(),
            Err(PositionParseError::UnexpectedRank('9'))
        );
        assert!(matches!(
            "A10".parse::<Position>(),
            Err(PositionParseError::BadLength(_))
        ));
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn encoding_index_is_file_major() {
        assert_eq!(pos("A1").index(), 0);
        assert_eq!(pos("A8").index(), 7);
        assert_eq!(pos("B1").index(), 8);
        assert_eq!(pos("H8").index(), 63);
        assert_eq!(Position::from_index(9), Some(pos("B2")));
        assert_eq!(Position::all().count(), 64);
        assert!(Position::all().enumerate().all(|(i, p)| p.index() == i));
    }
}
