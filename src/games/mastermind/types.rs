//! Core domain types for Mastermind.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use tracing::instrument;

/// A coloured peg from the fixed palette.
///
/// Pegs carry no ordering semantics beyond equality. Their declaration
/// order is the palette order: a palette of size `n` uses the first `n`
/// colours.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum Peg {
    /// Red (R).
    Red,
    /// Green (G).
    Green,
    /// Blue (B).
    Blue,
    /// Yellow (Y).
    Yellow,
    /// Orange (O).
    Orange,
    /// Purple (P).
    Purple,
    /// Cyan (C).
    Cyan,
    /// White (W).
    White,
}

impl Peg {
    /// Every colour, in palette order.
    pub const ALL: [Peg; Peg::COUNT] = [
        Peg::Red,
        Peg::Green,
        Peg::Blue,
        Peg::Yellow,
        Peg::Orange,
        Peg::Purple,
        Peg::Cyan,
        Peg::White,
    ];

    /// Returns the first `size` colours of the palette.
    pub fn palette(size: usize) -> &'static [Peg] {
        &Self::ALL[..size.min(Self::COUNT)]
    }

    /// Zero-based palette index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a peg from its zero-based palette index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Single-letter code used for compact display and input.
    pub fn initial(self) -> char {
        match self {
            Peg::Red => 'R',
            Peg::Green => 'G',
            Peg::Blue => 'B',
            Peg::Yellow => 'Y',
            Peg::Orange => 'O',
            Peg::Purple => 'P',
            Peg::Cyan => 'C',
            Peg::White => 'W',
        }
    }

    /// Parses a peg from its initial (case-insensitive).
    pub fn from_initial(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        Self::iter().find(|peg| peg.initial() == c)
    }

    /// Human-readable colour name.
    pub fn label(self) -> &'static str {
        match self {
            Peg::Red => "Red",
            Peg::Green => "Green",
            Peg::Blue => "Blue",
            Peg::Yellow => "Yellow",
            Peg::Orange => "Orange",
            Peg::Purple => "Purple",
            Peg::Cyan => "Cyan",
            Peg::White => "White",
        }
    }

    /// Parses a peg from its name (case-insensitive).
    pub fn from_label(s: &str) -> Option<Self> {
        Self::iter().find(|peg| peg.label().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An ordered list of pegs.
///
/// Sequences may repeat colours. Length and palette membership are
/// checked by the board, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct Sequence(Vec<Peg>);

impl Sequence {
    /// Creates a sequence from pegs.
    pub fn new(pegs: Vec<Peg>) -> Self {
        Self(pegs)
    }

    /// Number of pegs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence has no pegs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the pegs as a slice.
    pub fn pegs(&self) -> &[Peg] {
        &self.0
    }

    /// Iterates over the pegs in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Peg> {
        self.0.iter()
    }

    /// Parses player input against a palette of `palette_size` colours.
    ///
    /// Accepts colour initials (`RGBY`), colour names (`red green`) or
    /// 1-based palette indices (`1 2 3 4`). Tokens may be separated by
    /// whitespace or commas; a single unseparated token is read one
    /// character per peg.
    #[instrument]
    pub fn parse(input: &str, palette_size: usize) -> Result<Self, ParseSequenceError> {
        let tokens: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let pegs = match tokens.as_slice() {
            [] => return Err(ParseSequenceError::Empty),
            [single] if Peg::from_label(single).is_none() => single
                .chars()
                .map(|c| parse_char(c, palette_size))
                .collect::<Result<Vec<_>, _>>()?,
            many => many
                .iter()
                .map(|t| parse_token(t, palette_size))
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self(pegs))
    }
}

fn parse_char(c: char, palette_size: usize) -> Result<Peg, ParseSequenceError> {
    if let Some(digit) = c.to_digit(10) {
        return peg_from_position(digit as usize, palette_size)
            .ok_or_else(|| ParseSequenceError::UnknownPeg(c.to_string()));
    }
    Peg::from_initial(c).ok_or_else(|| ParseSequenceError::UnknownPeg(c.to_string()))
}

fn parse_token(token: &str, palette_size: usize) -> Result<Peg, ParseSequenceError> {
    if let Ok(position) = token.parse::<usize>() {
        return peg_from_position(position, palette_size)
            .ok_or_else(|| ParseSequenceError::UnknownPeg(token.to_string()));
    }
    let mut chars = token.chars();
    let initial = match (chars.next(), chars.next()) {
        (Some(c), None) => Peg::from_initial(c),
        _ => None,
    };
    initial
        .or_else(|| Peg::from_label(token))
        .ok_or_else(|| ParseSequenceError::UnknownPeg(token.to_string()))
}

/// Maps a 1-based palette position to a peg.
fn peg_from_position(position: usize, palette_size: usize) -> Option<Peg> {
    if position == 0 || position > palette_size {
        return None;
    }
    Peg::from_index(position - 1)
}

impl FromIterator<Peg> for Sequence {
    fn from_iter<I: IntoIterator<Item = Peg>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Peg;
    type IntoIter = std::slice::Iter<'a, Peg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::str::FromStr for Sequence {
    type Err = ParseSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Peg::COUNT)
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for peg in &self.0 {
            write!(f, "{}", peg.initial())?;
        }
        Ok(())
    }
}

/// Error parsing a sequence from player input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseSequenceError {
    /// Nothing was entered.
    #[display("No pegs entered")]
    Empty,

    /// A token is not a colour of the palette.
    #[display("Unknown peg {:?}", _0)]
    UnknownPeg(String),
}

impl std::error::Error for ParseSequenceError {}

/// Feedback for one guess: exact matches and colour-only matches.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_new::new,
)]
pub struct Feedback {
    exact: usize,
    color_only: usize,
}

impl Feedback {
    /// Pegs with the right colour in the right position.
    pub fn exact(&self) -> usize {
        self.exact
    }

    /// Further pegs with a colour present elsewhere in the secret.
    pub fn color_only(&self) -> usize {
        self.color_only
    }

    /// Total number of matched pegs.
    pub fn total(&self) -> usize {
        self.exact + self.color_only
    }

    /// Returns true if every one of `length` pegs matched exactly.
    pub fn is_solved(&self, length: usize) -> bool {
        self.exact == length
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} exact, {} colour only", self.exact, self.color_only)
    }
}

/// A recorded guess and the feedback it earned.
///
/// Attempts are append-only: once on the board they never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Attempt {
    /// The guessed sequence.
    guess: Sequence,
    /// Feedback computed against the secret.
    feedback: Feedback,
}

impl std::fmt::Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.guess, self.feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_prefix() {
        assert_eq!(Peg::palette(3), &[Peg::Red, Peg::Green, Peg::Blue]);
        assert_eq!(Peg::palette(100).len(), Peg::COUNT);
    }

    #[test]
    fn test_initials_are_unique() {
        for peg in Peg::iter() {
            assert_eq!(Peg::from_initial(peg.initial()), Some(peg));
            assert_eq!(Peg::from_index(peg.index()), Some(peg));
        }
    }

    #[test]
    fn test_parse_compact_initials() {
        let seq = Sequence::parse("rgby", 6).unwrap();
        assert_eq!(seq.pegs(), &[Peg::Red, Peg::Green, Peg::Blue, Peg::Yellow]);
        assert_eq!(seq.to_string(), "RGBY");
    }

    #[test]
    fn test_parse_indices_and_names() {
        let seq = Sequence::parse("1, 2 purple 6", 6).unwrap();
        assert_eq!(seq.pegs(), &[Peg::Red, Peg::Green, Peg::Purple, Peg::Purple]);

        let seq = Sequence::parse("1243", 4).unwrap();
        assert_eq!(seq.pegs(), &[Peg::Red, Peg::Green, Peg::Yellow, Peg::Blue]);
    }

    #[test]
    fn test_parse_single_colour_name() {
        let seq = Sequence::parse("green", 6).unwrap();
        assert_eq!(seq.pegs(), &[Peg::Green]);
    }

    #[test]
    fn test_parse_rejects_index_outside_palette() {
        assert_eq!(
            Sequence::parse("1 7", 6),
            Err(ParseSequenceError::UnknownPeg("7".to_string()))
        );
        assert_eq!(Sequence::parse("   ", 6), Err(ParseSequenceError::Empty));
        assert!(Sequence::parse("RGXZ", 6).is_err());
    }

    #[test]
    fn test_feedback_solved() {
        let feedback = Feedback::new(4, 0);
        assert!(feedback.is_solved(4));
        assert!(!Feedback::new(3, 1).is_solved(4));
        assert_eq!(Feedback::new(2, 1).total(), 3);
    }
}
