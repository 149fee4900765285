use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// Largest neighbor count in the Moore neighborhood.
pub const MAX_NEIGHBORS: u8 = 8;

/// Birth/survival rule of a Life-like automaton, e.g. `B3/S23`.
///
/// Both sets are stored as bitmasks over `0..=8`: bit `i` set means
/// `i` live neighbors are a member.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    birth: u16,
    survival: u16,
}

impl RuleSet {
    /// Conway's Game of Life.
    pub const LIFE: Self = Self::from_masks(1 << 3, (1 << 2) | (1 << 3));
    pub const HIGH_LIFE: Self = Self::from_masks((1 << 3) | (1 << 6), (1 << 2) | (1 << 3));
    /// No survival at all, every live cell dies each generation.
    pub const SEEDS: Self = Self::from_masks(1 << 2, 0);
    /// Symmetric under inversion of live and dead cells.
    pub const DAY_NIGHT: Self = Self::from_masks(
        (1 << 3) | (1 << 6) | (1 << 7) | (1 << 8),
        (1 << 3) | (1 << 4) | (1 << 6) | (1 << 7) | (1 << 8),
    );
    pub const MAZE: Self = Self::from_masks(1 << 3, 0b11_1110);
    pub const LIFE_WITHOUT_DEATH: Self = Self::from_masks(1 << 3, 0x1ff);

    const fn from_masks(birth: u16, survival: u16) -> Self {
        Self { birth, survival }
    }

    /// Builds a rule from explicit neighbor counts. Order and duplicates don't matter.
    pub fn new(birth: &[u8], survival: &[u8]) -> Result<Self> {
        let mask = |counts: &[u8], letter: char| {
            counts.iter().try_fold(0u16, |acc, &n| {
                if n > MAX_NEIGHBORS {
                    Err(Error::invalid_rule(
                        &format!("{letter}{counts:?}"),
                        format!("neighbor count {n} exceeds {MAX_NEIGHBORS}"),
                    ))
                } else {
                    Ok(acc | (1 << n))
                }
            })
        };
        Ok(Self {
            birth: mask(birth, 'B')?,
            survival: mask(survival, 'S')?,
        })
    }

    /// Neighbor counts that turn a dead cell alive, ascending.
    pub fn birth(&self) -> Vec<u8> {
        members(self.birth)
    }

    /// Neighbor counts that keep a live cell alive, ascending.
    pub fn survival(&self) -> Vec<u8> {
        members(self.survival)
    }

    #[inline]
    pub fn is_birth(&self, neighbors: u8) -> bool {
        neighbors <= MAX_NEIGHBORS && (self.birth >> neighbors) & 1 != 0
    }

    #[inline]
    pub fn is_survival(&self, neighbors: u8) -> bool {
        neighbors <= MAX_NEIGHBORS && (self.survival >> neighbors) & 1 != 0
    }
}

fn members(mask: u16) -> Vec<u8> {
    (0..=MAX_NEIGHBORS).filter(|&n| (mask >> n) & 1 != 0).collect()
}

/// Parses one `<letter><digits>` segment into a bitmask.
fn parse_segment(rule: &str, segment: &str, letter: char) -> Result<u16> {
    let digits = segment
        .strip_prefix(letter)
        .or_else(|| segment.strip_prefix(letter.to_ascii_lowercase()))
        .ok_or_else(|| Error::invalid_rule(rule, format!("missing '{letter}' segment")))?;
    digits.chars().try_fold(0u16, |acc, c| match c.to_digit(10) {
        Some(n) if n <= MAX_NEIGHBORS as u32 => Ok(acc | (1 << n)),
        _ => Err(Error::invalid_rule(
            rule,
            format!("'{c}' in '{letter}' segment is not a digit in 0..=8"),
        )),
    })
}

impl FromStr for RuleSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rule = s.trim();
        let (b, s) = rule
            .split_once('/')
            .ok_or_else(|| Error::invalid_rule(rule, "missing '/' separator"))?;
        Ok(Self {
            birth: parse_segment(rule, b.trim(), 'B')?,
            survival: parse_segment(rule, s.trim(), 'S')?,
        })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::LIFE
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |mask| {
            members(mask)
                .into_iter()
                .map(|n| char::from(b'0' + n))
                .collect::<String>()
        };
        write!(f, "B{}/S{}", digits(self.birth), digits(self.survival))
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({self})")
    }
}
