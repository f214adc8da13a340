//! Dart notation tokens (e.g., "T20", "D16", "Bull") and their typed form.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::errors::EngineError;

/// Ring of a numbered segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Multiplier {
    Single,
    Double,
    Triple,
}

impl Multiplier {
    /// Points factor (1/2/3); also the "hit value" used by Killer and Donkey Derby.
    pub const fn factor(self) -> u32 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Triple => 3,
        }
    }

    const fn prefix(self) -> char {
        match self {
            Multiplier::Single => 'S',
            Multiplier::Double => 'D',
            Multiplier::Triple => 'T',
        }
    }
}

/// A single dart as it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dart {
    /// Numbered segment 1..=20 in one of its rings.
    Segment { multiplier: Multiplier, number: u8 },
    /// Outer bull, 25.
    Outer,
    /// Inner bull, 50. Counts as a double for entry/out rules.
    Bull,
    Miss,
    /// Bare number that is not a board target; scores its face value.
    Points(u32),
}

impl Dart {
    pub const fn single(number: u8) -> Self {
        Dart::Segment {
            multiplier: Multiplier::Single,
            number,
        }
    }

    pub const fn double(number: u8) -> Self {
        Dart::Segment {
            multiplier: Multiplier::Double,
            number,
        }
    }

    pub const fn triple(number: u8) -> Self {
        Dart::Segment {
            multiplier: Multiplier::Triple,
            number,
        }
    }

    pub fn value(self) -> u32 {
        match self {
            Dart::Segment { multiplier, number } => multiplier.factor() * number as u32,
            Dart::Outer => 25,
            Dart::Bull => 50,
            Dart::Miss => 0,
            Dart::Points(n) => n,
        }
    }

    /// Ring of the dart, with the bulls read as single (outer) and double (inner).
    pub fn multiplier(self) -> Option<Multiplier> {
        match self {
            Dart::Segment { multiplier, .. } => Some(multiplier),
            Dart::Outer => Some(Multiplier::Single),
            Dart::Bull => Some(Multiplier::Double),
            Dart::Miss | Dart::Points(_) => None,
        }
    }

    /// Numbered segment hit, if any. Bulls have no segment.
    pub fn segment(self) -> Option<u8> {
        match self {
            Dart::Segment { number, .. } => Some(number),
            _ => None,
        }
    }

    pub fn is_double(self) -> bool {
        self.multiplier() == Some(Multiplier::Double)
    }

    pub fn is_triple(self) -> bool {
        self.multiplier() == Some(Multiplier::Triple)
    }
}

impl Display for Dart {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Dart::Segment { multiplier, number } => write!(f, "{}{number}", multiplier.prefix()),
            Dart::Outer => write!(f, "Outer"),
            Dart::Bull => write!(f, "Bull"),
            Dart::Miss => write!(f, "Miss"),
            Dart::Points(n) => write!(f, "{n}"),
        }
    }
}

fn parse_number(digits: &str, token: &str) -> Result<u32, EngineError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::parse_dart(token));
    }
    digits
        .parse::<u32>()
        .map_err(|_| EngineError::parse_dart(token))
}

impl FromStr for Dart {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(EngineError::parse_dart(s));
        }

        match token.to_ascii_lowercase().as_str() {
            "bull" | "bullseye" => return Ok(Dart::Bull),
            "outer" => return Ok(Dart::Outer),
            "miss" => return Ok(Dart::Miss),
            _ => {}
        }

        let first = token.as_bytes()[0].to_ascii_uppercase();
        let multiplier = match first {
            b'S' => Some(Multiplier::Single),
            b'D' => Some(Multiplier::Double),
            b'T' => Some(Multiplier::Triple),
            _ => None,
        };

        let Some(multiplier) = multiplier else {
            // Bare number: board targets get their typed form, anything else keeps its value.
            let n = parse_number(token, s)?;
            return Ok(match n {
                0 => Dart::Miss,
                1..=20 => Dart::single(n as u8),
                25 => Dart::Outer,
                50 => Dart::Bull,
                other => Dart::Points(other),
            });
        };

        let number = parse_number(&token[1..], s)?;
        match (multiplier, number) {
            (_, 1..=20) => Ok(Dart::Segment {
                multiplier,
                number: number as u8,
            }),
            (Multiplier::Single, 25) => Ok(Dart::Outer),
            (Multiplier::Double, 25) => Ok(Dart::Bull),
            _ => Err(EngineError::parse_dart(s)),
        }
    }
}
