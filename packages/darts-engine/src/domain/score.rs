//! Score arithmetic over notation tokens. Fail-soft: anything unparseable is 0.

use crate::domain::notation::Dart;

/// Typed form of a token, with unrecognised input read as a miss.
pub fn dart_or_miss(token: &str) -> Dart {
    token.parse::<Dart>().unwrap_or(Dart::Miss)
}

/// Point value of a single notation token.
pub fn score_notation(token: &str) -> u32 {
    dart_or_miss(token).value()
}

/// Sum of point values over a sequence of tokens.
pub fn sum_notations<I, S>(tokens: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|t| score_notation(t.as_ref()))
        .sum()
}
