//! Word-normalizing case conversions.
//!
//! Unlike the display rules, modes first break the input into lowercase
//! words: `-` and `_` count as spaces, surrounding whitespace is trimmed and
//! runs of whitespace collapse.
use std::{fmt::Display, str::FromStr};

use crate::{
    error::{ParseError, ParseErrorKind},
    util::uppercase_first_cow,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Upper,
    Lower,
    Kebab,
    Snake,
    Camel,
    Pascal,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Self::Upper,
        Self::Lower,
        Self::Kebab,
        Self::Snake,
        Self::Camel,
        Self::Pascal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Kebab => "kebab",
            Self::Snake => "snake",
            Self::Camel => "camel",
            Self::Pascal => "pascal",
        }
    }

    pub fn convert(&self, input: &str) -> String {
        match self {
            Self::Upper => input.to_uppercase(),
            Self::Lower => input.to_lowercase(),
            Self::Kebab => split_words(input).join("-"),
            Self::Snake => split_words(input).join("_"),
            Self::Pascal => split_words(input)
                .iter()
                .map(|word| uppercase_first_cow(word))
                .collect(),
            Self::Camel => {
                let words = split_words(input);
                let Some((first, rest)) = words.split_first() else {
                    return String::new();
                };
                let mut output = first.clone();
                output.extend(rest.iter().map(|word| uppercase_first_cow(word)));
                output
            }
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| {
                let names = Self::ALL.map(|mode| mode.name()).join(", ");

                ParseError::new(ParseErrorKind::UnknownMode)
                    .with_snippet(s)
                    .with_expected(format!("one of {}", names))
            })
    }
}

fn split_words(input: &str) -> Vec<String> {
    input
        .trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Applies `modes` to `input` from left to right.
pub fn convert_chain<'a, I>(input: &str, modes: I) -> String
where
    I: IntoIterator<Item = &'a Mode>,
{
    modes.into_iter().fold(input.to_string(), |text, mode| {
        let converted = mode.convert(&text);
        tracing::debug!(
            %mode,
            input = text.as_str(),
            output = converted.as_str(),
            "converted"
        );
        converted
    })
}
