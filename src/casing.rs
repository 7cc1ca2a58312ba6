//! Letter-casing conventions.
//!
//! The [`rules()`] table drives the converter page: each [`CasingRule`]
//! pairs a display label with a pure transform. Words are split on the
//! literal space character only, so runs of spaces produce empty words.
//!
//! The word-normalizing conversions used on the command line live in
//! [`mode`].
use serde::Serialize;

use crate::util::{lowercase_first_cow, uppercase_first_cow};

pub mod mode;

pub use mode::{Mode, convert_chain};

const WORD_DELIMITER: char = ' ';

/// Pure string to string function applied by a rule.
pub type Transform = fn(&str) -> String;

/// A named casing transform.
#[derive(Clone, Copy)]
pub struct CasingRule {
    name: &'static str,
    transform: Transform,
}

impl CasingRule {
    pub const fn new(name: &'static str, transform: Transform) -> Self {
        Self { name, transform }
    }

    /// Display label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, input: &str) -> String {
        (self.transform)(input)
    }
}

impl std::fmt::Debug for CasingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CasingRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

static RULES: [CasingRule; 6] = [
    CasingRule::new("Upper Case", upper_case),
    CasingRule::new("Lower Case", lower_case),
    CasingRule::new("Kebab Case", kebab_case),
    CasingRule::new("Snake Case", snake_case),
    CasingRule::new("Camel Case", camel_case),
    CasingRule::new("Pascal Case", pascal_case),
];

/// Returns the casing rules in display order.
pub fn rules() -> &'static [CasingRule] {
    &RULES
}

/// Finds a rule by its display label.
pub fn find_rule(name: &str) -> Option<&'static CasingRule> {
    RULES.iter().find(|rule| rule.name == name)
}

pub fn upper_case(input: &str) -> String {
    input.to_uppercase()
}

pub fn lower_case(input: &str) -> String {
    input.to_lowercase()
}

pub fn kebab_case(input: &str) -> String {
    join_words(input, "-")
}

pub fn snake_case(input: &str) -> String {
    join_words(input, "_")
}

/// Lowercases the first character of every word and concatenates them.
///
/// The remainder of each word keeps its case, so `"hello world"` becomes
/// `"helloworld"`.
pub fn camel_case(input: &str) -> String {
    input
        .split(WORD_DELIMITER)
        .map(lowercase_first_cow)
        .collect()
}

/// Uppercases the first character of every word and concatenates them.
pub fn pascal_case(input: &str) -> String {
    input
        .split(WORD_DELIMITER)
        .map(uppercase_first_cow)
        .collect()
}

fn join_words(input: &str, separator: &str) -> String {
    input
        .split(WORD_DELIMITER)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Output of one rule for a given input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCase {
    pub name: &'static str,
    pub output: String,
}

/// Applies every rule, in display order, to `input`.
pub fn render(input: &str) -> Vec<RenderedCase> {
    RULES
        .iter()
        .map(|rule| RenderedCase {
            name: rule.name,
            output: rule.apply(input),
        })
        .collect()
}

/// Holds the current input and the outputs derived from it.
///
/// Outputs are recomputed synchronously whenever the input is replaced.
#[derive(Debug, Clone)]
pub struct CaseConverter {
    input: String,
    outputs: Vec<RenderedCase>,
}

impl CaseConverter {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            outputs: render(""),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn outputs(&self) -> &[RenderedCase] {
        &self.outputs
    }

    pub fn set_input<S: Into<String>>(&mut self, input: S) {
        self.input = input.into();
        self.outputs = render(&self.input);

        tracing::trace!(input_len = self.input.len(), "recomputed casings");
    }
}

impl Default for CaseConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        " ",
        "  ",
        "hello",
        "hello world",
        "Hello World",
        "hELLO wORLD",
        " leading",
        "trailing ",
        "a  b",
        "tab\tseparated words",
        "snake_case already",
        "Straße groß",
        "123 go",
    ];

    fn output_of(input: &str, name: &str) -> String {
        find_rule(name).unwrap().apply(input)
    }

    #[test]
    fn test_rule_order() {
        let names = rules().iter().map(|rule| rule.name()).collect::<Vec<_>>();

        assert_eq!(
            names,
            [
                "Upper Case",
                "Lower Case",
                "Kebab Case",
                "Snake Case",
                "Camel Case",
                "Pascal Case"
            ]
        );
    }

    #[test]
    fn test_rule_names_unique() {
        for (index, rule) in rules().iter().enumerate() {
            assert!(
                rules()[index + 1..]
                    .iter()
                    .all(|other| other.name() != rule.name())
            );
        }
    }

    #[test]
    fn test_hello_world() {
        let outputs = render("hello world");
        let outputs = outputs
            .iter()
            .map(|item| item.output.as_str())
            .collect::<Vec<_>>();

        assert_eq!(
            outputs,
            [
                "HELLO WORLD",
                "hello world",
                "hello-world",
                "hello_world",
                "helloworld",
                "HelloWorld"
            ]
        );
    }

    #[test]
    fn test_capitalized_words() {
        assert_eq!(output_of("Hello World", "Pascal Case"), "HelloWorld");
        assert_eq!(output_of("Hello World", "Camel Case"), "helloworld");
        assert_eq!(output_of("hELLO wORLD", "Camel Case"), "hELLOwORLD");
    }

    #[test]
    fn test_empty_input() {
        for rendered in render("") {
            assert_eq!(rendered.output, "", "{}", rendered.name);
        }
    }

    #[test]
    fn test_only_spaces() {
        assert_eq!(kebab_case("  "), "--");
        assert_eq!(snake_case("  "), "__");
        assert_eq!(camel_case("  "), "");
        assert_eq!(pascal_case("  "), "");
        assert_eq!(upper_case("  "), "  ");
    }

    #[test]
    fn test_consecutive_spaces_are_empty_words() {
        assert_eq!(kebab_case("a  b"), "a--b");
        assert_eq!(pascal_case("a  b"), "AB");
        assert_eq!(snake_case(" leading"), "_leading");
    }

    #[test]
    fn test_other_whitespace_is_not_a_delimiter() {
        assert_eq!(kebab_case("tab\tseparated"), "tab\tseparated");
        assert_eq!(pascal_case("new\nline"), "New\nline");
    }

    #[test]
    fn test_upper_lower_properties() {
        for input in SAMPLES {
            assert_eq!(upper_case(&lower_case(input)), upper_case(input));
        }

        assert_eq!(upper_case("Straße groß"), "STRASSE GROSS");
        assert_eq!(lower_case(&upper_case("Straße groß")), "strasse gross");
    }

    #[test]
    fn test_kebab_restores_spaces() {
        for input in SAMPLES.iter().filter(|input| !input.contains('-')) {
            let restored = kebab_case(input).split('-').collect::<Vec<_>>().join(" ");
            assert_eq!(&restored, input);
        }
    }

    #[test]
    fn test_camel_pascal_agree_ignoring_first_letters() {
        for input in SAMPLES {
            assert_eq!(
                lower_case(&camel_case(input)),
                lower_case(&pascal_case(input)),
                "{:?}",
                input
            );
        }

        assert_eq!(camel_case("Hello World"), "helloworld");
        assert_eq!(pascal_case("hello world"), "HelloWorld");
    }

    #[test]
    fn test_case_converter() {
        let mut converter = CaseConverter::new();

        assert_eq!(converter.input(), "");
        assert_eq!(converter.outputs().len(), 6);
        assert!(converter.outputs().iter().all(|item| item.output.is_empty()));

        converter.set_input("Hello World");
        assert_eq!(converter.input(), "Hello World");
        assert_eq!(converter.outputs(), render("Hello World").as_slice());

        converter.set_input("");
        assert_eq!(converter.outputs(), render("").as_slice());
    }
}
