//! Rule tables for the three extracted fields
//!
//! Every field is described by an ordered list of rules. Parsing walks the list
//! in order and stops at the first rule that matches, so the order of the
//! entries below is part of the observable behavior.

use halfpace_domain::Sex;
use once_cell::sync::Lazy;
use regex::Regex;

/// A pattern that classifies the whole text into one value
pub(crate) struct SexRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub sex: Sex,
}

/// How the capture groups of a time rule are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeShape {
    /// `MM:SS`, or `HH:MM:SS` when the third group is present
    Clock,
    /// A number followed by a minutes word; an optional seconds word may be
    /// found anywhere else in the text
    WordedMinutes,
}

/// A pattern for the 5 km time
pub(crate) struct TimeRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub shape: TimeShape,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid built-in extraction regex")
}

/// Male forms come first: when both vocabularies match, Male wins.
pub(crate) static SEX_RULES: Lazy<Vec<SexRule>> = Lazy::new(|| {
    vec![
        SexRule {
            name: "male",
            pattern: compile(
                r"(?i)\b(?:mężczyzn\p{L}*|mężczyźnie|facet\p{L}*|chłopak\p{L}*|chłopiec|chłopcem)\b",
            ),
            sex: Sex::Male,
        },
        SexRule {
            name: "female",
            pattern: compile(
                r"(?i)\b(?:kobiet\p{L}*|kobiecie|dziewczyn\p{L}*|dziewczynie)\b",
            ),
            sex: Sex::Female,
        },
    ]
});

/// A 1-3 digit number followed by an age unit ("37 lat", "25 lata", "40latek", "1 rok").
pub(crate) static AGE_RULE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\b(\d{1,3})\s*(?:latek|latka|lata|lat|roku|rok)\b")
});

/// Delimited clock times are tried before worded ones.
pub(crate) static TIME_RULES: Lazy<Vec<TimeRule>> = Lazy::new(|| {
    vec![
        TimeRule {
            name: "clock",
            pattern: compile(r"\b(\d{1,2})[:,](\d{1,2})(?:[:,](\d{1,2}))?\b"),
            shape: TimeShape::Clock,
        },
        TimeRule {
            name: "worded-minutes",
            pattern: compile(r"(?i)\b(\d{1,3})\s*(?:minut\p{L}*|min|m)(?:\b|\d)"),
            shape: TimeShape::WordedMinutes,
        },
    ]
});

/// Seconds word paired with a worded-minutes match ("15 s", "15 sek", "15 sekund").
///
/// The number may follow a letter directly so that run-together forms such as
/// "23m15s" read; it may not follow another digit.
pub(crate) static SECONDS_WORD: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)(?:\b|\p{L})(\d{1,2})\s*(?:sekund\p{L}*|sek|s)(?:\b|\d)")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_compile() {
        assert_eq!(SEX_RULES.len(), 2);
        assert_eq!(TIME_RULES.len(), 2);
        assert!(AGE_RULE.is_match("37 lat"));
        assert!(SECONDS_WORD.is_match("15 sek"));
        assert!(!SECONDS_WORD.is_match("2015s"));
    }

    #[test]
    fn test_male_rule_is_first() {
        assert_eq!(SEX_RULES[0].sex, Sex::Male);
        assert_eq!(SEX_RULES[1].sex, Sex::Female);
    }

    #[test]
    fn test_clock_rule_is_first() {
        assert_eq!(TIME_RULES[0].shape, TimeShape::Clock);
        assert_eq!(TIME_RULES[1].shape, TimeShape::WordedMinutes);
    }
}
