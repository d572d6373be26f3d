//! Field parsers: free text in, one optional value out

use crate::rules::{TimeShape, AGE_RULE, SECONDS_WORD, SEX_RULES, TIME_RULES};
use halfpace_domain::{RaceTime, Sex};
use regex::Captures;
use tracing::debug;

/// Classify the declared sex of the runner
///
/// Case-insensitive whole-word match. Male forms are checked first, so a text
/// containing both vocabularies resolves to [`Sex::Male`].
pub fn parse_sex(text: &str) -> Sex {
    for rule in SEX_RULES.iter() {
        if let Some(m) = rule.pattern.find(text) {
            debug!(rule = rule.name, token = m.as_str(), "sex matched");
            return rule.sex;
        }
    }
    Sex::Unknown
}

/// Find the first number followed by an age unit
///
/// No bounds are applied: `0 lat` and `999 lat` are returned as written.
pub fn parse_age(text: &str) -> Option<u32> {
    let caps = AGE_RULE.captures(text)?;
    let age = group_value(&caps, 1)?;
    debug!(age, matched = &caps[0], "age matched");
    u32::try_from(age).ok()
}

/// Find the 5 km time
///
/// Delimited forms (`23:15`, `23,15`, `1:02:03`) win over worded ones
/// (`23 minuty`, `23 min 15 s`). A worded minutes value is combined with the
/// first seconds word found anywhere in the text, even when the two numbers
/// come from unrelated sentences.
pub fn parse_five_k_time(text: &str) -> Option<RaceTime> {
    for rule in TIME_RULES.iter() {
        let Some(caps) = rule.pattern.captures(text) else {
            continue;
        };

        let time = match rule.shape {
            TimeShape::Clock => clock_time(&caps),
            TimeShape::WordedMinutes => worded_time(&caps, text),
        };

        if let Some(time) = time {
            debug!(rule = rule.name, matched = &caps[0], %time, "5 km time matched");
            return Some(time);
        }
    }
    None
}

fn clock_time(caps: &Captures<'_>) -> Option<RaceTime> {
    let first = group_value(caps, 1)?;
    let second = group_value(caps, 2)?;

    match group_value(caps, 3) {
        Some(third) => Some(RaceTime::from_hms(first, second, third)),
        None => Some(RaceTime::from_minutes_seconds(first, second)),
    }
}

fn worded_time(caps: &Captures<'_>, text: &str) -> Option<RaceTime> {
    let minutes = group_value(caps, 1)?;
    let seconds = SECONDS_WORD
        .captures(text)
        .and_then(|s| group_value(&s, 1))
        .unwrap_or(0);

    Some(RaceTime::from_minutes_seconds(minutes, seconds))
}

fn group_value(caps: &Captures<'_>, index: usize) -> Option<u64> {
    caps.get(index)?.as_str().parse().ok()
}
