//! Input validators. Each hands the input back when it is acceptable.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zА-Яа-я\s]{2,50}$").expect("name pattern is valid"));

pub const AGE_RANGE: RangeInclusive<i64> = 1..=120;

pub fn email(input: &str) -> Option<&str> {
    let local = input.split('@').next()?;
    let well_formed = EMAIL_RE.is_match(input)
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..");
    well_formed.then_some(input)
}

/// Latin or Russian letters and whitespace, 2 to 50 characters.
pub fn name(input: &str) -> Option<&str> {
    NAME_RE.is_match(input).then_some(input)
}

pub fn age(input: i64) -> Option<i64> {
    AGE_RANGE.contains(&input).then_some(input)
}
