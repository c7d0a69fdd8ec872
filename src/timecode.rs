use crate::srt::Timeframe;

use log::debug;
use nom::bytes::complete::{tag, take_until, take_while};
use nom::character::complete::char;
use nom::combinator::rest;
use nom::multi::separated_list1;
use nom::sequence::separated_pair;
use nom::IResult;

const ARROW: &str = "-->";
const FRACTION: char = ',';

/// Whole seconds in an `HH:MM:SS,mmm` timestamp. The fraction is ignored.
///
/// This never fails: a field that is missing or not a number counts as zero,
/// and a total that does not fit in an `i64` saturates.
pub fn parse_seconds(timestamp: &str) -> i64 {
    let clock = match timestamp.find(FRACTION) {
        Some(idx) => &timestamp[..idx],
        None => timestamp,
    }
    .trim();

    let fields = match clock_fields(clock) {
        Ok((_, fields)) => fields,
        Err(_) => Vec::new(),
    };
    let field = |n: usize| fields.get(n).map_or(0, |f| lenient_number(f, timestamp));
    let (hours, minutes, seconds) = (field(0), field(1), field(2));

    let exact = hours
        .checked_mul(3600)
        .and_then(|s| minutes.checked_mul(60).and_then(|m| s.checked_add(m)))
        .and_then(|s| s.checked_add(seconds));
    match exact {
        Some(total) => total,
        None => {
            debug!("Timestamp '{}' is out of range, saturating", timestamp);
            hours
                .saturating_mul(3600)
                .saturating_add(minutes.saturating_mul(60))
                .saturating_add(seconds)
        }
    }
}

/// A range line has both timestamps (two colons each) and the arrow.
pub fn is_range_line(line: &str) -> bool {
    line.matches(':').count() == 4 && line.contains(ARROW)
}

/// Splits a line at the first arrow. Both halves are trimmed, not validated.
pub fn parse_range(line: &str) -> Option<Timeframe> {
    match range(line) {
        Ok((_, (start, end))) => Some(Timeframe {
            start: start.trim().to_string(),
            end: end.trim().to_string(),
        }),
        Err(_) => None,
    }
}

fn clock_fields(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char(':'), take_while(|c: char| c != ':'))(input)
}

fn range(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_until(ARROW), tag(ARROW), rest)(input)
}

fn lenient_number(field: &str, timestamp: &str) -> i64 {
    match field.parse() {
        Ok(n) => n,
        Err(_) => {
            debug!("Treating field '{}' of timestamp '{}' as 0", field, timestamp);
            0
        }
    }
}
