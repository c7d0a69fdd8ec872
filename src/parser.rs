use crate::error::ParseError;
use crate::srt::{Entry, Timeframe};
use crate::timecode;

use std::mem;

use log::debug;

const BOM: char = '\u{FEFF}';

#[derive(Debug)]
enum State {
    NoEntry,
    AwaitingTimeframe { index: i64 },
    CollectingLines(Entry),
}

/// Everything recovered from one subtitle file.
#[derive(Debug, Default)]
pub struct Parsed {
    pub entries: Vec<Entry>,
    pub problems: Vec<ParseError>,
}

/// Line-at-a-time scanner for SRT blocks.
///
/// Feed every line of a file in order, then call [`Parser::finish`]. A block
/// whose index or range line is malformed is dropped; the error names the
/// 1-based line it was found on.
#[derive(Debug)]
pub struct Parser {
    state: State,
    entries: Vec<Entry>,
    line_number: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: State::NoEntry,
            entries: Vec::new(),
            line_number: 0,
        }
    }

    pub fn feed(&mut self, raw: &str) -> Result<(), ParseError> {
        self.line_number += 1;
        let raw = if self.line_number == 1 {
            raw.trim_start_matches(BOM)
        } else {
            raw
        };
        let line = raw.trim();

        match mem::replace(&mut self.state, State::NoEntry) {
            State::NoEntry => match line.parse() {
                Ok(index) => self.state = State::AwaitingTimeframe { index },
                Err(_) => {
                    return Err(ParseError::NumberExpected {
                        line: self.line_number,
                    })
                }
            },
            State::AwaitingTimeframe { index } => match range_line(line) {
                Some(timeframe) => {
                    self.state = State::CollectingLines(Entry {
                        index,
                        timeframe,
                        text: Vec::new(),
                    })
                }
                None => {
                    return Err(ParseError::TimeframeExpected {
                        line: self.line_number,
                    })
                }
            },
            State::CollectingLines(mut entry) => {
                if line.is_empty() {
                    self.finalize(entry);
                } else {
                    entry.text.push(line.to_string());
                    self.state = State::CollectingLines(entry);
                }
            }
        }
        Ok(())
    }

    /// Closes the input. A block still collecting text is kept even without
    /// a trailing blank line.
    pub fn finish(mut self) -> Vec<Entry> {
        match mem::replace(&mut self.state, State::NoEntry) {
            State::CollectingLines(entry) => self.finalize(entry),
            State::AwaitingTimeframe { index } => {
                debug!("Dropping entry #{} cut off before its time range", index)
            }
            State::NoEntry => (),
        }
        self.entries
    }

    fn finalize(&mut self, entry: Entry) {
        debug!(
            "Entry #{} ({} --> {}): {} line(s)",
            entry.index,
            entry.timeframe.start,
            entry.timeframe.end,
            entry.text.len()
        );
        self.entries.push(entry);
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

fn range_line(line: &str) -> Option<Timeframe> {
    if timecode::is_range_line(line) {
        timecode::parse_range(line)
    } else {
        None
    }
}

pub fn parse_lines<I, S>(lines: I) -> Parsed
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::new();
    let mut problems = Vec::new();
    for line in lines {
        if let Err(err) = parser.feed(line.as_ref()) {
            problems.push(err);
        }
    }
    Parsed {
        entries: parser.finish(),
        problems,
    }
}
