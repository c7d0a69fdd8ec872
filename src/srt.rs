use crate::timecode::parse_seconds;

/// Start and end of a subtitle, kept as the text found in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeframe {
    pub(crate) start: String,
    pub(crate) end: String,
}

impl Timeframe {
    /// Seconds from the end of this frame to the start of `next`.
    /// Negative when the two overlap. Saturates on absurd timestamps.
    pub fn seconds_until(&self, next: &Timeframe) -> i64 {
        parse_seconds(&next.start).saturating_sub(parse_seconds(&self.end))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) index: i64,
    pub(crate) timeframe: Timeframe,
    pub(crate) text: Vec<String>,
}
