use crate::srt::Entry;

use std::io::{self, Write};

/// Turns entries into transcript lines. A blank line goes in front of any
/// entry that starts more than `pause_threshold` seconds after the previous
/// one ended.
pub fn render(entries: &[Entry], pause_threshold: u32) -> Vec<String> {
    let threshold = i64::from(pause_threshold);
    let mut lines = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        if idx > 0 {
            let gap = entries[idx - 1].timeframe.seconds_until(&entry.timeframe);
            if gap > threshold {
                lines.push(String::new());
            }
        }
        lines.extend(entry.text.iter().cloned());
    }
    lines
}

pub fn write_lines<W: Write>(buf: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(buf, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srt::Timeframe;
    use std::io::Cursor;

    fn entry(start: &str, end: &str, text: &[&str]) -> Entry {
        Entry {
            index: 0,
            timeframe: Timeframe {
                start: start.to_string(),
                end: end.to_string(),
            },
            text: text.iter().map(|t| t.to_string()).collect(),
        }
    }

    macro_rules! test_gap {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (next_start, expected) = $value;
                let entries = vec![
                    entry("00:00:00,000", "00:00:05,000", &["A"]),
                    entry(next_start, "00:10:00,000", &["B"]),
                ];

                assert_eq!(render(&entries, 10), expected);
            }
        )*
        }
    }

    test_gap! {
        test_gap_none: ("00:00:05,000", vec!["A", "B"]),
        test_gap_exactly_threshold: ("00:00:15,900", vec!["A", "B"]),
        test_gap_above_threshold: ("00:00:16,000", vec!["A", "", "B"]),
        test_gap_overlap: ("00:00:01,000", vec!["A", "B"]),
    }

    #[test]
    fn first_entry_never_gets_a_blank_line() {
        let entries = vec![entry("00:05:00,000", "00:05:01,000", &["Late start"])];

        assert_eq!(render(&entries, 10), vec!["Late start"]);
    }

    #[test]
    fn gap_is_measured_from_previous_entry() {
        let entries = vec![
            entry("00:00:01,000", "00:00:02,000", &["Hello", "you"]),
            entry("00:00:20,000", "00:00:22,000", &["World"]),
            entry("00:00:25,000", "00:00:26,000", &["again"]),
        ];

        assert_eq!(
            render(&entries, 10),
            vec!["Hello", "you", "", "World", "again"]
        );
    }

    #[test]
    fn threshold_is_configurable() {
        let entries = vec![
            entry("00:00:01,000", "00:00:02,000", &["A"]),
            entry("00:00:05,000", "00:00:06,000", &["B"]),
        ];

        assert_eq!(render(&entries, 2), vec!["A", "", "B"]);
        assert_eq!(render(&entries, 3), vec!["A", "B"]);
    }

    #[test]
    fn empty_entry_still_separates() {
        let entries = vec![
            entry("00:00:01,000", "00:00:02,000", &["A"]),
            entry("00:01:00,000", "00:01:01,000", &[]),
            entry("00:01:02,000", "00:01:03,000", &["B"]),
        ];

        assert_eq!(render(&entries, 10), vec!["A", "", "B"]);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let entries = vec![
            entry("00:00:01,000", "00:00:02,000", &["A"]),
            entry("00:00:40,000", "00:00:41,000", &["B"]),
        ];

        assert_eq!(render(&entries, 10), render(&entries, 10));
    }

    #[test]
    fn writes_one_line_each() {
        let lines = vec!["Hello".to_string(), String::new(), "World".to_string()];
        let mut buf = Cursor::new(vec![]);

        write_lines(&mut buf, &lines).expect("Failed to write to buffer");

        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "Hello\n\nWorld\n"
        );
    }
}
