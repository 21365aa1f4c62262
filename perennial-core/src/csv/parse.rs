//! Tolerant parsing of delimited event rows.

use crate::event::Event;
use crate::ids::IdGen;

/// Parse raw delimited text into events. Never fails.
///
/// Lines are trimmed and empty lines dropped. A leading header row is
/// skipped. Each remaining row needs an integer month (1-12), an integer
/// day (>= 1; the upper limit is the UI boundary's concern) and a
/// non-empty title; rows that fall short are dropped silently and do not
/// disturb the rows after them. Input order is preserved.
///
/// An empty result means "nothing usable was found", not an error;
/// callers keep their prior state in that case.
pub fn parse_events(text: &str, ids: &mut impl IdGen) -> Vec<Event> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if let Some(first) = lines.first() {
        if is_header(first) {
            lines.remove(0);
        }
    }

    let mut events = Vec::new();
    for line in lines {
        if let Some(event) = parse_row(line, ids) {
            events.push(event);
        }
    }
    events
}

/// Header sniff: substring containment only, so column order and exact
/// spelling in the source file don't matter.
fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("month") && lower.contains("day") && lower.contains("title")
}

/// Parse one row, or None if it should be skipped.
fn parse_row(line: &str, ids: &mut impl IdGen) -> Option<Event> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 3 {
        return None;
    }

    let month: u32 = fields[0].trim().parse().ok().filter(|m| (1..=12).contains(m))?;
    let day: u32 = fields[1].trim().parse().ok().filter(|d| *d >= 1)?;

    // Everything after the second field is rejoined verbatim, so a title
    // containing the delimiter comes back intact.
    let title = fields[2..].join(",");
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    Some(Event::new(ids.next_id(), month, day, title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialGen;

    fn parse(text: &str) -> Vec<Event> {
        parse_events(text, &mut SequentialGen::default())
    }

    #[test]
    fn test_parse_basic_rows() {
        let events = parse("3,15,Pi Day\n12,25,Christmas");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].month, 3);
        assert_eq!(events[0].day, 15);
        assert_eq!(events[0].title, "Pi Day");
        assert_eq!(events[1].title, "Christmas");
    }

    #[test]
    fn test_parse_assigns_fresh_ids_in_order() {
        let events = parse("3,15,Pi Day\n12,25,Christmas");
        assert_eq!(events[0].id, "event-1");
        assert_eq!(events[1].id, "event-2");
    }

    #[test]
    fn test_header_row_is_skipped() {
        let with_header = parse("month,day,title\n3,15,Pi Day");
        let without = parse("3,15,Pi Day");
        assert_eq!(with_header.len(), 1);
        assert_eq!(with_header[0].title, without[0].title);
    }

    #[test]
    fn test_header_sniff_ignores_case_order_and_whitespace() {
        let events = parse("  Title , DAY , Month \n3,15,Pi Day");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Pi Day");
    }

    #[test]
    fn test_header_only_in_first_line() {
        // A later line mentioning all three words is a row, not a header,
        // and gets dropped on its own merits (non-numeric month).
        let events = parse("3,15,Pi Day\nmonth,day,title");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_two_fields_yield_nothing() {
        assert!(parse("5,10").is_empty());
    }

    #[test]
    fn test_non_numeric_month_skips_row_only() {
        let events = parse("May,10,Birthday\n6,1,Kept");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Kept");
    }

    #[test]
    fn test_title_with_delimiter_is_rejoined() {
        let events = parse("9,1,Labor,Day Extra");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Labor,Day Extra");
    }

    #[test]
    fn test_blank_lines_and_padding_ignored() {
        let events = parse("\n\n  3 , 15 ,  Pi Day  \n\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].month, 3);
        assert_eq!(events[0].title, "Pi Day");
    }

    #[test]
    fn test_crlf_input() {
        let events = parse("month,day,title\r\n3,15,Pi Day\r\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Pi Day");
    }

    #[test]
    fn test_month_out_of_range_skipped() {
        assert!(parse("13,5,Bad Month").is_empty());
        assert!(parse("0,5,Bad Month").is_empty());
    }

    #[test]
    fn test_empty_title_skipped() {
        assert!(parse("3,15,   ").is_empty());
        assert!(parse("3,15,,").is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n").is_empty());
    }

    #[test]
    fn test_end_to_end_mixed_payload() {
        let events = parse("month,day,title\n3,15,Pi Day\n13,5,Bad Month\n7,,Missing Day\n9,1,Labor,Day Extra");
        assert_eq!(events.len(), 2);
        assert_eq!((events[0].month, events[0].day, events[0].title.as_str()), (3, 15, "Pi Day"));
        assert_eq!((events[1].month, events[1].day, events[1].title.as_str()), (9, 1, "Labor,Day Extra"));
    }
}
