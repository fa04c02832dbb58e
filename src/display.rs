use std::fs::File;
use std::io::Write;
use chrono::Local;
use crate::schedule::{Attendee, MeetingSelection};

const SEPARATOR: &str = "==========================";

/// Formats meetings as a nested list, e.g. `[[1, 2], [3, 4]]`
pub fn format_meetings(meetings: &[Vec<Attendee>]) -> String {
    let inner: Vec<String> = meetings
        .iter()
        .map(|meeting| {
            let attendees: Vec<String> = meeting.iter().map(|a| a.to_string()).collect();
            format!("[{}]", attendees.join(", "))
        })
        .collect();
    format!("[{}]", inner.join(", "))
}

/// Formats one case's result block
pub fn format_case(index: usize, selection: &MeetingSelection) -> String {
    format!(
        "{}\nTest {}:\nResult Set: {}\nTotal number of attendee: {}\n",
        SEPARATOR,
        index,
        format_meetings(&selection.meetings),
        selection.total_attendees
    )
}

/// Prints one case's result block
pub fn print_case(index: usize, selection: &MeetingSelection) {
    print!("{}", format_case(index, selection));
}

/// Writes all results to a report file, headed by the generation time
pub fn write_report(
    results: &[MeetingSelection],
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(filename)?;

    writeln!(file, "** Meeting selection report **")?;
    writeln!(file, "Generated: {}", Local::now().to_rfc3339())?;

    for (index, selection) in results.iter().enumerate() {
        write!(file, "{}", format_case(index, selection))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::find_meeting_subsets;

    #[test]
    fn meetings_format_like_nested_lists() {
        let meetings = vec![
            vec![Attendee::Id(1), Attendee::Id(2)],
            vec![Attendee::from("ann")],
            vec![],
        ];
        assert_eq!(format_meetings(&meetings), "[[1, 2], ['ann'], []]");
        assert_eq!(format_meetings(&[]), "[]");
    }

    #[test]
    fn case_block_matches_runner_output() {
        let meetings = vec![vec![Attendee::Id(1), Attendee::Id(2)], vec![Attendee::Id(2)]];
        let selection = find_meeting_subsets(&meetings);
        assert_eq!(
            format_case(3, &selection),
            "==========================\nTest 3:\nResult Set: [[1, 2]]\nTotal number of attendee: 2\n"
        );
    }
}
