use csv::ReaderBuilder;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::schedule::{Attendee, Meeting};

/// One list of meetings to run the selector on
pub type TestCase = Vec<Meeting>;

/// Parses a JSON array of test cases, e.g. `[[[1, 2], [3]], [["ann"], ["bob"]]]`
pub fn parse_test_cases_json(json: &str) -> Result<Vec<TestCase>, Box<dyn std::error::Error>> {
    let cases: Vec<TestCase> = serde_json::from_str(json)?;
    Ok(cases)
}

/// Loads test cases from a JSON file
pub fn load_test_cases_json<P: AsRef<Path>>(json_path: P) -> Result<Vec<TestCase>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(json_path)?;
    parse_test_cases_json(&content)
}

/// Reads meetings from CSV data, one meeting per record
///
/// There is no header row and records may differ in length. Empty fields are
/// skipped, so a record of only empty fields is a meeting nobody attends.
pub fn read_meetings_csv<R: Read>(reader: R) -> Result<Vec<Meeting>, Box<dyn std::error::Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut meetings = Vec::new();
    for result in reader.records() {
        let record = result?;
        let meeting: Meeting = record
            .iter()
            .filter(|field| !field.is_empty())
            .map(Attendee::parse)
            .collect();
        meetings.push(meeting);
    }

    debug!("Read {} meetings from CSV", meetings.len());
    Ok(meetings)
}

/// Loads meetings from a CSV file
pub fn load_meetings_csv<P: AsRef<Path>>(csv_path: P) -> Result<Vec<Meeting>, Box<dyn std::error::Error>> {
    let file = fs::File::open(csv_path)?;
    read_meetings_csv(file)
}

/// Loads test cases from a file: a `.csv` file is a single case, anything else a JSON case list
pub fn load_test_cases<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    let cases = if is_csv {
        vec![load_meetings_csv(path)?]
    } else {
        load_test_cases_json(path)?
    };

    info!("Loaded {} test case(s) from {}", cases.len(), path.display());
    Ok(cases)
}
