use meeting_mover::display::{print_case, write_report};
use meeting_mover::parser::{load_test_cases, TestCase};
use meeting_mover::samples::{random_cases, sample_cases};
use meeting_mover::schedule::{find_meeting_subsets, MeetingSelection};
use meeting_mover::web;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8080;
const DEMO_MEETINGS_PER_CASE: usize = 12;
const DEMO_MAX_ATTENDEES: usize = 5;
const DEMO_POPULATION: i64 = 20;

fn usage() -> &'static str {
    "usage: meeting-mover [samples | run <file> | demo [count] [seed] | web [port]] [--out <report>]"
}

/// Runs every case, prints each result block and optionally writes a report
fn run_cases(cases: &[TestCase], out: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let results: Vec<MeetingSelection> = cases.iter().map(|case| find_meeting_subsets(case)).collect();

    for (index, selection) in results.iter().enumerate() {
        print_case(index, selection);
    }

    if let Some(path) = out {
        write_report(&results, path)?;
        info!("Report saved to {}", path);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("meeting_mover=info".parse()?))
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    // Pull out `--out <path>` wherever it appears
    let mut out: Option<String> = None;
    if let Some(pos) = args.iter().position(|a| a == "--out") {
        if pos + 1 >= args.len() {
            return Err(format!("--out needs a path\n{}", usage()).into());
        }
        out = Some(args.remove(pos + 1));
        args.remove(pos);
    }

    let mode = args.first().map(String::as_str).unwrap_or("samples");
    match mode {
        "web" => {
            let port = match args.get(1) {
                Some(p) => p.parse::<u16>()?,
                None => std::env::var("MEETING_MOVER_PORT")
                    .ok()
                    .and_then(|p| p.parse::<u16>().ok())
                    .unwrap_or(DEFAULT_PORT),
            };
            println!("Access the service at http://localhost:{}", port);
            web::start_server(port).await?;
        }
        "run" => {
            let path = args.get(1).ok_or_else(|| format!("run needs a file\n{}", usage()))?;
            let cases = load_test_cases(path)?;
            run_cases(&cases, out.as_deref())?;
        }
        "demo" => {
            let count = match args.get(1) {
                Some(c) => c.parse::<usize>()?,
                None => 3,
            };
            let seed = match args.get(2) {
                Some(s) => s.parse::<u64>()?,
                None => rand::random(),
            };
            info!("Generating {} random case(s) with seed {}", count, seed);
            let cases = random_cases(count, DEMO_MEETINGS_PER_CASE, DEMO_MAX_ATTENDEES, DEMO_POPULATION, seed);
            run_cases(&cases, out.as_deref())?;
        }
        "samples" => {
            let cases: Vec<TestCase> = sample_cases().into_iter().map(|s| s.meetings).collect();
            run_cases(&cases, out.as_deref())?;
        }
        other => {
            return Err(format!("unknown mode '{}'\n{}", other, usage()).into());
        }
    }

    Ok(())
}
