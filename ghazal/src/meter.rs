//! # ghazal-meter
//!
//! Estimate the meter of a Persian ghazal from its text alone.
//!
//! The scan (see `ghazallib::scansion`) yields three signals: the
//! average letters per hemistich, and long/short evidence for the
//! first and second syllables. This binary renders them as a report:
//! the normalized hemistichs, the length classification, the
//! per-syllable evidence with hemistich locations, and an overall
//! assessment naming candidate meters.
//!
//! ```bash
//! ghazal-meter -i poems/hafez-ghazal-001.txt
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use console::Style;
use ghazallib::{scan_file, MeterLength, MeterScan, SyllableEvidence, SyllableVerdict};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("ghazal-meter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Estimate the meter of a Persian ghazal from its opening hemistichs")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .required(true)
                .value_name("FILE")
                .help("Path of the input text file"),
        )
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("missing input path")?;

    let scan = scan_file(input)?;
    print!("{}", render_report(&scan));

    Ok(())
}

/// Render the full report for one scan.
fn render_report(scan: &MeterScan) -> String {
    let heading = Style::new().bold();
    let mut report = String::new();

    report.push_str(&format!(
        "{}\n",
        heading.apply_to("*** Assessing the following hemistichs ***")
    ));
    for (i, hemistich) in scan.hemistichs.iter().enumerate() {
        report.push_str(&format!("{}: {}\n", i + 1, hemistich));
    }

    report.push_str(&format!("{}\n", heading.apply_to("*** Meter length ***")));
    report.push_str(&render_length(scan));

    report.push_str(&format!(
        "{}\n",
        heading.apply_to("*** First syllable length ***")
    ));
    report.push_str(&render_first_syllable(&scan.first));

    report.push_str(&format!(
        "{}\n",
        heading.apply_to("*** Second syllable length ***")
    ));
    report.push_str(&render_second_syllable(&scan.second));

    report.push_str(&format!(
        "{}\n",
        heading.apply_to("*** Overall assessment ***")
    ));
    report.push_str(render_assessment(scan));

    report
}

/// The meter-length section.
fn render_length(scan: &MeterScan) -> String {
    let mut section = format!(
        "Average letters per hemistich: {:.1}\n",
        scan.length.avg_letters
    );

    match scan.length.length {
        MeterLength::Long => {
            section.push_str("The meter appears to be long (muṡamman).\n");
            if scan.length.borderline {
                section.push_str("(But this is pretty short for a long meter!)\n");
            }
        }
        MeterLength::Short => {
            section.push_str("The meter appears to be short (musaddas; or mutaqārib muṡamman).\n");
            if scan.length.borderline {
                section.push_str("(But this is pretty long for a short meter!)\n");
            }
        }
    }

    section
}

/// Comma-separated hemistich numbers.
fn locations(at: &[usize]) -> String {
    at.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The first-syllable section.
fn render_first_syllable(evidence: &SyllableEvidence) -> String {
    let mut section = String::new();

    if !evidence.long_at.is_empty() {
        section.push_str(&format!(
            "Indications of a long first syllable: {} (at {})\n",
            evidence.long_at.len(),
            locations(&evidence.long_at)
        ));
    }
    if !evidence.short_at.is_empty() {
        section.push_str(&format!(
            "Indications of a short first syllable: {} (at {})\n",
            evidence.short_at.len(),
            locations(&evidence.short_at)
        ));
    }

    match evidence.verdict() {
        SyllableVerdict::Mixed => {
            section
                .push_str("There are contradictory indications of a long vs. short first syllable.\n");
            section
                .push_str("If this is not an error, it suggests that the meter is probably ramal.\n");
        }
        SyllableVerdict::Long => {
            section.push_str("The first syllable in this meter appears to be long.\n");
        }
        SyllableVerdict::Short => {
            section.push_str("The first syllable in this meter appears to be short.\n");
        }
        SyllableVerdict::Unclear => {
            section.push_str("Insufficient evidence (< 2) of a long vs. short first syllable…\n");
            section.push_str(
                "(It's easier to detect short syllables. Scant results may suggest long.)\n",
            );
        }
    }

    section
}

/// The second-syllable section.
fn render_second_syllable(evidence: &SyllableEvidence) -> String {
    let mut section = String::new();

    if !evidence.long_at.is_empty() {
        section.push_str(&format!(
            "Suggestions of a long second syllable: {} (at {})\n",
            evidence.long_at.len(),
            locations(&evidence.long_at)
        ));
        if evidence.long_at.len() == 1 {
            section.push_str("(Be careful with this; one result is not much.)\n");
        }
    }
    if !evidence.short_at.is_empty() {
        section.push_str(&format!(
            "Suggestions of a short second syllable: {} (at {})\n",
            evidence.short_at.len(),
            locations(&evidence.short_at)
        ));
        if evidence.short_at.len() == 1 {
            section.push_str("(Be careful with this; one result is not much.)\n");
        }
    }

    match evidence.verdict() {
        SyllableVerdict::Mixed => {
            section.push_str(
                "There are contradictory indications of a long vs. short second syllable.\n",
            );
        }
        SyllableVerdict::Long => {
            section.push_str("The second syllable in this meter appears to be long.\n");
        }
        SyllableVerdict::Short => {
            section.push_str("The second syllable in this meter appears to be short.\n");
        }
        SyllableVerdict::Unclear => {
            section.push_str("Insufficient evidence (< 2) of a long vs. short second syllable…\n");
        }
    }

    section
}

/// The overall assessment: candidate meters from the three verdicts.
///
/// Mixed and unclear syllable evidence both read as indeterminate
/// here; the per-syllable sections have already said which.
fn render_assessment(scan: &MeterScan) -> &'static str {
    use SyllableVerdict::{Long, Short};

    match (scan.length.length, scan.first.verdict(), scan.second.verdict()) {
        (MeterLength::Long, Long, Long) => {
            "Long meter, long first syllable, long second syllable?\n\
             Consider, with short third and fourth syllables, hazaj (akhrab).\n\
             Consider, with a long fourth syllable, mużāri‘.\n"
        }
        (MeterLength::Long, Long, Short) => {
            "Long meter, long first syllable, short second syllable?\n\
             Consider ramal.\n"
        }
        (MeterLength::Long, Long, _) => {
            "Long meter, long first syllable, indeterminate second syllable?\n\
             Consider, with a long second syllable, hazaj (akhrab) or mużāri‘.\n\
             Consider, with a short second syllable, ramal.\n"
        }
        (MeterLength::Long, Short, Long) => {
            "Long meter, short first syllable, long second syllable?\n\
             Consider, with a long third syllable, hazaj (sālim).\n\
             Consider, with a short third syllable, mujtaṡṡ.\n"
        }
        (MeterLength::Long, Short, Short) => {
            "Long meter, short first syllable, short second syllable?\n\
             Consider ramal.\n"
        }
        (MeterLength::Long, Short, _) => {
            "Long meter, short first syllable, indeterminate second syllable?\n\
             Consider, with a long second syllable, hazaj (sālim) or mujtaṡṡ.\n\
             Consider, with a short second syllable, ramal.\n"
        }
        (MeterLength::Long, _, _) => {
            "What is clearest is that the meter appears to be long.\n\
             If there were mixed signals about the first syllable, consider ramal.\n"
        }
        (MeterLength::Short, Long, Long) => {
            "Short meter, long first syllable, long second syllable?\n\
             Consider hazaj (akhrab).\n"
        }
        (MeterLength::Short, Long, Short) => {
            "Short meter, long first syllable, short second syllable?\n\
             Consider, with a long third syllable, ramal or khafīf.\n\
             If the third syllable is short, enjoy the puzzle!\n"
        }
        (MeterLength::Short, Long, _) => {
            "Short meter, long first syllable, indeterminate second syllable?\n\
             Consider, with a long second syllable, hazaj (akhrab).\n\
             Consider, with a short second syllable, ramal or khafīf.\n"
        }
        (MeterLength::Short, Short, Long) => {
            "Short meter, short first syllable, long second syllable?\n\
             Consider hazaj or mutaqārib.\n"
        }
        (MeterLength::Short, Short, Short) => {
            "Short meter, short first syllable, short second syllable?\n\
             This would be rare. Consider ramal or khafīf.\n"
        }
        (MeterLength::Short, Short, _) => {
            "Short meter, short first syllable, indeterminate second syllable?\n\
             Consider, with a long second syllable, hazaj or mutaqārib.\n\
             Consider, with a short second syllable, ramal or khafīf.\n"
        }
        (MeterLength::Short, _, _) => {
            "What is clearest is that the meter appears to be short.\n\
             Were there mixed signals about the first syllable?\n\
             If so, consider ramal or khafīf.\n"
        }
    }
}
