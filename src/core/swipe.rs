//! Line-driven swipe session: one gesture per input line.

use crate::core::recorder::{AttendanceRecorder, AttendanceStore, CommitOutcome, RecorderState};
use crate::models::attendance::{AttendanceStatus, Tally};
use crate::ui::messages::{info_line, success_line, warning_line};
use crate::utils::colors::colorize_status;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Classify(AttendanceStatus),
    Undo,
    Reset,
    Quit,
}

impl Gesture {
    pub fn parse(input: &str) -> Option<Self> {
        let word = input.trim().to_lowercase();
        match word.as_str() {
            "u" | "undo" => Some(Gesture::Undo),
            "r" | "reset" => Some(Gesture::Reset),
            "q" | "quit" | "exit" => Some(Gesture::Quit),
            other => AttendanceStatus::parse(other).map(Gesture::Classify),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeSummary {
    pub tally: Tally,
    pub complete: bool,
    pub rollbacks: usize,
}

const HINT: &str = "Keys: p = present, a = absent, u = undo, r = reset, q = quit";

fn write_prompt<W: Write>(recorder: &AttendanceRecorder, out: &mut W) -> io::Result<()> {
    match recorder.current_person() {
        Some(person) => writeln!(
            out,
            "→ [{}/{}] {}   ({})",
            recorder.decisions().len() + 1,
            recorder.roster_len(),
            person.name,
            recorder.tally()
        ),
        None => writeln!(
            out,
            "{}",
            success_line(format!(
                "All {} members recorded ({}).",
                recorder.roster_len(),
                recorder.tally()
            ))
        ),
    }
}

/// Feed `input` lines into `recorder`, writing prompts and notices to `out`.
/// Ends on `q` or end of input.
pub fn run_session<S, R, W>(
    recorder: &mut AttendanceRecorder,
    store: &mut S,
    input: R,
    out: &mut W,
) -> io::Result<SwipeSummary>
where
    S: AttendanceStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut rollbacks = 0;

    if recorder.roster_len() == 0 {
        writeln!(out, "{}", info_line("No active members on the roster."))?;
        return Ok(SwipeSummary {
            tally: recorder.tally(),
            complete: false,
            rollbacks,
        });
    }

    writeln!(out, "{}", HINT)?;
    write_prompt(recorder, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Gesture::parse(&line) {
            Some(Gesture::Quit) => break,
            Some(Gesture::Classify(status)) => {
                if recorder.state() == RecorderState::Complete {
                    writeln!(
                        out,
                        "{}",
                        info_line("Everyone is recorded. Use 'u' to undo or 'q' to quit.")
                    )?;
                    continue;
                }
                match recorder.commit(status, store) {
                    Some(CommitOutcome::Saved { person, status }) => {
                        writeln!(
                            out,
                            "  {}: {}",
                            person.name,
                            colorize_status(status.to_db_str(), status.is_present())
                        )?;
                    }
                    Some(rolled_back @ CommitOutcome::RolledBack { .. }) => {
                        rollbacks += 1;
                        if let Some(notice) = rolled_back.notice() {
                            writeln!(out, "{}", warning_line(notice))?;
                        }
                    }
                    None => {}
                }
            }
            Some(Gesture::Undo) => match recorder.undo() {
                Some(decision) => {
                    let name = recorder
                        .current_person()
                        .map(|p| p.name.clone())
                        .unwrap_or_default();
                    writeln!(
                        out,
                        "{}",
                        info_line(format!("Undid {} ({}).", name, decision.status))
                    )?;
                }
                None => writeln!(out, "{}", info_line("Nothing to undo."))?,
            },
            Some(Gesture::Reset) => {
                if recorder.reset() {
                    writeln!(out, "{}", info_line("Starting over with the full roster."))?;
                }
            }
            None => {
                writeln!(out, "Unknown input '{}'. {}", line.trim(), HINT)?;
                continue;
            }
        }

        write_prompt(recorder, out)?;
    }

    Ok(SwipeSummary {
        tally: recorder.tally(),
        complete: recorder.state() == RecorderState::Complete,
        rollbacks,
    })
}
