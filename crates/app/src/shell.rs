use std::fmt;
use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use journey_core::model::Cadence;
use services::LogOutcome;
use ui::ActivityVm;
use ui::calendar::{DayCell, Swatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Learned,
    Freeze,
    Status,
    Json,
    Week,
    Month(Option<NaiveDate>),
    Goal { topic: String, cadence: Option<Cadence> },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingTopic,
    InvalidDate(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => f.write_str("type a command, or `help`"),
            CommandError::Unknown(raw) => write!(f, "unknown command: {raw}"),
            CommandError::MissingTopic => f.write_str("goal requires a topic"),
            CommandError::InvalidDate(raw) => write!(f, "invalid date (want YYYY-MM-DD): {raw}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parse one input line.
    ///
    /// `goal` treats a trailing `week`/`month`/`year` word as the cadence and
    /// the rest as the topic.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let rest: Vec<&str> = words.collect();

        match head.to_ascii_lowercase().as_str() {
            "learned" | "l" => Ok(Self::Learned),
            "freeze" | "f" => Ok(Self::Freeze),
            "status" | "s" => Ok(Self::Status),
            "json" => Ok(Self::Json),
            "week" | "w" => Ok(Self::Week),
            "month" | "m" => match rest.first() {
                None => Ok(Self::Month(None)),
                Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map(|date| Self::Month(Some(date)))
                    .map_err(|_| CommandError::InvalidDate((*raw).to_owned())),
            },
            "goal" | "g" => parse_goal(&rest),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_owned())),
        }
    }
}

fn parse_goal(words: &[&str]) -> Result<Command, CommandError> {
    let (topic_words, cadence) = match words.split_last() {
        Some((last, init)) if !init.is_empty() => match last.parse::<Cadence>() {
            Ok(cadence) => (init, Some(cadence)),
            Err(_) => (words, None),
        },
        _ => (words, None),
    };
    if topic_words.is_empty() {
        return Err(CommandError::MissingTopic);
    }
    Ok(Command::Goal {
        topic: topic_words.join(" "),
        cadence,
    })
}

pub const HELP: &str = "\
commands:
  learned | l            log today as learned
  freeze  | f            spend a freeze on today
  status  | s            show today's state and counters
  json                   print status as JSON
  week    | w            show this week
  month   | m [date]     show the month, highlighting date (YYYY-MM-DD)
  goal    | g <topic> [week|month|year]
  help    | h
  quit    | q";

/// Read commands until `quit` or end of input.
///
/// # Errors
///
/// Returns I/O errors from reading input or writing output.
pub fn run<R: BufRead, W: Write>(
    activity: &mut ActivityVm,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    write_status(activity, output)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(activity, command, output)?,
            Err(err) => writeln!(output, "{err}")?,
        }
    }
    Ok(())
}

/// Apply a single command and print its result.
///
/// # Errors
///
/// Returns I/O errors from writing output.
pub fn execute<W: Write>(
    activity: &mut ActivityVm,
    command: Command,
    output: &mut W,
) -> io::Result<()> {
    match command {
        Command::Learned => {
            let outcome = activity.tap_log_learned();
            write_outcome(activity, outcome, output)
        }
        Command::Freeze => {
            let outcome = activity.tap_log_freezed();
            write_outcome(activity, outcome, output)
        }
        Command::Status => write_status(activity, output),
        Command::Json => match activity.snapshot().to_json() {
            Ok(json) => writeln!(output, "{json}"),
            Err(err) => writeln!(output, "{err}"),
        },
        Command::Week => write_week(activity, output),
        Command::Month(selected) => {
            write_month(activity, selected.unwrap_or_else(|| activity.today()), output)
        }
        Command::Goal { topic, cadence } => {
            let cadence = cadence.unwrap_or_else(|| activity.journey().goal().cadence());
            match activity.edit_goal(&topic, cadence) {
                Ok(()) => writeln!(output, "{} ({cadence})", activity.title()),
                Err(err) => writeln!(output, "{}", err.message()),
            }
        }
        Command::Help => writeln!(output, "{HELP}"),
        Command::Quit => Ok(()),
    }
}

fn write_outcome<W: Write>(
    activity: &ActivityVm,
    outcome: Option<LogOutcome>,
    output: &mut W,
) -> io::Result<()> {
    match outcome {
        Some(_) => writeln!(output, "{}", activity.main_button_label().replace('\n', " ")),
        None if activity.is_day_logged() => {
            writeln!(output, "already logged today ({})", activity.state())
        }
        None => writeln!(output, "no freezes left"),
    }?;
    writeln!(
        output,
        "{} | {}",
        activity.learned_text(),
        activity.freeze_text()
    )
}

/// Print the title, today's state and the counters.
///
/// # Errors
///
/// Returns I/O errors from writing output.
pub fn write_status<W: Write>(activity: &ActivityVm, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", activity.title())?;
    writeln!(output, "today: {}", activity.state())?;
    writeln!(
        output,
        "{} | {}",
        activity.learned_text(),
        activity.freeze_text()
    )
}

fn write_week<W: Write>(activity: &ActivityVm, output: &mut W) -> io::Result<()> {
    let strip = activity.week_strip();
    writeln!(output, "{}", strip.title())?;
    let labels: Vec<String> = strip
        .weekday_labels()
        .iter()
        .map(|label| format!("{label:^5}"))
        .collect();
    writeln!(output, "{}", labels.concat())?;
    let cells: Vec<String> = strip.cells().iter().map(cell_text).collect();
    writeln!(output, "{}", cells.concat())
}

fn write_month<W: Write>(
    activity: &ActivityVm,
    selected: NaiveDate,
    output: &mut W,
) -> io::Result<()> {
    let grid = activity.month_grid(selected);
    writeln!(output, "{} (selected {})", grid.title(), grid.formatter().selected())?;

    let mut row: Vec<String> = (0..grid.leading_blanks()).map(|_| " ".repeat(5)).collect();
    for cell in grid.cells() {
        row.push(cell_text(&cell));
        if row.len() == 7 {
            writeln!(output, "{}", row.concat().trim_end())?;
            row.clear();
        }
    }
    if !row.is_empty() {
        writeln!(output, "{}", row.concat().trim_end())?;
    }
    Ok(())
}

/// Five columns per cell: `[23]` for a ringed or highlighted day.
fn cell_text(cell: &DayCell) -> String {
    let marked = cell.appearance.ring
        || (cell.appearance.fill == Swatch::Orange && cell.appearance.fill_opacity >= 1.0);
    if marked {
        format!("[{:>2}] ", cell.number)
    } else {
        format!(" {:>2}  ", cell.number)
    }
}
