use std::fmt;
use std::io::{self, Write};

use journey_core::model::Cadence;
use services::{Clock, JourneyService};
use tracing::info;
use ui::OnboardingVm;

mod logging;
mod shell;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCadence { source: &'static str, raw: String },
    MissingTopic,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCadence { source, raw } => {
                write!(f, "invalid {source} value: {raw} (week, month or year)")
            }
            ArgsError::MissingTopic => write!(f, "status requires --topic or JOURNEY_TOPIC"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_cadence(source: &'static str, raw: String) -> Result<Cadence, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidCadence { source, raw })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  journey [start]  [--topic <text>] [--cadence week|month|year] [--log <filter>]");
    eprintln!("  journey status   --topic <text>  [--cadence week|month|year] [--json]");
    eprintln!();
    eprintln!("Without --topic, start asks for one.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  JOURNEY_TOPIC, JOURNEY_CADENCE, JOURNEY_LOG (falls back to RUST_LOG)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Status,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "start" => Some(Self::Start),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    topic: Option<String>,
    cadence: Option<Cadence>,
    log: Option<String>,
    json: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with_env(args, |key| std::env::var(key).ok())
    }

    /// Environment values seed the fields; flags override them.
    fn parse_with_env(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            topic: env("JOURNEY_TOPIC").filter(|value| !value.trim().is_empty()),
            cadence: env("JOURNEY_CADENCE")
                .map(|raw| parse_cadence("JOURNEY_CADENCE", raw))
                .transpose()?,
            ..Self::default()
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--topic" => parsed.topic = Some(require_value(args, "--topic")?),
                "--cadence" => {
                    let value = require_value(args, "--cadence")?;
                    parsed.cadence = Some(parse_cadence("--cadence", value)?);
                }
                "--log" => parsed.log = Some(require_value(args, "--log")?),
                "--json" => parsed.json = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

/// Ask for the onboarding fields that were not given on the command line.
fn onboard(args: &Args) -> io::Result<OnboardingVm> {
    let mut form = OnboardingVm::new();
    if let Some(cadence) = args.cadence {
        form.select_cadence(cadence);
    }
    if let Some(topic) = &args.topic {
        form.set_topic(topic.clone());
        return Ok(form);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Hello Learner")?;
    writeln!(stdout, "This app will help you learn everyday!")?;
    while !form.can_start() {
        write!(stdout, "I want to learn ({}): ", ui::vm::TOPIC_PLACEHOLDER)?;
        stdout.flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no topic given"));
        }
        form.set_topic(line.trim().to_owned());
        if let Some(problem) = form.topic_problem() {
            writeln!(stdout, "{problem}")?;
        }
    }
    if args.cadence.is_none() {
        let options: Vec<&str> = form.cadence_options().iter().map(|c| c.label()).collect();
        write!(stdout, "I want to learn it in a [{}]: ", options.join("/"))?;
        stdout.flush()?;
        let mut line = String::new();
        stdin.read_line(&mut line)?;
        if let Ok(cadence) = line.parse::<Cadence>() {
            form.select_cadence(cadence);
        }
    }
    Ok(form)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: start the interactive tracker when no subcommand is given.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Start,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Start,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };
    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    logging::init(&logging::resolve_filter(parsed.log.as_deref()));
    let service = JourneyService::new(Clock::default_clock());

    match cmd {
        Command::Start => {
            let form = onboard(&parsed)?;
            let mut activity = form.start(service).map_err(|err| err.message())?;
            info!(topic = activity.journey().goal().topic(), "tracker opened");

            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell::run(&mut activity, stdin.lock(), &mut stdout)?;
            Ok(())
        }
        Command::Status => {
            let topic = parsed.topic.as_deref().ok_or(ArgsError::MissingTopic)?;
            let journey = service.start_journey(topic, parsed.cadence.unwrap_or_default())?;
            let mut stdout = io::stdout();
            if parsed.json {
                writeln!(stdout, "{}", service.snapshot(&journey).to_json()?)?;
            } else {
                let activity = ui::ActivityVm::new(service, journey);
                shell::write_status(&activity, &mut stdout)?;
            }
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        parse_with_env(args, &[])
    }

    fn parse_with_env(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        Args::parse_with_env(&mut args.iter().map(|s| (*s).to_owned()), |key| {
            env.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        })
    }

    #[test]
    fn flags_fill_args() {
        let args = parse(&["--topic", "Swift", "--cadence", "Month", "--json"]).unwrap();
        assert_eq!(args.topic.as_deref(), Some("Swift"));
        assert_eq!(args.cadence, Some(Cadence::Month));
        assert!(args.json);
    }

    #[test]
    fn bad_cadence_is_reported() {
        let err = parse(&["--cadence", "daily"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid --cadence value: daily (week, month or year)");
        assert!(matches!(err, ArgsError::InvalidCadence { raw, .. } if raw == "daily"));
    }

    #[test]
    fn bad_env_cadence_names_the_variable() {
        let err = parse_with_env(&[], &[("JOURNEY_CADENCE", "daily")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid JOURNEY_CADENCE value: daily (week, month or year)");
    }

    #[test]
    fn env_seeds_fields_and_flags_override() {
        let env = [("JOURNEY_TOPIC", "Go"), ("JOURNEY_CADENCE", "year")];

        let from_env = parse_with_env(&[], &env).unwrap();
        assert_eq!(from_env.topic.as_deref(), Some("Go"));
        assert_eq!(from_env.cadence, Some(Cadence::Year));

        let flagged = parse_with_env(&["--topic", "Swift", "--cadence", "week"], &env).unwrap();
        assert_eq!(flagged.topic.as_deref(), Some("Swift"));
        assert_eq!(flagged.cadence, Some(Cadence::Week));
    }

    #[test]
    fn blank_env_topic_is_ignored() {
        let args = parse_with_env(&[], &[("JOURNEY_TOPIC", "   ")]).unwrap();
        assert!(args.topic.is_none());
    }

    #[test]
    fn missing_value_names_flag() {
        let err = parse(&["--topic"]).unwrap_err();
        assert_eq!(err.to_string(), "--topic requires a value");
    }

    #[test]
    fn subcommands_are_recognised() {
        assert_eq!(Command::from_arg("status"), Some(Command::Status));
        assert_eq!(Command::from_arg("seed"), None);
    }
}
