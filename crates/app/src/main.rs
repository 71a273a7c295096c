use std::fmt;

use eagle_core::model::{LessonId, PostId, UserId};
use services::{AppServices, Clock};

mod commands;
mod telemetry;

const DEFAULT_REDIRECT: &str = "http://localhost:8080/reset-password";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingOperand { command: &'static str, what: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidUserId { raw: String },
    InvalidDbUrl { raw: String },
    InvalidNumber { what: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingOperand { command, what } => write!(f, "{command} requires {what}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            ArgsError::InvalidUserId { raw } => write!(f, "invalid user id: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidNumber { what, raw } => write!(f, "invalid {what}: {raw}"),
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Overview,
    Lessons { page: usize },
    Lesson(LessonId),
    /// Answers are 1-based option numbers; empty means ask on stdin.
    Quiz { lesson: LessonId, answers: Vec<usize> },
    Completed,
    Progress,
    Feed,
    Post(String),
    Like(PostId),
    Follow(UserId),
    Followers,
    Following,
    Users,
    ForgotPassword { email: String, redirect_to: String },
    ResetPassword { link: String },
}

struct Args {
    db_url: String,
    user_id: UserId,
    command: Command,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  eagle [--db <sqlite_url>] [--user <uuid>] <command> [args]");
    eprintln!();
    eprintln!("Learning:");
    eprintln!("  overview                      streak, today's lesson and journey (default)");
    eprintln!("  lessons [page]                incomplete lessons, 5 per page");
    eprintln!("  lesson <id>                   read a lesson");
    eprintln!("  quiz <id> [answers...]        take a quiz; answers are option numbers");
    eprintln!("  completed                     lessons already passed");
    eprintln!("  progress                      streaks, stats and badges");
    eprintln!();
    eprintln!("Community:");
    eprintln!("  feed | post <text> | like <post-id>");
    eprintln!("  follow <user-id>              follow or unfollow");
    eprintln!("  followers | following | users");
    eprintln!();
    eprintln!("Account:");
    eprintln!("  forgot-password <email> [--redirect <url>]");
    eprintln!("  reset-password <link>         reads the new password twice from stdin");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:eagle.sqlite3");
    eprintln!("  --user the local learner");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EAGLE_DB_URL, EAGLE_USER_ID, EAGLE_AUTH_URL, EAGLE_AUTH_KEY,");
    eprintln!("  EAGLE_LOG (default info), EAGLE_LOG_FORMAT=json");
}

fn parse_number<T: std::str::FromStr>(what: &'static str, raw: &str) -> Result<T, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidNumber {
        what,
        raw: raw.to_string(),
    })
}

fn parse_user(raw: &str) -> Result<UserId, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidUserId {
        raw: raw.to_string(),
    })
}

impl Command {
    fn parse(name: &str, rest: Vec<String>) -> Result<Self, ArgsError> {
        let mut rest = rest.into_iter();
        let cmd = match name {
            "overview" => Command::Overview,
            "lessons" => Command::Lessons {
                page: rest
                    .next()
                    .map(|raw| parse_number("page", &raw))
                    .transpose()?
                    .unwrap_or(1),
            },
            "lesson" => {
                let raw = rest.next().ok_or(ArgsError::MissingOperand {
                    command: "lesson",
                    what: "a lesson id",
                })?;
                Command::Lesson(parse_number("lesson id", &raw)?)
            }
            "quiz" => {
                let raw = rest.next().ok_or(ArgsError::MissingOperand {
                    command: "quiz",
                    what: "a lesson id",
                })?;
                let lesson = parse_number("lesson id", &raw)?;
                let answers = rest
                    .by_ref()
                    .map(|raw| parse_number("answer", &raw))
                    .collect::<Result<Vec<usize>, _>>()?;
                Command::Quiz { lesson, answers }
            }
            "completed" => Command::Completed,
            "progress" => Command::Progress,
            "feed" => Command::Feed,
            "post" => {
                let text = rest.by_ref().collect::<Vec<_>>().join(" ");
                Command::Post(text)
            }
            "like" => {
                let raw = rest.next().ok_or(ArgsError::MissingOperand {
                    command: "like",
                    what: "a post id",
                })?;
                Command::Like(parse_number("post id", &raw)?)
            }
            "follow" => {
                let raw = rest.next().ok_or(ArgsError::MissingOperand {
                    command: "follow",
                    what: "a user id",
                })?;
                Command::Follow(parse_user(&raw)?)
            }
            "followers" => Command::Followers,
            "following" => Command::Following,
            "users" => Command::Users,
            "forgot-password" => {
                let mut email = None;
                let mut redirect_to = DEFAULT_REDIRECT.to_string();
                while let Some(arg) = rest.next() {
                    match arg.as_str() {
                        "--redirect" => redirect_to = require_value(&mut rest, "--redirect")?,
                        _ if email.is_none() => email = Some(arg),
                        _ => return Err(ArgsError::UnknownArg(arg)),
                    }
                }
                let email = email.ok_or(ArgsError::MissingOperand {
                    command: "forgot-password",
                    what: "an email",
                })?;
                Command::ForgotPassword { email, redirect_to }
            }
            "reset-password" => {
                let link = rest.next().ok_or(ArgsError::MissingOperand {
                    command: "reset-password",
                    what: "the reset link",
                })?;
                Command::ResetPassword { link }
            }
            other => return Err(ArgsError::UnknownCommand(other.to_string())),
        };
        if let Some(extra) = rest.next() {
            return Err(ArgsError::UnknownArg(extra));
        }
        Ok(cmd)
    }
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut db_url = normalize_sqlite_url(
            std::env::var("EAGLE_DB_URL").unwrap_or_else(|_| "sqlite:eagle.sqlite3".into()),
        );
        let mut user_id = match std::env::var("EAGLE_USER_ID") {
            Ok(raw) if !raw.trim().is_empty() => parse_user(raw.trim())?,
            _ => UserId::local(),
        };

        let mut positionals = Vec::new();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--user" => {
                    let value = require_value(&mut args, "--user")?;
                    user_id = parse_user(&value)?;
                }
                "--help" | "-h" => return Ok(None),
                // Everything from the command on belongs to the command.
                _ => {
                    positionals.push(arg);
                    positionals.extend(args.by_ref());
                }
            }
        }

        let mut positionals = positionals.into_iter();
        let command = match positionals.next() {
            None => Command::Overview,
            Some(name) => Command::parse(&name, positionals.collect())?,
        };

        Ok(Some(Self {
            db_url,
            user_id,
            command,
        }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let Some(args) = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    telemetry::init_tracing();

    prepare_sqlite_file(&args.db_url)?;
    let services =
        AppServices::new_sqlite(&args.db_url, Clock::default_clock(), args.user_id).await?;
    tracing::debug!(user = %args.user_id, command = ?args.command, "running command");

    commands::execute(&services, args.command).await
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
