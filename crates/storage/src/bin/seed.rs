use std::fmt;

use chrono::{DateTime, Duration, Utc};
use eagle_core::model::{CompletedLesson, LessonId, PostContent, Profile, ProgressUpdate, UserId};
use storage::repository::{Storage, StorageError};

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    user_id: UserId,
    peers: u32,
    completed: u32,
    now: Option<DateTime<Utc>>,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUserId { raw: String },
    InvalidPeers { raw: String },
    InvalidCompleted { raw: String },
    InvalidDbUrl { raw: String },
    InvalidNow { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUserId { raw } => write!(f, "invalid --user value: {raw}"),
            ArgsError::InvalidPeers { raw } => write!(f, "invalid --peers value: {raw}"),
            ArgsError::InvalidCompleted { raw } => write!(f, "invalid --completed value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidNow { raw } => {
                write!(f, "invalid --now value (expected RFC3339): {raw}")
            }
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

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("EAGLE_DB_URL")
            .unwrap_or_else(|_| "sqlite:eagle.sqlite3?mode=rwc".into());
        let mut user_id = match std::env::var("EAGLE_USER_ID") {
            Ok(raw) => raw
                .parse::<UserId>()
                .map_err(|_| ArgsError::InvalidUserId { raw })?,
            Err(_) => UserId::local(),
        };
        let mut peers = 3;
        let mut completed = 2;
        let mut now: Option<DateTime<Utc>> = None;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--user" => {
                    let value = require_value(&mut args, "--user")?;
                    user_id = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidUserId { raw: value.clone() })?;
                }
                "--peers" => {
                    let value = require_value(&mut args, "--peers")?;
                    peers = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidPeers { raw: value.clone() })?;
                }
                "--completed" => {
                    let value = require_value(&mut args, "--completed")?;
                    completed = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidCompleted { raw: value.clone() })?;
                }
                "--now" => {
                    let value = require_value(&mut args, "--now")?;
                    let parsed = DateTime::parse_from_rfc3339(&value)
                        .map_err(|_| ArgsError::InvalidNow { raw: value.clone() })?
                        .with_timezone(&Utc);
                    now = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            user_id,
            peers,
            completed,
            now,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: sqlite:eagle.sqlite3?mode=rwc)");
    eprintln!("  --user <uuid>             Learner to seed (default: the local learner)");
    eprintln!("  --peers <n>               Other community members with one post each (default: 3)");
    eprintln!("  --completed <n>           Lessons to mark completed for the learner (default: 2)");
    eprintln!("  --now <rfc3339>           Fixed current time for deterministic seeding");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  EAGLE_DB_URL, EAGLE_USER_ID");
}

const PEER_NAMES: [&str; 4] = ["Ada", "Grace", "Linus", "Margaret"];
const PEER_POSTS: [&str; 4] = [
    "Just finished the opportunity validation module. The fake door test idea is gold.",
    "Anyone else struggling with leading vs lagging metrics? Happy to pair on it.",
    "Day 7 streak! Week Warrior unlocked.",
    "Tip: write the problem statement before you open Figma.",
];

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::sqlite(&args.db_url).await?;
    let now = args.now.unwrap_or_else(Utc::now);

    let mut me = Profile::new(args.user_id);
    me.display_name = Some("Eagle Learner".into());
    storage.profiles.upsert_profile(&me).await?;

    match storage.progress.create_progress(args.user_id).await {
        Ok(_) | Err(StorageError::Conflict) => {}
        Err(e) => return Err(e.into()),
    }

    for i in 0..args.completed {
        let row = CompletedLesson::new(
            LessonId::new(i + 1),
            Some(5),
            now - Duration::days(i64::from(args.completed - i)),
        );
        storage.completed_lessons.insert_completed(args.user_id, &row).await?;
    }
    let update = ProgressUpdate {
        lessons_completed: Some(args.completed),
        total_quizzes: Some(args.completed),
        total_quiz_score: Some(args.completed * 5),
        current_streak: Some(args.completed.min(1)),
        longest_streak: Some(args.completed.min(1)),
        last_activity: Some((args.completed > 0).then(|| (now - Duration::days(1)).date_naive())),
    };
    storage.progress.update_progress(args.user_id, &update).await?;

    for i in 0..args.peers {
        let idx = (i as usize) % PEER_NAMES.len();
        let peer = UserId::random();
        let mut profile = Profile::new(peer);
        profile.display_name = Some(PEER_NAMES[idx].to_string());
        profile.username = Some(PEER_NAMES[idx].to_lowercase());
        storage.profiles.upsert_profile(&profile).await?;

        let content = PostContent::new(PEER_POSTS[idx])?;
        let posted_at = now - Duration::hours(i64::from(args.peers - i));
        storage.posts.insert_post(peer, &content, posted_at).await?;

        if i % 2 == 0 {
            storage.follows.follow(peer, args.user_id).await?;
        }
    }

    println!(
        "Seeded learner {} with {} completed lessons and {} peers into {}",
        args.user_id, args.completed, args.peers, args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
