use std::error::Error;
use std::io::{self, BufRead, Write};

use eagle_core::model::{Follow, LessonId, PostId, UserId};
use eagle_core::quiz::{QuizQuestion, QuizResult};
use services::auth::SessionValidity;
use services::{
    AppServices, AuthError, CompletionOutcome, LessonView, MainScreen, MainTab, ProgressError,
    ProgressReconciler, QuizSession, page_label,
};

use crate::Command;

type CmdResult = Result<(), Box<dyn Error>>;

pub(crate) async fn execute(services: &AppServices, command: Command) -> CmdResult {
    let mut screen = MainScreen::new();
    match command {
        Command::Overview => overview(services, &mut screen).await,
        Command::Lessons { page } => lessons(services, &mut screen, page).await,
        Command::Lesson(id) => lesson(services, &mut screen, id).await,
        Command::Quiz { lesson, answers } => quiz(services, &mut screen, lesson, answers).await,
        Command::Completed => completed(services, &mut screen).await,
        Command::Progress => progress(services, &mut screen).await,
        Command::Feed => feed(services).await,
        Command::Post(text) => post(services, &text).await,
        Command::Like(post) => like(services, post).await,
        Command::Follow(target) => follow(services, target).await,
        Command::Followers => followers(services).await,
        Command::Following => following(services).await,
        Command::Users => users(services).await,
        Command::ForgotPassword { email, redirect_to } => {
            forgot_password(services, &email, &redirect_to).await
        }
        Command::ResetPassword { link } => reset_password(services, &link).await,
    }
}

//
// ─── LEARNING ──────────────────────────────────────────────────────────────────
//

/// Enter `tab`, reloading whatever the tab needs from the store.
async fn open_tab(
    services: &AppServices,
    screen: &mut MainScreen,
    tab: MainTab,
) -> Result<ProgressReconciler, ProgressError> {
    let mut progress = services.progress();
    if screen.select_tab(tab).refresh {
        progress.load().await?;
    } else {
        progress.fetch_completed_lessons().await?;
    }
    Ok(progress)
}

fn effective_view(
    services: &AppServices,
    screen: &MainScreen,
    progress: &ProgressReconciler,
) -> LessonView {
    services
        .catalog()
        .effective(&progress.state().completed_lesson_ids(), screen.local_completed())
}

async fn overview(services: &AppServices, screen: &mut MainScreen) -> CmdResult {
    let progress = open_tab(services, screen, MainTab::Overview).await?;
    let view = effective_view(services, screen, &progress);
    let dashboard = progress.dashboard(services.catalog().len(), view.completed_count());

    println!("Eagle PM");
    println!(
        "Streak: {} day(s)   Best: {}   Lessons: {}/{} ({}%)",
        dashboard.current_streak,
        dashboard.longest_streak,
        dashboard.lessons_completed,
        dashboard.total_lessons,
        dashboard.completion_percent,
    );
    println!();
    println!("Today's lesson");
    match view.next_incomplete() {
        Some(lesson) => println!(
            "  {}. {} ({}, {})",
            lesson.id, lesson.title, lesson.difficulty, lesson.duration
        ),
        None => println!("  You're all caught up for today. Check back tomorrow for more!"),
    }
    if let Some(at) = view.journey_position() {
        println!();
        println!(
            "Journey: lesson {} of {} in {}",
            at.id,
            services.catalog().len(),
            at.track_title
        );
    }
    Ok(())
}

async fn lessons(services: &AppServices, screen: &mut MainScreen, requested: usize) -> CmdResult {
    let progress = open_tab(services, screen, MainTab::Lessons).await?;
    let view = effective_view(services, screen, &progress);
    let page = view.incomplete_page(requested);
    screen.set_lesson_page(page.page, page.total_pages);

    if page.items.is_empty() {
        println!("All lessons completed. Great job!");
    }
    for entry in &page.items {
        let lesson = &entry.lesson;
        println!("{}", entry.chapter_label);
        println!("  {}", entry.module_label);
        println!(
            "    {}. Lesson {}: {} [{}, {}]",
            lesson.id, lesson.lesson_number, lesson.title, lesson.difficulty, lesson.duration
        );
    }
    println!();
    println!(
        "{}   (previous: {}, next: {})",
        page_label(&page),
        page.previous(),
        page.next()
    );
    Ok(())
}

async fn lesson(services: &AppServices, screen: &mut MainScreen, id: LessonId) -> CmdResult {
    let progress = open_tab(services, screen, MainTab::Lessons).await?;
    screen.select_lesson(id);
    let view = effective_view(services, screen, &progress);
    let lesson = services.catalog().find(id)?;
    let done = view.lessons().iter().any(|l| l.id == id && l.completed);

    let status = if done { " (completed)" } else { "" };
    println!("{} [{}]{status}", lesson.title, lesson.difficulty);
    println!("{}  |  {}", lesson.description, lesson.duration);
    println!();
    println!("{}", lesson.content);
    println!();
    println!("Ready? Run `eagle quiz {id}`.");
    screen.close_lesson();
    Ok(())
}

async fn completed(services: &AppServices, screen: &mut MainScreen) -> CmdResult {
    let progress = open_tab(services, screen, MainTab::Completed).await?;
    let view = effective_view(services, screen, &progress);
    let done = view.completed();
    if done.is_empty() {
        println!("You haven't completed any lessons yet.");
        return Ok(());
    }
    println!("Completed Lessons");
    for lesson in done {
        println!("  [x] {}. {} ({})", lesson.id, lesson.title, lesson.module_title);
    }
    Ok(())
}

async fn progress(services: &AppServices, screen: &mut MainScreen) -> CmdResult {
    let progress = open_tab(services, screen, MainTab::Progress).await?;
    let view = effective_view(services, screen, &progress);
    print_dashboard(services, &progress, &view);
    Ok(())
}

fn print_dashboard(services: &AppServices, progress: &ProgressReconciler, view: &LessonView) {
    let dash = progress.dashboard(services.catalog().len(), view.completed_count());
    println!("Current streak: {} day(s)", dash.current_streak);
    println!("Longest streak: {} day(s)", dash.longest_streak);
    println!(
        "Lessons: {}/{} ({}%)",
        dash.lessons_completed, dash.total_lessons, dash.completion_percent
    );
    match dash.average_quiz_score {
        Some(avg) => println!(
            "Quizzes: {} taken, {avg:.1} correct on average",
            dash.total_quizzes
        ),
        None => println!("Quizzes: none yet"),
    }
    println!();
    println!("Badges ({}/{})", dash.earned_count(), dash.badges.len());
    for badge in &dash.badges {
        let mark = if badge.earned() { "x" } else { " " };
        println!("  [{mark}] {}: {}", badge.name, badge.description);
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

enum AnswerSource {
    Given(std::vec::IntoIter<usize>),
    Stdin,
}

impl AnswerSource {
    /// Next 1-based choice, or `None` when input runs out.
    fn next(&mut self) -> io::Result<Option<usize>> {
        match self {
            AnswerSource::Given(answers) => Ok(answers.next()),
            AnswerSource::Stdin => loop {
                print!("Your answer: ");
                io::stdout().flush()?;
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                match line.trim().parse() {
                    Ok(choice) => return Ok(Some(choice)),
                    Err(_) => println!("Enter the option number."),
                }
            },
        }
    }

    fn interactive(&self) -> bool {
        matches!(self, AnswerSource::Stdin)
    }
}

fn print_question(question: &QuizQuestion, number: usize, total: usize) {
    println!();
    println!("Question {number} of {total}");
    println!("{}", question.question);
    for (i, option) in question.options.iter().enumerate() {
        println!("  {}) {option}", i + 1);
    }
}

async fn quiz(
    services: &AppServices,
    screen: &mut MainScreen,
    lesson_id: LessonId,
    answers: Vec<usize>,
) -> CmdResult {
    let lesson = services.catalog().find(lesson_id)?;
    let mut progress = services.load_progress().await?;
    let quiz_loop = services.quiz_loop();
    let mut session = QuizSession::new();
    let mut source = if answers.is_empty() {
        AnswerSource::Stdin
    } else {
        AnswerSource::Given(answers.into_iter())
    };

    quiz_loop.start_quiz(&mut session, lesson_id)?;
    screen.quiz_started();
    println!("Quiz: {}", lesson.title);

    loop {
        let Some(active) = session.active() else {
            break;
        };
        let Some(question) = active.current_question() else {
            break;
        };
        let options = question.options.len();
        print_question(question, active.question_number(), active.total());

        let Some(choice) = source.next()? else {
            session.go_back();
            return Err("quiz abandoned before the last question".into());
        };
        if choice == 0 || choice > options {
            if source.interactive() {
                println!("Pick a number from 1 to {options}.");
                continue;
            }
            return Err(format!("answer {choice} is not an option (1-{options})").into());
        }

        let step = quiz_loop
            .submit_answer(&mut session, &mut progress, choice - 1)
            .await?;
        if step.outcome.record().correct {
            println!("Correct!");
        } else {
            println!("Incorrect.");
        }
        if let Some(result) = step.outcome.result() {
            print_result(result);
            if let Some(completion) = &step.completion {
                print_completion(completion);
                screen.mark_completed_locally(lesson_id);
            }
            break;
        }
    }

    let passing = session.result().is_some_and(QuizResult::is_passing);
    let change = screen.continue_from_results(passing);
    session.go_back();
    println!();
    println!("Continue: {} tab", change.tab);
    if change.refresh {
        progress.load().await?;
    }
    let view = effective_view(services, screen, &progress);
    match change.tab {
        MainTab::Progress => print_dashboard(services, &progress, &view),
        _ => {
            if let Some(next) = view.next_incomplete() {
                println!("Next up: {}. {}", next.id, next.title);
            }
        }
    }
    Ok(())
}

fn print_result(result: &QuizResult) {
    println!();
    if result.is_passing() {
        println!("Great job! You passed!");
    } else {
        println!("Keep practicing!");
    }
    println!("Score: {}/{} ({}%)", result.score, result.total, result.percentage);
    for (i, (question, answer)) in result.questions.iter().zip(&result.answers).enumerate() {
        let mark = if answer.correct { "x" } else { " " };
        let yours = question
            .options
            .get(answer.selected_index)
            .map_or("-", String::as_str);
        println!("  [{mark}] Q{}. {}", i + 1, question.question);
        println!("       Your answer: {yours}");
        if !answer.correct {
            if let Some(right) = question.options.get(question.correct_answer) {
                println!("       Correct answer: {right}");
            }
        }
    }
}

fn print_completion(completion: &CompletionOutcome) {
    println!();
    if completion.first_completion {
        println!("Lesson completed.");
    } else {
        println!("Lesson completed again.");
    }
    println!("Streak: {} day(s)", completion.progress.current_streak);
    for badge in &completion.awarded {
        println!("Badge earned: {}! {}", badge.display_name(), badge.description());
    }
}

//
// ─── COMMUNITY ─────────────────────────────────────────────────────────────────
//

fn follow_label(follow: &Follow, other: UserId) -> String {
    follow
        .profile
        .as_ref()
        .map_or_else(|| other.to_string(), |p| p.label())
}

async fn feed(services: &AppServices) -> CmdResult {
    let mut social = services.social();
    let posts = social.fetch_posts().await?;
    if posts.is_empty() {
        println!("No posts yet. Be the first: `eagle post <text>`.");
    }
    for post in posts {
        let author = post
            .author
            .as_ref()
            .map_or_else(|| "Anonymous".to_string(), |p| p.label());
        let liked = if post.is_liked { " (liked)" } else { "" };
        println!(
            "{author}  {}  likes {}{liked}",
            post.created_at.format("%Y-%m-%d %H:%M"),
            post.likes_count
        );
        println!("  {}", post.content);
        println!("  id: {}", post.id);
    }
    Ok(())
}

async fn post(services: &AppServices, text: &str) -> CmdResult {
    let mut social = services.social();
    let post = social.create_post(text).await?;
    println!("Posted {}", post.id);
    Ok(())
}

async fn like(services: &AppServices, post: PostId) -> CmdResult {
    let mut social = services.social();
    let liked = social.toggle_like(post).await?;
    let count = social
        .posts()
        .iter()
        .find(|p| p.id == post)
        .map_or(0, |p| p.likes_count);
    println!("{} ({count} likes)", if liked { "Liked" } else { "Unliked" });
    Ok(())
}

async fn follow(services: &AppServices, target: UserId) -> CmdResult {
    let mut social = services.social();
    social.fetch_following().await?;
    let now_following = social.toggle_follow(target).await?;
    if now_following {
        println!("Following {target}");
    } else {
        println!("Unfollowed {target}");
    }
    Ok(())
}

async fn followers(services: &AppServices) -> CmdResult {
    let mut social = services.social();
    let followers = social.fetch_followers().await?;
    println!("Followers ({})", followers.len());
    for f in followers {
        println!("  {}  {}", follow_label(f, f.follower_id), f.follower_id);
    }
    Ok(())
}

async fn following(services: &AppServices) -> CmdResult {
    let mut social = services.social();
    let following = social.fetch_following().await?;
    println!("Following ({})", following.len());
    for f in following {
        println!("  {}  {}", follow_label(f, f.following_id), f.following_id);
    }
    Ok(())
}

async fn users(services: &AppServices) -> CmdResult {
    let mut social = services.social();
    social.fetch_following().await?;
    social.fetch_all_users().await?;
    for user in social.users() {
        let mark = if social.is_following(user.user_id) { " (following)" } else { "" };
        println!("  {}  {}{mark}", user.label(), user.user_id);
    }
    Ok(())
}

//
// ─── ACCOUNT ───────────────────────────────────────────────────────────────────
//

async fn forgot_password(services: &AppServices, email: &str, redirect_to: &str) -> CmdResult {
    services.password_reset().request_reset(email, redirect_to).await?;
    println!(
        "Check your email. If an account exists for {}, a reset link is on its way.",
        email.trim()
    );
    Ok(())
}

fn read_secret(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn reset_password(services: &AppServices, link: &str) -> CmdResult {
    let mut flow = services.password_reset();
    if flow.check_link(link).await? == SessionValidity::Invalid {
        println!("This password reset link is invalid or has expired.");
        println!("Request a new one with `eagle forgot-password <email>`.");
        return Err(AuthError::InvalidSession.into());
    }

    let password = read_secret("New password: ")?;
    let confirm = read_secret("Confirm password: ")?;
    flow.update_password(&password, &confirm).await?;
    println!("Password updated.");
    Ok(())
}
