//! Interactive terminal front-end for the mock interview.
//!
//! All session mutation happens in the services layer; this module only
//! collects discrete user events and renders state.

use std::io::{self, Write};

use interview_core::model::{
    InterviewMode, InterviewSession, Leaderboard, TargetRole,
};
use services::AppServices;

/// Run interviews until the user quits.
///
/// The leaderboard lives for the whole process; each completed, named
/// session appends one entry.
pub async fn run(services: &AppServices) -> Result<(), Box<dyn std::error::Error>> {
    let interview_loop = services.interview_loop();
    let exporter = services.summary_pdf();
    let mut leaderboard = Leaderboard::new();

    println!("\n{}", "=".repeat(60));
    println!("  AI Interview Preparation Bot");
    println!("{}", "=".repeat(60));

    loop {
        let role = select_role()?;
        let mode = select_mode()?;
        let name = read_input("Enter your name for the leaderboard (optional): ")?;
        let name = name.trim().to_string();

        println!("\nGenerating your 5-question mock interview...");
        let mut session = match interview_loop.start_interview(role, mode).await {
            Ok(session) => session,
            Err(err) => {
                println!("⚠ Could not start the interview: {err}");
                if !ask_yes_no("Try again? [y/N]: ")? {
                    return Ok(());
                }
                continue;
            }
        };

        while !session.is_complete() {
            let index = session.current_index();
            let question = session
                .current_question()
                .unwrap_or_default()
                .to_string();
            println!("\nQuestion {} of 5:", index + 1);
            println!("{question}");

            let answer = read_input("Your answer: ")?;
            if answer.trim().is_empty() {
                println!("⚠ Please type your answer before submitting.");
                continue;
            }

            match interview_loop.answer_current(&mut session, &answer).await {
                Ok(result) => {
                    println!("\nFeedback: {}", result.feedback);
                    println!("Answer submitted with score: {}/10", result.score);
                }
                Err(err) => {
                    println!("⚠ Evaluation failed: {err}");
                    println!("Your progress is unchanged; submit the answer again.");
                }
            }
        }

        let average = session.average_score().unwrap_or_default();
        println!("\n{}", "=".repeat(60));
        println!("Interview completed! Your average score: {average}/10");
        if interview_loop.record_completion(&mut session, &name, &mut leaderboard) {
            println!("Your result was added to the leaderboard.");
        }

        if !completed_menu(&session, &name, &leaderboard, &exporter)? {
            return Ok(());
        }
    }
}

/// Completed-view menu. Returns `false` when the user quits.
fn completed_menu(
    session: &InterviewSession,
    name: &str,
    leaderboard: &Leaderboard,
    exporter: &services::SummaryPdf,
) -> Result<bool, io::Error> {
    loop {
        println!("\nActions:");
        println!("  1. View full session summary");
        println!("  2. Show leaderboard");
        println!("  3. Download summary as PDF");
        println!("  4. Start a new interview");
        println!("  0. Quit");

        let choice = read_input("Select action: ")?;
        match choice.trim() {
            "1" => print!("{}", render_summary(session)),
            "2" => print!("{}", render_leaderboard(leaderboard)),
            "3" => match exporter.export(session, name) {
                Ok(path) => println!("Summary written to {}", path.display()),
                Err(err) => println!("⚠ Export failed: {err}"),
            },
            "4" => return Ok(true),
            "0" => return Ok(false),
            _ => println!("⚠ Invalid choice. Please try again."),
        }
    }
}

fn select_role() -> Result<TargetRole, io::Error> {
    let roles = TargetRole::all();
    loop {
        println!("\nChoose your target role:");
        for (i, role) in roles.iter().enumerate() {
            println!("  {}. {role}", i + 1);
        }
        let raw = read_input("Select role: ")?;
        match parse_menu_choice(&raw, roles.len()) {
            Some(index) => return Ok(roles[index]),
            None => println!("⚠ Invalid choice. Please try again."),
        }
    }
}

fn select_mode() -> Result<InterviewMode, io::Error> {
    let modes = InterviewMode::all();
    loop {
        println!("\nChoose interview mode:");
        for (i, mode) in modes.iter().enumerate() {
            println!("  {}. {mode}", i + 1);
        }
        let raw = read_input("Select mode: ")?;
        match parse_menu_choice(&raw, modes.len()) {
            Some(index) => return Ok(modes[index]),
            None => println!("⚠ Invalid choice. Please try again."),
        }
    }
}

/// Parses a 1-based menu selection into a 0-based index.
fn parse_menu_choice(raw: &str, len: usize) -> Option<usize> {
    let choice: usize = raw.trim().parse().ok()?;
    (1..=len).contains(&choice).then(|| choice - 1)
}

fn render_summary(session: &InterviewSession) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "-".repeat(60)));
    for (i, entry) in session.transcript().iter().enumerate() {
        out.push_str(&format!("Q{}: {}\n", i + 1, entry.question));
        out.push_str(&format!("Your answer: {}\n", entry.answer));
        out.push_str(&format!("Feedback: {}\n", entry.feedback));
        out.push_str(&format!("{}\n", "-".repeat(60)));
    }
    out
}

fn render_leaderboard(leaderboard: &Leaderboard) -> String {
    if leaderboard.is_empty() {
        return "\nLeaderboard is empty so far.\n".to_string();
    }
    let mut out = String::from("\nLeaderboard (top scores):\n");
    for (rank, entry) in leaderboard.ranked().iter().enumerate() {
        out.push_str(&format!("  {}. {} - {}/10\n", rank + 1, entry.name, entry.score));
    }
    out
}

fn read_input(prompt: &str) -> Result<String, io::Error> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn ask_yes_no(prompt: &str) -> Result<bool, io::Error> {
    let raw = read_input(prompt)?;
    Ok(matches!(raw.trim(), "y" | "Y" | "yes" | "Yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::model::QUESTIONS_PER_SESSION;
    use interview_core::time::fixed_now;

    #[test]
    fn menu_choice_accepts_only_listed_options() {
        assert_eq!(parse_menu_choice("1", 5), Some(0));
        assert_eq!(parse_menu_choice(" 5 ", 5), Some(4));
        assert_eq!(parse_menu_choice("0", 5), None);
        assert_eq!(parse_menu_choice("6", 5), None);
        assert_eq!(parse_menu_choice("two", 5), None);
    }

    #[test]
    fn leaderboard_renders_descending_with_ranks() {
        let mut board = Leaderboard::new();
        board.record("Ada", 6.5);
        board.record("Grace", 9.0);

        let rendered = render_leaderboard(&board);
        let grace = rendered.find("1. Grace - 9/10").unwrap();
        let ada = rendered.find("2. Ada - 6.5/10").unwrap();
        assert!(grace < ada);
    }

    #[test]
    fn summary_lists_each_answered_question() {
        let questions = (1..=QUESTIONS_PER_SESSION)
            .map(|i| format!("Question {i}?"))
            .collect();
        let mut session = InterviewSession::new(
            TargetRole::SoftwareEngineer,
            InterviewMode::Technical,
            questions,
            fixed_now(),
        )
        .unwrap();
        session
            .record_review("my answer".into(), "my feedback".into(), 8, fixed_now())
            .unwrap();

        let rendered = render_summary(&session);
        assert!(rendered.contains("Q1: Question 1?"));
        assert!(rendered.contains("Your answer: my answer"));
        assert!(rendered.contains("Feedback: my feedback"));
        assert!(!rendered.contains("Q2:"));
    }
}
