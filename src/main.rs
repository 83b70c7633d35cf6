/// Main entry point for the habit board
///
/// This file sets up logging, parses command line arguments, restores the
/// habit collection from its snapshot, optionally syncs against the remote,
/// and prints a plain-text status report.

use clap::Parser;
use std::path::PathBuf;
use chrono::{NaiveDate, Utc};
use tracing::info;

use habit_board::{
    completion_history, DashboardStats, HabitBoard, HabitState, StreakSummary,
};

/// Get the default snapshot path with robust fallback strategy
fn get_default_data_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".habit_board");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("habit_board");
            p
        }),
        // 3. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("habit_board");
            p
        }),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".habit_board");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        // Try to create the directory
        if let Ok(()) = std::fs::create_dir_all(potential_path) {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file); // Clean up test file
                let mut data_path = potential_path.clone();
                data_path.push("habits.json");
                return Ok(data_path);
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("habit_board");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("habits.json");

    tracing::warn!("Using temporary directory for snapshot: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the habit board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON snapshot file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Refresh the collection from the remote before printing the report
    #[arg(long)]
    sync: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("habit_board={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting habit board");

    // Determine snapshot path
    let data_path = match args.data_file {
        Some(path) => {
            // Validate and prepare the provided path
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => {
            // Use a robust default path strategy
            get_default_data_path()?
        }
    };

    info!("Using snapshot at: {}", data_path.display());

    // Restore the board; the snapshot is read before anything else runs
    let board = HabitBoard::new(data_path)?;

    board.store().subscribe(|state| {
        tracing::debug!("State changed: {} habits", state.habits.len());
    });

    if args.sync {
        info!("Syncing collection from remote");
        if let Err(e) = board.sync().await {
            // The failure message also lands in the state's error banner
            tracing::warn!("Sync failed: {}", e);
        }
    }

    let today = Utc::now().date_naive();
    print_report(&board.store().snapshot(), today);

    info!("Habit board shutdown complete");
    Ok(())
}

/// Render the status report to stdout
fn print_report(state: &HabitState, today: NaiveDate) {
    if let Some(error) = &state.error {
        println!("! {}", error);
        println!();
    }

    if state.habits.is_empty() {
        println!("No habits yet. Add one to get started!");
        return;
    }

    for habit in &state.habits {
        let summary = StreakSummary::for_habit(habit, today);
        let strip: String = completion_history(habit, today)
            .iter()
            .map(|day| if day.completed { 'x' } else { '.' })
            .collect();

        println!("* {} ({})", habit.name, habit.frequency.display_name());
        if let Some(description) = &habit.description {
            println!("  {}", description);
        }
        println!(
            "  Current streak: {} | Best: {} | Completions: {} | Last 7 days: {}",
            summary.current, summary.best, summary.total_completions, strip
        );
    }

    let stats = DashboardStats::compute(&state.habits, today);
    println!();
    println!(
        "{} of {} completed today | weekly rate {}% | longest streak {} | average {}",
        stats.completed_today,
        stats.total_habits,
        stats.weekly_completion_rate,
        stats.longest_streak,
        stats.average_streak
    );
}
