use std::io::{self, BufRead};

use ansi_term::Colour;
use chrono::Local;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::setlist::SetLog;
use crate::errors::{AppError, AppResult};
use crate::models::display_mode::DisplayMode;
use crate::ui::messages;
use crate::utils::colors::{colorize_duration, colorize_total};
use crate::utils::formatting::secs2readable;
use crate::utils::table::Table;
use crate::utils::time::seconds_to_display;

/// Interactive set logging session.
///
/// The track log lives only inside this loop: one command is read and runs
/// to completion before the next line is accepted, and the whole set is
/// dropped when the loop ends.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { quiet } = cmd {
        let mut mode = cfg.display_mode()?;
        let mut set = SetLog::new();

        if !*quiet {
            print_banner();
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            if !*quiet {
                messages::prompt(&cfg.prompt);
            }

            let line = match lines.next() {
                Some(l) => l?,
                None => break, // EOF closes the session like `quit`
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut words = line.split_whitespace();
            let command = words.next().unwrap_or_default().to_lowercase();
            let args: Vec<&str> = words.collect();

            match command.as_str() {
                "add" => cmd_add(&mut set, &args, mode),
                "list" => cmd_list(&set, mode, cfg),
                "total" => cmd_total(&set, mode),
                "json" => cmd_json(&set),
                "mode" => cmd_mode(&mut mode, &args),
                "reset" => cmd_reset(&mut set),
                "help" => print_session_help(),
                "quit" | "exit" => break,
                other => {
                    messages::error(format!("Unknown command: {} (try 'help')", other));
                }
            }
        }

        if !*quiet {
            println!();
            messages::info(format!(
                "Session closed: {} track(s), total {}",
                set.len(),
                seconds_to_display(set.total_seconds(), mode)
            ));
        }
    }

    Ok(())
}

fn print_banner() {
    println!(
        "🎵 DJ Set Time Calculator - {}",
        Local::now().format("%Y-%m-%d")
    );
    println!("Type track times as MM:SS or HH:MM:SS. 'help' lists the commands.");
    println!();
}

fn print_session_help() {
    println!("Commands:");
    println!("  add <START> <END>   Log a track (times as MM:SS or HH:MM:SS)");
    println!("  list                Show the logged tracks and the total set time");
    println!("  total               Show only the total set time");
    println!("  json                Dump the set and its summary as JSON");
    println!("  mode [clock|compact]  Show or switch the display mode");
    println!("  reset               Clear the whole track list (irreversible)");
    println!("  quit / exit         End the session");
}

/// `add <START> <END>`. A failed parse leaves the set untouched.
fn cmd_add(set: &mut SetLog, args: &[&str], mode: DisplayMode) {
    if args.len() != 2 {
        messages::error("Usage: add <START> <END> (times as MM:SS or HH:MM:SS)");
        return;
    }

    match set.add_track(args[0], args[1]) {
        Ok(secs) => {
            let formatted = seconds_to_display(secs, mode);
            messages::success(format!(
                "Track {} added (Duration: {})",
                set.len(),
                Colour::Green.bold().paint(formatted)
            ));
        }
        Err(e) => messages::error(e),
    }
}

fn cmd_list(set: &SetLog, mode: DisplayMode, cfg: &Config) {
    if set.is_empty() {
        println!("No tracks logged yet.");
        return;
    }

    let mut table = if cfg.show_timestamps {
        Table::new(&["#", "Start", "End", "Duration", "Added at"])
    } else {
        Table::new(&["#", "Start", "End", "Duration"])
    };

    for (i, t) in set.tracks().iter().enumerate() {
        let mut row = vec![
            format!("{}", i + 1),
            t.start.clone(),
            t.end.clone(),
            colorize_duration(&t.duration_str(mode)),
        ];
        if cfg.show_timestamps {
            row.push(t.added_at.clone());
        }
        table.add_row(row);
    }

    print!("{}", table.render());

    let summary = Core::build_set_summary(set.tracks());
    let sep_ch = cfg.separator_char.chars().next().unwrap_or('-');
    println!("{}", sep_ch.to_string().repeat(40));
    println!(
        "Σ Total set time: {} ({})",
        colorize_total(&seconds_to_display(summary.total_seconds, mode)),
        secs2readable(summary.total_seconds)
    );
}

fn cmd_total(set: &SetLog, mode: DisplayMode) {
    println!(
        "Σ Total set time: {}",
        colorize_total(&seconds_to_display(set.total_seconds(), mode))
    );
}

fn cmd_json(set: &SetLog) {
    let summary = Core::build_set_summary(set.tracks());
    let payload = serde_json::json!({
        "tracks": set.tracks(),
        "summary": summary,
    });

    match serde_json::to_string_pretty(&payload) {
        Ok(s) => println!("{}", s),
        Err(e) => messages::error(format!("Failed to serialize set: {}", e)),
    }
}

fn cmd_mode(mode: &mut DisplayMode, args: &[&str]) {
    match args.first() {
        None => println!("Display mode: {}", mode.dm_as_str()),
        Some(m) => match DisplayMode::dm_from_str(m) {
            Some(new_mode) => {
                *mode = new_mode;
                messages::success(format!("Display mode set to {}", mode.dm_as_str()));
            }
            None => messages::error(AppError::InvalidMode(m.to_string())),
        },
    }
}

/// Unconditional, irreversible.
fn cmd_reset(set: &mut SetLog) {
    if set.is_empty() {
        messages::warning("Track list is already empty.");
    }
    set.reset();
    messages::success("Track list cleared.");
}
