use colored::Colorize;
use std::fmt::Display;

pub enum Log {
    Debug,
    Info,
    Warning,
    Error,
}

pub fn log(kind: Log, msg: impl Display) {
    if matches!(kind, Log::Debug) && !cfg!(debug_assertions) {
        return;
    }

    let stamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string().dimmed();

    match kind {
        Log::Debug => println!("{} {stamp} {msg}", "D".blue().bold()),
        Log::Info => println!("{} {stamp} {msg}", "I".green().bold()),
        Log::Warning => eprintln!("{} {stamp} {msg}", "W".yellow().bold()),
        Log::Error => eprintln!("{} {stamp} {msg}", "E".red().bold()),
    }
}
