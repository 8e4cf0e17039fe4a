// logging.rs - Timestamped, coloured console logging

use chrono::Local;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static ENABLED: AtomicBool = AtomicBool::new(true);

/// Turns all console output from this module on or off.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

fn emit(tag: ColoredString, message: &str) {
    if !is_enabled() { return; }
    println!("[{}] {} {}",
        Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
        tag,
        message
    );
}

pub fn log_info(message: &str) {
    emit("INFO ".cyan(), message);
}

/// Simulation state transitions (start, stop, reset, seeding).
pub fn log_event(message: &str) {
    emit("EVENT".bright_green(), message);
}

pub fn log_warning(message: &str) {
    emit("WARN ".bright_yellow(), message);
}

pub fn log_error(message: &str) {
    emit("ERROR".bright_red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_output_switch() {
        set_enabled(false);
        assert!(!is_enabled());
        log_info("not printed");
        set_enabled(true);
        assert!(is_enabled());
    }
}
