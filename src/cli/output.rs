use colored::Colorize;

// Status lines go to stderr so stdout only ever carries command output.

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print an indented detail line.
pub fn detail(msg: &str) {
    eprintln!("    {}", msg.dimmed());
}
