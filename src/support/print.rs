//! Console output with the `[*]` / `[!]` status markers.

use colored::Colorize;

/// Progress line, cyan marker.
pub fn status(message: &str) {
    println!("{} {message}", "[*]".cyan());
}

/// Warning line, red marker.
pub fn warn(message: &str) {
    println!("{} {message}", "[!]".red());
}

pub fn banner() {
    println!(
        r#"
█▀ █▀█ █▀▀ █▄▀ █▀▀ █▀█ █▀█ █▀▀ █▀▀
▄█ █▄█ █▄▄ █░█ █▀░ █▄█ █▀▄ █▄█ ██▄
_______________________________

AI driven sock puppet generator
_______________________________
"#
    );
}
