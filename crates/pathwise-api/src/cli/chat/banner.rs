//! Welcome banner for interactive sessions.

use console::style;

/// Print the banner shown when an interview or coach chat starts.
///
/// `details` are label/value rows such as the position or model.
pub fn print_welcome_banner(title: &str, subtitle: &str, details: &[(&str, String)]) {
    println!();
    println!("  {} {}", style("»").cyan().bold(), style(title).cyan().bold());
    println!("  {}", style(subtitle).dim());
    println!();
    for (label, value) in details {
        println!("  {}  {}", style(format!("{label}:")).bold(), style(value).dim());
    }
    if !details.is_empty() {
        println!();
    }
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
