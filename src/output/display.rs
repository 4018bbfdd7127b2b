//! Display functions for command results

use super::formatters::{colored_keyboard, colored_row, result_to_codes, result_to_emoji};
use crate::commands::CheckReport;
use crate::core::LetterStatus;
use colored::Colorize;

/// Print the result of a one-shot evaluation
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        report.target.text().bright_yellow().bold(),
        report.guess.text().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n  {}   {}   {}",
        colored_row(&report.guess, &report.result),
        result_to_emoji(&report.result),
        result_to_codes(&report.result).dimmed()
    );

    for status in [
        LetterStatus::Correct,
        LetterStatus::Present,
        LetterStatus::Missing,
    ] {
        let letters: String = report
            .keyboard
            .iter()
            .filter(|&(_, s)| s == status)
            .map(|(letter, _)| char::from(letter))
            .collect();
        if !letters.is_empty() {
            println!("  {status:<9} {letters}");
        }
    }

    println!();
    if report.result.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "{} correct, {} present",
                report.result.count(LetterStatus::Correct),
                report.result.count(LetterStatus::Present)
            )
            .yellow()
        );
    }

    for line in colored_keyboard(&report.keyboard) {
        println!("  {line}");
    }
}
