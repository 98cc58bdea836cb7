// Colored terminal output for an analysis result.
//
// The main.rs commands delegate here; JSON output bypasses this module.

use colored::Colorize;

use crate::pipeline::analysis::AnalysisResult;
use crate::scoring::label::RiskLabel;
use crate::scoring::stats::SenderStats;
use crate::signals::vocabulary::Vocabulary;

/// Sender names longer than this are truncated in the table.
const SENDER_COLUMN: usize = 28;

/// Display a full analysis report in the terminal.
pub fn display_analysis(result: &AnalysisResult) {
    println!(
        "\n{}",
        format!("=== Boycott Risk Report: {} ===", result.source).bold()
    );
    println!();

    println!("  Assessment: {}", colorize_label(result.label));

    let signals = &result.risk_signals;
    println!("  Risk score: {:.3}", signals.risk_score);
    println!(
        "  Flagged messages: {} of {} ({:.1}%)",
        signals.signal_messages,
        signals.total_messages,
        signals.keyword_ratio * 100.0
    );
    println!(
        "  Sender concentration: {:.2}",
        signals.sender_concentration
    );

    display_sender_table(result);

    match &result.potential_target {
        Some(target) => println!("\n  Potential target: {}", target.bold()),
        None => println!("\n  Potential target: {}", "none identified".dimmed()),
    }

    if !result.target_mentions.is_empty() {
        let mentions: Vec<String> = result
            .target_mentions
            .iter()
            .map(|(word, count)| format!("{word} ({count})"))
            .collect();
        println!("  Frequent words in flagged messages: {}", mentions.join(", ").dimmed());
    }
    println!();
}

/// Per-sender table, most flagged messages first.
fn display_sender_table(result: &AnalysisResult) {
    if result.per_sender_stats.is_empty() {
        println!("\n  No messages found. Is this a chat export?");
        return;
    }

    let mut rows: Vec<(&String, &SenderStats)> = result.per_sender_stats.iter().collect();
    rows.sort_by(|a, b| {
        b.1.signal_message_count
            .cmp(&a.1.signal_message_count)
            .then(b.1.message_count.cmp(&a.1.message_count))
    });

    println!();
    println!(
        "  {:<30} {:>8} {:>8} {:>8}",
        "Sender".dimmed(),
        "Msgs".dimmed(),
        "Chars".dimmed(),
        "Flagged".dimmed(),
    );
    println!("  {}", "-".repeat(58).dimmed());

    for (sender, stats) in rows {
        let name = super::truncate_chars(sender, SENDER_COLUMN);
        // Pad before coloring; escape codes would count toward the width
        let flagged = format_flagged(stats.signal_message_count);
        println!(
            "  {:<30} {:>8} {:>8} {}",
            name, stats.message_count, stats.char_count, flagged
        );
    }
}

/// Right-align a flagged count in its column, red when nonzero.
fn format_flagged(count: usize) -> String {
    let padded = format!("{count:>8}");
    if count > 0 {
        padded.red().to_string()
    } else {
        padded
    }
}

/// Display the phrases that flag a message.
pub fn display_vocabulary(vocabulary: &Vocabulary, origin: &str) {
    println!(
        "\n{}",
        format!("=== Vocabulary ({} phrases, {origin}) ===", vocabulary.len()).bold()
    );
    for phrase in vocabulary.phrases() {
        println!("  {phrase}");
    }
    println!();
}

/// Colorize a risk label by severity.
fn colorize_label(label: RiskLabel) -> colored::ColoredString {
    let text = label.as_str();
    match label {
        RiskLabel::High => text.red().bold(),
        RiskLabel::Medium => text.bright_red(),
        RiskLabel::Low => text.yellow(),
        RiskLabel::Clear => text.green(),
    }
}
