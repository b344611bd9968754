//! Terminal rendering for review-workflow screens.
//!
//! Clause suggestions and clean documents render as grouped, human-readable
//! cards; test-inference payloads print as verbatim pretty JSON.

use ndalens_core::{Analysis, CleanDocument, ClauseSuggestion, ConfidenceTier, Document};

/// Print a document's server-side state.
pub fn print_document(document: &Document) {
    println!("=== Document {} ===", document.id);
    println!("  {:<18} {:?}", "status", document.status);
    if let Some(path) = &document.original_path {
        println!("  {:<18} {}", "original", path);
    }
    if let Some(path) = &document.redline_path {
        println!("  {:<18} {}", "redline", path);
    }
    if let Some(path) = &document.clean_path {
        println!("  {:<18} {}", "clean", path);
    }
    println!();
}

/// Print every clause suggestion as a numbered card with its confidence badge.
pub fn print_clauses(analysis: &Analysis) {
    if analysis.clauses.is_empty() {
        println!("No clause suggestions.");
        return;
    }
    for (index, clause) in analysis.clauses.iter().enumerate() {
        print_clause(index + 1, clause);
        if index + 1 < analysis.clauses.len() {
            println!("{}", "-".repeat(60));
        }
    }
}

/// One clause card. Display number is position, not server id.
pub fn print_clause(number: usize, clause: &ClauseSuggestion) {
    println!("Clause {}  {}", number, confidence_badge(clause.confidence_score));
    if let Some(score) = clause.validation_score {
        println!("  {:<12} {score}", "validation");
    }
    println!("  Original:");
    print_indented(&clause.original_text);
    println!("  Suggested:");
    print_indented(&clause.suggested_text);
}

/// Badge text for a confidence score, e.g. `[favorable 85%]`.
pub fn confidence_badge(score: f32) -> String {
    format!("[{} {score}%]", ConfidenceTier::from_score(score))
}

/// Print the clean document: metadata card, then content verbatim.
pub fn print_clean_document(clean: &CleanDocument) {
    println!("=== Clean Document {} ===", clean.id);
    println!("  {:<18} {}", "original filename", clean.metadata.original_filename);
    println!("  {:<18} {}", "total clauses", clean.metadata.total_clauses);
    println!("  {:<18} {}", "modified clauses", clean.metadata.modified_clauses);
    println!("  {:<18} {}", "created", clean.created_at.to_rfc3339());
    println!();
    println!("{}", "=".repeat(60));
    // Verbatim: whitespace and line breaks preserved exactly.
    println!("{}", clean.content);
    println!("{}", "=".repeat(60));
}

/// Pretty-print an arbitrary inference payload.
pub fn print_test_results(payload: &serde_json::Value) {
    println!("Test Results");
    match serde_json::to_string_pretty(payload) {
        Ok(pretty) => println!("{pretty}"),
        Err(_) => println!("{payload}"),
    }
}

fn print_indented(text: &str) {
    for line in text.lines() {
        println!("    {line}");
    }
}
