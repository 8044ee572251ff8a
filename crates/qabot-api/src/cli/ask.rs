//! One-shot question from the terminal.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Run one interaction and print the answer.
///
/// A failed generation is still an answer: it is printed (in red) and, when
/// `persist_failures` is on, stored. Only a store failure makes this an error.
pub async fn ask(state: &AppState, question: &str, json: bool) -> Result<()> {
    let answer = state.qa_service.ask(question).await?;

    if json {
        let out = serde_json::json!({
            "question": question,
            "answer": answer.text,
            "outcome": answer.outcome,
            "persisted": answer.persisted,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if answer.is_failure() {
        println!("{}", style(&answer.text).red());
    } else {
        println!("{}", answer.text);
    }

    if !answer.persisted {
        eprintln!("  {}", style("(not saved)").dim());
    }

    Ok(())
}
