//! Folds a fragment stream into a single answer string.
//!
//! Termination: the fold halts on the first fragment whose completion flag
//! is set (its text is still included), or when the stream is exhausted.
//! Callers cannot tell the two apart. Any error ends the fold and discards
//! the text accumulated so far.

use futures_util::{Stream, StreamExt};
use tracing::debug;

use qabot_types::generation::{Fragment, GenerationError};

/// Concatenate fragment text in arrival order until completion.
pub async fn assemble_answer<S>(fragments: S) -> Result<String, GenerationError>
where
    S: Stream<Item = Result<Fragment, GenerationError>>,
{
    let mut fragments = std::pin::pin!(fragments);
    let mut answer = String::new();
    let mut count: usize = 0;

    while let Some(fragment) = fragments.next().await {
        let fragment = fragment?;
        count += 1;
        answer.push_str(&fragment.response);

        if fragment.done {
            debug!(fragments = count, chars = answer.len(), "completion flag received");
            return Ok(answer);
        }
    }

    debug!(fragments = count, chars = answer.len(), "stream exhausted without completion flag");
    Ok(answer)
}
