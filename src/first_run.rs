//! First-run name capture
//!
//! Before normal use, tasklist needs the user's display name. The prompt
//! appears only while the name key is absent from the store.

use std::io::{BufRead, Write};
use tasklist_db::{DbError, ProfileRepository, TaskStore};
use tracing::info;

/// Return the stored name, asking for one first if none is stored.
///
/// The question is written to `prompt` and one line is read from `input`.
/// The line is stored without its line ending and without further checks,
/// so an empty line stores an empty name.
///
/// # Errors
///
/// Returns `DbError::ValidationError` if `input` ends before a line is read,
/// and `DbError::Io` if reading `input` fails.
pub async fn ensure_name<S, R, W>(store: &S, input: &mut R, prompt: &mut W) -> Result<String, DbError>
where
    S: TaskStore,
    R: BufRead,
    W: Write,
{
    let profile = ProfileRepository::new(store);
    if let Some(name) = profile.name().await? {
        return Ok(name);
    }

    // Prompt output is best effort; a closed stderr must not block first use
    let _ = write!(prompt, "Please enter your name: ");
    let _ = prompt.flush();

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| DbError::Io {
            context: "read name".to_string(),
            source: e,
        })?;
    if read == 0 {
        return Err(DbError::validation(
            "a name is required before first use; run `tl name <NAME>`",
        ));
    }

    let name = line.trim_end_matches(['\r', '\n']).to_string();
    profile.set_name(&name).await?;
    info!("Stored display name on first run");
    Ok(name)
}

/// Greeting shown when `tl` runs without a subcommand
pub fn greeting(name: &str) -> String {
    format!("Welcome, {}!", name.to_uppercase())
}
