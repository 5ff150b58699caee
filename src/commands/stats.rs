//! Stats command

use crate::core::Language;
use crate::output::print_stats;
use crate::storage::{GameStore, StoreError};

/// Print the persisted statistics for a language
///
/// # Errors
///
/// Returns `StoreError` if the stats record cannot be read.
pub fn run_stats<S: GameStore>(store: &S, language: Language) -> Result<(), StoreError> {
    let stats = store.load_stats(language)?;
    print_stats(&stats, language);
    Ok(())
}
