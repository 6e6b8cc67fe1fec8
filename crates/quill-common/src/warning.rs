//! Deduplicated warnings with colored terminal output.
//!
//! The lexer never fails, so recovery events are the only thing worth telling
//! a human about while it runs. Each unique message is printed once per
//! document; call [`clear_warnings`] before tokenizing the next one.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// A poisoned set only means another thread panicked mid-insert; the set
/// itself is still usable.
fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Print a warning for `component` unless the same message was already printed.
///
/// # Example
/// ```
/// quill_common::warning::warn_once("Lexer", "recovered from malformed tag at 3:14");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = warned().get_or_insert_with(HashSet::new).insert(key);

    if should_print {
        eprintln!("{}", format!("[Quill {component}] ⚠ {message}").yellow());
    }
}

/// Number of unique warnings printed since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    warned().as_ref().map_or(0, HashSet::len)
}

/// Clear all recorded warnings (call when starting a new document)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_messages_are_recorded_once() {
        warn_once("Test", "duplicate message for dedup test");
        let after_first = warning_count();
        warn_once("Test", "duplicate message for dedup test");
        assert_eq!(warning_count(), after_first);
    }
}
