//! Thread-local parser pooling.
//!
//! Keeps one [`ScriptParser`] per language per thread. A parser is created on
//! first use and reused by every later analysis on the same thread.

use crate::ts::{ScriptParser, SourceLanguage, TreeSitterError};
use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

thread_local! {
    static PARSERS: RefCell<HashMap<SourceLanguage, ScriptParser>> =
        RefCell::new(HashMap::new());
}

/// Execute function with the pooled parser for `language`.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use callsite_locator::pool::with_parser;
/// use callsite_locator::ts::SourceLanguage;
///
/// let has_errors = with_parser(SourceLanguage::JavaScript, |parser| {
///     parser.parse_with_source("foo.bar();").map(|parsed| parsed.has_errors())
/// })??;
/// # Ok(())
/// # }
/// ```
pub fn with_parser<F, R>(language: SourceLanguage, f: F) -> Result<R, TreeSitterError>
where
    F: FnOnce(&mut ScriptParser) -> R,
{
    PARSERS.with(|cell| {
        let mut parsers = cell.borrow_mut();
        let parser = match parsers.entry(language) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::trace!(?language, "creating pooled parser");
                entry.insert(ScriptParser::with_language(language)?)
            }
        };
        Ok(f(parser))
    })
}

/// Number of parsers pooled on the current thread.
pub fn pooled_parsers() -> usize {
    PARSERS.with(|cell| cell.borrow().len())
}
