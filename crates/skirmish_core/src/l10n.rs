//! Localization seam
//!
//! Translation catalogs live outside the game crates; everything that shows
//! text to the player asks a [`Translate`] implementation for it.

use std::collections::HashMap;

/// Message catalog lookup
pub trait Translate {
    /// Translate `msgid`, returning it unchanged when no translation exists.
    fn gettext(&self, msgid: &str) -> String;
}

/// Catalog that returns every message untranslated
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

impl Translate for HashMap<String, String> {
    fn gettext(&self, msgid: &str) -> String {
        self.get(msgid).cloned().unwrap_or_else(|| msgid.to_string())
    }
}

/// Translate a message carrying a disambiguation context.
///
/// Messages are written as `"Context^Text"`. When the catalog has no entry
/// the context part is stripped, so the player sees `"Text"`.
pub fn sgettext(tr: &dyn Translate, msgid: &str) -> String {
    let translated = tr.gettext(msgid);
    if translated != msgid {
        return translated;
    }
    match msgid.rfind('^') {
        Some(idx) => msgid[idx + 1..].to_string(),
        None => translated,
    }
}
