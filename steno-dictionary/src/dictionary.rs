use crate::Entry;
use steno_core::Lookup;
use std::collections::HashMap;

/// A finite mapping from canonical outline string to raw dictionary entry text.
///
/// `outline_cap` is precomputed once at construction: the longest outline, in strokes, seen
/// across every entry. An empty dictionary has `outline_cap() == 0`.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
    outline_cap: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a flat outline-string -> raw-entry-text map into this dictionary. Keys already
    /// present are overwritten, matching the "later dictionaries override earlier ones" rule.
    pub fn merge(&mut self, raw_entries: HashMap<String, String>) {
        for (outline, raw) in raw_entries {
            self.outline_cap = self.outline_cap.max(stroke_count(&outline));
            self.entries.insert(outline, raw);
        }
    }

    /// Look up and parse the entry for an outline string.
    pub fn get(&self, outline: &str) -> Option<Entry> {
        self.entries.get(outline).map(|raw| Entry::parse(raw))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn stroke_count(outline: &str) -> usize {
    if outline.is_empty() {
        0
    } else {
        outline.split('/').count()
    }
}

impl Lookup for Dictionary {
    fn lookup(&self, outline: &str) -> Option<&str> {
        self.entries.get(outline).map(String::as_str)
    }

    fn outline_cap(&self) -> usize {
        self.outline_cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict_from(pairs: &[(&str, &str)]) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.merge(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        dict
    }

    #[test]
    fn outline_cap_tracks_longest_key() {
        let dict = dict_from(&[("S", "a"), ("S/T/K", "b")]);
        assert_eq!(dict.outline_cap, 3);
    }

    #[test]
    fn empty_dictionary_has_zero_cap() {
        assert_eq!(Dictionary::new().outline_cap, 0);
    }

    #[test]
    fn later_merge_overrides_earlier() {
        let mut dict = dict_from(&[("S", "first")]);
        dict.merge([("S".to_string(), "second".to_string())].into());
        assert_eq!(dict.get("S"), Some(Entry::Word("second".to_string())));
    }
}
