use crate::entry::RawEntry;
use crate::history::{History, Node};
use steno_core::{Command, Lookup, Outline, Stroke};

/// The greedy, history-aware stroke-to-text translator.
///
/// Generic over the dictionary's `Lookup` capability rather than any concrete dictionary type, so
/// in-memory maps, real loaded dictionaries, and test doubles are all interchangeable here.
pub struct Translator<L> {
    dict: L,
    history: History,
    latest: Option<usize>,
}

impl<L: Lookup> Translator<L> {
    pub fn new(dict: L) -> Self {
        Self {
            dict,
            history: History::new(),
            latest: None,
        }
    }

    pub fn dict(&self) -> &L {
        &self.dict
    }

    /// Feed one stroke through the greedy longest-suffix matcher, returning the commands the
    /// output stage should apply, in order.
    ///
    /// The recursive "try `prev.prev` before the current outline" search from the algorithm
    /// description is unrolled here into a bounded loop: an ancestor chain is built first (most
    /// recent translation first), then candidate outlines are tried from the deepest absorption
    /// down to none. Trying deepest first is what makes the earliest possible root win.
    pub fn translate(&mut self, stroke: Stroke) -> Vec<Command> {
        let cap = self.dict.outline_cap().max(1);

        let mut chain = Vec::new();
        let mut total_strokes = 1;
        let mut cursor = self.latest;
        while let Some(handle) = cursor {
            let node = self.history.get(handle);
            let n = node.outline.len();
            if total_strokes + n > cap {
                break;
            }
            total_strokes += n;
            chain.push(handle);
            cursor = node.prev;
        }
        let beyond_chain = cursor;

        for k in (0..=chain.len()).rev() {
            let mut outline = Outline::single(stroke);
            for &handle in &chain[..k] {
                outline = self.history.get(handle).outline.concat(&outline);
            }

            let Some(raw) = self.dict.lookup(&outline.to_string()) else {
                continue;
            };

            let new_prev = if k < chain.len() { Some(chain[k]) } else { beyond_chain };
            let replaced = if k > 0 { self.latest } else { None };

            return match RawEntry::parse(raw) {
                RawEntry::Undo => self.undo(),
                RawEntry::Word(text) => self.commit(outline, format!("{} ", text), new_prev, replaced),
                RawEntry::Suffix(payload) => {
                    self.attach_suffix(&chain, k, beyond_chain, outline, &payload)
                }
            };
        }

        // No entry matched at any absorption depth: the base case, an untranslated stroke.
        let text = format!("{} ", stroke);
        self.commit(Outline::single(stroke), text, self.latest, None)
    }

    /// A suffix entry always attaches to whatever translation is currently `latest`, regardless
    /// of how far back the dictionary lookup that found it reached. When the match itself
    /// already absorbed `latest` (`k >= 1`, which implies `chain[0] == latest`), `new_prev`/`k`
    /// already account for the full absorbed span and `outline` is used as matched. When the
    /// match didn't reach back that far (`k == 0`, e.g. a single-stroke suffix key), `latest` is
    /// absorbed here explicitly: its outline is folded into the new node's outline and its own
    /// `prev` becomes the new node's `prev`, so a later stroke sees the whole merged span.
    fn attach_suffix(
        &mut self,
        chain: &[usize],
        k: usize,
        beyond_chain: Option<usize>,
        mut outline: Outline,
        payload: &str,
    ) -> Vec<Command> {
        let Some(latest) = self.latest else {
            return self.commit(outline, format!("{} ", payload), None, None);
        };

        let new_prev = if k >= 1 {
            if k < chain.len() { Some(chain[k]) } else { beyond_chain }
        } else {
            outline = self.history.get(latest).outline.concat(&outline);
            self.history.get(latest).prev
        };

        let prefix = self.history.text_span(new_prev, Some(latest));
        let text = format!("{}{} ", prefix.trim_end(), payload);
        self.commit(outline, text, new_prev, Some(latest))
    }

    fn commit(&mut self, outline: Outline, text: String, prev: Option<usize>, replaced: Option<usize>) -> Vec<Command> {
        let mut commands = Vec::new();
        if let Some(old_latest) = replaced {
            commands.push(Command::Undo(self.history.text_span(prev, Some(old_latest))));
        }
        commands.push(Command::Write(text.clone()));

        let handle = self.history.push(Node {
            outline,
            text,
            prev,
            replaced,
        });
        self.latest = Some(handle);
        commands
    }

    /// The `=undo` procedure: undoes exactly the current `latest` translation, restoring
    /// whatever it had absorbed if it was a multi-stroke absorb.
    fn undo(&mut self) -> Vec<Command> {
        let Some(handle) = self.latest else {
            log::debug!("=undo struck with empty history; ignoring");
            return Vec::new();
        };
        let node = self.history.get(handle).clone();
        let mut commands = vec![Command::Undo(node.text)];

        match node.replaced {
            Some(replaced) => {
                commands.push(Command::Write(self.history.text_span(node.prev, Some(replaced))));
                self.latest = Some(replaced);
            }
            None => {
                self.latest = node.prev;
            }
        }
        commands
    }
}
