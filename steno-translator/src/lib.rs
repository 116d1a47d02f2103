//! The greedy, history-aware stroke-to-text translator: the algorithmic core of the pipeline.
//!
//! Translation history lives in an append-only arena (`history`), so nodes are never mutated or
//! reference-counted; `Translator::latest` is just a handle that moves forward on each new
//! stroke and backward on `=undo`.

mod entry;
mod history;
mod translator;

pub use translator::Translator;
