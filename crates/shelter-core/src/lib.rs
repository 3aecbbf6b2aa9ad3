//! Normalization of flat shelter records into lookup-keyed entities.

pub mod dictionary;
pub mod key_format;
pub mod normalize;
pub mod pipeline;
pub mod split;

pub use dictionary::{Dictionary, DictionarySet};
pub use key_format::{lookup_rows, lookup_tables};
pub use normalize::{NormalizeError, escape_name, normalize_record, normalize_records};
pub use pipeline::{NormalizeOutput, run_normalization};
pub use split::{EntitySet, split_entities};
