pub mod category;
pub mod entity;
pub mod error;
pub mod key;
pub mod options;
pub mod record;

pub use category::Category;
pub use entity::{AnimalEntity, LookupRow, LookupTable, ShelterEntity};
pub use error::{ModelError, Result};
pub use key::SurrogateKey;
pub use options::{AnimalDedupe, EscapeMode, NormalizeOptions};
pub use record::{NormalizedRecord, RawRecord, columns};
