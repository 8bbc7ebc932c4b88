pub mod sld;
pub mod synchronizer;

pub use crate::domain::model::{MapFile, StyleResponse, SyncOutcome, SyncReport};
pub use crate::domain::ports::{ConfigProvider, Storage, StyleSource};
pub use crate::utils::error::Result;
