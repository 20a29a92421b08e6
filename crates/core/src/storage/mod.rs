mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::RecordStore;
pub use types::Outcome;
