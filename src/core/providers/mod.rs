//! Provider implementations

pub mod bert;
pub mod nlu;

pub use bert::BertProvider;
pub use nlu::NluProvider;
