//! Models generated from the schemas of the source OpenAPI document

pub mod single_ref_type;
pub mod traits;

pub use single_ref_type::{SingleRefType, SingleRefTypeValue};
pub use traits::StringEnum;
