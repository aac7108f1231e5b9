//! Recovery of bilingual (English/Arabic) asset metadata from freeform
//! vision-model output.

pub mod elements;
pub mod extract;
pub mod name;
pub mod parser;
pub mod script;
pub mod tags;
pub mod text;

pub use elements::Metadata;
pub use parser::parse_metadata;
pub use script::Scripts;
