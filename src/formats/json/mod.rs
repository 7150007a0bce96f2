//! JSON dump format
//!
//! UABEA's JSON dump of the same asset: one object mirroring the TXT
//! field layout, with every vector wrapped in `{"Array": [...]}`. Reading
//! is key-order independent; writing pretty-prints with two-space indent
//! in canonical field order.

mod reader;
mod writer;

pub use reader::{parse_json_dump, read_json_dump};
pub use writer::{serialize_json_dump, write_json_dump};
