pub mod http_header;

pub use http_header::{to_header_lines, Header};
