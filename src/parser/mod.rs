pub mod explodes;
pub mod node_manip;
pub mod uri;

pub use explodes::{explode, extract_links};
pub use node_manip::{dedupe_nodes, explode_content, parse_links, ParseReport};
