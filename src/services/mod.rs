pub mod content_extractor;
pub mod link_discovery;
pub mod markup;
pub mod pagination;

pub use content_extractor::ContentExtractor;
pub use link_discovery::LinkDiscoverer;
pub use pagination::{expand_all, locate_load_more_controls, ExpansionReport};
