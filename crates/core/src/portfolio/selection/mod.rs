mod selection_resolver;

pub use selection_resolver::*;
