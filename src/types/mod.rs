mod domain_types;

pub use domain_types::*;
