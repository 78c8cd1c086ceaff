pub mod domain_file;

pub use domain_file::{parse_domain_list, FileDomainList};
