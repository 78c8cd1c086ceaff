pub mod cname_resolver;
pub mod domain_list_source;
pub mod nameserver_source;

pub use cname_resolver::CnameResolver;
pub use domain_list_source::{DomainList, DomainListSource, SkippedLine};
pub use nameserver_source::NameserverSource;
