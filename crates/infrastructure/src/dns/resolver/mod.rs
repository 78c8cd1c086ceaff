pub mod stub;

pub use stub::StubCnameResolver;
