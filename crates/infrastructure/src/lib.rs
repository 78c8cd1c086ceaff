//! findcname infrastructure: DNS wire codec, transports, stub resolver and
//! file/system readers behind the application ports.
pub mod dns;
pub mod input;
pub mod system;
