#![allow(unused_imports)]

pub mod dns_server_mock;

pub use dns_server_mock::{
    encode_response, MockBehavior, MockDnsServer, MockRecord, RCODE_NOERROR, RCODE_NXDOMAIN,
    RCODE_REFUSED, RCODE_SERVFAIL,
};
