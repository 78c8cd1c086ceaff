use crate::DomainName;
use std::fmt;

/// DNS response code as carried in the message header (RCODE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    YXDomain,
    YXRRSet,
    NXRRSet,
    NotAuth,
    NotZone,
    Other(u16),
}

impl ResponseStatus {
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::NoError,
            1 => Self::FormErr,
            2 => Self::ServFail,
            3 => Self::NXDomain,
            4 => Self::NotImp,
            5 => Self::Refused,
            6 => Self::YXDomain,
            7 => Self::YXRRSet,
            8 => Self::NXRRSet,
            9 => Self::NotAuth,
            10 => Self::NotZone,
            other => Self::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::NoError => 0,
            Self::FormErr => 1,
            Self::ServFail => 2,
            Self::NXDomain => 3,
            Self::NotImp => 4,
            Self::Refused => 5,
            Self::YXDomain => 6,
            Self::YXRRSet => 7,
            Self::NXRRSet => 8,
            Self::NotAuth => 9,
            Self::NotZone => 10,
            Self::Other(code) => *code,
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoError => "NOERROR",
            Self::FormErr => "FORMERR",
            Self::ServFail => "SERVFAIL",
            Self::NXDomain => "NXDOMAIN",
            Self::NotImp => "NOTIMP",
            Self::Refused => "REFUSED",
            Self::YXDomain => "YXDOMAIN",
            Self::YXRRSet => "YXRRSET",
            Self::NXRRSet => "NXRRSET",
            Self::NotAuth => "NOTAUTH",
            Self::NotZone => "NOTZONE",
            Self::Other(code) => return write!(f, "RCODE{}", code),
        };
        f.write_str(name)
    }
}

/// Why a query produced no usable response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionFailure {
    Timeout,
    Transport,
    MalformedResponse,
    InvalidQuery,
    NoNameservers,
}

impl ResolutionFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Transport => "transport failure",
            Self::MalformedResponse => "malformed response",
            Self::InvalidQuery => "query encoding failed",
            Self::NoNameservers => "no nameservers configured",
        }
    }
}

/// Outcome of a single CNAME query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryStatus {
    Response(ResponseStatus),
    Error(ResolutionFailure),
}

impl QueryStatus {
    pub fn is_noerror(&self) -> bool {
        matches!(self, QueryStatus::Response(ResponseStatus::NoError))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryStatus::Error(_))
    }
}

impl fmt::Display for QueryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryStatus::Response(status) => status.fmt(f),
            QueryStatus::Error(failure) => write!(f, "ERROR ({})", failure.as_str()),
        }
    }
}

/// Result of resolving one domain: status plus CNAME targets in answer order.
///
/// `records` is empty unless the status is NOERROR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    domain: DomainName,
    status: QueryStatus,
    records: Vec<String>,
}

impl QueryResult {
    /// Builds a result from a received response. Records are kept only for NOERROR.
    pub fn answered(domain: DomainName, status: ResponseStatus, records: Vec<String>) -> Self {
        let records = if status == ResponseStatus::NoError {
            records
        } else {
            Vec::new()
        };
        Self {
            domain,
            status: QueryStatus::Response(status),
            records,
        }
    }

    pub fn failed(domain: DomainName, failure: ResolutionFailure) -> Self {
        Self {
            domain,
            status: QueryStatus::Error(failure),
            records: Vec::new(),
        }
    }

    pub fn domain(&self) -> &DomainName {
        &self.domain
    }

    pub fn status(&self) -> QueryStatus {
        self.status
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }
}
