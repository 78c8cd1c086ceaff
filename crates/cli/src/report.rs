use findcname_domain::QueryResult;
use std::io::{self, Write};

const BANNER: &str = r"
   __ _         _  ___
  / _(_)_ _  __| |/ __|_ _  __ _ _ __  ___
 |  _| | ' \/ _` | (__| ' \/ _` | '  \/ -_)
 |_| |_|_||_\__,_|\___|_||_\__,_|_|_|_\___|
running....
";

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)
}

/// Writes one result block: the status line, the CNAME targets when the
/// status is NOERROR, then a blank separator line.
pub fn write_result<W: Write>(out: &mut W, result: &QueryResult) -> io::Result<()> {
    let domain = result.domain();
    writeln!(out, "Status for {}: {}", domain, result.status())?;

    if result.status().is_noerror() {
        writeln!(out, "CNAME records for {}:", domain)?;
        for record in result.records() {
            writeln!(out, "{}", record)?;
        }
    }

    writeln!(out)
}
