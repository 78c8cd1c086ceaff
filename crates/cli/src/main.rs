//! # findcname
//!
//! Resolves the CNAME records of every domain in a list and reports the DNS
//! status of each query.

mod bootstrap;
mod di;
mod report;

use clap::Parser;
use findcname_application::ports::DomainListSource;
use findcname_application::use_cases::ResolveCnamesUseCase;
use findcname_domain::CliOverrides;
use findcname_infrastructure::input::FileDomainList;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "findcname")]
#[command(version)]
#[command(about = "Retrieve CNAME records for a list of domain names.")]
struct Cli {
    /// Path to a file containing domain names (or URLs), one per line
    #[arg(short = 'l', long = "list")]
    list: PathBuf,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Nameserver to query (ip or ip:port); overrides config and resolv.conf
    #[arg(short = 'n', long = "nameserver")]
    nameservers: Vec<String>,

    /// Query timeout in milliseconds
    #[arg(short = 't', long = "timeout")]
    timeout_ms: Option<u64>,

    /// Re-send truncated UDP answers over TCP
    #[arg(long)]
    tcp_fallback: Option<bool>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,

    /// Do not print the banner
    #[arg(long)]
    no_banner: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            nameservers: self.nameservers.clone(),
            query_timeout: self.timeout_ms,
            tcp_fallback: self.tcp_fallback,
            log_level: self.log_level.clone(),
            no_banner: self.no_banner,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    if config.output.banner {
        report::write_banner(&mut io::stdout().lock())?;
    }

    let source = FileDomainList::new(&cli.list);
    let list = source.read_domains().await?;

    info!(
        domains = list.domains.len(),
        skipped = list.skipped.len(),
        "Domain list loaded"
    );

    let resolver = di::build_resolver(&config).await?;
    let use_case = ResolveCnamesUseCase::new(resolver, config.dns.timeout());

    let mut write_error: Option<io::Error> = None;
    use_case
        .execute(&list.domains, |result| {
            if write_error.is_some() {
                return;
            }
            let mut out = io::stdout().lock();
            if let Err(e) = report::write_result(&mut out, result).and_then(|_| out.flush()) {
                write_error = Some(e);
            }
        })
        .await;

    if let Some(e) = write_error {
        return Err(e.into());
    }

    Ok(())
}
