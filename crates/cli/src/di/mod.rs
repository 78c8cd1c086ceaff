use findcname_application::ports::{CnameResolver, NameserverSource};
use findcname_domain::Config;
use findcname_infrastructure::dns::StubCnameResolver;
use findcname_infrastructure::system::SystemResolvConf;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

/// Nameservers from the configuration, or from resolv.conf when none are set.
///
/// An unreadable resolv.conf is not fatal: every query then reports that no
/// nameserver is configured.
pub async fn resolve_nameservers(config: &Config) -> anyhow::Result<Vec<SocketAddr>> {
    let configured = config
        .dns
        .nameserver_addrs()
        .map_err(anyhow::Error::msg)?;
    if !configured.is_empty() {
        return Ok(configured);
    }

    let source = SystemResolvConf::with_path(config.dns.resolv_conf.clone());
    match source.nameservers().await {
        Ok(servers) => {
            if servers.is_empty() {
                warn!(path = %config.dns.resolv_conf, "No nameservers found in resolv.conf");
            }
            Ok(servers)
        }
        Err(e) => {
            warn!(error = %e, "Could not load system nameservers");
            Ok(Vec::new())
        }
    }
}

pub async fn build_resolver(config: &Config) -> anyhow::Result<Arc<dyn CnameResolver>> {
    let nameservers = resolve_nameservers(config).await?;
    let resolver =
        StubCnameResolver::new(nameservers).with_tcp_fallback(config.dns.tcp_fallback);

    info!(
        nameserver = ?resolver.nameservers().first(),
        tcp_fallback = config.dns.tcp_fallback,
        "Stub resolver ready"
    );

    Ok(Arc::new(resolver))
}
