//! Raw TLS reachability probe.
//!
//! Deliberately independent of the page fetch: a fresh TCP connection to
//! port 443 and a rustls handshake with hostname verification, one attempt,
//! no retry. The probe never fails the pipeline — every outcome is a
//! `(available, message)` pair.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio_rustls::rustls::pki_types::ServerName;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

const TLS_PORT: u16 = 443;

/// Outcome of one handshake probe. `message` is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsProbe {
    pub available: bool,
    pub message: String,
}

impl TlsProbe {
    fn unavailable(message: impl Into<String>) -> Self {
        Self {
            available: false,
            message: message.into(),
        }
    }
}

/// Probes TLS availability of `url`'s host on port 443.
///
/// A URL without a parseable host is a local validation failure
/// (`"Invalid URL"`) and produces no network traffic. Otherwise the TCP
/// connect and the handshake are each bounded by `connect_timeout_secs`.
pub async fn probe(url: &str, connect_timeout_secs: u64) -> TlsProbe {
    let Some(host) = host_of(url) else {
        return TlsProbe::unavailable("Invalid URL");
    };

    let server_name = match ServerName::try_from(host.clone()) {
        Ok(name) => name,
        Err(e) => return TlsProbe::unavailable(format!("SSL Not Available ({e})")),
    };

    let timeout = Duration::from_secs(connect_timeout_secs);
    let stream = match tokio::time::timeout(
        timeout,
        TcpStream::connect((host.as_str(), TLS_PORT)),
    )
    .await
    {
        Err(_) => return TlsProbe::unavailable("Conn Timeout"),
        Ok(Err(e)) => return TlsProbe::unavailable(format!("SSL Not Available ({e})")),
        Ok(Ok(stream)) => stream,
    };

    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    let config = ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth();
    let connector = TlsConnector::from(Arc::new(config));

    let tls_stream = match tokio::time::timeout(timeout, connector.connect(server_name, stream))
        .await
    {
        Err(_) => return TlsProbe::unavailable("Conn Timeout"),
        Ok(Err(e)) => return TlsProbe::unavailable(format!("SSL Error: {e}")),
        Ok(Ok(stream)) => stream,
    };

    let (_, session) = tls_stream.get_ref();
    let has_certificate = session
        .peer_certificates()
        .is_some_and(|certs| !certs.is_empty());

    if has_certificate {
        TlsProbe {
            available: true,
            message: "SSL Available".to_string(),
        }
    } else {
        TlsProbe::unavailable("SSL Not Available (no peer certificate)")
    }
}

/// Extracts the hostname from `url`, or `None` when the URL has no
/// parseable network authority.
fn host_of(url: &str) -> Option<String> {
    let parsed = reqwest::Url::parse(url).ok()?;
    parsed.host_str().map(str::to_owned)
}
