//! Per-call scoped connections.
//!
//! Every loader and inspector entry point opens exactly one connection for
//! its own body and releases it on all exit paths. There is no pool; the
//! descriptor is parsed fresh and the socket closes when the
//! [`ScopedConn`] drops.

use std::sync::Arc;

use tokio_postgres::config::SslMode;
use tokio_postgres::{Client, Config, NoTls};
use tokio_postgres_rustls::MakeRustlsConnect;
use tracing::{debug, warn};

use crate::error::{BulkError, Result};

/// A connection scoped to one call.
///
/// Holds the client and the task driving the socket. Dropping the client
/// resolves the connection future, which ends the session; with autocommit
/// semantics every successfully executed statement is already committed by
/// then.
pub struct ScopedConn {
    client: Client,
    _driver: tokio::task::JoinHandle<()>,
}

impl ScopedConn {
    /// Open a connection from an opaque descriptor string
    /// (`tokio-postgres` key-value or URI form).
    ///
    /// The descriptor's `sslmode` selects the connector: `disable` connects
    /// in plaintext; `prefer` and `require` negotiate TLS without verifying
    /// the server certificate, which is what those modes mean to libpq.
    ///
    /// # Errors
    ///
    /// [`BulkError::Descriptor`] if the descriptor does not parse;
    /// [`BulkError::Db`] for connection failures.
    pub async fn open(descriptor: &str) -> Result<Self> {
        let config: Config = descriptor
            .parse()
            .map_err(|e: tokio_postgres::Error| BulkError::Descriptor(e.to_string()))?;

        match config.get_ssl_mode() {
            SslMode::Disable => {
                warn!("TLS is disabled; credentials travel in plaintext");
                let (client, connection) = config.connect(NoTls).await?;
                Ok(Self {
                    client,
                    _driver: tokio::spawn(async move {
                        if let Err(err) = connection.await {
                            debug!("connection task ended with error: {err}");
                        }
                    }),
                })
            }
            _ => {
                warn!("server certificate is not verified in this sslmode");
                let tls = MakeRustlsConnect::new(insecure_tls_config());
                let (client, connection) = config.connect(tls).await?;
                Ok(Self {
                    client,
                    _driver: tokio::spawn(async move {
                        if let Err(err) = connection.await {
                            debug!("connection task ended with error: {err}");
                        }
                    }),
                })
            }
        }
    }

    /// The live client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn insecure_tls_config() -> rustls::ClientConfig {
    rustls::ClientConfig::builder()
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(NoVerifier))
        .with_no_client_auth()
}

#[derive(Debug)]
struct NoVerifier;

impl rustls::client::danger::ServerCertVerifier for NoVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &rustls::pki_types::CertificateDer<'_>,
        _intermediates: &[rustls::pki_types::CertificateDer<'_>],
        _server_name: &rustls::pki_types::ServerName<'_>,
        _ocsp_response: &[u8],
        _now: rustls::pki_types::UnixTime,
    ) -> std::result::Result<rustls::client::danger::ServerCertVerified, rustls::Error> {
        Ok(rustls::client::danger::ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &rustls::pki_types::CertificateDer<'_>,
        _dss: &rustls::DigitallySignedStruct,
    ) -> std::result::Result<rustls::client::danger::HandshakeSignatureValid, rustls::Error> {
        Ok(rustls::client::danger::HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &rustls::pki_types::CertificateDer<'_>,
        _dss: &rustls::DigitallySignedStruct,
    ) -> std::result::Result<rustls::client::danger::HandshakeSignatureValid, rustls::Error> {
        Ok(rustls::client::danger::HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<rustls::SignatureScheme> {
        vec![
            rustls::SignatureScheme::RSA_PKCS1_SHA256,
            rustls::SignatureScheme::ECDSA_NISTP256_SHA256,
            rustls::SignatureScheme::RSA_PSS_SHA256,
            rustls::SignatureScheme::ED25519,
        ]
    }
}
