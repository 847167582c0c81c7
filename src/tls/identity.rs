use std::fs;
use std::path::Path;

use openssl::pkcs12::Pkcs12;
use rustls::pki_types::{CertificateDer, PrivateKeyDer, PrivatePkcs8KeyDer};

use crate::error::CredentialError;

/// Passphrase every credential bundle is expected to use.
///
/// Hard-coded on purpose: this tool only ever opens throwaway test fixtures.
/// Anything protecting a real credential must not be opened with this.
pub const BUNDLE_PASSPHRASE: &str = "secret";

/// One client identity: the private key and certificate chain presented to
/// the server during the TLS handshake.
#[derive(Debug)]
pub struct ClientIdentity {
    pub cert_chain: Vec<CertificateDer<'static>>,
    pub key: PrivateKeyDer<'static>,
}

impl ClientIdentity {
    /// Reads a PKCS#12 container from disk and extracts the identity it
    /// holds. The file is read once, before any connection is opened.
    pub fn from_pkcs12_file(path: &Path) -> Result<Self, CredentialError> {
        let der = fs::read(path)?;
        Self::from_pkcs12_der(&der)
    }

    pub fn from_pkcs12_der(der: &[u8]) -> Result<Self, CredentialError> {
        let parsed = Pkcs12::from_der(der)?.parse2(BUNDLE_PASSPHRASE)?;
        let key = parsed.pkey.ok_or(CredentialError::MissingKey)?;
        let cert = parsed.cert.ok_or(CredentialError::MissingCertificate)?;

        let mut cert_chain = vec![CertificateDer::from(cert.to_der()?)];
        if let Some(extra_certs) = parsed.ca {
            for extra in extra_certs {
                cert_chain.push(CertificateDer::from(extra.to_der()?));
            }
        }

        // rustls wants PKCS#8; the bundle's key may be in any encoding.
        let key = PrivateKeyDer::from(PrivatePkcs8KeyDer::from(key.private_key_to_pkcs8()?));

        log::debug!(
            "loaded client identity with {} certificate(s)",
            cert_chain.len()
        );
        Ok(Self { cert_chain, key })
    }
}
