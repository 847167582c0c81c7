use std::fmt;
use std::sync::Arc;

use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{DigitallySignedStruct, SignatureScheme};
use x509_parser::parse_x509_certificate;

/// Decides whether a server certificate chain is acceptable.
///
/// The probe takes the policy as a value at configuration time, so a strict
/// variant can replace [`AcceptAnyServer`] without touching the connection
/// logic.
pub trait TrustPolicy: fmt::Debug + Send + Sync {
    /// Judges the chain the server presented, end-entity first.
    fn verify_server_chain(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
    ) -> Result<(), rustls::Error>;

    /// DER-encoded distinguished names of the issuers this policy trusts.
    fn accepted_issuers(&self) -> Vec<Vec<u8>>;
}

/// Accepts every server chain unconditionally and trusts no named issuer.
///
/// Diagnostic posture only: the targets of this probe run self-issued or
/// otherwise unverifiable test certificates, and the subject under test is
/// the client-certificate negotiation, not the server's chain. Never reuse
/// this policy outside a test harness.
#[derive(Debug, Default)]
pub struct AcceptAnyServer;

impl TrustPolicy for AcceptAnyServer {
    fn verify_server_chain(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
    ) -> Result<(), rustls::Error> {
        match parse_x509_certificate(end_entity.as_ref()) {
            Ok((_, cert)) => log::debug!(
                "accepting unverified server chain: subject={}, issuer={}, {} intermediate(s)",
                cert.subject(),
                cert.issuer(),
                intermediates.len()
            ),
            Err(_) => log::debug!("accepting server chain with undecodable end-entity certificate"),
        }
        Ok(())
    }

    fn accepted_issuers(&self) -> Vec<Vec<u8>> {
        Vec::new()
    }
}

/// Adapter exposing a [`TrustPolicy`] to rustls.
///
/// Chain acceptance is delegated to the policy; handshake signatures are
/// asserted, which is as far as a policy that may accept unverifiable chains
/// can meaningfully check them.
#[derive(Debug)]
pub struct PolicyVerifier {
    policy: Arc<dyn TrustPolicy>,
    schemes: Vec<SignatureScheme>,
}

impl PolicyVerifier {
    pub fn new(policy: Arc<dyn TrustPolicy>) -> Self {
        let schemes = rustls::crypto::ring::default_provider()
            .signature_verification_algorithms
            .supported_schemes();
        Self { policy, schemes }
    }
}

impl ServerCertVerifier for PolicyVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        self.policy.verify_server_chain(end_entity, intermediates)?;
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.schemes.clone()
    }
}
