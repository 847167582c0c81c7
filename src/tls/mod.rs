pub mod identity;
pub mod trust;

use std::sync::Arc;

pub use identity::{BUNDLE_PASSPHRASE, ClientIdentity};
pub use trust::{AcceptAnyServer, PolicyVerifier, TrustPolicy};

/// Assembles the client-side TLS configuration: server trust comes from the
/// given policy, client authentication is offered only when an identity was
/// loaded.
pub fn client_config(
    identity: Option<ClientIdentity>,
    policy: Arc<dyn TrustPolicy>,
) -> Result<rustls::ClientConfig, rustls::Error> {
    let builder = rustls::ClientConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()?
    .dangerous()
    .with_custom_certificate_verifier(Arc::new(PolicyVerifier::new(policy)));

    match identity {
        Some(identity) => builder.with_client_auth_cert(identity.cert_chain, identity.key),
        None => Ok(builder.with_no_client_auth()),
    }
}
