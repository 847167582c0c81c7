//! Single-shot HTTPS probe for observing how a server and a TLS client
//! negotiate client-certificate authentication under the RFC 5246 "optional"
//! and "mandatory" request modes.
//!
//! The probe issues exactly one GET, optionally presenting an identity from
//! a PKCS#12 bundle, accepts any server certificate, and prints the response
//! transcript or the handshake failure.

pub mod cli;
pub mod error;
pub mod probe;
pub mod tls;
