use std::fmt::Write;
use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of a single probe run.
///
/// Any HTTP status the server returns, including 4xx/5xx, is a completed
/// probe and never surfaces here; only argument, credential, and transport
/// problems do.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("missing required <url> argument")]
    MissingUrl,

    #[error("invalid target url `{url}`")]
    InvalidInput {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to load credential bundle `{}`", path.display())]
    CredentialLoad {
        path: PathBuf,
        #[source]
        source: CredentialError,
    },

    #[error("failed to build TLS client configuration")]
    TlsConfig(#[from] rustls::Error),

    #[error("connection to {url} failed")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to write transcript")]
    Io(#[from] std::io::Error),
}

/// What went wrong while opening or decoding a PKCS#12 credential bundle.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("could not read the bundle")]
    Read(#[from] std::io::Error),

    #[error("could not decode the PKCS#12 container")]
    Decode(#[from] openssl::error::ErrorStack),

    #[error("the bundle holds no private key")]
    MissingKey,

    #[error("the bundle holds no certificate")]
    MissingCertificate,
}

/// Renders an error with its full source chain, one `Caused by:` line per
/// level, for the fatal diagnostic printed on stderr.
pub fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, "\nCaused by: {}", src);
        err = src;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_includes_the_source_chain() {
        let err = ProbeError::CredentialLoad {
            path: PathBuf::from("/tmp/missing.p12"),
            source: CredentialError::MissingKey,
        };
        let rendered = report(&err);
        assert!(rendered.starts_with("failed to load credential bundle `/tmp/missing.p12`"));
        assert!(rendered.contains("Caused by: the bundle holds no private key"));
    }

    #[test]
    fn report_without_a_source_is_one_line() {
        let rendered = report(&ProbeError::MissingUrl);
        assert_eq!(rendered, "missing required <url> argument");
    }
}
