use std::path::PathBuf;

use url::Url;

use crate::error::ProbeError;
use crate::probe::ProbeRequest;

/// Identifier sent when the caller does not spoof one.
pub const DEFAULT_CLIENT_IDENTIFIER: &str = concat!("certprobe/", env!("CARGO_PKG_VERSION"));

/// Parses the three positional arguments: `<url> [client-identifier]
/// [credential-bundle]`. Only the URL is validated here; the identifier is
/// free-form and the bundle path is checked when it is opened.
pub fn parse<I>(mut args: I) -> Result<ProbeRequest, ProbeError>
where
    I: Iterator<Item = String>,
{
    let url = args.next().ok_or(ProbeError::MissingUrl)?;
    let target = Url::parse(&url).map_err(|source| ProbeError::InvalidInput {
        url: url.clone(),
        source,
    })?;
    let client_identifier = args
        .next()
        .unwrap_or_else(|| DEFAULT_CLIENT_IDENTIFIER.to_string());
    let credential = args.next().map(PathBuf::from);

    Ok(ProbeRequest {
        target,
        client_identifier,
        credential,
    })
}

pub fn usage() {
    println!("certprobe <url> [client-identifier] [credential-bundle]");
    println!(" url: URL of a service requesting a client certificate");
    println!(
        " client-identifier: value for the identifying header, default '{DEFAULT_CLIENT_IDENTIFIER}'"
    );
    println!(
        " credential-bundle: path to a PKCS#12 file holding a client certificate and its key"
    );
    println!();
    println!(" examples:");
    println!(" $ certprobe https://localhost:8443/test/WebId Opera client.p12");
    println!(" $ certprobe https://localhost:8443/test/WebId IE");
}
