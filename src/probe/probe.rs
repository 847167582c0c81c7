use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, USER_AGENT};
use url::Url;

use crate::error::ProbeError;
use crate::tls::{self, AcceptAnyServer, ClientIdentity};

use super::result::Transcript;

/// Everything one probe needs: where to connect, who to claim to be, and
/// which credential bundle (if any) supplies the client certificate.
#[derive(Debug)]
pub struct ProbeRequest {
    pub target: Url,
    pub client_identifier: String,
    pub credential: Option<PathBuf>,
}

/// Performs the single GET against the target and streams the transcript
/// into `out` as data arrives. Returns the assembled transcript so callers
/// and tests can inspect what was printed.
///
/// Exactly one attempt is made: a handshake refused by the server (for
/// example the fatal alert a mandatory-certificate target sends when no
/// certificate is offered) comes back as [`ProbeError::Connection`] with
/// nothing written to `out`.
pub async fn run(request: &ProbeRequest, out: &mut dyn Write) -> Result<Transcript, ProbeError> {
    let identity = match &request.credential {
        Some(path) => Some(ClientIdentity::from_pkcs12_file(path).map_err(|source| {
            ProbeError::CredentialLoad {
                path: path.clone(),
                source,
            }
        })?),
        None => None,
    };

    let tls_config = tls::client_config(identity, Arc::new(AcceptAnyServer))?;

    let connection_failure = |source: reqwest::Error| ProbeError::Connection {
        url: request.target.to_string(),
        source,
    };

    // One handshake, one exchange: redirects would add more of both.
    // No timeout override either; platform defaults apply.
    let client = reqwest::Client::builder()
        .use_preconfigured_tls(tls_config)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(connection_failure)?;

    log::debug!("GET {} as `{}`", request.target, request.client_identifier);

    let mut response = client
        .get(request.target.clone())
        .header(USER_AGENT, request.client_identifier.as_str())
        // The original probe always sent this on its GET. Kept so transcripts
        // stay comparable; it has no effect on a bodyless request.
        .header(CONTENT_TYPE, "text/html")
        .send()
        .await
        .map_err(connection_failure)?;

    let mut transcript = Transcript {
        status: response.status().as_u16(),
        headers: collect_headers(response.headers()),
        body: String::new(),
    };
    write_head(out, transcript.status, &transcript.headers)?;

    // Body chunks print as they are read; boundaries fall wherever the
    // transport put them.
    while let Some(chunk) = response.chunk().await.map_err(connection_failure)? {
        let text = String::from_utf8_lossy(&chunk);
        out.write_all(text.as_bytes())?;
        transcript.body.push_str(&text);
    }
    out.flush()?;

    Ok(transcript)
}

fn collect_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

fn write_head(out: &mut dyn Write, status: u16, headers: &[(String, String)]) -> std::io::Result<()> {
    writeln!(out, "response code = {status}")?;
    for (name, value) in headers {
        writeln!(out, "{name}: {value}")?;
    }
    writeln!(out)
}
