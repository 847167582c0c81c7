/// The observed outcome of one probe: status code, the response headers in
/// the order the HTTP layer reported them (repeated names kept one entry per
/// value), and the body decoded as text.
#[derive(Debug, Default)]
pub struct Transcript {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
