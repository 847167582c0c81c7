pub mod probe;
pub mod result;

pub use probe::{ProbeRequest, run};
pub use result::Transcript;
