use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Unable to build the HTTP client: {source}"))]
    BuildClient { source: reqwest::Error },

    #[snafu(display("Request to {url} failed: {source}"))]
    Request { url: String, source: reqwest::Error },

    #[snafu(display("Unable to read the response body from {url}: {source}"))]
    ReadBody { url: String, source: reqwest::Error },

    #[snafu(display("Unable to write output: {source}"))]
    WriteOutput { source: std::io::Error },

    #[snafu(display("Hammer task did not complete: {source}"))]
    HammerPanicked { source: tokio::task::JoinError },

    #[snafu(display("Unable to build the async runtime: {source}"))]
    BuildRuntime { source: std::io::Error },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
