use crate::error::{BuildClientSnafu, ReadBodySnafu, RequestSnafu, Result, WriteOutputSnafu};
use crate::model::{summary_line, Config, Throw};
use chrono::Utc;
use snafu::ResultExt;
use std::io::Write;

/// Hammer `config.url` with `config.throws` sequential GET requests.
///
/// Every throw writes one timing line to `out`, preceded by the response body
/// when `config.verbose` is set. A final summary line follows the last throw.
/// Returns the summed elapsed time of all throws in seconds.
///
/// The first failed request, non-success status included, ends the hammer
/// with an error and no summary line is written.
pub async fn hammer<W: Write>(config: &Config, hid: usize, mut out: W) -> Result<f64> {
    let client = reqwest::Client::builder().build().context(BuildClientSnafu)?;
    tracing::debug!(hammer = hid, url = %config.url, throws = config.throws, "hammer started");

    let mut total_time = 0.0;
    for index in 0..config.throw_count() {
        let begin = Utc::now();
        let response = client
            .get(&config.url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .context(RequestSnafu { url: &config.url })?;
        let body = response
            .text()
            .await
            .context(ReadBodySnafu { url: &config.url })?;
        let throw = Throw {
            hammer: hid,
            index,
            begin,
            end: Utc::now(),
        };

        if config.verbose {
            writeln!(out, "{body}").context(WriteOutputSnafu)?;
        }
        total_time += throw.elapsed_secs();
        writeln!(out, "{throw}").context(WriteOutputSnafu)?;
        tracing::trace!(hammer = hid, index, elapsed = throw.elapsed_secs(), "throw complete");
    }

    writeln!(out, "{}", summary_line(hid, total_time)).context(WriteOutputSnafu)?;
    tracing::debug!(hammer = hid, total_time, "hammer finished");

    Ok(total_time)
}
