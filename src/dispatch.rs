use crate::error::{BuildRuntimeSnafu, HammerPanickedSnafu, Result};
use crate::model::Config;
use crate::worker;
use snafu::ResultExt;
use std::io::Write;
use tokio::task::JoinSet;

/// Start one hammer per id in `0..config.hammers` and wait for all of them.
///
/// `make_output` hands each hammer its own sink. The totals returned by the
/// hammers are dropped. A failing hammer never stops the others: every hammer
/// runs to completion and the first failure is returned afterwards.
pub async fn dispatch<W, F>(config: &Config, make_output: F) -> Result<()>
where
    W: Write + Send + 'static,
    F: Fn(usize) -> W,
{
    let mut set = JoinSet::new();
    for hid in 0..config.hammer_count() {
        let config = config.clone();
        let out = make_output(hid);
        set.spawn(async move { worker::hammer(&config, hid, out).await });
    }

    let mut first_error = None;
    while let Some(res) = set.join_next().await {
        if let Err(err) = res.context(HammerPanickedSnafu).and_then(|total| total) {
            tracing::debug!(error = %err, "hammer failed");
            first_error.get_or_insert(err);
        }
    }

    first_error.map_or(Ok(()), Err)
}

/// Run every hammer to completion on a runtime with one worker thread per hammer,
/// reporting to standard output.
pub fn run(config: &Config) -> Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.hammer_count().max(1))
        .enable_all()
        .build()
        .context(BuildRuntimeSnafu)?;

    rt.block_on(dispatch(config, |_| std::io::stdout()))
}
