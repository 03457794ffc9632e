use anyhow::Result;
use async_trait::async_trait;

use crate::args::CommonOptions;

/// A runnable (sub)command. Results go to `out`, diagnostics such as
/// pagination hints go to `err`.
#[async_trait]
pub trait Command {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()>;
}
