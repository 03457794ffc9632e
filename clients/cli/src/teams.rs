use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use deel_api_model::Team;

use crate::args::{CommonOptions, TeamsCommand};
use crate::list::{emit_list, ListConfig, PageArgs};
use crate::Command;

const TEAMS: ListConfig<Team> = ListConfig {
    resource: "Teams",
    empty_message: "No teams found.",
    default_limit: 100,
    headers: &["Id", "Name"],
    row: |team| vec![team.id.clone(), team.name.clone()],
};

#[async_trait]
impl Command for TeamsCommand {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        match self {
            | TeamsCommand::List(c) => c.run(out, err, common_options).await,
        }
    }
}

#[derive(Clone, Debug, Parser)]
pub struct List {
    #[clap(flatten)]
    pub(crate) page: PageArgs,
}

#[async_trait]
impl Command for List {
    async fn run<
        A: tokio::io::AsyncWrite + Send + Sync + Unpin,
        B: tokio::io::AsyncWrite + Send + Sync + Unpin,
    >(
        &self,
        out: &mut tokio::io::BufWriter<A>,
        err: &mut tokio::io::BufWriter<B>,
        common_options: &CommonOptions,
    ) -> Result<()> {
        let client = &common_options.new_client()?;

        let result = self
            .page
            .collect(&TEAMS, |pagination| {
                deel_client::fetch_page(deel_client::teams::list(
                    client, pagination,
                ))
            })
            .await?;

        emit_list(out, err, common_options.output, &TEAMS, &result).await
    }
}
