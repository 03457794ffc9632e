use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use deel_api_model::Timesheet;

use crate::args::{CommonOptions, TimesheetsCommand};
use crate::list::{emit_list, ListConfig, PageArgs};
use crate::ui::{date, FancyToString};
use crate::Command;

const TIMESHEETS: ListConfig<Timesheet> = ListConfig {
    resource: "Timesheets",
    empty_message: "No timesheets found.",
    default_limit: 100,
    headers: &[
        "Id",
        "Contract",
        "Quantity",
        "Status",
        "Description",
        "Submitted At",
    ],
    row: timesheet_row,
};

#[async_trait]
impl Command for TimesheetsCommand {
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
            | TimesheetsCommand::List(c) => {
                c.run(out, err, common_options).await
            }
        }
    }
}

#[derive(Clone, Debug, Parser)]
pub struct List {
    #[clap(flatten)]
    pub(crate) page: PageArgs,
    /// Only list timesheets of this contract
    #[arg(long)]
    contract_id: Option<String>,
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
        let contract_id = self.contract_id.as_deref();

        let result = self
            .page
            .collect(&TIMESHEETS, |pagination| {
                deel_client::fetch_page(deel_client::timesheets::list(
                    client,
                    pagination,
                    contract_id,
                ))
            })
            .await?;

        emit_list(out, err, common_options.output, &TIMESHEETS, &result).await
    }
}

fn timesheet_row(timesheet: &Timesheet) -> Vec<String> {
    vec![
        timesheet.id.clone(),
        timesheet
            .contract
            .as_ref()
            .map(|c| c.title.clone().unwrap_or_else(|| c.id.clone()))
            .unwrap_or_default(),
        timesheet
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_default(),
        timesheet.status.fancy(),
        timesheet.description.clone().unwrap_or_default(),
        date(&timesheet.date_submitted),
    ]
}
