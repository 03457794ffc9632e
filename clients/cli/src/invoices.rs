use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use deel_api_model::Invoice;

use crate::args::{CommonOptions, InvoicesCommand};
use crate::list::{emit_list, ListConfig, PageArgs};
use crate::ui::{date, FancyToString};
use crate::Command;

const INVOICES: ListConfig<Invoice> = ListConfig {
    resource: "Invoices",
    empty_message: "No invoices found.",
    default_limit: 50,
    headers: &["Id", "Contract", "Amount", "Status", "Issued At"],
    row: invoice_row,
};

#[async_trait]
impl Command for InvoicesCommand {
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
            | InvoicesCommand::List(c) => c.run(out, err, common_options).await,
        }
    }
}

#[derive(Clone, Debug, Parser)]
pub struct List {
    #[clap(flatten)]
    pub(crate) page: PageArgs,
    /// Only list invoices of this contract
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
            .collect(&INVOICES, |pagination| {
                deel_client::fetch_page(deel_client::invoices::list(
                    client,
                    pagination,
                    contract_id,
                ))
            })
            .await?;

        emit_list(out, err, common_options.output, &INVOICES, &result).await
    }
}

fn invoice_row(invoice: &Invoice) -> Vec<String> {
    let amount = match (&invoice.amount, &invoice.currency) {
        | (Some(amount), Some(currency)) => format!("{amount} {currency}"),
        | (Some(amount), None) => amount.clone(),
        | _ => String::new(),
    };
    vec![
        invoice.id.clone(),
        invoice.contract_id.clone().unwrap_or_default(),
        amount,
        invoice.status.fancy(),
        date(&invoice.issued_at),
    ]
}
