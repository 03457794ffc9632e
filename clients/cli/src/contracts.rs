use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use deel_api_model::{Contract, ContractStatus, ContractType, ContractsFilter};

use crate::args::{CommonOptions, ContractsCommand};
use crate::list::{emit_list, ListConfig, PageArgs};
use crate::ui::{date, FancyToString};
use crate::Command;

const CONTRACTS: ListConfig<Contract> = ListConfig {
    resource: "Contracts",
    empty_message: "No contracts found.",
    default_limit: 100,
    headers: &["Id", "Title", "Type", "Status", "Worker", "Created At"],
    row: contract_row,
};

#[async_trait]
impl Command for ContractsCommand {
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
            | ContractsCommand::List(c) => {
                c.run(out, err, common_options).await
            }
        }
    }
}

#[derive(Clone, Debug, Parser)]
pub struct List {
    #[clap(flatten)]
    pub(crate) page: PageArgs,
    /// Only list contracts in this status. Can be repeated.
    #[arg(long = "status", value_enum)]
    statuses: Vec<ContractStatus>,
    /// Only list contracts of this type. Can be repeated.
    #[arg(long = "type", value_enum)]
    types: Vec<ContractType>,
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
        let filter = &ContractsFilter {
            statuses: self.statuses.clone(),
            types: self.types.clone(),
        };

        let result = self
            .page
            .collect(&CONTRACTS, |pagination| {
                deel_client::fetch_page(deel_client::contracts::list(
                    client, pagination, filter,
                ))
            })
            .await?;

        emit_list(out, err, common_options.output, &CONTRACTS, &result).await
    }
}

fn contract_row(contract: &Contract) -> Vec<String> {
    vec![
        contract.id.clone(),
        contract.title.clone().unwrap_or_default(),
        contract
            .contract_type
            .map(|t| t.to_string())
            .unwrap_or_default(),
        contract.status.fancy(),
        contract
            .worker
            .as_ref()
            .and_then(|w| w.full_name.clone())
            .unwrap_or_default(),
        date(&contract.created_at),
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::contract_row;

    #[test]
    fn row_has_one_cell_per_header() -> anyhow::Result<()> {
        colored::control::set_override(false);
        let contract = serde_json::from_value(json!({
            "id": "c-1",
            "title": "Backend engineer",
            "type": "pay_as_you_go_time_based",
            "status": "in_progress",
            "worker": { "full_name": "Ada Lovelace" },
            "created_at": "2024-01-31T10:00:00Z",
        }))?;

        let row = contract_row(&contract);
        assert_eq!(row.len(), super::CONTRACTS.headers.len());
        assert_eq!(
            row,
            vec![
                "c-1",
                "Backend engineer",
                "pay_as_you_go_time_based",
                "in_progress",
                "Ada Lovelace",
                "2024-01-31",
            ]
        );
        Ok(())
    }
}
