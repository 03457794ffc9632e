use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::clap_derive::Parser;
use clap::ValueEnum;
use deel_client::{
    ClientBuilder,
    Response,
    BASE_URL_ENV,
    DEFAULT_BASE_URL,
    SANDBOX_BASE_URL,
};
use url::Url;

use crate::client::WrappedClient;
use crate::ui::FancyToString;
use crate::{contracts, invoices, people, teams, timesheets, whoami, Command};

pub(crate) const DEEL_API_TOKEN_VAR: &str = "DEEL_API_TOKEN";

#[derive(Parser, Debug, Clone)]
/// Command-line client for the Deel HR and payroll platform
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonOptions,
    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable tables
    #[default]
    Table,
    /// Machine readable JSON
    Json,
}

#[derive(Parser, Debug, Clone)]
pub struct CommonOptions {
    #[arg(long, global = true)]
    /// Talk to the Deel sandbox (https://api-sandbox.demo.deel.com)
    pub sandbox: bool,
    #[arg(long, global = true, value_name = "URL", env(BASE_URL_ENV))]
    pub base_url: Option<Url>,
    // Unfortunately, we can't make this required **and** global at the same
    // time. See [https://github.com/clap-rs/clap/issues/1546]
    #[arg(
        long,
        value_name = "TOKEN",
        env(DEEL_API_TOKEN_VAR),
        hide_env_values = true
    )]
    /// The Deel API token. We attempt to read from `.env` if environment
    /// variable is not set
    pub api_token: String,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    /// How list results are printed
    pub output: OutputFormat,
    #[arg(long, global = true)]
    /// Displays a table with meta information about the response
    pub show_meta: bool,
}

#[derive(Parser, Debug, Clone)]
pub enum CliCommand {
    /// Commands for contracts
    Contracts {
        #[command(subcommand)]
        command: ContractsCommand,
    },
    /// Commands for people in the organization
    People {
        #[command(subcommand)]
        command: PeopleCommand,
    },
    /// Commands for contractor timesheets
    Timesheets {
        #[command(subcommand)]
        command: TimesheetsCommand,
    },
    /// Commands for invoices
    Invoices {
        #[command(subcommand)]
        command: InvoicesCommand,
    },
    /// Commands for teams
    Teams {
        #[command(subcommand)]
        command: TeamsCommand,
    },
    #[command(name = "whoami")]
    /// Prints information about the current context/environment
    WhoAmI(whoami::WhoAmI),
}

#[derive(Parser, Debug, Clone)]
pub enum ContractsCommand {
    /// List contracts
    #[command(visible_alias = "ls")]
    List(contracts::List),
}

#[derive(Parser, Debug, Clone)]
pub enum PeopleCommand {
    /// List people
    #[command(visible_alias = "ls")]
    List(people::List),
}

#[derive(Parser, Debug, Clone)]
pub enum TimesheetsCommand {
    /// List timesheets
    #[command(visible_alias = "ls")]
    List(timesheets::List),
}

#[derive(Parser, Debug, Clone)]
pub enum InvoicesCommand {
    /// List invoices
    #[command(visible_alias = "ls")]
    List(invoices::List),
}

#[derive(Parser, Debug, Clone)]
pub enum TeamsCommand {
    /// List teams
    #[command(visible_alias = "ls")]
    List(teams::List),
}

impl CommonOptions {
    pub fn base_url(&self) -> &Url {
        if self.sandbox {
            &SANDBOX_BASE_URL
        } else {
            self.base_url.as_ref().unwrap_or(&DEFAULT_BASE_URL)
        }
    }

    pub fn new_client(&self) -> Result<WrappedClient> {
        let base_url = self.base_url();
        let inner = ClientBuilder::new()
            .base_url(base_url.clone())
            .context("Error while parsing base url")?
            .api_token(self.api_token.clone())
            .build()?;
        Ok(WrappedClient {
            common_options: self.clone(),
            inner,
        })
    }

    pub fn show_response_meta<T>(&self, response: &Response<T>) {
        use colored::Colorize;
        // Print extra information.
        if self.show_meta {
            eprintln!();
            eprintln!(
                "{}",
                "<<-------------------------------------------------".green()
            );
            eprintln!("Path: {}", response.url());
            eprintln!("Status Code: {}", response.status_code().fancy());
            eprintln!(
                "Request Id: {}",
                response.request_id().clone().unwrap_or_default().green()
            );
            eprintln!(
                "{}",
                "-------------------------------------------------".green()
            );
            eprintln!();
        }
    }
}

#[async_trait]
impl Command for CliCommand {
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
            | CliCommand::Contracts { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::People { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::Timesheets { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::Invoices { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::Teams { command } => {
                command.run(out, err, common_options).await
            }
            | CliCommand::WhoAmI(c) => c.run(out, err, common_options).await,
        }
    }
}
