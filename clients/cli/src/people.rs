use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use deel_api_model::Person;
use deel_client::Aggregated;

use crate::args::{CommonOptions, OutputFormat, PeopleCommand};
use crate::list::{emit_list, emit_more_hint, ListConfig, PageArgs};
use crate::ui::FancyToString;
use crate::Command;

const PEOPLE: ListConfig<Person> = ListConfig {
    resource: "People",
    empty_message: "No people found.",
    default_limit: 50,
    headers: &[
        "Id",
        "Name",
        "Email",
        "Country",
        "Job Title",
        "Department",
        "Status",
    ],
    row: person_row,
};

#[async_trait]
impl Command for PeopleCommand {
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
            | PeopleCommand::List(c) => c.run(out, err, common_options).await,
        }
    }
}

#[derive(Clone, Debug, Parser)]
pub struct List {
    #[clap(flatten)]
    pub(crate) page: PageArgs,
    /// Only show people based in this country (ISO code, e.g. `DE`). The
    /// filter is applied to the fetched page(s); combine with `--all` to
    /// search everyone. A page with no match still points at the next one.
    #[arg(long)]
    country: Option<String>,
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

        let mut result = self
            .page
            .collect(&PEOPLE, |pagination| {
                deel_client::fetch_page(deel_client::people::list(
                    client, pagination,
                ))
            })
            .await?;

        let fetched = result.items.len();
        if let Some(ref country) = self.country {
            result.items.retain(|p| in_country(p, country));
        }
        let emptied_by_filter = fetched > 0 && result.items.is_empty();

        emit_people(out, err, common_options.output, &result, emptied_by_filter)
            .await
    }
}

/// Like [`emit_list`], but an empty message caused by the client-side
/// filter keeps the continuation hint: later pages may still match.
async fn emit_people<A, B>(
    out: &mut tokio::io::BufWriter<A>,
    err: &mut tokio::io::BufWriter<B>,
    format: OutputFormat,
    result: &Aggregated<Person>,
    emptied_by_filter: bool,
) -> Result<()>
where
    A: tokio::io::AsyncWrite + Send + Sync + Unpin,
    B: tokio::io::AsyncWrite + Send + Sync + Unpin,
{
    emit_list(out, err, format, &PEOPLE, result).await?;
    if emptied_by_filter && format == OutputFormat::Table {
        emit_more_hint(err, result).await?;
    }
    Ok(())
}

fn in_country(person: &Person, country: &str) -> bool {
    person
        .country
        .as_deref()
        .is_some_and(|c| c.eq_ignore_ascii_case(country))
}

fn person_row(person: &Person) -> Vec<String> {
    vec![
        person.id.clone(),
        person.full_name.clone().unwrap_or_default(),
        person.work_email.clone().unwrap_or_default(),
        person.country.clone().unwrap_or_default(),
        person.job_title.clone().unwrap_or_default(),
        person
            .department
            .as_ref()
            .and_then(|d| d.name.clone())
            .unwrap_or_default(),
        person.hiring_status.fancy(),
    ]
}
