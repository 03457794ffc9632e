//! Shared plumbing of every `list` subcommand: the `--limit`, `--cursor` and
//! `--all` flags, walking the pages, and printing the result.

use std::future::Future;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use deel_api_model::{PageMeta, Pagination};
use deel_client::{Aggregated, Page, Paginator};
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use tracing::log::info;

use crate::args::OutputFormat;
use crate::emitln;
use crate::ui::json_string;

#[derive(Args, Clone, Debug, Default)]
pub struct PageArgs {
    /// Cursor to start listing from
    #[arg(long)]
    pub cursor: Option<String>,
    /// Number of results per page (1-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: Option<u32>,
    /// Fetch every page instead of a single one
    #[arg(long)]
    pub all: bool,
}

/// How a list command names, fetches and prints its resource.
pub struct ListConfig<T> {
    /// Plural noun used in summaries, e.g. `Contracts`.
    pub resource: &'static str,
    /// Printed instead of a table when nothing matched.
    pub empty_message: &'static str,
    /// Page size when `--limit` isn't given.
    pub default_limit: u32,
    pub headers: &'static [&'static str],
    /// Projects an item onto one cell per header.
    pub row: fn(&T) -> Vec<String>,
}

impl PageArgs {
    /// Fetches one page, or every page with `--all`.
    ///
    /// `fetch_page` gets the cursor and page size to request.
    pub async fn collect<T, F, Fut>(
        &self,
        config: &ListConfig<T>,
        mut fetch_page: F,
    ) -> deel_client::Result<Aggregated<T>>
    where
        F: FnMut(Pagination) -> Fut,
        Fut: Future<Output = deel_client::Result<Page<T>>>,
    {
        let limit = self.limit.unwrap_or(config.default_limit);
        info!(
            "Listing {} (page size {}, all pages: {})",
            config.resource.to_lowercase(),
            limit,
            self.all
        );
        Paginator::default()
            .aggregate(
                |cursor, limit| {
                    fetch_page(Pagination {
                        cursor,
                        limit: Some(limit),
                    })
                },
                self.all,
                self.cursor.clone(),
                limit,
            )
            .await
    }
}

/// JSON shape of a list result: the API envelope, with the cursor blanked.
#[derive(Serialize)]
struct ListOutput<'a, T> {
    data: &'a [T],
    page: PageMeta,
}

/// Prints a list result.
///
/// In JSON mode the items and total are printed in the list envelope with an
/// empty cursor, and the continuation hint goes to `err` when more pages
/// exist. Otherwise an empty result prints only
/// [`ListConfig::empty_message`]; a non-empty one prints a table, a count,
/// and the continuation hint.
pub async fn emit_list<T, A, B>(
    out: &mut tokio::io::BufWriter<A>,
    err: &mut tokio::io::BufWriter<B>,
    format: OutputFormat,
    config: &ListConfig<T>,
    result: &Aggregated<T>,
) -> Result<()>
where
    T: Serialize,
    A: tokio::io::AsyncWrite + Send + Sync + Unpin,
    B: tokio::io::AsyncWrite + Send + Sync + Unpin,
{
    if format == OutputFormat::Json {
        let output = ListOutput {
            data: &result.items,
            page: PageMeta {
                cursor: Some(String::new()),
                total_rows: Some(result.total),
            },
        };
        emitln!(out, "{}", json_string(&output)?);
        return emit_more_hint(err, result).await;
    }

    if result.items.is_empty() {
        emitln!(out, "{}", config.empty_message);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_titles(Row::new(
        config.headers.iter().map(|h| Cell::new(h)).collect(),
    ));
    for item in &result.items {
        let cells = (config.row)(item);
        table.add_row(Row::new(cells.iter().map(|c| Cell::new(c)).collect()));
    }
    emitln!(out, "{}", table);

    // Print Pagination Metadata
    let len = result.items.len();
    if result.total > 0 {
        emitln!(err, "{len} of {} {} Shown", result.total, config.resource);
    } else {
        emitln!(err, "{len} {} Shown", config.resource);
    }
    emit_more_hint(err, result).await
}

/// Tells the user how to continue when `result` has more pages.
pub async fn emit_more_hint<T, B>(
    err: &mut tokio::io::BufWriter<B>,
    result: &Aggregated<T>,
) -> Result<()>
where
    B: tokio::io::AsyncWrite + Send + Sync + Unpin,
{
    if result.has_more {
        emitln!(
            err,
            "More results available. View next page by {}{}, or pass {} to \
             fetch every page.",
            "--cursor=".bold(),
            result.next_cursor.clone().unwrap_or_default().bold(),
            "--all".bold()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::io::{AsyncWriteExt, BufWriter};

    use super::*;

    #[derive(Serialize)]
    struct Item {
        id: u32,
        name: &'static str,
    }

    const ITEMS: ListConfig<Item> = ListConfig {
        resource: "Items",
        empty_message: "No items found.",
        default_limit: 50,
        headers: &["Id", "Name"],
        row: |i| vec![i.id.to_string(), i.name.to_owned()],
    };

    fn result(
        items: Vec<Item>,
        total: u64,
        next: Option<&str>,
    ) -> Aggregated<Item> {
        Aggregated {
            items,
            total,
            has_more: next.is_some(),
            next_cursor: next.map(ToOwned::to_owned),
        }
    }

    async fn render(
        format: OutputFormat,
        result: &Aggregated<Item>,
    ) -> Result<(String, String)> {
        colored::control::set_override(false);
        let mut out = BufWriter::new(Vec::new());
        let mut err = BufWriter::new(Vec::new());
        emit_list(&mut out, &mut err, format, &ITEMS, result).await?;
        out.flush().await?;
        err.flush().await?;
        Ok((
            String::from_utf8(out.into_inner())?,
            String::from_utf8(err.into_inner())?,
        ))
    }

    #[tokio::test]
    async fn empty_message_wins_over_more_hint() -> Result<()> {
        let (out, err) =
            render(OutputFormat::Table, &result(vec![], 0, Some("c2"))).await?;
        assert_eq!(out, "No items found.\n");
        assert_eq!(err, "");
        Ok(())
    }

    #[tokio::test]
    async fn table_with_hint() -> Result<()> {
        let items =
            vec![Item { id: 1, name: "one" }, Item { id: 2, name: "two" }];
        let (out, err) =
            render(OutputFormat::Table, &result(items, 10, Some("c2"))).await?;

        assert!(out.contains("Id"));
        assert!(out.contains("Name"));
        assert!(out.contains("one"));
        assert!(out.contains("two"));
        assert_eq!(
            err,
            "2 of 10 Items Shown\nMore results available. View next page by \
             --cursor=c2, or pass --all to fetch every page.\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn no_hint_on_last_page() -> Result<()> {
        let (_, err) = render(
            OutputFormat::Table,
            &result(vec![Item { id: 3, name: "three" }], 0, None),
        )
        .await?;
        assert_eq!(err, "1 Items Shown\n");
        Ok(())
    }

    #[tokio::test]
    async fn json_clears_cursor_but_hints_next_page() -> Result<()> {
        let items = vec![Item { id: 1, name: "one" }];
        let (out, err) =
            render(OutputFormat::Json, &result(items, 10, Some("c2"))).await?;

        let value: serde_json::Value = serde_json::from_str(&out)?;
        assert_eq!(
            value,
            json!({
                "data": [{ "id": 1, "name": "one" }],
                "page": { "cursor": "", "total_rows": 10 }
            })
        );
        assert!(!out.contains("c2"));
        assert_eq!(
            err,
            "More results available. View next page by --cursor=c2, or pass \
             --all to fetch every page.\n"
        );
        Ok(())
    }

    #[tokio::test]
    async fn json_for_empty_result() -> Result<()> {
        let (out, err) =
            render(OutputFormat::Json, &result(vec![], 0, None)).await?;
        let value: serde_json::Value = serde_json::from_str(&out)?;
        assert_eq!(
            value,
            json!({ "data": [], "page": { "cursor": "", "total_rows": 0 } })
        );
        assert_eq!(err, "");
        Ok(())
    }

    #[tokio::test]
    async fn collect_uses_default_limit_and_flags() -> Result<()> {
        let args = PageArgs {
            cursor: Some("start".to_owned()),
            limit: None,
            all: false,
        };
        let mut seen = Vec::new();
        let result = args
            .collect(&ITEMS, |pagination| {
                seen.push(pagination);
                std::future::ready(Ok(Page::new(
                    vec![Item { id: 7, name: "seven" }],
                    Some("next".to_owned()),
                    None,
                )))
            })
            .await?;

        assert_eq!(result.items.len(), 1);
        assert!(result.has_more);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].cursor.as_deref(), Some("start"));
        assert_eq!(seen[0].limit, Some(50));
        Ok(())
    }
}
