use serde::{Deserialize, Serialize};

/// Cursor and page size of a list request. Rendered as the `after_cursor`
/// and `limit` query parameters.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    pub cursor: Option<String>,
    pub limit: Option<u32>,
}

/// The envelope every Deel list endpoint responds with.
#[derive(Debug, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub page: PageMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub total_rows: Option<u64>,
}

impl PageMeta {
    /// The continuation cursor, if the server handed out a non-empty one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{PageMeta, Paginated};

    #[test]
    fn decodes_full_envelope() -> anyhow::Result<()> {
        let raw = json!({
            "data": [1, 2, 3],
            "page": { "cursor": "c2", "total_rows": 42 }
        });
        let page: Paginated<u32> = serde_json::from_value(raw)?;
        assert_eq!(page.data, vec![1, 2, 3]);
        assert_eq!(page.page.next_cursor(), Some("c2"));
        assert_eq!(page.page.total_rows, Some(42));
        Ok(())
    }

    #[test]
    fn decodes_without_page() -> anyhow::Result<()> {
        let page: Paginated<u32> =
            serde_json::from_value(json!({ "data": [] }))?;
        assert!(page.data.is_empty());
        assert_eq!(page.page, PageMeta::default());
        assert_eq!(page.page.next_cursor(), None);
        Ok(())
    }

    #[test]
    fn empty_cursor_means_last_page() -> anyhow::Result<()> {
        let page: Paginated<u32> = serde_json::from_value(json!({
            "data": [7],
            "page": { "cursor": "" }
        }))?;
        assert_eq!(page.page.next_cursor(), None);
        assert_eq!(page.page.total_rows, None);
        Ok(())
    }
}
