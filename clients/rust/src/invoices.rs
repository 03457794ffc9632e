use deel_api_model::{Invoice, Paginated, Pagination};
use http::Method;

use crate::client::RequestRunner;
use crate::pagination::append_pagination;
use crate::{Response, Result};

/// Retrieve one page of invoices, optionally only those of one contract.
pub async fn list(
    client: &impl RequestRunner,
    pagination: Pagination,
    contract_id: Option<&str>,
) -> Result<Response<Paginated<Invoice>>> {
    let mut path = client.make_url("/rest/v2/invoices")?;
    append_pagination(&mut path, &pagination);
    if let Some(contract_id) = contract_id {
        path.query_pairs_mut().append_pair("contract_id", contract_id);
    }

    client.run(Method::GET, path).await
}
