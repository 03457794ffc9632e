use deel_api_model::{Paginated, Pagination, Timesheet};
use http::Method;

use crate::client::RequestRunner;
use crate::pagination::append_pagination;
use crate::{Response, Result};

/// Retrieve one page of timesheets, optionally only those of one contract.
pub async fn list(
    client: &impl RequestRunner,
    pagination: Pagination,
    contract_id: Option<&str>,
) -> Result<Response<Paginated<Timesheet>>> {
    let mut path = client.make_url("/rest/v2/timesheets")?;
    append_pagination(&mut path, &pagination);
    if let Some(contract_id) = contract_id {
        path.query_pairs_mut().append_pair("contract_id", contract_id);
    }

    client.run(Method::GET, path).await
}
