use deel_api_model::{Contract, ContractsFilter, Paginated, Pagination};
use http::Method;

use crate::client::RequestRunner;
use crate::pagination::append_pagination;
use crate::{Response, Result};

/// Retrieve one page of contracts.
pub async fn list(
    client: &impl RequestRunner,
    pagination: Pagination,
    filter: &ContractsFilter,
) -> Result<Response<Paginated<Contract>>> {
    let mut path = client.make_url("/rest/v2/contracts")?;
    append_pagination(&mut path, &pagination);

    for status in &filter.statuses {
        path.query_pairs_mut()
            .append_pair("statuses[]", &status.to_string());
    }
    for contract_type in &filter.types {
        path.query_pairs_mut()
            .append_pair("types[]", &contract_type.to_string());
    }

    client.run(Method::GET, path).await
}
