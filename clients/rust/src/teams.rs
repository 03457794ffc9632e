use deel_api_model::{Paginated, Pagination, Team};
use http::Method;

use crate::client::RequestRunner;
use crate::pagination::append_pagination;
use crate::{Response, Result};

/// Retrieve one page of teams.
pub async fn list(
    client: &impl RequestRunner,
    pagination: Pagination,
) -> Result<Response<Paginated<Team>>> {
    let mut path = client.make_url("/rest/v2/teams")?;
    append_pagination(&mut path, &pagination);

    client.run(Method::GET, path).await
}
