use deel_api_model::{Paginated, Pagination, Person};
use http::Method;

use crate::client::RequestRunner;
use crate::pagination::append_pagination;
use crate::{Response, Result};

/// Retrieve one page of people in the organization.
pub async fn list(
    client: &impl RequestRunner,
    pagination: Pagination,
) -> Result<Response<Paginated<Person>>> {
    let mut path = client.make_url("/rest/v2/people")?;
    append_pagination(&mut path, &pagination);

    client.run(Method::GET, path).await
}
