mod api;
pub mod client;
mod constants;
pub mod contracts;
mod error;
pub mod invoices;
pub mod pagination;
pub mod people;
pub mod teams;
#[cfg(test)]
pub(crate) mod test_helpers;
pub mod timesheets;

use std::future::Future;

pub use deel_api_model::*;

pub use self::api::{ApiError, ApiErrorDetail, Response};
pub use self::client::{Client, ClientBuilder, RequestRunner};
pub use self::constants::{BASE_URL_ENV, DEFAULT_BASE_URL, SANDBOX_BASE_URL};
pub use self::error::{Error, Result};
pub use self::pagination::{
    Aggregated,
    Page,
    Paginator,
    SafetyLimitExceeded,
    MAX_PAGES,
};

/// Awaits a list request and unwraps it into a [`Page`], turning API errors
/// into [`Error::Api`]. Meant to be handed to [`Paginator::aggregate`].
pub async fn fetch_page<T, Fut>(request: Fut) -> Result<Page<T>>
where
    Fut: Future<Output = Result<Response<Paginated<T>>>>,
{
    Ok(request.await?.into_page()?)
}
