use deel_api_model::Paginated;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::log::warn;
use url::Url;

use crate::pagination::Page;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

/// One entry of the `errors` array Deel returns on failed requests.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiErrorDetail {
    pub message: String,
    /// The request field the error refers to, if any.
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    status_code: StatusCode,
    message: String,
    details: Vec<ApiErrorDetail>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Errors that point at a specific request field.
    pub fn details(&self) -> &[ApiErrorDetail] {
        &self.details
    }

    fn from_body(status_code: StatusCode, body: ApiErrorBody) -> Self {
        let (details, general): (Vec<_>, Vec<_>) =
            body.errors.into_iter().partition(|e| e.path.is_some());
        let message = if general.is_empty() {
            status_code
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_owned()
        } else {
            general
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ")
        };
        Self {
            status_code,
            message,
            details,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) {}", self.status_code, self.message)?;
        for detail in &self.details {
            write!(
                f,
                "\n  [{}]: {}",
                detail.path.as_deref().unwrap_or_default(),
                detail.message
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone)]
pub struct Response<T> {
    inner: Result<T, ApiError>,
    url: Url,
    request_id: Option<String>,
    status_code: StatusCode,
    headers: http::HeaderMap,
}

impl<T> Response<T> {
    pub fn into_inner(self) -> Result<T, ApiError> {
        self.inner
    }

    pub fn inner(&self) -> &Result<T, ApiError> {
        &self.inner
    }

    pub fn request_id(&self) -> &Option<String> {
        &self.request_id
    }

    pub fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    pub fn status_code(&self) -> http::StatusCode {
        self.status_code
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn is_err(&self) -> bool {
        self.inner.is_err()
    }

    pub fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }
}

impl<T> Response<Paginated<T>> {
    /// Unwraps a list response into the shape the paginator consumes.
    pub fn into_page(self) -> Result<Page<T>, ApiError> {
        self.inner.map(Page::from)
    }
}

impl<T> Response<T>
where
    T: DeserializeOwned,
{
    pub(crate) async fn from_raw_response(
        raw: reqwest::Response,
    ) -> Result<Self, crate::Error> {
        let url = raw.url().clone();
        let status_code = raw.status();
        let headers = raw.headers().clone();
        let request_id = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);

        let body = raw.text().await?;

        let inner = if status_code.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            // Attempt to parse the error as json
            let error_body: Result<ApiErrorBody, serde_json::Error> =
                serde_json::from_str(&body);
            match error_body {
                | Ok(error_body) => {
                    Err(ApiError::from_body(status_code, error_body))
                }
                | Err(e) => {
                    warn!(
                        "Response error body is not json. Error: {}. Body: {}",
                        e, body
                    );
                    Err(ApiError {
                        status_code,
                        message: body,
                        details: Vec::new(),
                    })
                }
            }
        };

        Ok(Self {
            inner,
            url,
            request_id,
            status_code,
            headers,
        })
    }
}
