use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use http::Method;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

use crate::client::RequestRunner;
use crate::{Response, Result};

/// A [`RequestRunner`] that never touches the network. It records every url
/// it is asked to fetch and answers with canned `(status, body)` pairs in
/// order.
pub(crate) struct RecordingRunner {
    base_url: Url,
    responses: Mutex<VecDeque<(u16, String)>>,
    pub urls: Mutex<Vec<Url>>,
}

impl RecordingRunner {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = (u16, S)>,
        S: Into<String>,
    {
        Self {
            base_url: Url::parse("https://api.letsdeel.com").unwrap(),
            responses: Mutex::new(
                responses.into_iter().map(|(s, b)| (s, b.into())).collect(),
            ),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.to_string())
            .collect()
    }
}

#[async_trait]
impl RequestRunner for RecordingRunner {
    fn make_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn prepare_request(
        &self,
        method: Method,
        url: Url,
    ) -> Result<RequestBuilder> {
        Ok(reqwest::Client::new().request(method, url))
    }

    async fn process_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
    {
        Response::from_raw_response(response).await
    }

    async fn run<T>(&self, _method: Method, url: Url) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.urls.lock().unwrap().push(url);
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("more requests than canned responses");
        let raw = http::Response::builder()
            .status(status)
            .body(body)
            .unwrap();
        self.process_response(raw.into()).await
    }
}
