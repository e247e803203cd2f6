use crate::{
    Aoe2NetResult,
    Error,
};
use reqwest::header::{
    HeaderMap,
    HeaderValue,
};
use serde::de::DeserializeOwned;
use url::Url;

// Default header values, sent with every request
static USER_AGENT_VALUE: HeaderValue = HeaderValue::from_static("aoe2net-rs");
static CONTENT_TYPE_VALUE: HeaderValue =
    HeaderValue::from_static("application/json;charset=UTF-8");

/// Build the http client shared by both api facades.
pub(crate) fn build_http_client() -> reqwest::Client {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(reqwest::header::USER_AGENT, USER_AGENT_VALUE.clone());
    default_headers.insert(reqwest::header::CONTENT_TYPE, CONTENT_TYPE_VALUE.clone());

    reqwest::Client::builder()
        .default_headers(default_headers)
        .build()
        .expect("failed to build aoe2net client")
}

/// Send a GET request and parse the response body as json.
pub(crate) async fn get_json<T>(
    client: &reqwest::Client,
    url: &str,
    params: &[(&'static str, String)],
) -> Aoe2NetResult<T>
where
    T: DeserializeOwned,
{
    let text = get_text(client, url, params).await?;
    Ok(serde_json::from_str(&text)?)
}

/// Send a GET request and return the response body unchanged.
///
/// The nightbot endpoints answer with plain text,
/// including the literal `Player not found` when a player cannot be resolved.
/// That sentinel is a normal payload, not an error.
pub(crate) async fn get_text(
    client: &reqwest::Client,
    url: &str,
    params: &[(&'static str, String)],
) -> Aoe2NetResult<String> {
    let url = Url::parse_with_params(url, params)?;
    tracing::debug!("GET {}", url);

    let response = client.get(url.as_str()).send().await?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!("GET {} returned {}", url, status);
        return Err(Error::InvalidStatus(status));
    }

    Ok(response.text().await?)
}
