use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::error::{DashboardError, Result};

const USER_AGENT: &str = "Mozilla/5.0";

pub fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

pub struct Fetched {
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

async fn checked_send(request: reqwest::RequestBuilder, url: &str) -> Result<reqwest::Response> {
    let response = request.send().await?;
    let status = response.status();
    debug!("event=http_get url={} status={}", url, status.as_u16());
    if !status.is_success() {
        return Err(DashboardError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response)
}

pub async fn get_text(client: &Client, url: &str) -> Result<String> {
    let response = checked_send(client.get(url), url).await?;
    Ok(response.text().await?)
}

pub async fn get_text_authorized(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
    bearer: &str,
) -> Result<String> {
    let request = client.get(url).query(query).bearer_auth(bearer);
    let response = checked_send(request, url).await?;
    Ok(response.text().await?)
}

pub async fn get_bytes(client: &Client, url: &str) -> Result<Fetched> {
    let response = checked_send(client.get(url), url).await?;
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await?.to_vec();
    Ok(Fetched { content_type, body })
}
