use crate::Error;

use bytes::Bytes;
use reqwest::Url;
use std::sync::LazyLock;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
}

impl Session {
    pub fn new() -> Self {
        Self {
            client: CLIENT.clone(),
        }
    }

    pub async fn download(&self, url: &str) -> Result<Bytes, Error> {
        log::info!("Downloading image: {url}");

        let response = self.client.get(url).send().await?;

        Ok(response.error_for_status()?.bytes().await?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Build reqwest client")
});

/// Upgrades an `http` URL to `https`.
///
/// Only the scheme is rewritten; the rest of the URL is kept as written.
/// Any other URL, including malformed ones, is returned untouched.
pub fn secure_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url.to_owned();
    };

    if parsed.scheme() != "http" {
        return url.to_owned();
    }

    match url.split_once(':') {
        Some((_scheme, rest)) => format!("https:{rest}"),
        None => url.to_owned(),
    }
}
