// src/core/net.rs

// Blocking HTTP GET. One shared client; the pipeline is sequential,
// so there is never more than one request in flight.

use std::{error::Error, sync::OnceLock, time::Duration};

use reqwest::blocking::Client;

static CLIENT: OnceLock<Client> = OnceLock::new();

fn client() -> &'static Client {
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(concat!("gi_scrape/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("http client init")
    })
}

pub fn http_get(url: &str) -> Result<String, Box<dyn Error>> {
    let resp = client().get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
