use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;

use super::DnsRecord;
use crate::config::Config;
use crate::error::Error;

const SERVICE: &str = "DigitalOcean";

/// Largest page the records endpoint serves.
const PER_PAGE: u32 = 200;

pub struct DigitalOcean<'a> {
    client: &'a Client,
    api_base: &'a str,
    api_key: &'a str,
    domain: &'a str,
}

impl<'a> DigitalOcean<'a> {
    pub fn new(client: &'a Client, config: &'a Config) -> Self {
        Self {
            client,
            api_base: config.do_api_base.trim_end_matches('/'),
            api_key: &config.do_api_key,
            domain: &config.domain_name,
        }
    }

    /// First record in listing order with the given type and host label.
    ///
    /// Only `type` and `name` are looked at while scanning, so unrelated
    /// records with odd shapes (null `data` on SOA and the like) are skipped.
    pub async fn find_record(&self, record_type: &str, name: &str) -> Result<DnsRecord> {
        let mut next = Some(format!(
            "{}/domains/{}/records?per_page={}",
            self.api_base, self.domain, PER_PAGE
        ));

        while let Some(url) = next {
            let response = self
                .authorized(self.client.get(&url))
                .send()
                .await
                .context("Failed to send request to DigitalOcean")?;

            let page: RecordPage = check_status(response)?
                .json()
                .await
                .context("Failed to parse DigitalOcean records response")?;

            let found = page
                .domain_records
                .into_iter()
                .find(|r| r["type"] == record_type && r["name"] == name);
            if let Some(raw) = found {
                return serde_json::from_value(raw)
                    .context("Failed to parse matching DigitalOcean record");
            }

            next = page.links.pages.next;
        }

        Err(Error::RecordNotFound {
            record_type: record_type.to_string(),
            name: name.to_string(),
            domain: self.domain.to_string(),
        }
        .into())
    }

    /// Send `record` back with `data` replaced; every other field is echoed as fetched.
    pub async fn update_record(&self, record: &DnsRecord, data: &str) -> Result<()> {
        let url = format!(
            "{}/domains/{}/records/{}",
            self.api_base,
            self.domain,
            record.id_segment()
        );

        let mut body = record.clone();
        body.data = data.to_string();

        let response = self
            .authorized(self.client.put(&url))
            .json(&body)
            .send()
            .await
            .context("Failed to send update request to DigitalOcean")?;

        check_status(response)?;
        Ok(())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
    }
}

fn check_status(response: Response) -> Result<Response> {
    if !response.status().is_success() {
        return Err(Error::Status {
            service: SERVICE.to_string(),
            status: response.status(),
        }
        .into());
    }
    Ok(response)
}

#[derive(Debug, Deserialize)]
struct RecordPage {
    domain_records: Vec<Value>,
    #[serde(default)]
    links: Links,
}

#[derive(Debug, Default, Deserialize)]
struct Links {
    #[serde(default)]
    pages: Pages,
}

#[derive(Debug, Default, Deserialize)]
struct Pages {
    next: Option<String>,
}
