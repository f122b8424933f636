use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{Level, Log, Record};
use reqwest::Client;

use crate::config::Config;
use crate::ip;
use crate::provider::digitalocean::DigitalOcean;
use crate::provider::{RECORD_NAME, RECORD_TYPE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged { ip: String },
    Updated { from: String, to: String },
}

/// One pass of the updater: look up the public IP, compare it with the
/// `home` A record and overwrite the record when they differ.
pub async fn sync_home_record(config: &Config, logger: &dyn Log) -> Result<Outcome> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;
    let registrar = DigitalOcean::new(&client, config);

    let public_ip = ip::public_ip(&client, &config.ip_info_url).await?;
    let record = registrar.find_record(RECORD_TYPE, RECORD_NAME).await?;

    emit(logger, Level::Info, format_args!("Public IP: {}", public_ip));
    emit(logger, Level::Info, format_args!("DNS entry IP: {}", record.data));

    if public_ip == record.data {
        emit(logger, Level::Info, format_args!("IPs match. Not updating DNS"));
        return Ok(Outcome::Unchanged { ip: public_ip });
    }

    emit(
        logger,
        Level::Info,
        format_args!(
            "Updating {}.{} (record {}) from {} to {}",
            record.name,
            config.domain_name,
            record.id_segment(),
            record.data,
            public_ip
        ),
    );
    registrar.update_record(&record, &public_ip).await?;
    emit(logger, Level::Info, format_args!("DNS entry updated"));

    Ok(Outcome::Updated {
        from: record.data,
        to: public_ip,
    })
}

fn emit(logger: &dyn Log, level: Level, args: fmt::Arguments<'_>) {
    logger.log(
        &Record::builder()
            .args(args)
            .level(level)
            .target(module_path!())
            .module_path_static(Some(module_path!()))
            .build(),
    );
}
