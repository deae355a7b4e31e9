use anyhow::{Context, Result};

use crate::output;
use crate::store::{Config, Home};

const ALLOWED_KEYS: &[&str] = &["principal", "content_store", "ipfs_url", "seed"];

fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "principal" => {
            if value.trim().is_empty() {
                anyhow::bail!("principal cannot be empty");
            }
            config.principal = value.to_string();
        }
        "content_store" => config.content_store = value.parse()?,
        "ipfs_url" => config.ipfs_url = value.to_string(),
        "seed" => config.seed = value.parse().context("seed must be a u64")?,
        _ => {
            return Err(output::fail_with_hint(
                &format!("unknown config key: {key}"),
                &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
            ))
        }
    }
    Ok(())
}

pub fn set(home: &Home, key: &str, value: &str) -> Result<()> {
    let mut config = home.load_config()?;
    apply(&mut config, key, value)?;
    home.save_config(&config)?;

    if output::is_json() {
        output::json_output(serde_json::json!({ "key": key, "value": value }))?;
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

pub fn show(home: &Home) -> Result<()> {
    let config = home.load_config()?;
    let vk_installed = home.vk_path().exists();

    if output::is_json() {
        output::json_output(serde_json::json!({
            "home": home.root(),
            "principal": config.principal,
            "content_store": config.content_store,
            "ipfs_url": config.ipfs_url,
            "seed": config.seed,
            "vk_installed": vk_installed,
        }))?;
    } else {
        output::label("home", &home.root().display().to_string());
        output::label("principal", &config.principal);
        output::label("content_store", &config.content_store.to_string());
        output::label("ipfs_url", &config.ipfs_url);
        output::label("seed", &config.seed.to_string());
        output::label("vk_installed", &vk_installed.to_string());
    }
    Ok(())
}
