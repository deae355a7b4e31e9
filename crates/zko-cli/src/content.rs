//! Content store collaborator: archives order metadata off-ledger and
//! hands back an opaque pointer for `attach_content_pointer`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::store::{Config, ContentStoreKind, Home};

pub enum ContentStore {
    /// SHA-256 addressed files, pointer `sha256:<hex>`
    Local { dir: PathBuf },
    /// IPFS HTTP API, pointer = returned CID
    Ipfs { url: String, http: reqwest::Client },
}

#[derive(Deserialize)]
struct AddResponse {
    #[serde(rename = "Hash")]
    hash: String,
}

impl ContentStore {
    pub fn from_config(home: &Home, config: &Config) -> Self {
        match config.content_store {
            ContentStoreKind::Local => ContentStore::Local { dir: home.blobs_dir() },
            ContentStoreKind::Ipfs => ContentStore::Ipfs {
                url: config.ipfs_url.trim_end_matches('/').to_string(),
                http: reqwest::Client::new(),
            },
        }
    }

    pub async fn put(&self, document: &serde_json::Value) -> Result<String> {
        let bytes = serde_json::to_vec(document)?;
        match self {
            ContentStore::Local { dir } => {
                let digest = hex::encode(Sha256::digest(&bytes));
                fs::create_dir_all(dir)?;
                let path = dir.join(format!("{digest}.json"));
                fs::write(&path, &bytes)
                    .with_context(|| format!("cannot write {}", path.display()))?;
                debug!(path = %path.display(), "stored metadata blob");
                Ok(format!("sha256:{digest}"))
            }
            ContentStore::Ipfs { url, http } => {
                let part = reqwest::multipart::Part::bytes(bytes)
                    .file_name("order.json")
                    .mime_str("application/json")?;
                let form = reqwest::multipart::Form::new().part("file", part);
                let resp = http
                    .post(format!("{url}/add"))
                    .multipart(form)
                    .send()
                    .await
                    .with_context(|| format!("cannot reach IPFS API at {url}"))?
                    .error_for_status()
                    .context("IPFS add rejected")?;
                let added: AddResponse = resp.json().await.context("invalid IPFS add response")?;
                debug!(cid = %added.hash, "pinned metadata on ipfs");
                Ok(added.hash)
            }
        }
    }

    /// Read back a blob written by the local store
    pub fn get_local(&self, pointer: &str) -> Result<Option<serde_json::Value>> {
        let (ContentStore::Local { dir }, Some(digest)) = (self, pointer.strip_prefix("sha256:"))
        else {
            return Ok(None);
        };
        if !is_sha256_hex(digest) {
            debug!(pointer, "not a local content digest");
            return Ok(None);
        }
        let path = dir.join(format!("{digest}.json"));
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

fn is_sha256_hex(digest: &str) -> bool {
    digest.len() == 64 && digest.bytes().all(|b| b.is_ascii_hexdigit())
}
