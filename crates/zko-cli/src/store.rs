//! On-disk state under `$ZKO_HOME` (default `~/.zko`):
//!
//! ```text
//! config.json   operator settings
//! ledger.json   ledger snapshot (orders, counter, event journal)
//! vk.json       verification key, hex encoded
//! pk.bin        proving key, arkworks compressed
//! blobs/        local content store
//! proofs/       proofs written by `zko prove`
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ark_bls12_381::Bls12_381;
use ark_groth16::ProvingKey;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use zko_ledger::{LedgerState, OrderLedger, Principal};
use zko_verifier::{VerificationKey, VerificationKeyHex};

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_IPFS_URL: &str = "http://127.0.0.1:5001/api/v0";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentStoreKind {
    Local,
    Ipfs,
}

impl std::str::FromStr for ContentStoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "ipfs" => Ok(Self::Ipfs),
            other => bail!("unknown content store: {other} (expected local or ipfs)"),
        }
    }
}

impl std::fmt::Display for ContentStoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Local => "local",
            Self::Ipfs => "ipfs",
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub principal: String,
    pub content_store: ContentStoreKind,
    pub ipfs_url: String,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            principal: "customer".to_string(),
            content_store: ContentStoreKind::Local,
            ipfs_url: DEFAULT_IPFS_URL.to_string(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Handle on the CLI home directory
#[derive(Clone, Debug)]
pub struct Home {
    root: PathBuf,
}

impl Home {
    pub fn open() -> Result<Self> {
        let root = match std::env::var_os("ZKO_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .context("cannot determine home directory")?
                .join(".zko"),
        };
        Ok(Self::at(root))
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.root.join("ledger.json")
    }

    pub fn vk_path(&self) -> PathBuf {
        self.root.join("vk.json")
    }

    pub fn pk_path(&self) -> PathBuf {
        self.root.join("pk.bin")
    }

    pub fn blobs_dir(&self) -> PathBuf {
        self.root.join("blobs")
    }

    pub fn proof_path(&self, order_id: u64) -> PathBuf {
        self.root.join("proofs").join(format!("{order_id}.json"))
    }

    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        read_json(&path)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        write_json(&self.config_path(), config)
    }

    /// Principal for this invocation: `--as` wins over the configured one
    pub fn principal(&self, override_as: Option<&str>) -> Result<Principal> {
        match override_as {
            Some(p) => Ok(Principal::new(p)),
            None => Ok(Principal::new(self.load_config()?.principal)),
        }
    }

    /// Restore the ledger snapshot and reload the verification key, if any
    pub fn load_ledger(&self) -> Result<OrderLedger> {
        let path = self.ledger_path();
        let ledger = if path.exists() {
            let state: LedgerState = read_json(&path)?;
            OrderLedger::restore(state)
                .with_context(|| format!("corrupt ledger at {}", path.display()))?
        } else {
            OrderLedger::new()
        };
        if let Some(vk) = self.load_vk()? {
            ledger.load_verification_key(vk)?;
        }
        Ok(ledger)
    }

    pub fn save_ledger(&self, ledger: &OrderLedger) -> Result<()> {
        write_json(&self.ledger_path(), &ledger.snapshot())
    }

    pub fn load_vk(&self) -> Result<Option<VerificationKey>> {
        let path = self.vk_path();
        if !path.exists() {
            return Ok(None);
        }
        let svk: VerificationKeyHex = read_json(&path)?;
        let vk = VerificationKey::try_from(&svk)
            .with_context(|| format!("invalid verification key at {}", path.display()))?;
        Ok(Some(vk))
    }

    pub fn save_vk(&self, vk: &VerificationKey) -> Result<()> {
        write_json(&self.vk_path(), &VerificationKeyHex::from(vk))
    }

    pub fn load_pk(&self) -> Result<ProvingKey<Bls12_381>> {
        let path = self.pk_path();
        let bytes = fs::read(&path)
            .with_context(|| format!("cannot read proving key at {}", path.display()))?;
        ProvingKey::deserialize_compressed(bytes.as_slice())
            .with_context(|| format!("invalid proving key at {}", path.display()))
    }

    pub fn save_pk(&self, pk: &ProvingKey<Bls12_381>) -> Result<()> {
        let mut bytes = Vec::new();
        pk.serialize_compressed(&mut bytes)
            .context("cannot serialize proving key")?;
        write_bytes(&self.pk_path(), &bytes)
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("invalid JSON in {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_bytes(path, json.as_bytes())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    // atomic replace
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes).with_context(|| format!("cannot write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
