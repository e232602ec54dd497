use std::path::PathBuf;

use allergy_compass_core::domain::common::{AllergyCompassConfig, KnowledgeConfig, StorageConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "allergy-compass-api", version, about = "AllergyCompass HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub knowledge: KnowledgeArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(
        long = "data-path",
        env = "DATA_PATH",
        default_value = "data/allergy_compass.json"
    )]
    pub data_path: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct KnowledgeArgs {
    /// JSON allergen table replacing the built-in one.
    #[arg(long = "knowledge-path", env = "KNOWLEDGE_PATH")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is unset.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for AllergyCompassConfig {
    fn from(args: Args) -> Self {
        Self {
            storage: StorageConfig {
                data_path: args.storage.data_path,
            },
            knowledge: KnowledgeConfig {
                path: args.knowledge.path,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_into_config() {
        let args = Args::parse_from([
            "allergy-compass-api",
            "--data-path",
            "/tmp/ac.json",
            "--knowledge-path",
            "/etc/ac/knowledge.json",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = AllergyCompassConfig::from(args);
        assert_eq!(config.storage.data_path, PathBuf::from("/tmp/ac.json"));
        assert_eq!(
            config.knowledge.path,
            Some(PathBuf::from("/etc/ac/knowledge.json"))
        );
    }
}
