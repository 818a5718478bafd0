//! Site configuration

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API URL is empty; set STEPGY_API_URL or pass --api-url")]
    MissingApiUrl,

    #[error("Invalid API URL {url:?}: {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API URL must use http or https, got {0}")]
    UnsupportedScheme(String),
}

#[derive(Parser, Debug)]
#[command(name = "stepgy-site")]
#[command(about = "Server-rendered Stepgy project page")]
#[command(version)]
pub struct Cli {
    /// Base URL of the backend API; messages are posted to `{api_url}/contact`
    #[arg(long, env = "STEPGY_API_URL")]
    pub api_url: String,

    /// Address to listen on
    #[arg(long, env = "STEPGY_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Directory served under /assets
    #[arg(long, env = "STEPGY_ASSETS", default_value = "assets")]
    pub assets: PathBuf,

    /// JSON document replacing the built-in page content
    #[arg(long, env = "STEPGY_CONTENT")]
    pub content: Option<PathBuf>,

    /// Contact request timeout in seconds (0 disables it)
    #[arg(long, env = "STEPGY_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,
}

/// Validated site configuration
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_url: Url,
    pub addr: SocketAddr,
    pub assets_dir: PathBuf,
    pub content_path: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl TryFrom<Cli> for SiteConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let raw = cli.api_url.trim();
        if raw.is_empty() {
            return Err(ConfigError::MissingApiUrl);
        }

        let api_url = Url::parse(raw).map_err(|source| ConfigError::InvalidApiUrl {
            url: raw.to_string(),
            source,
        })?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(api_url.scheme().to_string()));
        }

        Ok(Self {
            api_url,
            addr: cli.addr,
            assets_dir: cli.assets,
            content_path: cli.content,
            timeout: (cli.timeout_secs > 0).then(|| Duration::from_secs(cli.timeout_secs)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(api_url: &str) -> Cli {
        Cli {
            api_url: api_url.to_string(),
            addr: "127.0.0.1:3000".parse().unwrap(),
            assets: PathBuf::from("assets"),
            content: None,
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = SiteConfig::try_from(cli("https://stepgy.example/api")).unwrap();
        assert_eq!(config.api_url.as_str(), "https://stepgy.example/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let mut args = cli("http://localhost:8001/api");
        args.timeout_secs = 0;
        assert_eq!(SiteConfig::try_from(args).unwrap().timeout, None);
    }

    #[test]
    fn test_missing_api_url() {
        assert!(matches!(
            SiteConfig::try_from(cli("  ")),
            Err(ConfigError::MissingApiUrl)
        ));
    }

    #[test]
    fn test_invalid_api_url() {
        assert!(matches!(
            SiteConfig::try_from(cli("not a url")),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
        assert!(matches!(
            SiteConfig::try_from(cli("ftp://stepgy.example")),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::try_parse_from([
            "stepgy-site",
            "--api-url",
            "http://localhost:8001/api",
            "--addr",
            "0.0.0.0:8080",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        let config = SiteConfig::try_from(cli).unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
