use std::{path::PathBuf, time::Duration};

use clap::Parser;
use sfie_core::domain::common::{
    ClassifierConfig, LLMConfig, RecommendationConfig, SessionConfig, SfieConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "sfie-api", about = "SFIE Beauty skin screening API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub recommendation: RecommendationArgs,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix added in front of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    /// Chat-completion endpoint of the hosted model.
    #[arg(id = "llm-endpoint", long = "llm-endpoint", env = "LLM_ENDPOINT")]
    pub endpoint: Option<Url>,

    #[arg(id = "llm-timeout-secs", long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,

    #[arg(
        long = "llm-accept-self-signed",
        env = "LLM_ACCEPT_SELF_SIGNED",
        default_value_t = false
    )]
    pub accept_self_signed: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ClassifierArgs {
    #[arg(id = "classifier-endpoint", long = "classifier-endpoint", env = "CLASSIFIER_ENDPOINT")]
    pub endpoint: Option<Url>,

    /// Side length images are resized to before inference.
    #[arg(long = "classifier-input-size", env = "CLASSIFIER_INPUT_SIZE", default_value_t = 256)]
    pub input_size: u32,

    #[arg(
        id = "classifier-timeout-secs",
        long = "classifier-timeout-secs",
        env = "CLASSIFIER_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct RecommendationArgs {
    #[arg(
        long = "recommendation-table-path",
        env = "RECOMMENDATION_TABLE_PATH",
        default_value = "recommendation.xlsx"
    )]
    pub table_path: PathBuf,

    #[arg(long = "recommendation-sheet", env = "RECOMMENDATION_SHEET")]
    pub sheet: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SessionArgs {
    #[arg(long = "session-ttl-minutes", env = "SESSION_TTL_MINUTES", default_value_t = 60)]
    pub ttl_minutes: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for SfieConfig {
    fn from(args: Args) -> Self {
        SfieConfig {
            llm: LLMConfig {
                endpoint: args.llm.endpoint,
                timeout: Duration::from_secs(args.llm.timeout_secs),
                accept_self_signed: args.llm.accept_self_signed,
            },
            classifier: ClassifierConfig {
                endpoint: args.classifier.endpoint,
                input_size: args.classifier.input_size,
                timeout: Duration::from_secs(args.classifier.timeout_secs),
            },
            recommendation: RecommendationConfig {
                path: args.recommendation.table_path,
                sheet: args.recommendation.sheet,
            },
            session: SessionConfig {
                ttl: Duration::from_secs(args.session.ttl_minutes.saturating_mul(60)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_convert_into_core_config() {
        let args = Args::try_parse_from([
            "sfie-api",
            "--server-root-path",
            "/api",
            "--allowed-origins",
            "http://localhost:5173,https://sfie.example.com",
            "--llm-endpoint",
            "https://llm.example.com/v1/chat/completions",
            "--llm-timeout-secs",
            "15",
            "--llm-accept-self-signed",
            "--recommendation-table-path",
            "data/recommendation.xlsx",
            "--session-ttl-minutes",
            "5",
        ])
        .unwrap();

        assert_eq!(args.server.root_path, "/api");
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = SfieConfig::from(args);
        assert_eq!(
            config.llm.endpoint.map(|u| u.to_string()),
            Some("https://llm.example.com/v1/chat/completions".to_string())
        );
        assert_eq!(config.llm.timeout, Duration::from_secs(15));
        assert!(config.llm.accept_self_signed);
        assert_eq!(config.recommendation.path, PathBuf::from("data/recommendation.xlsx"));
        assert_eq!(config.session.ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_huge_session_ttl_saturates() {
        let args = Args::try_parse_from([
            "sfie-api",
            "--session-ttl-minutes",
            "18446744073709551615",
        ])
        .unwrap();

        let config = SfieConfig::from(args);
        assert_eq!(config.session.ttl, Duration::from_secs(u64::MAX));
    }
}
