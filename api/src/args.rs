use clap::Parser;
use labelwise_core::domain::common::{DatabaseConfig, LabelwiseConfig, LlmConfig, OcrConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "labelwise", about = "Food label analysis API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    /// Log filter directives, e.g. `info` or `labelwise_core=debug,info`.
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    /// Emit logs as JSON instead of human-readable lines.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Origins allowed by CORS, comma-separated.
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

#[derive(Debug, Clone, Parser)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY")]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,
}

#[derive(Debug, Clone, Parser)]
pub struct OcrArgs {
    #[arg(long, env = "OCR_LANG", default_value = "eng")]
    pub ocr_lang: String,
}

impl From<Args> for LabelwiseConfig {
    fn from(args: Args) -> Self {
        LabelwiseConfig {
            database: DatabaseConfig {
                url: args.database.database_url,
            },
            llm: LlmConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
            },
            ocr: OcrConfig {
                language: args.ocr.ocr_lang,
            },
        }
    }
}
