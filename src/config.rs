use crate::error::ConfigError;

/// API 密钥所在的环境变量
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    /// API 密钥，启动时允许缺失，每次请求前再检查
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 提示词覆盖文件（TOML），为空时使用内置提示词
    pub prompt_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose_logging: false,
            llm_api_key: None,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4.1-mini".to_string(),
            prompt_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var(API_KEY_ENV).ok().filter(|v| !v.trim().is_empty()),
            llm_api_base_url: std::env::var("OPENAI_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("REVIEW_MODEL").unwrap_or(default.llm_model_name),
            prompt_file: std::env::var("REVIEW_PROMPT_FILE").ok().filter(|v| !v.trim().is_empty()),
        }
    }

    /// 取出 API 密钥，缺失时返回配置错误
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.llm_api_key.as_deref().ok_or(ConfigError::MissingApiKey {
            var_name: API_KEY_ENV.to_string(),
        })
    }
}
