/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 输出 JSON 文件存放目录
    pub output_dir: String,
    /// 自定义规则表（TOML）路径，为空时使用内置规则
    pub rules_file: Option<String>,
    /// 远程页面获取超时（秒）
    pub fetch_timeout_secs: u64,
    /// 获取远程页面时使用的 User-Agent
    pub user_agent: String,
    /// 数据质量警告文件
    pub warn_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            rules_file: None,
            fetch_timeout_secs: 30,
            user_agent: "Mozilla/5.0 (compatible; quiz-extract/0.1)".to_string(),
            warn_file: "warn.txt".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            rules_file: std::env::var("RULES_FILE").ok().filter(|v| !v.trim().is_empty()).or(default.rules_file),
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.fetch_timeout_secs),
            user_agent: std::env::var("USER_AGENT").unwrap_or(default.user_agent),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.fetch_timeout_secs, 30);
        assert_eq!(config.warn_file, "warn.txt");
        assert!(config.rules_file.is_none());
        assert!(!config.verbose_logging);
    }
}
