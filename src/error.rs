use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 远程页面获取错误
    #[error("获取页面错误: {0}")]
    Fetch(#[from] FetchError),
    /// 合并错误
    #[error("合并错误: {0}")]
    Merge(#[from] MergeError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 规则表中的选择器无法解析
    #[error("选择器 {field} 无法解析 '{selector}': {reason}")]
    InvalidSelector {
        field: String,
        selector: String,
        reason: String,
    },
    /// 规则表中的数值超出范围
    #[error("规则 {field} 的值 {value} 超出范围 [0, 1]")]
    RatioOutOfRange { field: String, value: f64 },
    /// 无法识别的分类
    #[error("无法识别的分类: {input}")]
    UnknownCategory { input: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 远程页面获取错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络请求失败
    #[error("请求失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 服务器返回非成功状态码
    #[error("服务器返回错误状态 ({url}): {status}")]
    BadStatus { url: String, status: u16 },
}

/// 合并错误
#[derive(Debug, Error)]
pub enum MergeError {
    /// 输入文件数量不足
    #[error("至少需要 {required} 个 JSON 文件才能合并，当前只有 {given} 个")]
    NotEnoughInputs { required: usize, given: usize },
    /// 所有输入都为空
    #[error("合并结果为空")]
    EmptyResult,
}

// ========== 从常见错误类型转换 ==========

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: err,
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建选择器解析错误
    pub fn invalid_selector(
        field: impl Into<String>,
        selector: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        AppError::Config(ConfigError::InvalidSelector {
            field: field.into(),
            selector: selector.into(),
            reason: reason.to_string(),
        })
    }

    /// 创建请求失败错误
    pub fn fetch_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Fetch(FetchError::RequestFailed {
            url: url.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_error_display() {
        let err = AppError::invalid_selector("title_selectors", "h1[", "unexpected end");
        let msg = err.to_string();
        assert!(msg.starts_with("配置错误"));
        assert!(msg.contains("h1["));
    }

    #[test]
    fn test_merge_error_message() {
        let err: AppError = MergeError::NotEnoughInputs {
            required: 2,
            given: 1,
        }
        .into();
        assert!(err.to_string().contains("至少需要 2 个"));
    }
}
