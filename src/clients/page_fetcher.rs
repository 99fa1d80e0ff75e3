/// 远程页面获取客户端
///
/// 按 URL 下载导出的结果页，超时在这里处理，提取引擎本身不涉及网络
use crate::config::Config;
use crate::error::{AppError, AppResult, FetchError};
use std::time::Duration;
use tracing::{debug, info};

/// 页面获取客户端
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// 创建新的获取客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Other(format!("无法创建 HTTP 客户端: {}", e)))?;
        Ok(Self { client })
    }

    /// 获取页面 HTML
    ///
    /// # 参数
    /// - `url`: 页面地址
    ///
    /// # 返回
    /// 返回页面文本（按响应声明的编码解码）
    pub async fn fetch(&self, url: &str) -> AppResult<String> {
        info!("🌐 正在获取页面: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::fetch_failed(url, e))?;
        debug!("页面长度: {} 字节", body.len());

        Ok(body)
    }
}

/// 输入是否为 http(s) 地址
pub fn is_url(source: &str) -> bool {
    let lower = source.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://docs.google.com/forms/d/e/x/viewscore"));
        assert!(is_url("HTTP://example.com"));
        assert!(!is_url("results.html"));
        assert!(!is_url("/tmp/https.html"));
    }

    #[tokio::test]
    #[ignore] // 需要网络：cargo test -- --ignored
    async fn test_fetch_real_page() {
        let fetcher = PageFetcher::new(&Config::default()).unwrap();
        let body = fetcher.fetch("https://example.com").await.unwrap();
        assert!(body.contains("<html"));
    }
}
