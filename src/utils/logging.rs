/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时按 `verbose` 选择 debug 或 info。重复调用是安全的。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(command: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {}", command);
    info!("{}", "=".repeat(60));
}

/// 打印提取结果统计
///
/// # 参数
/// - `total`: 题目数
/// - `category`: 分类名称
/// - `output_file`: 输出文件名
pub fn print_extract_stats(total: usize, category: &str, output_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("✅ 提取完成");
    info!("{}", "=".repeat(60));
    info!("📊 题目数: {}", total);
    info!("📋 分类: {}", category);
    info!("📄 文件: {}", output_file);
    info!("{}", "=".repeat(60));
}

/// 打印合并结果统计
///
/// # 参数
/// - `files`: 参与合并的文件名
/// - `total`: 合并后的题目数
/// - `output_file`: 输出文件名
pub fn print_merge_stats(files: &[String], total: usize, output_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("✅ 合并完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📊 合并文件数: {}", files.len());
    info!("📊 题目总数: {}", total);
    info!("📄 文件: {}", output_file);
    for file in files {
        info!("  • {}", file);
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_text("مرحبا", 10), "مرحبا");
        assert_eq!(truncate_text("مرحبا بالعالم", 5), "مرحبا...");
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
