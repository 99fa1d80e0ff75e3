use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quiz_form_extract::utils::logging;
use quiz_form_extract::{App, Category, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quiz-extract")]
#[command(about = "从已批改的测验结果页提取阿拉伯语选择题")]
struct Cli {
    /// 显示详细日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 从本地 HTML 文件或 URL 提取题目
    Extract {
        /// HTML 文件路径或 http(s) 地址
        source: String,
        /// 分类：菜单编号 1-5 或阿拉伯语名称
        #[arg(short, long)]
        category: String,
        /// 输出文件名（默认由来源推导）
        #[arg(short, long)]
        output: Option<String>,
        /// 自定义规则表（TOML）
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },
    /// 合并多个题目 JSON 文件并重新编号
    Merge {
        /// 至少两个 JSON 文件
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,
        /// 输出文件名（默认 merged_questions_<N>_questions.json）
        #[arg(short, long)]
        output: Option<String>,
    },
    /// 列出可用分类
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::from_env();
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    match cli.command {
        Command::Extract {
            source,
            category,
            output,
            rules,
        } => {
            logging::log_startup("extract");
            let category: Category = category.parse().context("分类无效")?;
            let app = App::initialize(config, rules.as_deref()).await?;
            app.extract(&source, category, output.as_deref()).await?;
        }
        Command::Merge { files, output } => {
            logging::log_startup("merge");
            let app = App::initialize(config, None).await?;
            app.merge(&files, output.as_deref()).await?;
        }
        Command::Categories => {
            let app = App::initialize(config, None).await?;
            for line in app.list_categories() {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
