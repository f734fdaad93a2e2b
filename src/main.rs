use std::sync::Arc;

use anyhow::{Context, Result};
use pdf_irb_review::config::Config;
use pdf_irb_review::logger;
use pdf_irb_review::orchestrator::{HeadlessRunner, ReviewWorker, ERROR_MARKER};
use pdf_irb_review::prompts::PromptPair;
use pdf_irb_review::services::Reviewer;
use pdf_irb_review::ui;
use pdf_irb_review::utils::logging::log_startup;

fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    // 有参数时走命令行模式
    let payloads: Vec<String> = std::env::args().skip(1).collect();
    let headless = !payloads.is_empty();
    log_startup(&config, headless);

    let prompts = PromptPair::load(config.prompt_file.as_deref())?;
    let runtime = tokio::runtime::Runtime::new().context("无法创建 tokio 运行时")?;
    let reviewer = Arc::new(Reviewer::from_config(&config, prompts));
    let (worker, events) = ReviewWorker::new(reviewer, runtime.handle().clone());

    if headless {
        // 命令行模式下缺少密钥直接退出
        config.require_api_key()?;

        let runner = HeadlessRunner::new(worker, events);
        let stats = runner.run(&payloads, &mut std::io::stdout().lock())?;
        if stats.failed > 0 {
            anyhow::bail!("{}/{} 个文件审阅失败", stats.failed, stats.total);
        }
        return Ok(());
    }

    let banner = config
        .require_api_key()
        .err()
        .map(|e| format!("{} {}", ERROR_MARKER, e));

    ui::run(worker, events, banner).map_err(|e| anyhow::anyhow!("窗口运行失败: {}", e))?;

    Ok(())
}
