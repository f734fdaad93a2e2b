/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::{info, warn};

use crate::config::Config;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 程序配置
/// - `headless`: 是否为命令行模式
pub fn log_startup(config: &Config, headless: bool) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - {} ({})",
        if headless { "命令行模式" } else { "窗口模式" },
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🤖 模型: {}", config.llm_model_name);
    info!("🌐 API 地址: {}", config.llm_api_base_url);
    if config.llm_api_key.is_none() {
        warn!("⚠️ 未设置 OPENAI_API_KEY，审阅请求将会失败");
    }
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `total`: 总数
pub fn print_final_stats(success: usize, failed: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("❌ 失败: {}", failed);
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
    fn test_truncate_text() {
        assert_eq!(truncate_text("Beneficence", 20), "Beneficence");
        assert_eq!(truncate_text("Beneficence", 4), "Bene...");
        // 按字符而不是字节截断
        assert_eq!(truncate_text("≤25 words", 3), "≤25...");
    }
}
