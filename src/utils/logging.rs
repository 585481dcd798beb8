/// 日志工具模块
///
/// 控制台进度输出的辅助函数
use tracing::info;

use crate::error::Skipped;

/// 记录程序启动信息
pub fn log_startup(home_url: &str, output: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 知识库离线归档 - 启动");
    info!("🌐 首页: {}", home_url);
    info!("📄 输出: {}", output);
    info!("{}", "=".repeat(60));
}

pub fn log_categories_found(total: usize) {
    info!("\n✓ 找到 {} 个分类，开始完整抓取...\n", total);
}

/// 记录分类开始
///
/// # 参数
/// - `index`: 分类序号（从 1 开始）
/// - `total`: 分类总数
/// - `name`: 分类名
pub fn log_category_start(index: usize, total: usize, name: &str) {
    info!("[{}/{}] {}", index, total, truncate_text(name, 80));
}

pub fn log_category_articles(count: usize) {
    info!("    → 本分类共 {} 篇文章", count);
}

pub fn log_running_total(collected: usize) {
    info!("    已收集: {} 篇文章\n", collected);
}

/// 打印最终统计信息
///
/// # 参数
/// - `articles`: 写入文档的文章数
/// - `skipped`: 被跳过的条目
/// - `output`: 输出文件路径
pub fn print_final_stats(articles: usize, skipped: &[Skipped], output: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 抓取完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 已保存文章: {}", articles);
    info!("⏭️ 跳过: {}", skipped.len());
    for item in skipped.iter().filter(|s| s.title.is_none()) {
        info!("   分类 {} ({})", item.category, item.reason);
    }
    info!("{}", "=".repeat(60));
    info!("\n🎉 PDF 已生成: {}", output);
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
