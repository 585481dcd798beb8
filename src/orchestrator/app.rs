//! 应用生命周期 - 编排层
//!
//! 唯一持有浏览器会话的模块

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{error, info};

use crate::browser;
use crate::config::Config;
use crate::infrastructure::ChromeSession;
use crate::orchestrator::crawler::{CrawlOutcome, KnowledgeBaseCrawler};
use crate::render::{DocumentAssembler, RenderSummary};
use crate::utils::logging;

/// 应用主结构
pub struct App {
    config: Config,
    session: ChromeSession,
}

impl App {
    /// 初始化应用：启动浏览器
    pub async fn initialize(config: Config) -> Result<Self> {
        let home_url = config.home_url()?;
        logging::log_startup(home_url.as_str(), &config.output_path.display().to_string());

        let launched = browser::launch_headless_browser(&config)
            .await
            .context("浏览器启动失败")?;

        Ok(Self {
            config,
            session: ChromeSession::new(launched),
        })
    }

    /// 运行应用主逻辑
    ///
    /// 不论抓取或写出是否成功，浏览器都会在返回前关闭
    pub async fn run(self) -> Result<RenderSummary> {
        let Self {
            config,
            mut session,
        } = self;

        let result = crawl_and_render(&config, &mut session).await;
        session.close().await;

        if let Err(e) = &result {
            error!("❌ 运行失败: {:#}", e);
        }
        result
    }
}

async fn crawl_and_render(config: &Config, session: &mut ChromeSession) -> Result<RenderSummary> {
    let crawler = KnowledgeBaseCrawler::new(config)?;
    let CrawlOutcome {
        articles, skipped, ..
    } = crawler.crawl(session).await?;

    info!("🖨️ 正在生成 PDF ({} 篇文章)...", articles.len());
    let assembler = DocumentAssembler::new(config.document.clone());
    let summary = assembler
        .write_to(&articles, &config.output_path, Local::now())
        .await?;

    logging::print_final_stats(
        summary.articles,
        &skipped,
        &config.output_path.display().to_string(),
    );
    Ok(summary)
}
