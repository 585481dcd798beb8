//! # KB Archiver
//!
//! 抓取企业知识库门户的全部文章，并编译为一份离线 PDF
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `browser/` - 启动无头浏览器
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `PageSession` - 导航 / 读取源码 / 按序号操作控件
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 只处理 HTML 快照，不接触浏览器
//! - `pagination` - 反复点击"加载更多"直到消失
//! - `LinkDiscoverer` - 分类与文章链接
//! - `ContentExtractor` - 文本 / 代码 / 列表
//!
//! ### ③ 装配层（Render）
//! - `render/` - 分组排序、目录、排版、PDF 输出
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/crawler` - 顺序爬取，记录跳过原因
//! - `orchestrator/app` - 浏览器生命周期，保证关闭
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::{Config, ExpandTiming};
pub use error::{BrowserError, InteractionError, RenderError, SkipReason, Skipped};
pub use infrastructure::{ChromeSession, ControlRef, PageSession};
pub use models::{Article, ArticleLink, Category, ContentPart, Document};
pub use orchestrator::{App, CrawlOutcome, KnowledgeBaseCrawler};
pub use render::{DocumentAssembler, DocumentStyle, RenderSummary};
