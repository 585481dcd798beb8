//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `crawler` - 知识库爬取
//! - 打开首页、展开、发现分类
//! - 逐个分类发现文章链接
//! - 逐篇文章打开、展开、提取正文
//! - 记录被跳过的分类 / 文章及原因
//!
//! ### `app` - 应用生命周期
//! - 启动浏览器并创建会话
//! - 运行爬取，装配并写出 PDF
//! - 无论成功与否都关闭浏览器
//!
//! ## 层次关系
//!
//! ```text
//! app (持有 ChromeSession)
//!     ↓
//! crawler (对任意 PageSession 顺序执行)
//!     ↓
//! services (分页展开 / 链接发现 / 正文提取)
//!     ↓
//! infrastructure (PageSession / JsExecutor)
//! ```

pub mod app;
pub mod crawler;

pub use app::App;
pub use crawler::{CrawlOutcome, KnowledgeBaseCrawler};
