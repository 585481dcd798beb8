use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 浏览器配置失败
    #[error("浏览器配置失败: {0}")]
    ConfigurationFailed(String),
    /// 启动浏览器失败
    #[error("启动浏览器失败: {source}")]
    LaunchFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 创建页面失败
    #[error("创建页面失败: {source}")]
    PageCreationFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 导航失败
    #[error("导航到 {url} 失败: {source}")]
    NavigationFailed {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 读取页面源码失败
    #[error("读取页面源码失败: {source}")]
    MarkupUnavailable {
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 执行脚本失败
    #[error("执行脚本失败: {0}")]
    ScriptExecutionFailed(String),
}

/// 页面交互错误（单个控件级别，调用方跳过即可）
#[derive(Debug, Error)]
pub enum InteractionError {
    /// 控件在页面中已不存在
    #[error("控件 #{ordinal} 已不存在")]
    ControlVanished { ordinal: usize },
    /// 序号处已是另一个元素（页面在两次扫描之间变化）
    #[error("控件 #{ordinal} 已移动: 期望 {expected:?}, 实际 {found:?}")]
    ControlMoved {
        ordinal: usize,
        expected: String,
        found: String,
    },
    /// 交互脚本失败
    #[error("控件 #{ordinal} 交互失败: {message}")]
    ScriptFailed { ordinal: usize, message: String },
}

/// 渲染输出错误
#[derive(Debug, Error)]
pub enum RenderError {
    /// 写入输出文件失败
    #[error("写入 {path} 失败: {source}", path = .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 文章或分类被跳过的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 页面无法打开或读取
    Unreachable { error: String },
    /// 展开"加载更多"时出错
    ExpansionFailed { error: String },
    /// 页面上没有可提取的内容
    NoContent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreachable { error } => write!(f, "页面不可达: {}", error),
            SkipReason::ExpansionFailed { error } => write!(f, "展开内容失败: {}", error),
            SkipReason::NoContent => write!(f, "没有可提取的内容"),
        }
    }
}

/// 被跳过的条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// 所属分类
    pub category: String,
    /// 文章标题；分类整体被跳过时为 None
    pub title: Option<String>,
    pub url: String,
    pub reason: SkipReason,
}

// ========== Result 类型别名 ==========

pub type BrowserResult<T> = Result<T, BrowserError>;
