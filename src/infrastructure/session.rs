//! 页面会话能力
//!
//! 浏览器自动化与标记解析之间的边界：上层只拿到渲染后的 HTML 字符串，
//! 以及按序号操作控件的能力，因此提取逻辑可以脱离浏览器测试。

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{BrowserResult, InteractionError};

/// 页面上的一个可交互控件
///
/// `ordinal` 是该元素在文档顺序中所有 `a, button` 元素里的下标，
/// 浏览器端用 `document.querySelectorAll('a, button')[ordinal]` 定位。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRef {
    pub ordinal: usize,
    pub label: String,
}

/// 单个浏览器会话
#[async_trait]
pub trait PageSession: Send + Sync {
    /// 导航到 url，然后固定等待 settle
    async fn open(&mut self, url: &str, settle: Duration) -> BrowserResult<()>;

    /// 当前渲染后的页面源码
    async fn current_markup(&self) -> BrowserResult<String>;

    async fn scroll_into_view(&self, control: &ControlRef) -> Result<(), InteractionError>;

    async fn click(&self, control: &ControlRef) -> Result<(), InteractionError>;
}
