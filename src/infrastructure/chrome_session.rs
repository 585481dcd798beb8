use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::Browser;
use serde::Deserialize;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::browser::LaunchedBrowser;
use crate::error::{BrowserError, BrowserResult, InteractionError};
use crate::infrastructure::js_executor::JsExecutor;
use crate::infrastructure::session::{ControlRef, PageSession};
use crate::services::pagination::CONTROL_SELECTOR;

/// 控件脚本的返回值
#[derive(Debug, Deserialize)]
struct ControlProbe {
    found: bool,
    #[serde(default)]
    matches: bool,
    #[serde(default)]
    text: String,
}

/// 基于 chromiumoxide 的页面会话
///
/// 唯一持有 Browser 的对象；运行结束时必须调用 [`ChromeSession::close`]
pub struct ChromeSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    executor: JsExecutor,
}

impl ChromeSession {
    pub fn new(launched: LaunchedBrowser) -> Self {
        Self {
            browser: launched.browser,
            handler_task: launched.handler_task,
            executor: JsExecutor::new(launched.page),
        }
    }

    /// 关闭浏览器并结束事件循环，失败只记录日志
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("关闭浏览器失败: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("等待浏览器进程退出失败: {}", e);
        }
        self.handler_task.abort();
        info!("🔒 浏览器已关闭");
    }

    /// 按序号重新定位控件，核对文本后才执行动作
    ///
    /// 同一轮中前面的点击可能插入新元素，序号会指向别的元素；
    /// 此时不执行动作，返回 `ControlMoved`。
    async fn run_control_script(
        &self,
        control: &ControlRef,
        action: &str,
    ) -> Result<(), InteractionError> {
        let label = serde_json::to_string(&control.label).map_err(|e| InteractionError::ScriptFailed {
            ordinal: control.ordinal,
            message: e.to_string(),
        })?;
        let js_code = format!(
            r#"
            (() => {{
                const el = document.querySelectorAll('{selector}')[{ordinal}];
                if (!el) {{
                    return {{ found: false }};
                }}
                const own = Array.from(el.childNodes).find(n => n.nodeType === Node.TEXT_NODE);
                const text = own ? own.textContent.trim() : '';
                if (text !== {label}) {{
                    return {{ found: true, matches: false, text }};
                }}
                {action}
                return {{ found: true, matches: true, text }};
            }})()
            "#,
            selector = CONTROL_SELECTOR,
            ordinal = control.ordinal,
            label = label,
            action = action,
        );

        let probe: ControlProbe = self
            .executor
            .eval_as(js_code)
            .await
            .map_err(|e| InteractionError::ScriptFailed {
                ordinal: control.ordinal,
                message: e.to_string(),
            })?;

        match probe {
            ControlProbe { found: false, .. } => Err(InteractionError::ControlVanished {
                ordinal: control.ordinal,
            }),
            ControlProbe { matches: false, text, .. } => Err(InteractionError::ControlMoved {
                ordinal: control.ordinal,
                expected: control.label.clone(),
                found: text,
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl PageSession for ChromeSession {
    async fn open(&mut self, url: &str, settle: Duration) -> BrowserResult<()> {
        debug!("导航到: {}", url);
        self.executor
            .page()
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed {
                url: url.to_string(),
                source: e,
            })?;
        sleep(settle).await;

        // 固定等待结束后页面可能仍在加载，只记录不阻塞
        match self.executor.eval("document.readyState").await {
            Ok(state) if state.as_str() != Some("complete") => {
                debug!("页面尚未加载完成 ({}): {}", state, url)
            }
            Ok(_) => {}
            Err(e) => debug!("读取页面状态失败: {}", e),
        }
        Ok(())
    }

    async fn current_markup(&self) -> BrowserResult<String> {
        self.executor
            .page()
            .content()
            .await
            .map_err(|e| BrowserError::MarkupUnavailable { source: e })
    }

    async fn scroll_into_view(&self, control: &ControlRef) -> Result<(), InteractionError> {
        self.run_control_script(control, "el.scrollIntoView(true);")
            .await
    }

    async fn click(&self, control: &ControlRef) -> Result<(), InteractionError> {
        debug!("点击控件 #{}: {}", control.ordinal, control.label);
        self.run_control_script(control, "el.click();").await
    }
}
