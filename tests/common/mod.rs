#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use kb_archiver::services::markup;
use kb_archiver::services::pagination::CONTROL_SELECTOR;
use kb_archiver::{BrowserError, ControlRef, InteractionError, PageSession};
use scraper::Selector;

/// 内存中的站点：每个 URL 对应若干个渲染状态，每次点击进入下一个状态
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, Vec<String>>,
    unreachable: HashSet<String>,
    vanishing_controls: bool,
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    url: Option<String>,
    stage: usize,
    visits: Vec<String>,
    clicks: usize,
    clicked_labels: Vec<String>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, markup: &str) -> Self {
        self.pages.insert(url.to_string(), vec![markup.to_string()]);
        self
    }

    /// 依次点击后呈现的各个状态
    pub fn staged_page(mut self, url: &str, stages: &[&str]) -> Self {
        self.pages
            .insert(url.to_string(), stages.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn unreachable(mut self, url: &str) -> Self {
        self.unreachable.insert(url.to_string());
        self
    }

    /// 所有控件在点击前消失
    pub fn with_vanishing_controls(mut self) -> Self {
        self.vanishing_controls = true;
        self
    }

    pub fn visits(&self) -> Vec<String> {
        self.state.lock().unwrap().visits.clone()
    }

    pub fn clicks(&self) -> usize {
        self.state.lock().unwrap().clicks
    }

    /// 实际被点击的元素文本，按点击顺序
    pub fn clicked_labels(&self) -> Vec<String> {
        self.state.lock().unwrap().clicked_labels.clone()
    }

    fn markup_of(&self, state: &FakeState) -> String {
        state
            .url
            .as_ref()
            .and_then(|url| self.pages.get(url))
            .and_then(|stages| stages.get(state.stage.min(stages.len() - 1)))
            .cloned()
            .unwrap_or_else(|| "<html><body></body></html>".to_string())
    }

    /// 与浏览器端脚本一致：按序号在当前页面中重新定位，并核对文本
    fn relocate(&self, state: &FakeState, control: &ControlRef) -> Result<String, InteractionError> {
        let document = markup::parse(&self.markup_of(state));
        let selector = Selector::parse(CONTROL_SELECTOR).unwrap();
        let element = document
            .select(&selector)
            .nth(control.ordinal)
            .ok_or(InteractionError::ControlVanished {
                ordinal: control.ordinal,
            })?;
        let text = markup::own_text(&element)
            .map(|t| t.trim().to_string())
            .unwrap_or_default();
        if text != control.label {
            return Err(InteractionError::ControlMoved {
                ordinal: control.ordinal,
                expected: control.label.clone(),
                found: text,
            });
        }
        Ok(text)
    }
}

#[async_trait]
impl PageSession for FakeSite {
    async fn open(&mut self, url: &str, _settle: Duration) -> Result<(), BrowserError> {
        let mut state = self.state.lock().unwrap();
        state.visits.push(url.to_string());
        if self.unreachable.contains(url) {
            state.url = None;
            return Err(BrowserError::ScriptExecutionFailed(format!(
                "net::ERR_CONNECTION_REFUSED at {}",
                url
            )));
        }
        state.url = Some(url.to_string());
        state.stage = 0;
        Ok(())
    }

    async fn current_markup(&self) -> Result<String, BrowserError> {
        let state = self.state.lock().unwrap();
        Ok(self.markup_of(&state))
    }

    async fn scroll_into_view(&self, control: &ControlRef) -> Result<(), InteractionError> {
        let state = self.state.lock().unwrap();
        self.relocate(&state, control).map(|_| ())
    }

    async fn click(&self, control: &ControlRef) -> Result<(), InteractionError> {
        if self.vanishing_controls {
            return Err(InteractionError::ControlVanished {
                ordinal: control.ordinal,
            });
        }
        let mut state = self.state.lock().unwrap();
        let label = self.relocate(&state, control)?;
        state.stage += 1;
        state.clicks += 1;
        state.clicked_labels.push(label);
        Ok(())
    }
}
