//! 分页展开服务 - 业务能力层
//!
//! 反复点击"View all / Load more"类控件，直到页面上不再出现为止

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::ExpandTiming;
use crate::error::BrowserResult;
use crate::infrastructure::{ControlRef, PageSession};
use crate::services::markup;

/// 浏览器端定位控件时使用同一个选择器，序号才能对得上
pub const CONTROL_SELECTOR: &str = "a, button";

static CONTROLS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(CONTROL_SELECTOR).expect("静态选择器"));

/// 一次展开的统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExpansionReport {
    /// 实际执行点击的轮数
    pub passes: usize,
    pub clicks: usize,
    pub failed_clicks: usize,
    /// 最后一次扫描时已没有控件
    pub converged: bool,
}

/// 找出页面上所有"加载更多"控件
///
/// 链接的第一个直接文本节点包含 "View all" 或 "Load more"，
/// 或按钮的第一个直接文本节点包含 "Load"。
pub fn locate_load_more_controls(source: &str) -> Vec<ControlRef> {
    let document = markup::parse(source);
    document
        .select(&CONTROLS)
        .enumerate()
        .filter_map(|(ordinal, element)| {
            let label = markup::own_text(&element)?;
            is_load_more(&element, &label).then(|| ControlRef {
                ordinal,
                label: label.trim().to_string(),
            })
        })
        .collect()
}

fn is_load_more(element: &ElementRef, label: &str) -> bool {
    match element.value().name() {
        "a" => label.contains("View all") || label.contains("Load more"),
        "button" => label.contains("Load"),
        _ => false,
    }
}

/// 展开当前页面的全部内容
///
/// 每一轮重新扫描源码；没有控件时结束。达到 `max_passes` 仍未收敛时
/// 放弃展开并记录警告，页面保持当前状态。单个控件的滚动或点击失败
/// 直接跳过，读取源码失败则向上返回。
pub async fn expand_all<S>(session: &S, timing: &ExpandTiming) -> BrowserResult<ExpansionReport>
where
    S: PageSession + ?Sized,
{
    let mut report = ExpansionReport::default();

    while report.passes < timing.max_passes {
        let source = session.current_markup().await?;
        let controls = locate_load_more_controls(&source);
        if controls.is_empty() {
            report.converged = true;
            break;
        }

        report.passes += 1;
        debug!("第 {} 轮展开: {} 个控件", report.passes, controls.len());

        for control in &controls {
            if let Err(e) = session.scroll_into_view(control).await {
                debug!("跳过控件: {}", e);
                report.failed_clicks += 1;
                continue;
            }
            sleep(timing.after_scroll).await;

            if let Err(e) = session.click(control).await {
                debug!("跳过控件: {}", e);
                report.failed_clicks += 1;
                continue;
            }
            report.clicks += 1;
            sleep(timing.after_click).await;
        }

        sleep(timing.after_pass).await;
    }

    if !report.converged {
        // 最后一轮点击之后再确认一次
        let source = session.current_markup().await?;
        report.converged = locate_load_more_controls(&source).is_empty();
    }

    if report.converged {
        if report.clicks > 0 {
            info!("  ↳ 已展开 {} 次 ({} 轮)", report.clicks, report.passes);
        }
    } else {
        warn!(
            "⚠️ 展开 {} 轮后仍有加载控件，放弃继续展开",
            timing.max_passes
        );
    }

    Ok(report)
}
