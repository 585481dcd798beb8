use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::{BrowserError, BrowserResult};

/// 启动后的浏览器及其事件循环
pub struct LaunchedBrowser {
    pub browser: Browser,
    pub handler_task: JoinHandle<()>,
    pub page: Page,
}

/// 按配置启动无头浏览器，并打开一个空白页
pub async fn launch_headless_browser(config: &Config) -> BrowserResult<LaunchedBrowser> {
    info!("🚀 启动无头浏览器...");
    let (width, height) = config.viewport;
    debug!("窗口大小: {}x{}, 无头模式: {}", width, height, config.headless);

    let mut builder = BrowserConfig::builder()
        .window_size(width, height)
        .args(vec!["--no-sandbox", "--disable-dev-shm-usage", "--disable-gpu"]);
    builder = if config.headless {
        builder.new_headless_mode()
    } else {
        builder.with_head()
    };
    if let Some(executable) = &config.chrome_executable {
        debug!("使用指定的浏览器: {}", executable.display());
        builder = builder.chrome_executable(executable);
    }

    let browser_config = builder.build().map_err(|e| {
        error!("配置无头浏览器失败: {}", e);
        BrowserError::ConfigurationFailed(e)
    })?;

    let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        BrowserError::LaunchFailed { source: e }
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // 等待浏览器状态同步
    sleep(tokio::time::Duration::from_millis(300)).await;

    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("创建页面失败: {}", e);
        BrowserError::PageCreationFailed { source: e }
    })?;

    info!("✅ 无头浏览器已就绪");

    Ok(LaunchedBrowser {
        browser,
        handler_task,
        page,
    })
}
