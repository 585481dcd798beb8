use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::render::DocumentStyle;

/// 程序配置
///
/// 一次运行中的所有参数都是固定常量，不读取环境变量、命令行或配置文件。
#[derive(Clone, Debug)]
pub struct Config {
    /// 知识库站点根地址
    pub base_url: String,
    /// 知识库首页路径
    pub home_path: String,
    /// 分类链接必须包含的路径前缀
    pub category_marker: String,
    /// 文章链接 href 中的标记（任一命中即可）
    pub article_markers: Vec<String>,
    /// 文章正文容器的元素 ID，找不到时回退到 body
    pub main_container_id: String,
    /// 输出 PDF 路径
    pub output_path: PathBuf,
    /// 是否重复输出列表内部的元素（源站脚本的原始行为）
    pub emit_nested_list_items: bool,

    // --- 浏览器 ---
    pub headless: bool,
    pub viewport: (u32, u32),
    /// 指定浏览器可执行文件，None 时由 chromiumoxide 自动查找
    pub chrome_executable: Option<PathBuf>,

    // --- 等待时间 ---
    pub home_settle: Duration,
    pub category_settle: Duration,
    pub article_settle: Duration,
    pub expand: ExpandTiming,

    /// PDF 版式
    pub document: DocumentStyle,
}

/// "加载更多"展开循环的节奏与上限
#[derive(Clone, Copy, Debug)]
pub struct ExpandTiming {
    /// 滚动到控件后的等待
    pub after_scroll: Duration,
    /// 点击控件后的等待
    pub after_click: Duration,
    /// 每一轮点击结束后的额外等待
    pub after_pass: Duration,
    /// 最多执行的轮数
    pub max_passes: usize,
}

impl ExpandTiming {
    /// 不等待的节奏，用于离线测试
    pub fn immediate(max_passes: usize) -> Self {
        Self {
            after_scroll: Duration::ZERO,
            after_click: Duration::ZERO,
            after_pass: Duration::ZERO,
            max_passes,
        }
    }
}

impl Default for ExpandTiming {
    fn default() -> Self {
        Self {
            after_scroll: Duration::from_secs(1),
            after_click: Duration::from_secs(3),
            after_pass: Duration::from_secs(2),
            max_passes: 25,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://portal.supermicro.com".to_string(),
            home_path: "/sites/IT/ITKnowledgeBase/SitePages/Home.aspx".to_string(),
            category_marker: "/sites/IT/ITKnowledgeBase/".to_string(),
            article_markers: vec!["DispForm.aspx?ID=".to_string(), "/SitePages/".to_string()],
            main_container_id: "DeltaPlaceHolderMain".to_string(),
            output_path: PathBuf::from("Supermicro_Complete_KB_2025.pdf"),
            emit_nested_list_items: false,
            headless: true,
            viewport: (1920, 1080),
            chrome_executable: None,
            home_settle: Duration::from_secs(12),
            category_settle: Duration::from_secs(8),
            article_settle: Duration::from_secs(3),
            expand: ExpandTiming::default(),
            document: DocumentStyle::default(),
        }
    }
}

impl Config {
    /// 站点根地址
    pub fn base(&self) -> anyhow::Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// 知识库首页的完整地址
    pub fn home_url(&self) -> anyhow::Result<Url> {
        Ok(self.base()?.join(&self.home_path)?)
    }

    /// 离线测试用：所有等待时间为零
    pub fn without_waits(mut self) -> Self {
        self.home_settle = Duration::ZERO;
        self.category_settle = Duration::ZERO;
        self.article_settle = Duration::ZERO;
        self.expand = ExpandTiming::immediate(self.expand.max_passes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_url_joins_base_and_path() {
        let config = Config::default();
        assert_eq!(
            config.home_url().unwrap().as_str(),
            "https://portal.supermicro.com/sites/IT/ITKnowledgeBase/SitePages/Home.aspx"
        );
    }

    #[test]
    fn without_waits_keeps_pass_cap() {
        let config = Config::default().without_waits();
        assert_eq!(config.article_settle, Duration::ZERO);
        assert_eq!(config.expand.after_click, Duration::ZERO);
        assert_eq!(config.expand.max_passes, 25);
    }
}
