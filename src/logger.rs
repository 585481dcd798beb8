use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志，默认 info 级别，可用 RUST_LOG 覆盖
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // 测试中可能被多次调用，重复初始化直接忽略
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
