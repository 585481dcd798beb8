use anyhow::Result;
use kb_archiver::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 所有参数均为固定常量
    let config = Config::default();

    App::initialize(config).await?.run().await?;

    Ok(())
}
