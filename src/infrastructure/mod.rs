//! 基础设施层
//!
//! 持有稀缺资源（浏览器页面），只向上暴露能力

pub mod chrome_session;
pub mod js_executor;
pub mod session;

pub use chrome_session::ChromeSession;
pub use js_executor::JsExecutor;
pub use session::{ControlRef, PageSession};
