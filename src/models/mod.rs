pub mod article;
pub mod document;

pub use article::{Article, ArticleLink, Category, ContentPart};
pub use document::Document;
