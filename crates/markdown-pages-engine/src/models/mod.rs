pub mod page_source;

pub use page_source::PageSource;
