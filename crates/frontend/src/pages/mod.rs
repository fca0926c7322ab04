pub mod page;

pub use page::PageView;
