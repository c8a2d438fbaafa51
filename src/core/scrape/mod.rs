pub mod detail;
pub mod dispatch;
pub mod document;
pub mod extract;

pub use detail::*;
pub use dispatch::*;
pub use document::*;
pub use extract::*;
