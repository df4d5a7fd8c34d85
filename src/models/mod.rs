//! Data models for Perpustakaan

pub mod book;
pub mod borrow;
pub mod enums;
pub mod member;
pub mod return_record;
pub mod stats;

// Re-export commonly used types
pub use book::{Book, BookFields, BookQuery, CreateBook, UpdateBook};
pub use borrow::{Borrow, BorrowQuery, BorrowView, CreateBorrow};
pub use enums::{BorrowStatus, MemberStatus};
pub use member::{Member, MemberQuery};
pub use return_record::{CreateReturn, ReturnView};
pub use stats::{Dashboard, PopularBook};
