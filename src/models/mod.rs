//! Data models for the contact book.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
