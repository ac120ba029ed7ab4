// List Filter/Search Engine over the content catalog.
// Pure functions and small cursors; the handlers only shape them into responses.

pub mod carousel;
pub mod filter;
pub mod handlers;
pub mod pagination;
