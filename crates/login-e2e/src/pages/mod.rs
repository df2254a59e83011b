// Page objects: semantic, selector-hiding wrappers over driver pages.

mod login;

pub use login::{LoginPage, PageUrls};
