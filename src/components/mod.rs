pub mod book_request;
pub mod contact_form;
pub mod count_up;
pub mod header;
pub mod language;
pub mod newsletter;
pub mod scroll_progress;
pub mod scroll_reveal;
