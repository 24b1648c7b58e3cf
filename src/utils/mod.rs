pub mod mailer;
pub mod pdf;
pub mod translit;
pub mod xlsx;
