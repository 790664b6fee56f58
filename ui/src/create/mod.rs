//! The QR creation form: content types, styling, templates, live preview,
//! logo upload, change history and guarded submission.

pub mod controller;
pub mod form;
pub mod history;
pub mod logo;
pub mod preview;
pub mod request;
pub mod templates;
pub mod types;
pub mod validation;
mod view;

pub use controller::{Effect, QrEvent, QrFormController};
pub use view::CreateQrView;
