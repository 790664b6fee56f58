//! Shared UI crate for QR Studio: the analytics dashboard, the QR creation
//! form and the views that host them.

pub mod analytics;
pub mod core;
pub mod create;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod toast;
}
