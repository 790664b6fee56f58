//! Cross-cutting helpers shared by the analytics and create modules.

pub mod color;
pub mod config;
pub mod format;
pub mod platform;
pub mod timing;
