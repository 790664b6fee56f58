mod analytics;
mod create;
mod home;

pub use analytics::Analytics;
pub use create::Create;
pub use home::Home;
