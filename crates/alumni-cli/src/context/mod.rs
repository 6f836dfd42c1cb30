mod app_context;
mod error;
mod session;

pub use app_context::AppContext;
pub use error::AppError;
pub use session::Session;
