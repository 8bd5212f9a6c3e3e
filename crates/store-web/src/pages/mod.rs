//! Page Components

mod cancel;
mod home;
mod success;

pub use cancel::CancelPage;
pub use home::HomePage;
pub use success::SuccessPage;
