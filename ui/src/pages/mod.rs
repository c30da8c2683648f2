pub mod create_account;
pub mod dashboard;
pub mod login;
pub mod not_found;

pub use create_account::CreateAccountPage;
pub use dashboard::{DashboardPage, ParentDashboardPage};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
