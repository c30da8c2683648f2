pub mod account_picker;
pub mod auth_failure;
pub mod toast;

pub use account_picker::AccountPicker;
pub use auth_failure::AuthFailureMessage;
pub use toast::ToastContainer;
