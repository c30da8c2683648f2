pub mod toast;

pub use toast::use_toast;
