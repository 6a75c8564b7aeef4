mod login_wizard;
mod signup_wizard;

pub use login_wizard::run_login_wizard;
pub use signup_wizard::run_signup_wizard;
