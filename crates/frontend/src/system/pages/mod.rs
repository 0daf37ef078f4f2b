pub mod login;
pub mod signup;

pub use login::LoginPage;
pub use signup::SignupPage;
