pub mod constraints;
pub mod i18n;
pub mod models;
pub mod validator;

pub use constraints::*;
pub use i18n::*;
pub use models::*;
pub use validator::*;
