pub mod inventory;
pub mod list;
pub mod login;
pub mod not_found;
pub mod settings;

pub use inventory::{Domains, Finance, Groups, Servers, Users};
pub use login::Login;
pub use not_found::NotFound;
pub use settings::Settings;
