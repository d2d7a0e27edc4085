pub mod list;
pub mod settings;

#[cfg(test)]
mod test;

pub use list::{ListController, ListView, ModalView, TableBody, TableRowView, TableView};
pub use settings::{PasswordForm, ProfileForm, SettingsController, SettingsView};
