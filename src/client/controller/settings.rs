use std::{cell::RefCell, rc::Rc};

use dioxus_logger::tracing;
use serde_json::{Map, Value};

use crate::{
    client::{
        api::{gateway::ApiClient, settings as accessor, transport::Transport},
        constant::{MIN_PASSWORD_LENGTH, UNRESTRICTED_IP},
        model::{
            cache::Cache,
            error::ValidationError,
            form::{join_list, split_list},
            notice::Notice,
        },
    },
    model::settings::{ProfileDto, SettingsDto},
};

/// Editable part of the profile.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub allowed_ips: String,
    /// Whether `allowed_ips` limits logins; off means `0.0.0.0/0`.
    pub ip_restricted: bool,
}

impl ProfileForm {
    pub fn from_profile(profile: &ProfileDto) -> Self {
        let unrestricted = profile.allowed_ips.len() == 1 && profile.allowed_ips[0] == UNRESTRICTED_IP;

        Self {
            first_name: profile.first_name.clone().unwrap_or_default(),
            last_name: profile.last_name.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            phone_number: profile.phone_number.clone().unwrap_or_default(),
            allowed_ips: join_list(&profile.allowed_ips),
            ip_restricted: !unrestricted,
        }
    }

    pub fn set(&mut self, name: &str, value: String) {
        match name {
            "first_name" => self.first_name = value,
            "last_name" => self.last_name = value,
            "email" => self.email = value,
            "phone_number" => self.phone_number = value,
            "allowed_ips" if self.ip_restricted => self.allowed_ips = value,
            _ => {}
        }
    }

    pub fn set_ip_restricted(&mut self, restricted: bool) {
        self.ip_restricted = restricted;
        if !restricted {
            self.allowed_ips = UNRESTRICTED_IP.to_string();
        }
    }

    /// Only non-blank fields are sent.
    pub fn to_payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        let text_fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone_number", &self.phone_number),
        ];
        for (name, value) in text_fields {
            let value = value.trim();
            if !value.is_empty() {
                payload.insert(name.to_string(), Value::String(value.to_string()));
            }
        }

        let ips = split_list(&self.allowed_ips);
        if !ips.is_empty() {
            payload.insert(
                "allowed_ips".to_string(),
                Value::Array(ips.into_iter().map(Value::String).collect()),
            );
        }

        payload
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn set(&mut self, name: &str, value: String) {
        match name {
            "current_password" => self.current_password = value,
            "new_password" => self.new_password = value,
            "confirm_password" => self.confirm_password = value,
            _ => {}
        }
    }

    /// Returns the new password once it matches its confirmation and is long enough.
    pub fn validate(&self) -> Result<String, ValidationError> {
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }
        Ok(self.new_password.clone())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsView {
    pub profile: Cache<ProfileDto>,
    pub settings: Cache<SettingsDto>,
    pub profile_form: ProfileForm,
    pub password_form: PasswordForm,
    pub saving: bool,
    pub notice: Option<Notice>,
}

/// Drives the settings page: own profile, IP restriction and password change.
pub struct SettingsController<T> {
    api: ApiClient<T>,
    state: Rc<RefCell<SettingsView>>,
    on_change: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
}

impl<T> Clone for SettingsController<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: Rc::clone(&self.state),
            on_change: Rc::clone(&self.on_change),
        }
    }
}

impl<T> PartialEq for SettingsController<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<T: Transport> SettingsController<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            api,
            state: Rc::new(RefCell::new(SettingsView::default())),
            on_change: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_on_change(&self, listener: impl Fn() + 'static) {
        *self.on_change.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn view(&self) -> SettingsView {
        self.state.borrow().clone()
    }

    /// Loads the profile, then the settings row.
    pub async fn load(&self) {
        self.load_profile().await;

        self.update(|view| view.settings = Cache::Loading);
        let settings = match accessor::get_settings(&self.api).await {
            Ok(settings) => Cache::Fetched(settings),
            Err(err) => {
                tracing::error!("Failed to load settings: {}", err);
                self.update(|view| view.notice = Some(Notice::error("Failed to load settings")));
                Cache::Error("Failed to load settings".to_string())
            }
        };
        self.update(|view| view.settings = settings);
    }

    pub fn set_profile_field(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        self.update(|view| view.profile_form.set(name, value));
    }

    pub fn set_ip_restricted(&self, restricted: bool) {
        self.update(|view| view.profile_form.set_ip_restricted(restricted));
    }

    pub fn set_password_field(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        self.update(|view| view.password_form.set(name, value));
    }

    /// Saves the non-blank profile fields and reloads the profile.
    pub async fn update_profile(&self) {
        let payload = self.state.borrow().profile_form.to_payload();
        self.update(|view| view.saving = true);

        match accessor::update_settings(&self.api, &payload).await {
            Ok(_) => {
                self.load_profile().await;
                self.update(|view| {
                    view.saving = false;
                    view.notice = Some(Notice::success("Profile updated successfully"));
                });
            }
            Err(err) => {
                tracing::error!("Failed to update profile: {}", err);
                self.update(|view| {
                    view.saving = false;
                    view.notice = Some(Notice::error("Failed to update profile"));
                });
            }
        }
    }

    /// Checks the password form and, when valid, sends the new password.
    pub async fn change_password(&self) {
        let validated = self.state.borrow().password_form.validate();
        let password = match validated {
            Ok(password) => password,
            Err(err) => {
                let message = err.to_string();
                self.update(|view| view.notice = Some(Notice::error(message)));
                return;
            }
        };

        let mut payload = Map::new();
        payload.insert("password".to_string(), Value::String(password));
        self.update(|view| view.saving = true);

        match accessor::update_settings(&self.api, &payload).await {
            Ok(_) => self.update(|view| {
                view.saving = false;
                view.password_form = PasswordForm::default();
                view.notice = Some(Notice::success("Password changed successfully"));
            }),
            Err(err) => {
                tracing::error!("Failed to change password: {}", err);
                self.update(|view| {
                    view.saving = false;
                    view.notice = Some(Notice::error("Failed to change password"));
                });
            }
        }
    }

    pub fn dismiss_notice(&self) {
        self.update(|view| view.notice = None);
    }

    /// Closes the notice `id` once its display time is over; a newer notice stays.
    pub fn expire_notice(&self, id: u64) {
        let current = self.state.borrow().notice.as_ref().map(|notice| notice.id);
        if current == Some(id) {
            self.update(|view| view.notice = None);
        }
    }

    async fn load_profile(&self) {
        self.update(|view| view.profile = Cache::Loading);
        match accessor::get_profile(&self.api).await {
            Ok(profile) => self.update(|view| {
                view.profile_form = ProfileForm::from_profile(&profile);
                view.profile = Cache::Fetched(profile);
            }),
            Err(err) => {
                tracing::error!("Failed to load profile: {}", err);
                self.update(|view| {
                    view.profile = Cache::Error("Failed to load profile".to_string());
                    view.notice = Some(Notice::error("Failed to load profile"));
                });
            }
        }
    }

    fn update(&self, change: impl FnOnce(&mut SettingsView)) {
        change(&mut self.state.borrow_mut());
        let listener = self.on_change.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}
