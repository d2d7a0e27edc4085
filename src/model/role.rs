use serde::{Deserialize, Serialize};

/// Panel roles, ordered from least to most privileged.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    #[serde(rename = "Service Manager")]
    ServiceManager,
    #[serde(rename = "Admin 1L")]
    Admin1L,
    #[serde(rename = "Admin 2L")]
    Admin2L,
    #[serde(rename = "Super Admin")]
    SuperAdmin,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::ServiceManager,
        Role::Admin1L,
        Role::Admin2L,
        Role::SuperAdmin,
    ];

    /// Name as the backend spells it.
    pub fn name(self) -> &'static str {
        match self {
            Role::ServiceManager => "Service Manager",
            Role::Admin1L => "Admin 1L",
            Role::Admin2L => "Admin 2L",
            Role::SuperAdmin => "Super Admin",
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.name() == name)
    }

    /// Position in the hierarchy, starting at 1.
    pub fn rank(self) -> u8 {
        match self {
            Role::ServiceManager => 1,
            Role::Admin1L => 2,
            Role::Admin2L => 3,
            Role::SuperAdmin => 4,
        }
    }

    /// Rank of a role name; names outside the hierarchy rank 0.
    pub fn rank_of(name: &str) -> u8 {
        Role::from_name(name).map(Role::rank).unwrap_or(0)
    }
}

/// Role names offered in user forms.
pub const ROLE_NAMES: &[&str] = &["Service Manager", "Admin 1L", "Admin 2L", "Super Admin"];
