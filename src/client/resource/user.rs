use crate::{
    client::{
        api::{gateway::ApiClient, transport::Transport},
        model::{
            form::{FieldKind, FieldSpec},
            permission::{Capabilities, PageAccess, RecordOwner},
        },
        resource::{Cell, DetailSource, Resource},
    },
    model::{
        role::{Role, ROLE_NAMES},
        user::{user_status_label, UserDto, USER_STATUSES},
    },
};

const MASKED_PASSWORD: &str = "••••••••";

pub struct Users;

impl Resource for Users {
    type Record = UserDto;
    type Row = UserDto;

    const ENDPOINT: &'static str = "/users";
    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";
    const TITLE: &'static str = "Users";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Username",
        "Role",
        "Password",
        "Email",
        "Last Login IP",
        "Phone",
        "Status",
    ];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("username", "Username", FieldKind::Text).required(),
        FieldSpec::new("email", "Email", FieldKind::Text).required(),
        FieldSpec::new("phone_number", "Phone", FieldKind::Text),
        FieldSpec::new("role", "Role", FieldKind::Choice(ROLE_NAMES)),
        FieldSpec::new("status", "Status", FieldKind::Choice(USER_STATUSES)),
        FieldSpec::new("allowed_ips", "Allowed IPs", FieldKind::List),
        FieldSpec::new("password", "Password", FieldKind::Secret).required_on_create(),
    ];
    const CAPABILITIES: Capabilities = Capabilities {
        history: false,
        details: false,
        delete: true,
    };
    const DETAIL_SOURCE: DetailSource = DetailSource::PageCache;
    const ACCESS: PageAccess = PageAccess::AtLeast(Role::Admin2L);

    fn id(record: &UserDto) -> i64 {
        record.id
    }

    fn record(row: &UserDto) -> &UserDto {
        row
    }

    fn owner(user: &UserDto) -> Option<RecordOwner<'_>> {
        Some(RecordOwner {
            id: user.id,
            username: &user.username,
            role: &user.role,
        })
    }

    fn cells(user: &UserDto) -> Vec<Cell> {
        vec![
            Cell::Strong(user.id.to_string()),
            Cell::text(&user.username),
            Cell::text(&user.role),
            Cell::text(MASKED_PASSWORD),
            Cell::text(&user.email),
            Cell::optional(user.last_login_ip.as_deref()),
            Cell::optional(user.phone_number.as_deref()),
            Cell::badge(
                user_status_label(&user.status),
                format!("status-{}", user.status),
            ),
        ]
    }

    async fn enrich<T: Transport>(_api: &ApiClient<T>, records: Vec<UserDto>) -> Vec<UserDto> {
        records
    }
}
