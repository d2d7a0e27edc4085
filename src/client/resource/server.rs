use crate::{
    client::{
        api::{gateway::ApiClient, transport::Transport},
        model::{
            form::{FieldKind, FieldSpec},
            permission::{Capabilities, PageAccess},
        },
        resource::{Cell, DetailField, DetailSource, Resource},
    },
    model::server::{group_label, ServerDto, SERVER_STATUSES},
};

const DEFAULT_SSH_USERNAME: &str = "root";
const DEFAULT_SSH_PORT: i64 = 22;

pub struct Servers;

impl Resource for Servers {
    type Record = ServerDto;
    type Row = ServerDto;

    const ENDPOINT: &'static str = "/servers";
    const SINGULAR: &'static str = "server";
    const PLURAL: &'static str = "servers";
    const TITLE: &'static str = "Servers";
    const HEADERS: &'static [&'static str] = &[
        "OS",
        "ID",
        "IP Address",
        "Additional IPs",
        "Comments",
        "Hoster",
        "Status",
        "Group",
        "Project",
        "Country",
    ];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("os", "OS", FieldKind::Text),
        FieldSpec::new("ip_address", "IP Address", FieldKind::Text).required(),
        FieldSpec::new("additional_ips", "Additional IPs", FieldKind::Text),
        FieldSpec::new("comments", "Comments", FieldKind::Text),
        FieldSpec::new("hoster", "Hoster", FieldKind::Text),
        FieldSpec::new("status", "Status", FieldKind::Choice(SERVER_STATUSES)),
        FieldSpec::new("group_id", "Group ID", FieldKind::Integer),
        FieldSpec::new("project", "Project", FieldKind::Text),
        FieldSpec::new("country", "Country", FieldKind::Text),
        FieldSpec::new("ssh_username", "SSH Username", FieldKind::Text),
        FieldSpec::new("ssh_password", "SSH Password", FieldKind::Secret),
        FieldSpec::new("ssh_port", "SSH Port", FieldKind::Integer),
        FieldSpec::new("container_password", "Container Password", FieldKind::Secret),
    ];
    const CAPABILITIES: Capabilities = Capabilities {
        history: true,
        details: true,
        delete: false,
    };
    const DETAIL_SOURCE: DetailSource = DetailSource::Remote;
    const ACCESS: PageAccess = PageAccess::Anyone;

    fn id(record: &ServerDto) -> i64 {
        record.id
    }

    fn record(row: &ServerDto) -> &ServerDto {
        row
    }

    fn cells(server: &ServerDto) -> Vec<Cell> {
        vec![
            Cell::optional(server.os.as_deref()),
            Cell::Strong(server.id.to_string()),
            Cell::text(&server.ip_address),
            Cell::optional(server.additional_ips.as_deref()),
            Cell::optional(server.comments.as_deref()),
            Cell::optional(server.hoster.as_deref()),
            Cell::badge(server.status.label(), server.status.badge()),
            Cell::text(group_label(server.group_id)),
            Cell::optional(server.project.as_deref()),
            Cell::optional(server.country.as_deref()),
        ]
    }

    fn details(server: &ServerDto) -> Vec<DetailField> {
        let ssh_username = server
            .ssh_username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_SSH_USERNAME);

        vec![
            DetailField::copyable("SSH Username", ssh_username),
            DetailField::secret("SSH Password", server.ssh_password.clone().unwrap_or_default()),
            DetailField::secret(
                "Container Password",
                server.container_password.clone().unwrap_or_default(),
            ),
            DetailField::text(
                "SSH Port",
                server.ssh_port.unwrap_or(DEFAULT_SSH_PORT).to_string(),
            ),
            DetailField::copyable("IP Address", server.ip_address.clone()),
        ]
    }

    async fn enrich<T: Transport>(_api: &ApiClient<T>, records: Vec<ServerDto>) -> Vec<ServerDto> {
        records
    }
}
