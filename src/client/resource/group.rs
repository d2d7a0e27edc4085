use crate::{
    client::{
        api::{gateway::ApiClient, transport::Transport},
        model::{
            form::{join_list, FieldKind, FieldSpec},
            permission::{Capabilities, PageAccess},
        },
        resource::{Cell, DetailSource, Resource},
    },
    model::group::{GroupDto, GROUP_STATUSES},
};

pub struct Groups;

impl Resource for Groups {
    type Record = GroupDto;
    type Row = GroupDto;

    const ENDPOINT: &'static str = "/groups";
    const SINGULAR: &'static str = "group";
    const PLURAL: &'static str = "groups";
    const TITLE: &'static str = "Groups";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Title",
        "Projects",
        "Servers",
        "Status",
        "Description",
    ];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Title", FieldKind::Text).required(),
        FieldSpec::new("projects", "Projects", FieldKind::List),
        FieldSpec::new("status", "Status", FieldKind::Choice(GROUP_STATUSES)),
        FieldSpec::new("description", "Description", FieldKind::Text),
    ];
    const CAPABILITIES: Capabilities = Capabilities::EDIT_ONLY;
    const DETAIL_SOURCE: DetailSource = DetailSource::PageCache;
    const ACCESS: PageAccess = PageAccess::Anyone;

    fn id(record: &GroupDto) -> i64 {
        record.id
    }

    fn record(row: &GroupDto) -> &GroupDto {
        row
    }

    fn cells(group: &GroupDto) -> Vec<Cell> {
        let projects = if group.projects.is_empty() {
            "-".to_string()
        } else {
            join_list(&group.projects)
        };

        vec![
            Cell::Strong(group.id.to_string()),
            Cell::text(&group.title),
            Cell::text(projects),
            Cell::text(group.assigned_servers.to_string()),
            Cell::status(&group.status),
            Cell::optional(group.description.as_deref()),
        ]
    }

    async fn enrich<T: Transport>(_api: &ApiClient<T>, records: Vec<GroupDto>) -> Vec<GroupDto> {
        records
    }
}
