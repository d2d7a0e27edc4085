use crate::{
    client::{
        api::{gateway::ApiClient, transport::Transport},
        model::{
            form::{join_list, FieldKind, FieldSpec},
            permission::{Capabilities, PageAccess},
        },
        resource::{Cell, DetailSource, Resource},
    },
    model::{
        domain::{DomainDto, DOMAIN_STATUSES},
        server::group_label,
    },
};

pub struct Domains;

fn records(values: &Option<Vec<String>>) -> Cell {
    match values {
        Some(values) if !values.is_empty() => Cell::text(join_list(values)),
        _ => Cell::text("-"),
    }
}

impl Resource for Domains {
    type Record = DomainDto;
    type Row = DomainDto;

    const ENDPOINT: &'static str = "/domains";
    const SINGULAR: &'static str = "domain";
    const PLURAL: &'static str = "domains";
    const TITLE: &'static str = "Domains";
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "Domain",
        "Group",
        "Status",
        "NS Records",
        "A Records",
        "AAAA Records",
    ];
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("domain_name", "Domain Name", FieldKind::Text).required(),
        FieldSpec::new("group_id", "Group ID", FieldKind::Integer),
        FieldSpec::new("status", "Status", FieldKind::Choice(DOMAIN_STATUSES)),
        FieldSpec::new("ns_records", "NS Records", FieldKind::List),
        FieldSpec::new("a_records", "A Records", FieldKind::List),
    ];
    const CAPABILITIES: Capabilities = Capabilities {
        history: true,
        details: false,
        delete: false,
    };
    const DETAIL_SOURCE: DetailSource = DetailSource::Remote;
    const ACCESS: PageAccess = PageAccess::Anyone;

    fn id(record: &DomainDto) -> i64 {
        record.id
    }

    fn record(row: &DomainDto) -> &DomainDto {
        row
    }

    fn cells(domain: &DomainDto) -> Vec<Cell> {
        vec![
            Cell::Strong(domain.id.to_string()),
            Cell::text(&domain.domain_name),
            Cell::text(group_label(domain.group_id)),
            Cell::status(&domain.status),
            records(&domain.ns_records),
            records(&domain.a_records),
            records(&domain.aaaa_records),
        ]
    }

    async fn enrich<T: Transport>(_api: &ApiClient<T>, records: Vec<DomainDto>) -> Vec<DomainDto> {
        records
    }
}
