use serde_json::json;
use test_utils::{factory, TOKEN_KEY, USER_KEY};

use crate::{
    client::model::{
        clipboard::copy_script,
        form::{join_list, split_list, FieldKind, FieldSpec, FormMode, FormState},
        history::{format_timestamp, history_rows, ChangeSummary, RECORD_CREATED, RECORD_DELETED},
        notice::{Notice, NoticeKind},
        permission::{
            locked_fields, visible_actions, Capabilities, PageAccess, RecordOwner, RowAction,
        },
        session::{Session, SessionUser},
        storage::{MemoryStorage, SessionStorage},
    },
    model::{history::HistoryEntryDto, role::Role},
};

mod debounce;
mod query;
