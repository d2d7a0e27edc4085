use std::{cell::RefCell, marker::PhantomData, rc::Rc, time::Duration};

use dioxus_logger::tracing;

use crate::client::{
    api::{gateway::ApiClient, resource as accessor, transport::Transport},
    config::Config,
    model::{
        cache::Cache,
        debounce::{Debouncer, Sleep},
        error::ClientError,
        form::{FormMode, FormState},
        history::{history_rows, HistoryRow},
        notice::Notice,
        permission::{locked_fields, visible_actions, RowAction},
        query::{PageQuery, PaginationView},
    },
    resource::{capitalized, Cell, DetailField, DetailSource, Resource},
};

/// The dialog currently open over a list page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalView {
    #[default]
    Closed,
    Form {
        title: String,
        form: FormState,
        submitting: bool,
    },
    History {
        title: String,
        entries: Cache<Vec<HistoryRow>>,
    },
    Details {
        title: String,
        fields: Vec<DetailField>,
    },
    ConfirmDelete {
        id: i64,
        message: String,
        deleting: bool,
    },
}

/// Snapshot of one list page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListView<Row> {
    pub rows: Cache<Vec<Row>>,
    pub query: PageQuery,
    /// What the search box shows; may run ahead of `query` while debouncing.
    pub search_text: String,
    pub modal: ModalView,
    pub notice: Option<Notice>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRowView {
    pub id: i64,
    pub cells: Vec<Cell>,
    pub actions: Vec<RowAction>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableBody {
    /// One placeholder row spanning every column.
    Loading,
    Error(String),
    Empty(String),
    Rows(Vec<TableRowView>),
}

/// Render-ready table, independent of the entity type.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub headers: &'static [&'static str],
    pub body: TableBody,
    pub pagination: PaginationView,
}

struct ListState<Row> {
    view: ListView<Row>,
    sequence: u64,
    /// Bumped whenever the dialog is replaced; dialog requests carry the value
    /// they started under.
    modal_sequence: u64,
    debouncer: Debouncer<String>,
}

impl<Row> ListState<Row> {
    fn replace_modal(&mut self, modal: ModalView) -> u64 {
        self.modal_sequence += 1;
        self.view.modal = modal;
        self.modal_sequence
    }
}

/// Drives one list page: loading, searching, paging and the create/update,
/// history, details and delete dialogs.
///
/// All state sits behind one `RefCell` and no borrow is held across an await.
/// Loads and dialog requests are tagged with sequence numbers so a slow
/// response can never overwrite a newer one.
pub struct ListController<R: Resource, T> {
    api: ApiClient<T>,
    state: Rc<RefCell<ListState<R::Row>>>,
    search_debounce: Duration,
    on_change: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
    resource: PhantomData<R>,
}

impl<R: Resource, T> Clone for ListController<R, T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: Rc::clone(&self.state),
            search_debounce: self.search_debounce,
            on_change: Rc::clone(&self.on_change),
            resource: PhantomData,
        }
    }
}

impl<R: Resource, T> PartialEq for ListController<R, T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl<R: Resource, T: Transport> ListController<R, T> {
    pub fn new(api: ApiClient<T>, config: &Config) -> Self {
        Self {
            api,
            state: Rc::new(RefCell::new(ListState {
                view: ListView {
                    rows: Cache::NotFetched,
                    query: PageQuery::new(config.page_size),
                    search_text: String::new(),
                    modal: ModalView::Closed,
                    notice: None,
                },
                sequence: 0,
                modal_sequence: 0,
                debouncer: Debouncer::new(),
            })),
            search_debounce: config.search_debounce,
            on_change: Rc::new(RefCell::new(None)),
            resource: PhantomData,
        }
    }

    /// Registers the callback run after every state change; the page uses it to
    /// re-render.
    pub fn set_on_change(&self, listener: impl Fn() + 'static) {
        *self.on_change.borrow_mut() = Some(Rc::new(listener));
    }

    pub fn view(&self) -> ListView<R::Row> {
        self.state.borrow().view.clone()
    }

    pub fn table(&self) -> TableView {
        let state = self.state.borrow();
        let body = match &state.view.rows {
            Cache::NotFetched | Cache::Loading => TableBody::Loading,
            Cache::Error(message) => TableBody::Error(message.clone()),
            Cache::Fetched(rows) if rows.is_empty() => {
                TableBody::Empty(format!("No {} found", R::PLURAL))
            }
            Cache::Fetched(rows) => TableBody::Rows(
                rows.iter()
                    .map(|row| TableRowView {
                        id: R::id(R::record(row)),
                        cells: R::cells(row),
                        actions: self.actions_for(row),
                    })
                    .collect(),
            ),
        };

        TableView {
            headers: R::HEADERS,
            body,
            pagination: PaginationView::from(&state.view.query),
        }
    }

    /// Row actions for the current user; none without a session.
    pub fn actions_for(&self, row: &R::Row) -> Vec<RowAction> {
        match self.api.session().user() {
            Some(actor) => visible_actions(R::CAPABILITIES, &actor, R::owner(R::record(row))),
            None => Vec::new(),
        }
    }

    /// Marks the table as loading and hands out the sequence number for this load.
    pub fn begin_load(&self) -> (u64, PageQuery) {
        let ticket = {
            let mut state = self.state.borrow_mut();
            state.sequence += 1;
            state.view.rows = Cache::Loading;
            (state.sequence, state.view.query.clone())
        };
        self.notify();
        ticket
    }

    /// Applies a finished load unless a newer one has started since.
    ///
    /// # Returns
    /// - `true` - The result was applied
    /// - `false` - The load was superseded and its result dropped
    pub fn complete_load(&self, sequence: u64, result: Result<Vec<R::Row>, ClientError>) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if state.sequence != sequence {
                tracing::debug!("Dropping stale {} load #{}", R::PLURAL, sequence);
                return false;
            }

            match result {
                Ok(rows) => state.view.rows = Cache::Fetched(rows),
                Err(err) => {
                    tracing::error!("Failed to load {}: {}", R::PLURAL, err);
                    let message = format!("Failed to load {}", R::PLURAL);
                    state.view.rows = Cache::Error(message.clone());
                    state.view.notice = Some(Notice::error(message));
                }
            }
        }
        self.notify();
        true
    }

    pub async fn load(&self) {
        let (sequence, query) = self.begin_load();
        let result = match accessor::list::<R, T>(&self.api, &query).await {
            Ok(records) => Ok(R::enrich(&self.api, records).await),
            Err(err) => Err(err),
        };
        self.complete_load(sequence, result);
    }

    /// Records a keystroke and, once the quiet period passes without another,
    /// reloads from page 1 with the new search text.
    pub async fn search(&self, text: impl Into<String>, sleeper: &impl Sleep) {
        let text = text.into();
        let ticket = {
            let mut state = self.state.borrow_mut();
            state.view.search_text = text.clone();
            state.debouncer.schedule(text)
        };
        self.notify();

        sleeper.sleep(self.search_debounce).await;

        let latest = self.state.borrow_mut().debouncer.take(ticket);
        if let Some(search) = latest {
            self.state.borrow_mut().view.query.set_search(search);
            self.load().await;
        }
    }

    /// Moves to page `page` and reloads. Pages below 1 are ignored.
    pub async fn change_page(&self, page: u64) {
        let accepted = self.state.borrow_mut().view.query.set_page(page);
        if accepted {
            self.load().await;
        }
    }

    pub async fn set_page_size(&self, page_size: u64) {
        self.state.borrow_mut().view.query.set_page_size(page_size);
        self.load().await;
    }

    pub fn show_add_modal(&self) {
        self.set_modal(ModalView::Form {
            title: format!("Add {}", capitalized(R::SINGULAR)),
            form: FormState::blank(R::FIELDS),
            submitting: false,
        });
    }

    /// Opens the update form for `id`, filled from the page or from the backend.
    pub async fn show_update_modal(&self, id: i64) {
        let ticket = self.modal_ticket();
        let record = match R::DETAIL_SOURCE {
            DetailSource::PageCache => self.cached_record(id).ok_or_else(|| {
                ClientError::Request {
                    status: 404,
                    message: format!("{} not found", capitalized(R::SINGULAR)),
                }
            }),
            DetailSource::Remote => accessor::get::<R, T>(&self.api, id).await,
        };

        let form = record.and_then(|record| {
            let mut form = FormState::populate(R::FIELDS, id, &record)?;
            if let Some(actor) = self.api.session().user() {
                form.lock(&locked_fields(&actor, R::owner(&record)));
            }
            Ok(form)
        });

        match form {
            Ok(form) => {
                self.apply_modal(
                    ticket,
                    ModalView::Form {
                        title: format!("Update {}", capitalized(R::SINGULAR)),
                        form,
                        submitting: false,
                    },
                );
            }
            Err(err) if self.is_current_modal(ticket) => {
                self.fail(format!("Failed to load {}", R::SINGULAR), err)
            }
            Err(err) => tracing::debug!("Dropping stale {} {} lookup: {}", R::SINGULAR, id, err),
        }
    }

    pub async fn show_history_modal(&self, id: i64) {
        let title = format!("{} history", capitalized(R::SINGULAR));
        let ticket = self.set_modal(ModalView::History {
            title: title.clone(),
            entries: Cache::Loading,
        });

        let entries = match accessor::history::<R, T>(&self.api, id).await {
            Ok(entries) => Cache::Fetched(history_rows(&entries)),
            Err(err) => {
                tracing::error!("Failed to load history for {} {}: {}", R::SINGULAR, id, err);
                Cache::Error("Failed to load history".to_string())
            }
        };

        self.apply_modal(ticket, ModalView::History { title, entries });
    }

    pub async fn show_details_modal(&self, id: i64) {
        let ticket = self.modal_ticket();
        match accessor::get::<R, T>(&self.api, id).await {
            Ok(record) => {
                self.apply_modal(
                    ticket,
                    ModalView::Details {
                        title: format!("{} details", capitalized(R::SINGULAR)),
                        fields: R::details(&record),
                    },
                );
            }
            Err(err) if self.is_current_modal(ticket) => {
                self.fail(format!("Failed to load {} details", R::SINGULAR), err)
            }
            Err(err) => tracing::debug!("Dropping stale {} {} details: {}", R::SINGULAR, id, err),
        }
    }

    pub fn close_modal(&self) {
        self.set_modal(ModalView::Closed);
    }

    /// Edits a field of the open form; ignored when no form is open.
    pub fn set_field(&self, name: &str, value: impl Into<String>) {
        {
            let mut state = self.state.borrow_mut();
            let ModalView::Form { form, .. } = &mut state.view.modal else {
                return;
            };
            form.set(name, value);
        }
        self.notify();
    }

    /// Validates and sends the open form, then refreshes the list.
    ///
    /// Validation and backend errors stay on the form; on success the dialog
    /// closes and a notice is raised.
    pub async fn submit(&self) {
        let prepared = {
            let mut state = self.state.borrow_mut();
            let ModalView::Form {
                form, submitting, ..
            } = &mut state.view.modal
            else {
                return;
            };
            if *submitting {
                return;
            }

            match form.to_payload() {
                Ok(payload) => {
                    *submitting = true;
                    Some((form.mode, payload))
                }
                Err(err) => {
                    form.error = Some(err.to_string());
                    None
                }
            }
        };
        self.notify();

        let Some((mode, payload)) = prepared else {
            return;
        };

        let (result, verb) = match mode {
            FormMode::Create => (
                accessor::create::<R, T>(&self.api, &payload).await,
                "created",
            ),
            FormMode::Update(id) => (
                accessor::update::<R, T>(&self.api, id, &payload).await,
                "updated",
            ),
        };

        match result {
            Ok(_) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.replace_modal(ModalView::Closed);
                    state.view.notice = Some(Notice::success(format!(
                        "{} {} successfully",
                        capitalized(R::SINGULAR),
                        verb
                    )));
                }
                self.load().await;
            }
            Err(err) => {
                tracing::error!("Failed to save {}: {}", R::SINGULAR, err);
                {
                    let mut state = self.state.borrow_mut();
                    if let ModalView::Form {
                        form, submitting, ..
                    } = &mut state.view.modal
                    {
                        *submitting = false;
                        form.error = Some(err.to_string());
                    }
                }
                self.notify();
            }
        }
    }

    /// Asks for confirmation before deleting `id`.
    pub fn confirm_delete(&self, id: i64) {
        self.set_modal(ModalView::ConfirmDelete {
            id,
            message: format!("Are you sure you want to delete this {}?", R::SINGULAR),
            deleting: false,
        });
    }

    pub async fn delete(&self, id: i64) {
        {
            let mut state = self.state.borrow_mut();
            if let ModalView::ConfirmDelete { deleting, .. } = &mut state.view.modal {
                *deleting = true;
            }
        }
        self.notify();

        match accessor::delete::<R, T>(&self.api, id).await {
            Ok(()) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.replace_modal(ModalView::Closed);
                    state.view.notice = Some(Notice::success(format!(
                        "{} deleted successfully",
                        capitalized(R::SINGULAR)
                    )));
                }
                self.load().await;
            }
            Err(err) => {
                self.state.borrow_mut().replace_modal(ModalView::Closed);
                self.fail(format!("Failed to delete {}", R::SINGULAR), err);
            }
        }
    }

    pub fn dismiss_notice(&self) {
        self.state.borrow_mut().view.notice = None;
        self.notify();
    }

    /// Closes the notice `id` once its display time is over; a newer notice stays.
    pub fn expire_notice(&self, id: u64) {
        {
            let mut state = self.state.borrow_mut();
            if state.view.notice.as_ref().map(|notice| notice.id) != Some(id) {
                return;
            }
            state.view.notice = None;
        }
        self.notify();
    }

    fn cached_record(&self, id: i64) -> Option<R::Record> {
        self.state.borrow().view.rows.data().and_then(|rows| {
            rows.iter()
                .map(R::record)
                .find(|record| R::id(record) == id)
                .cloned()
        })
    }

    fn set_modal(&self, modal: ModalView) -> u64 {
        let ticket = self.state.borrow_mut().replace_modal(modal);
        self.notify();
        ticket
    }

    /// Starts a dialog request without changing what is shown.
    fn modal_ticket(&self) -> u64 {
        let mut state = self.state.borrow_mut();
        state.modal_sequence += 1;
        state.modal_sequence
    }

    fn is_current_modal(&self, ticket: u64) -> bool {
        self.state.borrow().modal_sequence == ticket
    }

    /// Shows the result of a dialog request unless another dialog was opened, or
    /// this one closed, since the request started.
    fn apply_modal(&self, ticket: u64, modal: ModalView) -> bool {
        {
            let mut state = self.state.borrow_mut();
            if state.modal_sequence != ticket {
                tracing::debug!("Dropping stale {} dialog #{}", R::SINGULAR, ticket);
                return false;
            }
            state.view.modal = modal;
        }
        self.notify();
        true
    }

    fn fail(&self, message: String, err: ClientError) {
        tracing::error!("{}: {}", message, err);
        let message = match err {
            ClientError::Request { message: detail, .. } => format!("{}: {}", message, detail),
            _ => message,
        };
        self.state.borrow_mut().view.notice = Some(Notice::error(message));
        self.notify();
    }

    fn notify(&self) {
        let listener = self.on_change.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}
