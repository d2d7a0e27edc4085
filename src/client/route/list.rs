//! Shared list page used by every inventory entity.

use std::future::Future;

use dioxus::prelude::*;

use crate::client::{
    api::AppTransport,
    app::{AppSleep, Services},
    component::{
        ConfirmationModal, CopyButton, DataTable, FormFields, HistoryTable, Modal, NoticeToast,
        Page, Pagination,
    },
    constant::SITE_NAME,
    controller::{ListController, ModalView},
    model::permission::RowAction,
    resource::{capitalized, Resource},
};

type Controller<R> = ListController<R, AppTransport>;

/// Creates the page's controller once, re-renders on every change and starts the
/// first load.
pub fn use_list_controller<R: Resource>() -> Controller<R> {
    let services = use_context::<Services>();
    let revision = use_signal(|| 0u64);

    let controller = use_hook(|| {
        let controller = Controller::<R>::new(services.api.clone(), &services.config);
        controller.set_on_change(move || {
            let mut revision = revision;
            revision += 1;
        });

        let loader = controller.clone();
        spawn(async move { loader.load().await });

        controller
    });

    // Subscribes this component to controller changes.
    let _ = revision();

    controller
}

fn launch<R, F, Fut>(controller: &Controller<R>, action: F)
where
    R: Resource,
    F: FnOnce(Controller<R>) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    spawn(action(controller.clone()));
}

pub fn list_page<R: Resource>(controller: Controller<R>) -> Element {
    let view = controller.view();
    let table = controller.table();
    let page_size = view.query.page_size();
    let page_title = format!("{} | {}", R::TITLE, SITE_NAME);
    let add_label = format!("Add {}", capitalized(R::SINGULAR));

    let on_search = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            let text = evt.value();
            launch(&controller, |c| async move {
                c.search(text, &AppSleep::default()).await
            });
        }
    };
    let on_add = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.show_add_modal()
    };
    let on_action = {
        let controller = controller.clone();
        move |(action, id): (RowAction, i64)| match action {
            RowAction::Edit => launch(&controller, |c| async move { c.show_update_modal(id).await }),
            RowAction::Details => {
                launch(&controller, |c| async move { c.show_details_modal(id).await })
            }
            RowAction::History => {
                launch(&controller, |c| async move { c.show_history_modal(id).await })
            }
            RowAction::Delete => controller.confirm_delete(id),
        }
    };
    let on_page_change = {
        let controller = controller.clone();
        move |page: u64| launch(&controller, |c| async move { c.change_page(page).await })
    };
    let on_page_size_change = {
        let controller = controller.clone();
        move |size: u64| launch(&controller, |c| async move { c.set_page_size(size).await })
    };
    let on_dismiss = {
        let controller = controller.clone();
        move |_: ()| controller.dismiss_notice()
    };
    let on_expire = {
        let controller = controller.clone();
        move |id: u64| controller.expire_notice(id)
    };

    rsx! {
        document::Title { "{page_title}" }
        Page {
            div {
                class: "page-header",
                h1 { {R::TITLE} }
                input {
                    r#type: "search",
                    placeholder: "Search...",
                    value: "{view.search_text}",
                    oninput: on_search,
                }
                button {
                    class: "btn btn-primary",
                    onclick: on_add,
                    "{add_label}"
                }
            }
            DataTable { table: table.clone(), on_action }
            Pagination {
                pagination: table.pagination,
                page_size,
                on_page_change,
                on_page_size_change,
            }
        }
        {render_modal(&controller, view.modal)}
        NoticeToast { notice: view.notice, on_dismiss, on_expire }
    }
}

fn render_modal<R: Resource>(controller: &Controller<R>, modal: ModalView) -> Element {
    let on_close = {
        let controller = controller.clone();
        move |_: ()| controller.close_modal()
    };

    match modal {
        ModalView::Closed => rsx! {},
        ModalView::Form {
            title,
            form,
            submitting,
        } => {
            let on_input = {
                let controller = controller.clone();
                move |(name, value): (&'static str, String)| controller.set_field(name, value)
            };
            let on_submit = {
                let controller = controller.clone();
                move |_: ()| launch(&controller, |c| async move { c.submit().await })
            };

            rsx! {
                Modal {
                    open: true,
                    title,
                    prevent_close: submitting,
                    on_close: on_close.clone(),
                    FormFields {
                        fields: form.fields(),
                        error: form.error.clone(),
                        submitting,
                        on_input,
                        on_submit,
                        on_cancel: on_close,
                    }
                }
            }
        }
        ModalView::History { title, entries } => rsx! {
            Modal {
                open: true,
                title,
                prevent_close: false,
                on_close,
                class: "modal-wide",
                HistoryTable { entries }
            }
        },
        ModalView::Details { title, fields } => rsx! {
            Modal {
                open: true,
                title,
                prevent_close: false,
                on_close,
                dl {
                    class: "details",
                    for field in fields {
                        dt { {field.label} }
                        dd {
                            span { {field.display()} }
                            if field.copyable && !field.value.is_empty() {
                                CopyButton { text: field.value.clone() }
                            }
                        }
                    }
                }
            }
        },
        ModalView::ConfirmDelete {
            id,
            message,
            deleting,
        } => {
            let on_confirm = {
                let controller = controller.clone();
                move |_: ()| launch(&controller, |c| async move { c.delete(id).await })
            };

            rsx! {
                ConfirmationModal {
                    open: true,
                    title: format!("Delete {}", capitalized(R::SINGULAR)),
                    message,
                    confirm_text: "Delete".to_string(),
                    is_processing: deleting,
                    processing_text: "Deleting...".to_string(),
                    on_confirm,
                    on_cancel: on_close,
                }
            }
        }
    }
}
