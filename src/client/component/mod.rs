pub mod copy_button;
pub mod data_table;
pub mod form_fields;
pub mod history_table;
pub mod layout;
pub mod modal;
pub mod notice;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod sidebar;

pub use copy_button::CopyButton;
pub use data_table::DataTable;
pub use form_fields::FormFields;
pub use history_table::HistoryTable;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use notice::NoticeToast;
pub use page::Page;
pub use pagination::Pagination;
pub use protected_layout::{ProtectedLayout, RequiresAccess};
pub use sidebar::Sidebar;
