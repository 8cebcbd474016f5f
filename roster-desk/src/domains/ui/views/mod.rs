pub mod confirm_dialog;
pub mod toast_overlay;
pub mod user_form;
pub mod user_table;

pub use confirm_dialog::view_confirm_dialog;
pub use toast_overlay::view_toast_overlay;
pub use user_form::view_user_form;
pub use user_table::view_user_table;
