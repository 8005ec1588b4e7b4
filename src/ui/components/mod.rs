//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod about_component;
pub mod folder_list_component;
pub mod module_list_component;
pub mod module_manager_component;
pub mod post_detail_component;
pub mod post_form_component;
pub mod post_list_component;
pub mod scrollbar_helper;
pub mod status_bar;

// Component exports
pub use about_component::AboutComponent;
pub use dialog_component::DialogComponent;
pub use module_manager_component::ModuleManagerComponent;
pub use post_detail_component::PostDetailComponent;
pub use post_form_component::PostFormComponent;
pub use post_list_component::PostListComponent;
pub use status_bar::StatusBar;
