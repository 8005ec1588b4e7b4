use portalist::api::models::{Folder, Module};
use portalist::icons::IconService;
use portalist::session::CanEdit;
use portalist::theme::Theme;
use portalist::ui::components::module_manager_component::ModuleManagerComponent;
use portalist::ui::core::{actions::Action, Component};

fn folder(id: i64, name: &str) -> Folder {
    Folder {
        id,
        name: name.to_string(),
        class_id: 1,
    }
}

fn module(id: i64, title: &str, folder_id: Option<i64>) -> Module {
    Module {
        id,
        title: title.to_string(),
        description: None,
        url: None,
        folder_id,
        class_id: 1,
    }
}

fn manager_with_data() -> ModuleManagerComponent {
    let mut manager = ModuleManagerComponent::new();
    manager.update_data(
        vec![folder(7, "Week 1"), folder(8, "Week 2")],
        vec![
            module(1, "Intro slides", Some(7)),
            module(2, "Lab sheet", Some(7)),
            module(3, "Follow-up reading", Some(8)),
            module(4, "Syllabus", None),
        ],
        CanEdit::No,
        IconService::default(),
        Theme::Light.palette(),
    );
    manager
}

#[test]
fn test_selection_flows_to_module_list_in_order() {
    let mut manager = manager_with_data();

    // Selecting folder 7 then clearing: the module list sees the filter
    // values Some(7) then None, in that order
    manager.select_folder(Some(7));
    assert_eq!(manager.selected_folder_id(), Some(7));
    assert_eq!(manager.module_list().folder_filter(), Some(7));

    manager.select_folder(None);
    assert_eq!(manager.selected_folder_id(), None);
    assert_eq!(manager.module_list().folder_filter(), None);
}

#[test]
fn test_filter_restricts_visible_modules() {
    let mut manager = manager_with_data();

    // Unfiltered: every module is visible
    assert_eq!(manager.module_list().visible_modules().len(), 4);

    manager.select_folder(Some(7));
    let visible: Vec<i64> = manager
        .module_list()
        .visible_modules()
        .iter()
        .map(|module| module.id)
        .collect();
    assert_eq!(visible, vec![1, 2]);

    manager.select_folder(Some(8));
    assert_eq!(manager.module_list().visible_modules().len(), 1);
}

#[test]
fn test_select_folder_action_updates_lifted_state() {
    let mut manager = manager_with_data();

    // The action passes through so the app can observe it
    let result = manager.update(Action::SelectFolder(Some(8)));
    assert!(matches!(result, Action::SelectFolder(Some(8))));
    assert_eq!(manager.selected_folder_id(), Some(8));
    assert_eq!(manager.module_list().folder_filter(), Some(8));
}

#[test]
fn test_at_most_one_folder_selected() {
    let mut manager = manager_with_data();

    manager.select_folder(Some(7));
    manager.select_folder(Some(8));
    assert_eq!(manager.selected_folder_id(), Some(8));
    assert_eq!(manager.module_list().folder_filter(), Some(8));
}
