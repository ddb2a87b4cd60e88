use crate::views::{PortViewModel, ProjectViewModel, to_context};

use tracker_core::ProjectRepository;

#[test]
fn given_page_view_model_then_selected_project_is_flattened_with_hint() {
    let repo = ProjectRepository::seeded();
    let selected = repo.get_project_by_index(0).unwrap();

    let context = to_context(&ProjectViewModel::page(repo.get_all_projects(), selected)).unwrap();

    assert_eq!(context["projects"].as_array().unwrap().len(), 1);
    assert_eq!(context["selected_project"]["Id"], selected.id.as_str());
    assert_eq!(context["selected_project"]["Name"], "TestProj1");
    assert_eq!(context["selected_project"]["WithEditRow"], false);
    assert_eq!(context["selected_project"]["Steps"].as_array().unwrap().len(), 2);
}

#[test]
fn given_fragment_view_model_then_hint_set_and_no_project_list() {
    let repo = ProjectRepository::seeded();
    let selected = repo.get_project_by_index(0).unwrap();

    let context = to_context(&ProjectViewModel::fragment(selected, true)).unwrap();

    assert_eq!(context["selected_project"]["WithEditRow"], true);
    assert!(context["projects"].as_array().unwrap().is_empty());
}

#[test]
fn given_render_hint_then_entity_export_stays_clean() {
    let repo = ProjectRepository::seeded();
    let selected = repo.get_project_by_index(0).unwrap();
    let _ = to_context(&ProjectViewModel::fragment(selected, true)).unwrap();

    assert!(!repo.export_json().unwrap().contains("WithEditRow"));
}

#[test]
fn test_port_view_models() {
    let export = to_context(&PortViewModel::export("[]".to_string())).unwrap();
    assert_eq!(export["page_title"], "Export Data");
    assert_eq!(export["display_submit"], false);
    assert_eq!(export["export_data"], "[]");

    let import = to_context(&PortViewModel::import()).unwrap();
    assert_eq!(import["page_title"], "Import Data");
    assert_eq!(import["display_submit"], true);
    assert_eq!(import["export_data"], "");
}
