use crate::{CoreError, Project, ProjectRepository, ProjectStep};

use googletest::prelude::*;

fn project_with_id(id: &str, name: &str) -> Project {
    let mut project = Project::new(name, format!("{name} description"));
    project.id = id.to_string();
    project
}

fn ids(repo: &ProjectRepository) -> Vec<String> {
    repo.get_all_projects().iter().map(|p| p.id.clone()).collect()
}

// =========================================================================
// Seeding
// =========================================================================

#[test]
fn given_seeded_repository_then_one_project_with_two_steps() {
    let repo = ProjectRepository::seeded();

    assert_that!(repo.get_all_projects(), len(eq(1)));
    let project = repo.get_project_by_index(0).unwrap();
    assert_that!(project.name, eq("TestProj1"));
    assert_that!(project.steps, len(eq(2)));
    assert_that!(project.steps[0].step_number, eq(1));
    assert_that!(project.steps[1].step_number, eq(2));
    assert_that!(project.steps[0].project_id, eq(&project.id));
    assert_that!(project.steps[1].project_id, eq(&project.id));
}

#[test]
fn given_new_repository_then_empty() {
    let repo = ProjectRepository::new();

    assert!(repo.is_empty());
    assert_that!(repo.len(), eq(0));
}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn given_added_project_when_found_by_id_then_unchanged() {
    // Given
    let mut repo = ProjectRepository::seeded();
    let project = Project::new("Second", "Another one");
    let expected = project.clone();

    // When
    repo.add_project(project);

    // Then
    let found = repo.get_project_by_id(&expected.id).unwrap();
    assert_that!(found, eq(&expected));
}

#[test]
fn given_unknown_id_when_found_by_id_then_not_found() {
    let repo = ProjectRepository::seeded();

    let result = repo.get_project_by_id("missing");

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
}

#[test]
fn given_index_past_end_when_found_by_index_then_out_of_range() {
    let repo = ProjectRepository::seeded();

    let result = repo.get_project_by_index(1);

    match result {
        Err(CoreError::IndexOutOfRange { index, len, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(len, 1);
        }
        other => panic!("Expected IndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn given_empty_repository_when_found_by_index_zero_then_out_of_range() {
    let repo = ProjectRepository::new();

    assert!(matches!(
        repo.get_project_by_index(0),
        Err(CoreError::IndexOutOfRange { .. })
    ));
}

#[test]
fn given_projects_added_then_returned_in_insertion_order() {
    let mut repo = ProjectRepository::new();
    repo.add_project(project_with_id("a", "A"));
    repo.add_project(project_with_id("b", "B"));
    repo.add_project(project_with_id("c", "C"));

    assert_that!(ids(&repo), eq(&vec!["a".to_string(), "b".into(), "c".into()]));
}

// =========================================================================
// Removal
// =========================================================================

#[test]
fn given_two_projects_when_removing_one_then_other_remains() {
    // Given
    let mut repo = ProjectRepository::new();
    repo.add_project(project_with_id("a", "A"));
    repo.add_project(project_with_id("b", "B"));

    // When
    let removed = repo.remove_project("a");

    // Then
    assert!(removed);
    assert_that!(ids(&repo), eq(&vec!["b".to_string()]));
}

#[test]
fn given_single_project_when_removing_it_then_refused() {
    let mut repo = ProjectRepository::seeded();
    let only_id = repo.get_project_by_index(0).unwrap().id.clone();

    let removed = repo.remove_project(&only_id);

    assert!(!removed);
    assert_that!(ids(&repo), eq(&vec![only_id]));
}

#[test]
fn given_single_project_when_removing_other_id_then_noop() {
    let mut repo = ProjectRepository::seeded();
    let before = ids(&repo);

    let removed = repo.remove_project("not-there");

    assert!(!removed);
    assert_that!(ids(&repo), eq(&before));
}

#[test]
fn given_duplicate_ids_when_removing_then_all_matches_removed() {
    let mut repo = ProjectRepository::new();
    repo.add_project(project_with_id("a", "A"));
    repo.add_project(project_with_id("dup", "First"));
    repo.add_project(project_with_id("b", "B"));
    repo.add_project(project_with_id("dup", "Second"));

    repo.remove_project("dup");

    assert_that!(ids(&repo), eq(&vec!["a".to_string(), "b".into()]));
}

#[test]
fn given_unknown_id_with_many_projects_when_removing_then_nothing_changes() {
    let mut repo = ProjectRepository::new();
    repo.add_project(project_with_id("a", "A"));
    repo.add_project(project_with_id("b", "B"));

    let removed = repo.remove_project("zzz");

    assert!(!removed);
    assert_that!(repo.len(), eq(2));
}

// =========================================================================
// Description
// =========================================================================

#[test]
fn given_known_id_when_setting_description_then_updated() {
    let mut repo = ProjectRepository::seeded();
    let id = repo.get_project_by_index(0).unwrap().id.clone();

    repo.set_project_description(&id, "new text");

    assert_that!(repo.get_project_by_id(&id).unwrap().description, eq("new text"));
}

#[test]
fn given_unknown_id_when_setting_description_then_nothing_changes() {
    let mut repo = ProjectRepository::seeded();
    repo.add_project(project_with_id("b", "B"));
    let before: Vec<String> = repo
        .get_all_projects()
        .iter()
        .map(|p| p.description.clone())
        .collect();

    repo.set_project_description("unknown", "x");

    let after: Vec<String> = repo
        .get_all_projects()
        .iter()
        .map(|p| p.description.clone())
        .collect();
    assert_that!(after, eq(&before));
}

// =========================================================================
// Steps
// =========================================================================

#[test]
fn given_known_project_when_adding_step_then_appended_last() {
    // Given
    let mut repo = ProjectRepository::seeded();
    let id = repo.get_project_by_index(0).unwrap().id.clone();
    let step = ProjectStep::new(&id, 99, "Last one");
    let step_id = step.id.clone();

    // When
    let result = repo.add_step_to_project(&id, step);

    // Then
    assert!(result.unwrap());
    let steps = &repo.get_project_by_id(&id).unwrap().steps;
    assert_that!(steps, len(eq(3)));
    assert_that!(steps[2].id, eq(&step_id));
    assert_that!(steps[2].step_number, eq(99));
}

#[test]
fn given_unknown_project_when_adding_step_then_not_found_and_unchanged() {
    // Given
    let mut repo = ProjectRepository::seeded();
    let before = repo.get_all_projects().to_vec();

    // When
    let result = repo.add_step_to_project("unknown", ProjectStep::new("unknown", 1, "x"));

    // Then
    assert!(matches!(result, Err(CoreError::NotFound { .. })));
    assert_that!(repo.get_all_projects(), eq(&before[..]));
}

// =========================================================================
// Import / Export
// =========================================================================

#[test]
fn given_export_when_reimported_into_same_repository_then_nothing_added() {
    // Given
    let mut repo = ProjectRepository::seeded();
    repo.add_project(project_with_id("b", "B"));
    let exported = repo.export_json().unwrap();

    // When
    let result = repo.import_json(&exported).unwrap();

    // Then
    assert_that!(repo.len(), eq(2));
    assert_that!(result.projects.created, eq(0));
    assert_that!(result.projects.skipped, eq(2));
    assert_that!(result.steps.skipped, eq(2));
}

#[test]
fn given_export_when_imported_into_repository_with_same_base_then_zero_added() {
    // Given: a source repository with the base project plus one more
    let mut source = ProjectRepository::seeded();
    let base = source.get_project_by_index(0).unwrap().clone();
    let mut extra = project_with_id("extra", "Extra");
    extra.steps.push(ProjectStep::new("extra", 1, "Do it"));
    source.add_project(extra);

    // And: a fresh repository seeded only with the same base project
    let mut target = ProjectRepository::new();
    target.add_project(base.clone());
    target.add_project(source.get_project_by_id("extra").unwrap().clone());

    // When
    let result = target.import_json(&source.export_json().unwrap()).unwrap();

    // Then
    assert_that!(result.projects.created, eq(0));
    assert_that!(target.len(), eq(2));
    assert_that!(target.get_project_by_id(&base.id).unwrap().steps, len(eq(2)));
}

#[test]
fn given_export_when_imported_into_repository_without_those_ids_then_all_added() {
    // Given
    let mut source = ProjectRepository::seeded();
    let mut second = project_with_id("second", "Second");
    second.steps.push(ProjectStep::new("second", 5, "Five"));
    source.add_project(second);
    let exported = source.export_json().unwrap();
    let mut target = ProjectRepository::seeded();

    // When
    let result = target.import_json(&exported).unwrap();

    // Then
    assert_that!(target.len(), eq(3));
    assert_that!(result.projects.created, eq(2));
    assert_that!(result.steps.created, eq(3));
    for project in source.get_all_projects() {
        let imported = target.get_project_by_id(&project.id).unwrap();
        assert_that!(imported, eq(project));
    }
}

#[test]
fn given_imported_project_with_steps_then_each_step_lands_once() {
    let mut repo = ProjectRepository::seeded();
    let payload = r#"[{"Name":"N","Description":"D","Id":"new",
        "Steps":[{"Id":"s1","ProjectId":"new","StepNumber":1,"Description":"one"},
                 {"Id":"s2","ProjectId":"new","StepNumber":2,"Description":"two"}]}]"#;

    repo.import_json(payload).unwrap();

    let steps = &repo.get_project_by_id("new").unwrap().steps;
    assert_that!(steps, len(eq(2)));
    assert_that!(steps[0].id, eq("s1"));
    assert_that!(steps[1].id, eq("s2"));
}

#[test]
fn given_existing_id_in_payload_when_importing_then_not_merged() {
    let mut repo = ProjectRepository::new();
    repo.add_project(project_with_id("a", "Original"));
    repo.add_project(project_with_id("b", "B"));
    let payload = r#"[{"Name":"Replacement","Description":"changed","Id":"a","Steps":[
        {"Id":"s1","ProjectId":"a","StepNumber":1,"Description":"new step"}]}]"#;

    repo.import_json(payload).unwrap();

    let project = repo.get_project_by_id("a").unwrap();
    assert_that!(project.name, eq("Original"));
    assert_that!(project.steps, is_empty());
}

#[test]
fn given_malformed_json_when_importing_then_error_and_unchanged() {
    let mut repo = ProjectRepository::seeded();
    let before = repo.get_all_projects().to_vec();

    let result = repo.import_json("{not json");

    assert!(matches!(result, Err(CoreError::Json { .. })));
    assert_that!(repo.get_all_projects(), eq(&before[..]));
}

#[test]
fn given_wrong_shape_when_importing_then_error() {
    let mut repo = ProjectRepository::seeded();

    let result = repo.import_json(r#"{"Id":"not-an-array"}"#);

    assert!(matches!(result, Err(CoreError::Json { .. })));
}

#[test]
fn given_any_repository_when_exported_then_no_with_edit_row_field() {
    let mut repo = ProjectRepository::seeded();
    repo.add_project(Project::new("B", ""));

    let exported = repo.export_json().unwrap();

    assert!(!exported.contains("WithEditRow"));
}

// =========================================================================
// Scenario
// =========================================================================

#[test]
fn given_seeded_repository_when_creating_and_deleting_then_last_project_survives() {
    // Given: project A with 2 steps
    let mut repo = ProjectRepository::seeded();
    let a = repo.get_project_by_index(0).unwrap().id.clone();

    // When: project B is created
    let b = Project::new("B", "second");
    let b_id = b.id.clone();
    repo.add_project(b);

    // Then
    assert_that!(ids(&repo), eq(&vec![a.clone(), b_id.clone()]));

    // When: A is deleted
    repo.remove_project(&a);
    assert_that!(ids(&repo), eq(&vec![b_id.clone()]));

    // When: B is deleted
    repo.remove_project(&b_id);

    // Then: B is still there
    assert_that!(ids(&repo), eq(&vec![b_id]));
}
