use crate::{Project, ProjectStep};

use googletest::prelude::*;

#[test]
fn test_project_new() {
    let project = Project::new("My Project", "Does things");

    assert_that!(project.name, eq("My Project"));
    assert_that!(project.description, eq("Does things"));
    assert_that!(project.steps, is_empty());
    assert!(!project.id.is_empty());
}

#[test]
fn test_project_new_assigns_distinct_ids() {
    let a = Project::new("A", "");
    let b = Project::new("A", "");

    assert_ne!(a.id, b.id);
}

#[test]
fn test_project_step_new() {
    let step = ProjectStep::new("project-1", 7, "Write tests");

    assert_that!(step.project_id, eq("project-1"));
    assert_that!(step.step_number, eq(7));
    assert_that!(step.description, eq("Write tests"));
    assert!(!step.id.is_empty());
}

#[test]
fn given_project_with_steps_when_serialized_then_uses_pascal_case_fields() {
    // Given
    let mut project = Project::new("Name", "Desc");
    project.id = "p1".to_string();
    let mut step = ProjectStep::new("p1", 1, "First");
    step.id = "s1".to_string();
    let project = project.with_steps(vec![step]);

    // When
    let json = serde_json::to_value(&project).unwrap();

    // Then
    assert_that!(json["Name"].as_str(), some(eq("Name")));
    assert_that!(json["Description"].as_str(), some(eq("Desc")));
    assert_that!(json["Id"].as_str(), some(eq("p1")));
    assert_that!(json["Steps"][0]["Id"].as_str(), some(eq("s1")));
    assert_that!(json["Steps"][0]["ProjectId"].as_str(), some(eq("p1")));
    assert_that!(json["Steps"][0]["StepNumber"].as_i64(), some(eq(1)));
    assert_that!(json["Steps"][0]["Description"].as_str(), some(eq("First")));
}

#[test]
fn given_project_when_serialized_then_has_no_with_edit_row_field() {
    let project = Project::new("Name", "Desc");

    let json = serde_json::to_string(&project).unwrap();

    assert!(!json.contains("WithEditRow"));
}

#[test]
fn given_null_steps_when_deserialized_then_steps_are_empty() {
    let json = r#"{"Name":"N","Description":"D","Id":"x","Steps":null,"WithEditRow":false}"#;

    let project: Project = serde_json::from_str(json).unwrap();

    assert_that!(project.id, eq("x"));
    assert_that!(project.steps, is_empty());
}

#[test]
fn given_missing_fields_when_deserialized_then_defaults_apply() {
    let json = r#"{"Id":"only-id","Steps":[{"Description":"loose"}]}"#;

    let project: Project = serde_json::from_str(json).unwrap();

    assert_that!(project.name, eq(""));
    assert_that!(project.description, eq(""));
    assert_that!(project.steps.len(), eq(1));
    assert_that!(project.steps[0].step_number, eq(0));
    assert_that!(project.steps[0].description, eq("loose"));
}
