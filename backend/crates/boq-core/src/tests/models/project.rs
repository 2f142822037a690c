use crate::{ColumnStage, CreateProject, Project};

use crate::tests::date;

#[test]
fn test_project_new_has_fixed_board() {
    let project = Project::new(CreateProject {
        name: "Warehouse".to_string(),
        description: "Steel frame".to_string(),
        start_date: Some(date(2024, 1, 15)),
    });

    assert_eq!(project.name, "Warehouse");
    assert_eq!(project.start_date, Some(date(2024, 1, 15)));
    assert!(project.tasks.is_empty());
    assert!(project.timeline.is_empty());

    let ids: Vec<&str> = project.columns.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3", "c4"]);
    let stages: Vec<ColumnStage> = project.columns.iter().map(|c| c.stage).collect();
    assert_eq!(stages, ColumnStage::ALL.to_vec());
    assert_eq!(project.first_column().unwrap().id, "c1");
}

#[test]
fn test_project_serializes_camel_case() {
    let project = Project::new(CreateProject {
        name: "Bridge".to_string(),
        description: String::new(),
        start_date: Some(date(2024, 3, 1)),
    });

    let json = serde_json::to_value(&project).unwrap();

    assert_eq!(json["startDate"], "2024-03-01");
    assert!(json.get("createdAt").is_some());
    assert_eq!(json["columns"][1]["id"], "c2");
}

#[test]
fn test_project_without_columns_gets_default_board() {
    let json = r#"{
        "id": "6f1c1d2e-9a1b-4c55-8d36-0f2f1b6b2d11",
        "name": "Legacy",
        "createdAt": "2024-01-01T00:00:00Z"
    }"#;

    let project: Project = serde_json::from_str(json).unwrap();

    assert_eq!(project.columns.len(), 4);
    assert_eq!(project.start_date, None);
    assert!(project.tasks.is_empty());
}
