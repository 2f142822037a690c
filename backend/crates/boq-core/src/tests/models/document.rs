use crate::{
    ACTIVITY_LOG_CAPACITY, ActivityEntry, CreateMember, CreateProject, CreateTask, Document,
    DocumentPatch, Member, Project, Task, ViewMode, push_activity,
};

use googletest::prelude::*;

fn project(name: &str) -> Project {
    Project::new(CreateProject {
        name: name.to_string(),
        description: String::new(),
        start_date: None,
    })
}

#[test]
fn given_patch_with_one_field_when_merged_then_other_fields_kept() {
    let member = Member::new(CreateMember {
        name: "Somchai".to_string(),
        role: "Engineer".to_string(),
        email: "somchai@example.com".to_string(),
    });
    let mut document = Document {
        projects: vec![project("A")],
        members: vec![member.clone()],
        activities: Vec::new(),
    };

    document.merge(DocumentPatch::default().with_projects(vec![project("B"), project("C")]));

    assert_that!(document.projects.len(), eq(2));
    assert_eq!(document.members, vec![member]);
}

#[test]
fn given_empty_patch_when_merged_then_document_unchanged() {
    let mut document = Document {
        projects: vec![project("A")],
        ..Default::default()
    };
    let before = document.clone();

    let patch = DocumentPatch::default();
    assert!(patch.is_empty());
    document.merge(patch);

    assert_eq!(document, before);
}

#[test]
fn given_patch_json_when_deserialized_then_absent_fields_are_none() {
    let patch: DocumentPatch = serde_json::from_str(r#"{"members": []}"#).unwrap();

    assert_eq!(patch.members, Some(Vec::<Member>::new()));
    assert!(patch.projects.is_none());
    assert!(patch.activities.is_none());
}

#[test]
fn given_task_with_empty_assignee_when_patch_deserialized_then_unassigned() {
    let json = r#"{"projects": [{
        "id": "0b6f8f2e-4c1a-4b7e-9a55-2f0d3c1e7a10",
        "name": "Tower A",
        "createdAt": "2024-01-15T08:00:00Z",
        "tasks": [
            {"id": "5a1d2c3b-6e7f-4a8b-9c0d-1e2f3a4b5c6d", "title": "Pour slab", "assignee": "", "columnId": "c1"},
            {"id": "7c8d9e0f-1a2b-4c3d-8e4f-5a6b7c8d9e0f", "title": "Rebar", "assignee": "6f1c1c56-8d43-4c59-9a36-0d7d4f1f0a11", "columnId": "c2"}
        ]
    }]}"#;

    let patch: DocumentPatch = serde_json::from_str(json).unwrap();
    let projects = patch.projects.unwrap();

    assert_that!(projects[0].tasks[0].assignee, none());
    assert_that!(projects[0].tasks[1].assignee, some(anything()));
}

#[test]
fn given_unassigned_task_when_serialized_then_assignee_is_empty_string() {
    let mut project = project("Tower A");
    project.tasks.push(Task::new(
        CreateTask {
            title: "Pour slab".to_string(),
            assignee: None,
        },
        "c1".to_string(),
    ));

    let json = serde_json::to_value(&project).unwrap();

    assert_that!(json["tasks"][0]["assignee"].as_str(), some(eq("")));
}

#[test]
fn given_full_log_when_pushing_then_capped_and_newest_first() {
    let mut log = Vec::new();
    for i in 0..30 {
        log = push_activity(
            &log,
            ActivityEntry::new(format!("entry {i}"), ViewMode::Admin),
            ACTIVITY_LOG_CAPACITY,
        );
        assert!(log.len() <= ACTIVITY_LOG_CAPACITY);
    }

    assert_that!(log.len(), eq(ACTIVITY_LOG_CAPACITY));
    assert_that!(log[0].text.as_str(), eq("entry 29"));
    assert_that!(log[ACTIVITY_LOG_CAPACITY - 1].text.as_str(), eq("entry 10"));
}

#[test]
fn given_view_mode_when_logging_then_actor_label_follows_mode() {
    let admin = ActivityEntry::new("a", ViewMode::Admin);
    let site = ActivityEntry::new("b", ViewMode::Contractor);

    assert_that!(admin.actor.as_str(), eq("Admin"));
    assert_that!(site.actor.as_str(), eq("Site User"));

    let json = serde_json::to_value(&site).unwrap();
    assert_that!(json["user"].as_str(), some(eq("Site User")));
}
