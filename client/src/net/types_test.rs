use serde_json::json;

use super::*;

// =============================================================
// Entities
// =============================================================

#[test]
fn participation_decodes_nested_entities() {
    let raw = json!({
        "participationId": 7,
        "semester": {"semesterId": 3, "name": "Spring 2025", "sdate": "2025-03-01", "edate": "2025-06-30", "isBreak": false},
        "group": {"groupId": 2, "groupName": "Genesis"},
        "person": {"personId": 42, "name": "Jane Doe"},
        "status": "ACTIVE",
        "participationDate": "2025-03-04",
        "weeklyRecord": {
            "recordId": 11, "weekNumber": 1, "service1": "O", "service2": null,
            "summary1": true, "summary2": null, "qt": 5, "reading": 3, "pray": 7,
            "memorize": 1, "submittedDate": "2025-03-08"
        }
    });

    let participation: Participation = serde_json::from_value(raw).unwrap();

    assert_eq!(participation.participation_id, Some(7));
    assert_eq!(participation.semester.as_ref().unwrap().name, "Spring 2025");
    assert_eq!(participation.group.as_ref().unwrap().group_name, "Genesis");
    assert_eq!(participation.person.as_ref().unwrap().person_id, Some(42));
    let record = participation.weekly_record.unwrap();
    assert!(record.summary1);
    assert!(!record.summary2);
    assert_eq!(record.service2, None);
    assert_eq!(record.qt, Some(5));
}

#[test]
fn draft_entity_omits_missing_id() {
    let draft = Group { group_id: None, group_name: "Exodus".to_owned() };
    assert_eq!(serde_json::to_value(&draft).unwrap(), json!({"groupName": "Exodus"}));

    let book = Book { book_id: Some(4), title: "Confessions".to_owned(), author: None, description: None };
    let value = serde_json::to_value(&book).unwrap();
    assert_eq!(value["bookId"], 4);
    assert_eq!(value["author"], serde_json::Value::Null);
}

#[test]
fn ids_accept_numeric_strings() {
    let person: Person = serde_json::from_value(json!({"personId": "42", "name": "Jane Doe"})).unwrap();
    assert_eq!(person.person_id, Some(42));

    let err = serde_json::from_value::<Person>(json!({"personId": "abc", "name": "x"}));
    assert!(err.is_err());
}

#[test]
fn admin_list_survives_unrecognised_role() {
    let admins: Vec<AdminAccount> = serde_json::from_value(json!([
        {"id": 1, "username": "root", "name": "Root Admin", "type": "superadmin"},
        {"id": 2, "username": "ed", "name": "Editor", "type": "editor"}
    ]))
    .unwrap();
    assert_eq!(admins[1].role, AdminRole::Viewer);
}

#[test]
fn admin_account_reads_type_and_legacy_delete_flag() {
    let admin: AdminAccount = serde_json::from_value(json!({
        "id": 1, "username": "root", "name": "Root Admin", "type": "superadmin", "is_delete": true
    }))
    .unwrap();
    assert_eq!(admin.role, AdminRole::Superadmin);
    assert!(admin.is_delete);

    let body = serde_json::to_value(&admin).unwrap();
    assert_eq!(body["type"], "superadmin");
    assert!(body.get("isDelete").is_none());
    assert!(body.get("password").is_none());
}

// =============================================================
// Paging
// =============================================================

#[test]
fn page_envelope_reports_last_page() {
    let page: Page<Group> = serde_json::from_value(json!({
        "content": [{"groupId": 1, "groupName": "A"}],
        "totalElements": 21, "totalPages": 2, "number": 1, "size": 20
    }))
    .unwrap();
    assert_eq!(page.content.len(), 1);
    assert!(page.is_last());

    let empty: Page<Group> = serde_json::from_value(json!({"content": []})).unwrap();
    assert!(empty.is_last());
}

#[test]
fn page_request_pairs_include_sort_only_when_set() {
    assert_eq!(
        PageRequest::default().query_pairs(),
        vec![("page", "0".to_owned()), ("size", "20".to_owned())]
    );
    assert_eq!(
        PageRequest::newest_first(2).query_pairs(),
        vec![
            ("page", "2".to_owned()),
            ("size", "20".to_owned()),
            ("sort", "participationDate,desc".to_owned()),
        ]
    );
}

#[test]
fn participation_filter_skips_blank_status() {
    let filter = ParticipationFilter { semester_id: Some(3), status: Some("  ".to_owned()), ..Default::default() };
    assert_eq!(filter.query_pairs(), vec![("semesterId", "3".to_owned())]);
}

// =============================================================
// Participant self-service
// =============================================================

#[test]
fn user_semesters_summary_decodes() {
    let summary: UserSemesters = serde_json::from_value(json!({
        "personId": 42,
        "personName": "Jane Doe",
        "semesters": [{
            "semesterId": 3, "semesterName": "Spring 2025", "sdate": "2025-03-01", "edate": null,
            "groups": [{"groupId": 2, "groupName": "Genesis", "participationDate": "2025-03-04"}]
        }]
    }))
    .unwrap();
    assert_eq!(summary.person_id, 42);
    assert_eq!(summary.semesters[0].groups[0].group_name, "Genesis");
    assert_eq!(summary.semesters[0].edate, None);
}

#[test]
fn user_participation_without_record() {
    let row: UserParticipation = serde_json::from_value(json!({
        "participationId": 7, "semesterId": 3, "semesterName": "Spring 2025",
        "groupId": 2, "groupName": "Genesis", "status": "ACTIVE", "participationDate": "2025-03-04"
    }))
    .unwrap();
    assert_eq!(row.participation_id, 7);
    assert!(row.weekly_record.is_none());
}
