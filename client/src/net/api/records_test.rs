use super::*;

#[test]
fn lookup_paths() {
    assert_eq!(item_path(11), "/admin/records/11");
    assert_eq!(by_person_path(42), "/admin/records/person/42");
    assert_eq!(by_semester_path(3), "/admin/records/semester/3");
    assert_eq!(by_person_and_semester_path(42, 3), "/admin/records/person/42/semester/3");
}

#[test]
fn create_targets_participation() {
    assert_eq!(create_path(7), "/admin/records?participationId=7");
}
