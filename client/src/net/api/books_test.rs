use super::*;

#[test]
fn search_paths_encode_keyword() {
    assert_eq!(search_path(SearchField::Title, " C.S. Lewis "), "/admin/books/search/title?keyword=C.S.%20Lewis");
    assert_eq!(search_path(SearchField::Author, "Kim&Lee"), "/admin/books/search/author?keyword=Kim%26Lee");
}

#[test]
fn item_path_formats_id() {
    assert_eq!(item_path(12), "/admin/books/12");
}
