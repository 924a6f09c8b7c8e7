use super::*;

fn folder_with(children: Vec<Node>) -> Node {
    let mut root = Node::new_folder("root");
    root.children = Some(children);
    root
}

#[test]
fn test_folders_sort_before_files() {
    let root = folder_with(vec![
        Node::new_file("a.txt"),
        Node::new_folder("zeta"),
        Node::new_file("b.txt"),
        Node::new_folder("alpha"),
    ]);

    let sorted = root.sorted_children();
    let names: Vec<&str> = sorted.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta", "a.txt", "b.txt"]);
    assert!(sorted[0].is_folder());
    assert!(sorted[1].is_folder());
    assert!(!sorted[2].is_folder());
    assert!(!sorted[3].is_folder());
}

#[test]
fn test_sort_is_case_insensitive() {
    let root = folder_with(vec![
        Node::new_file("banana.txt"),
        Node::new_file("Apple.txt"),
        Node::new_file("cherry.txt"),
    ]);

    let names: Vec<&str> = root
        .sorted_children()
        .iter()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(names, vec!["Apple.txt", "banana.txt", "cherry.txt"]);
}

#[test]
fn test_sorting_never_rewrites_storage_order() {
    let root = folder_with(vec![
        Node::new_file("z.txt"),
        Node::new_folder("docs"),
        Node::new_file("a.txt"),
    ]);

    let _ = root.sorted_children();
    let stored: Vec<&str> = root
        .children
        .as_deref()
        .unwrap()
        .iter()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(stored, vec!["z.txt", "docs", "a.txt"]);
}

#[test]
fn test_sorted_children_of_file_is_empty() {
    let file = Node::new_file("a.txt");
    assert!(file.sorted_children().is_empty());
}

#[test]
fn test_has_duplicate_name_trims_and_folds_case() {
    let root = folder_with(vec![Node::new_file("Readme.TXT"), Node::new_folder("docs")]);
    let siblings = root.children.as_deref().unwrap();

    assert!(has_duplicate_name(siblings, "readme.txt", None));
    assert!(has_duplicate_name(siblings, "  DOCS ", None));
    assert!(!has_duplicate_name(siblings, "other", None));
}

#[test]
fn test_has_duplicate_name_excludes_one_id() {
    let root = folder_with(vec![Node::new_file("a.txt"), Node::new_file("b.txt")]);
    let siblings = root.children.as_deref().unwrap();
    let a_id = siblings[0].id;

    // 排除自身后，"a.txt" 不算重名
    assert!(!has_duplicate_name(siblings, "a.txt", Some(a_id)));
    assert!(has_duplicate_name(siblings, "b.txt", Some(a_id)));
}

#[test]
fn test_flatten_orders_and_depths() {
    let mut docs = Node::new_folder("docs");
    docs.children = Some(vec![Node::new_file("b.md"), Node::new_file("a.md")]);
    let root = folder_with(vec![
        Node::new_file("readme.txt"),
        Node::new_folder("zeta"),
        docs,
    ]);

    let rows = root.flatten();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["docs", "a.md", "b.md", "zeta", "readme.txt"]);

    let depths: Vec<u16> = rows.iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![1, 2, 2, 1, 1]);
    assert!(rows[0].is_folder);
    assert!(!rows[4].is_folder);
}
