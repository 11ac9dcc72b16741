use class_hierarchy::indented::{IndentedParser, parse_file, parse_str};
use class_hierarchy::parser::ParsingErrorType;
use std::io::Write;

// --- TESTS VALID HIERARCHIES ---
#[test]
fn test_basic_hierarchy() {
    let text = "Root\n- Child1\n- Child2\n  - Grandchild1\n";
    let hierarchy = parse_str(text).unwrap();

    // Test counts
    assert_eq!(hierarchy.num_nodes(), 4);
    assert_eq!(hierarchy.num_edges(), 3);

    // Test relationships
    assert_eq!(hierarchy.child_names("Root").unwrap(), vec!["Child1", "Child2"]);
    assert!(hierarchy.child_names("Child1").unwrap().is_empty());
    assert_eq!(hierarchy.child_names("Child2").unwrap(), vec!["Grandchild1"]);
    assert!(hierarchy.child_names("Grandchild1").unwrap().is_empty());

    // Discovery order
    let names: Vec<&str> = hierarchy.names().collect();
    assert_eq!(names, vec!["Root", "Child1", "Child2", "Grandchild1"]);
}

#[test]
fn test_annotation_is_stripped() {
    let hierarchy = parse_str("Birds\n- Bird (rare)\n").unwrap();
    assert!(hierarchy.contains("Bird"));
    assert!(!hierarchy.contains("Bird (rare)"));
    assert_eq!(hierarchy.child_names("Birds").unwrap(), vec!["Bird"]);
}

#[test]
fn test_question_marks_and_trailing_spaces_are_stripped() {
    let hierarchy = parse_str("Cormorants  \n- Pelagic Cormorant ?\n- Brandt Cormorant??\n").unwrap();
    assert_eq!(
        hierarchy.child_names("Cormorants").unwrap(),
        vec!["Pelagic Cormorant", "Brandt Cormorant"]
    );
}

#[test]
fn test_hyphen_only_markers() {
    let hierarchy = parse_str("Gulls\n--Heermann Gull\n----Juvenile\n").unwrap();
    assert_eq!(hierarchy.child_names("Gulls").unwrap(), vec!["Heermann Gull"]);
    assert_eq!(hierarchy.child_names("Heermann Gull").unwrap(), vec!["Juvenile"]);
}

#[test]
fn test_forest_with_several_roots() {
    let hierarchy = parse_str("Grebes\n- Horned Grebe\nLoons\n- Pacific Loon\n").unwrap();
    let roots: Vec<&str> = hierarchy.roots().map(|n| n.name()).collect();
    assert_eq!(roots, vec!["Grebes", "Loons"]);
    assert_eq!(hierarchy.child_names("Loons").unwrap(), vec!["Pacific Loon"]);
}

#[test]
fn test_windows_line_endings() {
    let hierarchy = parse_str("Terns\r\n- Arctic Tern\r\n  - Juvenile\r\n").unwrap();
    assert_eq!(hierarchy.child_names("Arctic Tern").unwrap(), vec!["Juvenile"]);
}

#[test]
fn test_empty_input() {
    let hierarchy = parse_str("\n  \n").unwrap();
    assert!(hierarchy.is_empty());
}

// --- TESTS INVALID HIERARCHIES ---
#[test]
fn test_duplicate_name() {
    let text = "Birds\n- Gulls\n  - Kittiwake\n- Terns\n  - Kittiwake\n";
    let err = parse_str(text).unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::DuplicateName("Kittiwake".to_string()));
    assert_eq!(err.line(), 5);
}

#[test]
fn test_duplicate_after_annotation_stripping() {
    let err = parse_str("Birds\n- Bird (rare)\n- Bird").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::DuplicateName("Bird".to_string()));
    assert_eq!(err.line(), 3);
}

#[test]
fn test_odd_indentation() {
    let err = parse_str("Root\n Child\n").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::InvalidIndentation);
    assert_eq!(err.line(), 2);
    assert_eq!(err.context(), " Child");
}

#[test]
fn test_depth_jump() {
    let err = parse_str("Root\n- Child\n      - Great-grandchild\n").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::UnexpectedDepth);
    assert_eq!(err.line(), 3);
}

#[test]
fn test_indented_root() {
    let err = parse_str("\n- Root\n").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::IndentedRoot);
    assert_eq!(err.line(), 2);
}

#[test]
fn test_tab_indentation() {
    let err = parse_str("Birds\n\t- Gulls\n\t\t- Kittiwake\n").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::InvalidIndentation);
    assert_eq!(err.line(), 2);
    assert_eq!(err.context(), "\t- Gulls");
}

#[test]
fn test_tab_after_marker() {
    let err = parse_str("Birds\n-\tGulls\n").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::InvalidIndentation);
    assert_eq!(err.line(), 2);
}

#[test]
fn test_tab_inside_name_is_kept() {
    let hierarchy = parse_str("Birds\n- Black\tTern\n").unwrap();
    assert_eq!(hierarchy.child_names("Birds").unwrap(), vec!["Black\tTern"]);
}

#[test]
fn test_empty_name() {
    let err = parse_str("Root\n- ?\n").unwrap_err();
    assert_eq!(err.kind(), &ParsingErrorType::EmptyName);
}

#[test]
fn test_error_message_contains_line() {
    let err = parse_str("Root\n   - Child\n").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Incorrect indentation at line 2"));
    assert!(message.contains("   - Child"));
}

// --- TESTS FILE PARSING ---
#[test]
fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "Albatrosses\n- Laysan Albatross\n- Sooty Albatross\n").unwrap();

    let hierarchy = parse_file(file.path()).unwrap();
    assert_eq!(hierarchy.num_nodes(), 3);
    assert_eq!(
        hierarchy.child_names("Albatrosses").unwrap(),
        vec!["Laysan Albatross", "Sooty Albatross"]
    );
}

#[test]
fn test_parse_missing_file() {
    let err = parse_file("does/not/exist.txt").unwrap_err();
    assert!(matches!(err.kind(), ParsingErrorType::IoError(_)));
}

#[test]
fn test_parse_line_by_line() {
    let mut parser = IndentedParser::new();
    for line in ["Wrens", "- Cactus Wren", "- Rock Wren"] {
        parser.parse_line(line).unwrap();
    }
    let hierarchy = parser.finish();
    assert_eq!(hierarchy.child_names("Wrens").unwrap(), vec!["Cactus Wren", "Rock Wren"]);
}
