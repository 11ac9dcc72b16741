use class_hierarchy::encoding::{encode, initial_labels};
use class_hierarchy::indented::parse_str;
use std::collections::HashSet;

const SMALL_HIERARCHY: &str = "Root\n- Child1\n- Child2\n  - Grandchild1\n";

const SEABIRDS: &str = "\
Seabirds
- Albatrosses
  - Black footed Albatross
  - Laysan Albatross
  - Sooty Albatross (Phoebetria)
- Gulls ?
  - California Gull
  - Heermann Gull
- Cormorants
  - Brandt Cormorant
  - Red faced Cormorant
Landbirds
- Crow
";

const SEABIRD_LABELS: &str = "\
10 Laysan Albatross
2 Black footed Albatross

3 Sooty Albatross
40 Kakapo
7 Heermann Gull
";

fn no_labels() -> std::iter::Empty<&'static str> {
    std::iter::empty()
}

// --- SCENARIOS ---
#[test]
fn test_discovery_order_without_initial_labels() {
    let hierarchy = parse_str(SMALL_HIERARCHY).unwrap();
    let (encoded, labels) = encode(&hierarchy, no_labels());

    assert_eq!(labels.names(), &["Root", "Child1", "Child2", "Grandchild1"]);
    let edges: Vec<_> = encoded.edges().collect();
    assert_eq!(edges, vec![(1, 2), (1, 3), (3, 4)]);
}

#[test]
fn test_initial_label_takes_first_id() {
    let hierarchy = parse_str(SMALL_HIERARCHY).unwrap();
    let seed = initial_labels::parse_str("5 Grandchild1\n").unwrap();
    let (encoded, labels) = encode(&hierarchy, &seed);

    assert_eq!(labels.names(), &["Grandchild1", "Root", "Child1", "Child2"]);
    let edges: HashSet<_> = encoded.edges().collect();
    assert_eq!(edges, HashSet::from([(2, 3), (2, 4), (4, 1)]));
}

#[test]
fn test_annotated_name_is_encoded_stripped() {
    let hierarchy = parse_str("Birds\n- Bird (rare)\n").unwrap();
    let (_, labels) = encode(&hierarchy, no_labels());
    assert_eq!(labels.get_id("Bird"), Some(2));
}

// --- PROPERTIES ---
#[test]
fn test_initial_labels_keep_rank_as_id() {
    let hierarchy = parse_str(SEABIRDS).unwrap();
    let seed = initial_labels::parse_str(SEABIRD_LABELS).unwrap();
    let (_, labels) = encode(&hierarchy, &seed);

    // k-th smallest ordinal receives id k
    assert_eq!(labels.get_id("Black footed Albatross"), Some(1));
    assert_eq!(labels.get_id("Sooty Albatross"), Some(2));
    assert_eq!(labels.get_id("Heermann Gull"), Some(3));
    assert_eq!(labels.get_id("Laysan Albatross"), Some(4));
    assert_eq!(labels.get_id("Kakapo"), Some(5));
    assert_eq!(labels.get_id("Seabirds"), Some(6));
}

#[test]
fn test_every_name_once_and_ids_contiguous() {
    let hierarchy = parse_str(SEABIRDS).unwrap();
    let seed = initial_labels::parse_str(SEABIRD_LABELS).unwrap();
    let (encoded, labels) = encode(&hierarchy, &seed);

    let mut expected: HashSet<&str> = hierarchy.names().collect();
    expected.extend(seed.iter().map(|s| s.as_str()));
    assert_eq!(labels.num_labels(), expected.len());

    let table_names: HashSet<&str> = labels.names().iter().map(|s| s.as_str()).collect();
    assert_eq!(table_names, expected);

    let ids: Vec<usize> = labels.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, (1..=expected.len()).collect::<Vec<_>>());

    // Every hierarchy node is a key of the encoded hierarchy
    assert_eq!(encoded.num_nodes(), hierarchy.num_nodes());
    // Unused initial label has no entry
    let kakapo = labels.get_id("Kakapo").unwrap();
    assert_eq!(encoded.children(kakapo), None);
}

#[test]
fn test_edges_match_hierarchy() {
    let hierarchy = parse_str(SEABIRDS).unwrap();
    let seed = initial_labels::parse_str(SEABIRD_LABELS).unwrap();
    let (encoded, labels) = encode(&hierarchy, &seed);

    let expected: HashSet<(usize, usize)> = hierarchy
        .edges()
        .map(|(p, c)| (labels.get_id(p).unwrap(), labels.get_id(c).unwrap()))
        .collect();
    let actual: HashSet<(usize, usize)> = encoded.edges().collect();

    assert_eq!(actual, expected);
    assert_eq!(encoded.num_edges(), hierarchy.num_edges());
}

#[test]
fn test_leaves_have_empty_entries() {
    let hierarchy = parse_str(SEABIRDS).unwrap();
    let (encoded, labels) = encode(&hierarchy, no_labels());
    let crow = labels.get_id("Crow").unwrap();
    assert_eq!(encoded.children(crow), Some(&[][..]));
    assert_eq!(labels[crow].to_string(), "Crow");
}
