use super::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn key_value_pairs(
    min_pairs: usize,
    max_pairs: usize,
) -> impl Strategy<Value = Vec<(String, i32)>> {
    proptest::collection::vec(
        ("[a-c你好]{0,6}".prop_map(String::from), proptest::num::i32::ANY),
        min_pairs..max_pairs,
    )
}

fn queries(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-d你好]{0,8}", 0..max)
}

#[derive(Debug, Clone)]
enum Operation {
    Insert(String, i32),
    Delete(String),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            ("[ab]{0,4}", any::<i32>()).prop_map(|(k, v)| Operation::Insert(k, v)),
            "[ab]{0,4}".prop_map(Operation::Delete),
        ],
        0..60,
    )
}

/// Byte end of the longest stored key that is a prefix of `query`.
fn reference_matched_end(model: &BTreeMap<String, i32>, query: &str) -> usize {
    model
        .keys()
        .filter(|key| query.starts_with(key.as_str()))
        .map(String::len)
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn len_counts_distinct_keys(pairs in key_value_pairs(0, 80)) {
        let mut trie = Trie::new();
        let mut model = BTreeMap::new();

        for (key, value) in &pairs {
            trie.insert(key, *value);
            model.insert(key.clone(), *value);
        }

        prop_assert_eq!(trie.len(), model.len());
        for (key, value) in &model {
            prop_assert_eq!(trie.find(key).into_parts(), (true, Some(value), key.len()));
        }
    }

    #[test]
    fn matched_end_is_longest_stored_prefix(
        pairs in key_value_pairs(0, 40),
        queries in queries(40),
    ) {
        let trie: Trie<i32> = pairs.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        let model: BTreeMap<String, i32> = pairs.into_iter().collect();

        for query in &queries {
            let found = trie.find(query);
            prop_assert_eq!(found.matched_end, reference_matched_end(&model, query));
            prop_assert_eq!(found.value, model.get(query));

            // the same walk over code points reports a code point index
            let symbols: Vec<char> = query.chars().collect();
            let by_symbols = trie.find_by_symbols(&symbols);
            let byte_end = query
                .char_indices()
                .nth(by_symbols.matched_end)
                .map_or(query.len(), |(offset, _)| offset);
            prop_assert_eq!(byte_end, found.matched_end);
        }
    }

    #[test]
    fn prefix_match_equals_filtered_model(
        pairs in key_value_pairs(0, 60),
        prefixes in queries(20),
    ) {
        let trie: Trie<i32> = pairs.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        let model: BTreeMap<String, i32> = pairs.into_iter().collect();

        let mut all: Vec<i32> = trie.prefix_match("").into_iter().copied().collect();
        all.sort();
        let mut expected: Vec<i32> = model.values().copied().collect();
        expected.sort();
        prop_assert_eq!(all, expected);

        for prefix in &prefixes {
            let mut actual: Vec<i32> = trie.prefix_match(prefix).into_iter().copied().collect();
            actual.sort();
            let mut expected: Vec<i32> = model
                .iter()
                .filter(|(key, _)| key.starts_with(prefix.as_str()))
                .map(|(_, value)| *value)
                .collect();
            expected.sort();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn operations_match_model(ops in operations()) {
        let mut trie = Trie::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Operation::Insert(key, value) => {
                    trie.insert(&key, value);
                    model.insert(key, value);
                }
                Operation::Delete(key) => {
                    let before = trie.len();
                    let deleted = trie.delete(&key);
                    prop_assert_eq!(deleted, model.remove(&key).is_some());
                    prop_assert_eq!(trie.len(), before - usize::from(deleted));
                    prop_assert!(!trie.find(&key).exists());
                }
            }
            prop_assert_eq!(trie.len(), model.len());
        }

        let mut keys: Vec<String> = trie.keys().collect();
        keys.sort();
        prop_assert_eq!(keys, model.keys().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn deleting_everything_leaves_only_root(pairs in key_value_pairs(0, 60)) {
        let mut trie = Trie::new();
        for (key, value) in &pairs {
            trie.insert(key, *value);
        }

        for (key, _) in &pairs {
            trie.delete(key);
        }

        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn segments_cover_text(pairs in key_value_pairs(0, 20), text in "[a-d你好]{0,30}") {
        let trie: Trie<i32> = pairs.iter().map(|(k, v)| (k.as_str(), *v)).collect();

        let mut rebuilt = String::new();
        let mut pos = 0;
        for segment in trie.segments(&text) {
            prop_assert_eq!(segment.start, pos);
            prop_assert!(segment.end > segment.start);
            prop_assert_eq!(segment.value, trie.get(segment.text));
            rebuilt.push_str(segment.text);
            pos = segment.end;
        }
        prop_assert_eq!(rebuilt, text);
    }
}
