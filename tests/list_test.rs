/*!
 * Concurrent List Tests
 * Indexed sequence operations behind a single lock
 */

mod common;

use common::MockItem;
use concurrent_collections::{
    CollectionConfig, CollectionError, ConcurrentList, IndexedCollection, SynchronizedCollection,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn test_add_should_add_item() {
    let expected = MockItem::new();
    let list: ConcurrentList<MockItem> = ConcurrentList::new();

    let index = list.add(expected.clone());

    assert_eq!(index, 0);
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(index).unwrap(), Some(expected));
}

#[test]
fn test_add_should_return_correct_index() {
    let list: ConcurrentList<usize> = ConcurrentList::new();

    for i in 0..10 {
        assert_eq!(list.add(i), i);
    }
}

#[test]
fn test_clear_should_remove_all_items() {
    let list: ConcurrentList<i32> = (0..10).collect();

    list.clear();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
}

#[test]
fn test_contains_should_return_false() {
    let list: ConcurrentList<i32> = (0..10).collect();

    assert!(!list.contains(None));
    assert!(!list.contains(&11));
}

#[test]
fn test_contains_absent_query_ignores_absent_slots() {
    let list: ConcurrentList<i32> = ConcurrentList::new();
    list.add(None);

    assert!(!list.contains(None));
    assert_eq!(list.index_of(None), Some(0));
}

#[test]
fn test_contains_should_return_true() {
    let list: ConcurrentList<i32> = (0..10).collect();

    for i in 0..10 {
        assert!(list.contains(&i));
    }
}

#[test]
fn test_count_should_return_correct_value() {
    let list: ConcurrentList<i32> = ConcurrentList::new();

    for i in 0..10 {
        list.add(i);
        assert_eq!(list.len(), i as usize + 1);
    }
}

#[test]
fn test_index_of_should_return_correct_index() {
    let first = MockItem::new();
    let second = MockItem::new();
    let list: ConcurrentList<MockItem> = ConcurrentList::new();

    assert_eq!(list.index_of(&first), None);
    assert_eq!(list.index_of(&second), None);

    let first_index = list.add(first.clone());

    assert_eq!(list.index_of(&first), Some(first_index));
    assert_eq!(list.index_of(&second), None);

    let second_index = list.add(second.clone());

    assert_eq!(list.index_of(&first), Some(first_index));
    assert_eq!(list.index_of(&second), Some(second_index));
}

#[test]
fn test_index_of_uses_value_equality() {
    let item = MockItem::new();
    let list: ConcurrentList<MockItem> = ConcurrentList::new();
    list.add(item.clone());

    // A distinct but equal value is found
    let lookalike = MockItem { id: item.id };
    assert_eq!(list.index_of(&lookalike), Some(0));
}

#[test]
fn test_insert_should_insert_item() {
    let first = MockItem::new();
    let second = MockItem::new();
    let third = MockItem::new();
    let list: ConcurrentList<MockItem> = ConcurrentList::new();

    let first_index = list.add(first.clone());
    let second_index = list.add(second.clone());

    list.insert(second_index, third.clone()).unwrap();

    assert_eq!(list.index_of(&first), Some(first_index));
    assert_eq!(list.index_of(&second), Some(second_index + 1));
    assert_eq!(list.index_of(&third), Some(second_index));
}

#[test]
fn test_insert_at_end_and_out_of_range() {
    let list: ConcurrentList<i32> = (0..2).collect();

    list.insert(2, 99).unwrap();
    assert_eq!(list.get(2).unwrap(), Some(99));

    let err = list.insert(4, 100).unwrap_err();
    assert_eq!(err, CollectionError::IndexOutOfRange { index: 4, len: 3 });
    assert_eq!(list.len(), 3);
}

#[test]
fn test_get_and_set_out_of_range() {
    let list: ConcurrentList<i32> = ConcurrentList::new();

    assert_eq!(
        list.get(0),
        Err(CollectionError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert!(list.set(0, 1).is_err());
}

#[test]
fn test_set_replaces_item() {
    let list: ConcurrentList<&str> = ["a", "b"].into_iter().collect();

    assert_eq!(list.set(1, None).unwrap(), Some("b"));
    assert_eq!(list.to_vec(), vec![Some("a"), None]);
}

#[test]
fn test_remove_should_remove_item() {
    let item = MockItem::new();
    let list: ConcurrentList<MockItem> = [item.clone()].into_iter().collect();

    assert!(list.contains(&item));
    assert_eq!(list.len(), 1);

    assert!(list.remove(&item));

    assert!(!list.contains(&item));
    assert_eq!(list.len(), 0);
}

#[test]
fn test_remove_missing_is_noop() {
    let list: ConcurrentList<i32> = (0..3).collect();

    assert!(!list.remove(&42));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_remove_at_should_remove_item() {
    let first = MockItem::new();
    let second = MockItem::new();
    let third = MockItem::new();

    let list: ConcurrentList<MockItem> = [first.clone(), second.clone(), third.clone()]
        .into_iter()
        .collect();

    assert_eq!(list.len(), 3);

    assert_eq!(list.remove_at(1).unwrap(), Some(second.clone()));

    assert!(list.contains(&first));
    assert!(!list.contains(&second));
    assert!(list.contains(&third));

    assert_eq!(list.len(), 2);
    assert_eq!(list.index_of(&first), Some(0));
    assert_eq!(list.index_of(&second), None);
    assert_eq!(list.index_of(&third), Some(1));
}

#[test]
fn test_clone_is_independent() {
    let source: ConcurrentList<i32> = (0..3).collect();
    let copy = source.clone();

    assert_eq!(copy.to_vec(), source.to_vec());

    copy.add(3);
    source.remove_at(0).unwrap();

    assert_eq!(source.to_vec(), vec![Some(1), Some(2)]);
    assert_eq!(copy.to_vec(), vec![Some(0), Some(1), Some(2), Some(3)]);
}

#[test]
fn test_clone_shares_element_references() {
    let shared = Arc::new(MockItem::new());
    let source: ConcurrentList<Arc<MockItem>> = ConcurrentList::new();
    source.add(Arc::clone(&shared));

    let copy = source.clone();
    let cloned = copy.get(0).unwrap().unwrap();

    assert!(Arc::ptr_eq(&shared, &cloned));
}

#[test]
fn test_clone_keeps_config() {
    let config = CollectionConfig::small().with_label("jobs");
    let source: ConcurrentList<u8> = ConcurrentList::with_config(config);

    assert_eq!(source.clone().config(), &config);
}

#[test]
fn test_iter_is_snapshot() {
    let list: ConcurrentList<i32> = (0..3).collect();

    let snapshot = list.iter();
    list.clear();
    list.add(7);

    let items: Vec<Option<i32>> = snapshot.collect();
    assert_eq!(items, vec![Some(0), Some(1), Some(2)]);
    assert_eq!(list.to_vec(), vec![Some(7)]);
}

#[test]
fn test_iter_by_reference() {
    let list: ConcurrentList<i32> = vec![Some(1), None, Some(3)].into_iter().collect();

    let present: Vec<i32> = (&list).into_iter().flatten().collect();
    assert_eq!(present, vec![1, 3]);
}

#[test]
fn test_copy_to_destination_rules() {
    let list: ConcurrentList<i32> = (0..3).collect();

    let mut exact = vec![None; 3];
    list.copy_to(&mut exact, 0).unwrap();
    assert_eq!(exact, vec![Some(0), Some(1), Some(2)]);

    let mut small = vec![None; 2];
    assert_eq!(
        list.copy_to(&mut small, 0),
        Err(CollectionError::DestinationTooSmall {
            required: 3,
            available: 2
        })
    );
    assert_eq!(
        list.copy_to(&mut small, 3),
        Err(CollectionError::IndexOutOfRange { index: 3, len: 2 })
    );
}

#[test]
fn test_is_synchronized_should_be_true() {
    let list: ConcurrentList<i32> = ConcurrentList::new();

    assert!(list.is_synchronized());
    assert!(SynchronizedCollection::is_synchronized(&list));
}

#[test]
fn test_extend_appends() {
    let mut list: ConcurrentList<i32> = (0..2).collect();
    list.extend(vec![Some(2), None]);

    assert_eq!(list.to_vec(), vec![Some(0), Some(1), Some(2), None]);
}

#[test]
fn test_lock_handle_allows_external_batch() {
    let list: ConcurrentList<i32> = ConcurrentList::new();

    {
        let mut items = list.lock();
        items.push(Some(1));
        items.push(Some(2));
    }

    assert_eq!(list.len(), 2);
    assert_eq!(list.index_of(&2), Some(1));
}

#[test]
fn test_serde_round_trip_keeps_absent_values() {
    let list: ConcurrentList<String> = vec![Some("a".to_string()), None].into_iter().collect();

    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, r#"["a",null]"#);

    let back: ConcurrentList<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_vec(), list.to_vec());
}

fn fill<C: IndexedCollection<Item = Option<u32>>>(collection: &C, count: u32) {
    for i in 0..count {
        collection.add(Some(i));
    }
}

#[test]
fn test_generic_indexed_collection() {
    let list: ConcurrentList<u32> = ConcurrentList::new();
    fill(&list, 4);

    assert_eq!(SynchronizedCollection::len(&list), 4);
    assert_eq!(IndexedCollection::remove_at(&list, 0).unwrap(), Some(0));
    assert_eq!(list.snapshot(), vec![Some(1), Some(2), Some(3)]);
}
