//! Tests for two-column splitting of numbered content items

use ips_catalog::format::split_columns;
use ips_catalog::models::InformationCardContentItem;

fn items(count: u32) -> Vec<InformationCardContentItem> {
    (1..=count)
        .map(|number| InformationCardContentItem {
            id: format!("item-{number}"),
            number,
            text: format!("Entry {number}"),
        })
        .collect()
}

#[test]
fn test_four_items_split_two_and_two() {
    let list = items(4);
    let (left, right) = split_columns(&list);

    let left_numbers: Vec<u32> = left.iter().map(|item| item.number).collect();
    let right_numbers: Vec<u32> = right.iter().map(|item| item.number).collect();
    assert_eq!(left_numbers, vec![1, 2]);
    assert_eq!(right_numbers, vec![3, 4]);
}

#[test]
fn test_three_items_put_the_extra_one_left() {
    let list = items(3);
    let (left, right) = split_columns(&list);
    assert_eq!(left.len(), 2);
    assert_eq!(right.len(), 1);
    assert_eq!(right[0].number, 3);
}

#[test]
fn test_no_items_yield_empty_columns() {
    let (left, right) = split_columns::<InformationCardContentItem>(&[]);
    assert!(left.is_empty());
    assert!(right.is_empty());
}
