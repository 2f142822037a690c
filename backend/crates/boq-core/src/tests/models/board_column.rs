use crate::ColumnStage;

use std::str::FromStr;

#[test]
fn test_column_stage_as_str() {
    assert_eq!(ColumnStage::Pending.as_str(), "pending");
    assert_eq!(ColumnStage::InProgress.as_str(), "in_progress");
    assert_eq!(ColumnStage::Review.as_str(), "review");
    assert_eq!(ColumnStage::Done.as_str(), "done");
}

#[test]
fn test_column_stage_from_str() {
    assert_eq!(
        ColumnStage::from_str("review").unwrap(),
        ColumnStage::Review
    );
    assert!(ColumnStage::from_str("archived").is_err());
}

#[test]
fn test_column_stage_default() {
    assert_eq!(ColumnStage::default(), ColumnStage::Pending);
}
