use crate::{Subscription, SyncEvent};

use boq_core::{Document, Member};

use tokio::sync::broadcast;

fn document_with_members(count: usize) -> Document {
    Document {
        members: (0..count)
            .map(|i| Member {
                id: uuid::Uuid::new_v4(),
                name: format!("Member {i}"),
                role: String::new(),
                email: String::new(),
            })
            .collect(),
        ..Document::default()
    }
}

#[tokio::test]
async fn given_new_subscription_when_next_then_initial_snapshot_first() {
    // Given
    let (sender, receiver) = broadcast::channel(4);
    let initial = document_with_members(1);
    let mut subscription = Subscription::new(initial.clone(), receiver);
    sender.send(document_with_members(2)).unwrap();

    // When
    let first = subscription.next().await;
    let second = subscription.next().await;

    // Then
    assert_eq!(first, SyncEvent::Snapshot(initial));
    assert!(matches!(second, SyncEvent::Snapshot(d) if d.members.len() == 2));
}

#[tokio::test]
async fn given_backlog_when_next_then_skips_to_newest() {
    // Given
    let (sender, receiver) = broadcast::channel(2);
    let mut subscription = Subscription::new(Document::default(), receiver);
    subscription.next().await;
    for count in 1..=5 {
        let _ = sender.send(document_with_members(count));
    }

    // When
    let event = subscription.next().await;

    // Then
    assert!(matches!(event, SyncEvent::Snapshot(d) if d.members.len() == 5));
}

#[tokio::test]
async fn given_sender_dropped_when_next_then_failed() {
    // Given
    let (sender, receiver) = broadcast::channel::<Document>(4);
    let mut subscription = Subscription::new(Document::default(), receiver);
    drop(sender);

    // When
    let first = subscription.next().await;
    let second = subscription.next().await;

    // Then
    assert!(matches!(first, SyncEvent::Snapshot(_)));
    assert!(matches!(second, SyncEvent::Failed(_)));
}
