use std::sync::Arc;

use crate::domain::entities::dispatch::DispatchOutcome;
use crate::errors::{DomainError, ValidationError};
use crate::services::broadcast::{BroadcastDispatcher, PhoneNormalizer};

use super::mocks::MockProvider;

fn recipients(numbers: &[&str]) -> Vec<String> {
    numbers.iter().map(|n| n.to_string()).collect()
}

#[tokio::test]
async fn test_dispatch_returns_one_result_per_recipient_in_order() {
    let provider = Arc::new(MockProvider::new());
    let dispatcher = BroadcastDispatcher::new(provider.clone(), PhoneNormalizer::default());

    let input = recipients(&["+11234567890", "5551234", "+447700900123"]);
    let results = dispatcher.dispatch("School closed tomorrow", &input).await.unwrap();

    assert_eq!(results.len(), 3);
    let submitted: Vec<&str> = results.iter().map(|r| r.recipient.as_str()).collect();
    assert_eq!(submitted, vec!["+11234567890", "5551234", "+447700900123"]);
    assert_eq!(
        provider.sent_to(),
        vec!["+11234567890", "+915551234", "+447700900123"]
    );
    assert!(results.iter().all(|r| r.is_sent()));
    assert_eq!(results[0].message_id(), Some("SM0001"));
    assert_eq!(results[2].message_id(), Some("SM0003"));
}

#[tokio::test]
async fn test_failure_does_not_abort_remaining_recipients() {
    let provider = Arc::new(MockProvider::failing_for(&["+915551234"]));
    let dispatcher = BroadcastDispatcher::new(provider.clone(), PhoneNormalizer::default());

    let input = recipients(&["5551234", "+11234567890"]);
    let results = dispatcher.dispatch("Hello", &input).await.unwrap();

    assert_eq!(provider.call_count(), 2);
    assert_eq!(results.len(), 2);

    assert_eq!(results[0].normalized, "+915551234");
    assert!(matches!(
        &results[0].outcome,
        DispatchOutcome::Failed { error } if error.contains("Invalid 'To' Phone Number")
    ));
    assert!(results[1].is_sent());
}

#[tokio::test]
async fn test_all_failures_still_produce_results() {
    let provider = Arc::new(MockProvider::failing_for(&["+911", "+912"]));
    let dispatcher = BroadcastDispatcher::new(provider, PhoneNormalizer::default());

    let results = dispatcher.dispatch("Hi", &recipients(&["1", "2"])).await.unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| !r.is_sent()));
}

#[tokio::test]
async fn test_duplicate_recipients_are_sent_twice() {
    let provider = Arc::new(MockProvider::new());
    let dispatcher = BroadcastDispatcher::new(provider.clone(), PhoneNormalizer::default());

    let results = dispatcher
        .dispatch("Hi", &recipients(&["5551234", "5551234"]))
        .await
        .unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn test_empty_recipients_rejected_before_sending() {
    let provider = Arc::new(MockProvider::new());
    let dispatcher = BroadcastDispatcher::new(provider.clone(), PhoneNormalizer::default());

    let result = dispatcher.dispatch("Hello", &[]).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::EmptyRecipients))
    ));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_blank_body_rejected_before_sending() {
    let provider = Arc::new(MockProvider::new());
    let dispatcher = BroadcastDispatcher::new(provider.clone(), PhoneNormalizer::default());

    for body in ["", "   \n"] {
        let result = dispatcher.dispatch(body, &recipients(&["5551234"])).await;
        assert!(matches!(
            result,
            Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
        ));
    }
    assert_eq!(provider.call_count(), 0);
}
