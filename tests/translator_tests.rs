//! Tests for the notification-to-outcome translation pipeline.

mod support;

use std::sync::Arc;

use scorebridge::domain::{EventCode, MatchNumber, Notification, UpdateType};
use scorebridge::error::{Error, LookupError};
use scorebridge::testkit::lookup::{FailingLookup, FixedLookup};
use scorebridge::testkit::publisher::RecordingPublisher;
use scorebridge::translator::Translator;
use support::match_result;

fn match_post(number: u32) -> Notification {
    Notification::update(UpdateType::MatchPost, Some(MatchNumber::new(number)))
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(topic, payload)| (topic.to_string(), payload.to_string()))
        .collect()
}

#[tokio::test]
async fn posted_match_publishes_win_and_loss() {
    let lookup = Arc::new(FixedLookup::new(match_result(
        3,
        Some(2),
        Some(1),
        [Some("100"), None, None],
        [Some("200"), None, None],
    )));
    let publisher = Arc::new(RecordingPublisher::new());
    let translator = Translator::new(EventCode::from("test3"), lookup.clone(), publisher.clone());

    let publications = translator.handle(&match_post(3)).await.unwrap();

    let expected = pairs(&[("team/100", "win"), ("team/200", "loss")]);
    let produced: Vec<_> = publications
        .into_iter()
        .map(|p| (p.topic, p.payload))
        .collect();
    assert_eq!(produced, expected);
    assert_eq!(publisher.published(), expected);
    assert_eq!(lookup.call_count(), 1);
}

#[tokio::test]
async fn tied_match_publishes_tie_to_every_rostered_team() {
    let lookup = Arc::new(FixedLookup::new(match_result(
        5,
        Some(1),
        Some(1),
        [Some("100"), Some("101"), None],
        [Some("200"), None, None],
    )));
    let publisher = Arc::new(RecordingPublisher::new());
    let translator = Translator::new(EventCode::from("test3"), lookup, publisher.clone());

    translator.handle(&match_post(5)).await.unwrap();

    assert_eq!(
        publisher.published(),
        pairs(&[
            ("team/100", "tie"),
            ("team/101", "tie"),
            ("team/200", "tie"),
        ])
    );
}

#[tokio::test]
async fn empty_roster_slots_emit_nothing() {
    let lookup = Arc::new(FixedLookup::new(match_result(
        8,
        Some(10),
        Some(30),
        [Some("100"), None, Some("102")],
        [None, Some("201"), None],
    )));
    let publisher = Arc::new(RecordingPublisher::new());
    let translator = Translator::new(EventCode::from("test3"), lookup, publisher.clone());

    let publications = translator.handle(&match_post(8)).await.unwrap();

    assert_eq!(publications.len(), 3);
    assert_eq!(
        publisher.published(),
        pairs(&[
            ("team/100", "loss"),
            ("team/102", "loss"),
            ("team/201", "win"),
        ])
    );
}

#[tokio::test]
async fn repeated_posts_yield_identical_sequences() {
    let lookup = Arc::new(FixedLookup::new(match_result(
        2,
        Some(55),
        Some(40),
        [Some("100"), Some("101"), Some("102")],
        [Some("200"), Some("201"), Some("202")],
    )));
    let publisher = Arc::new(RecordingPublisher::new());
    let translator = Translator::new(EventCode::from("test3"), lookup.clone(), publisher.clone());

    let first = translator.handle(&match_post(2)).await.unwrap();
    let second = translator.handle(&match_post(2)).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(lookup.call_count(), 2);
    assert_eq!(publisher.published().len(), 12);
}

#[tokio::test]
async fn non_actionable_updates_trigger_no_lookup() {
    let lookup = Arc::new(FixedLookup::new(match_result(
        1,
        Some(1),
        Some(0),
        [Some("100"), None, None],
        [Some("200"), None, None],
    )));
    let publisher = Arc::new(RecordingPublisher::new());
    let translator = Translator::new(EventCode::from("test3"), lookup.clone(), publisher.clone());

    for update_type in [
        UpdateType::MatchLoad,
        UpdateType::MatchStart,
        UpdateType::MatchAbort,
        UpdateType::MatchCommit,
        UpdateType::ShowPreview,
        UpdateType::ShowRandom,
        UpdateType::ShowMatch,
        UpdateType::Unknown,
    ] {
        let notification = Notification::update(update_type, Some(MatchNumber::new(1)));
        let publications = translator.handle(&notification).await.unwrap();
        assert!(publications.is_empty());
    }

    assert_eq!(lookup.call_count(), 0);
    assert!(publisher.attempts().is_empty());
}

#[tokio::test]
async fn keepalive_is_ignored() {
    let lookup = Arc::new(FixedLookup::new(match_result(
        1,
        Some(1),
        Some(0),
        [Some("100"), None, None],
        [None, None, None],
    )));
    let publisher = Arc::new(RecordingPublisher::new());
    let translator = Translator::new(EventCode::from("test3"), lookup.clone(), publisher.clone());

    let publications = translator.handle(&Notification::Keepalive).await.unwrap();

    assert!(publications.is_empty());
    assert_eq!(lookup.call_count(), 0);
}

#[tokio::test]
async fn match_post_without_number_is_skipped() {
    let lookup = Arc::new(FailingLookup::new());
    let publisher = Arc::new(RecordingPublisher::new());
    let translator = Translator::new(EventCode::from("test3"), lookup.clone(), publisher.clone());

    let notification = Notification::update(UpdateType::MatchPost, None);
    let publications = translator.handle(&notification).await.unwrap();

    assert!(publications.is_empty());
    assert_eq!(lookup.call_count(), 0);
}

#[tokio::test]
async fn lookup_failure_publishes_nothing() {
    let lookup = Arc::new(FailingLookup::new());
    let publisher = Arc::new(RecordingPublisher::new());
    let translator = Translator::new(EventCode::from("test3"), lookup.clone(), publisher.clone());

    let result = translator.handle(&match_post(4)).await;

    assert!(matches!(
        result,
        Err(Error::Lookup(LookupError::MalformedResponse { .. }))
    ));
    assert_eq!(lookup.call_count(), 1);
    assert!(publisher.attempts().is_empty());
}

#[tokio::test]
async fn unscored_match_is_a_lookup_failure() {
    let lookup = Arc::new(FixedLookup::new(match_result(
        6,
        None,
        None,
        [Some("100"), None, None],
        [Some("200"), None, None],
    )));
    let publisher = Arc::new(RecordingPublisher::new());
    let translator = Translator::new(EventCode::from("test3"), lookup, publisher.clone());

    let result = translator.handle(&match_post(6)).await;

    assert!(matches!(
        result,
        Err(Error::Lookup(LookupError::Unscored { .. }))
    ));
    assert!(publisher.attempts().is_empty());
}

#[tokio::test]
async fn failed_publish_does_not_abort_the_fanout() {
    let lookup = Arc::new(FixedLookup::new(match_result(
        7,
        Some(90),
        Some(45),
        [Some("100"), Some("101"), Some("102")],
        [Some("200"), Some("201"), Some("202")],
    )));
    let publisher = Arc::new(RecordingPublisher::new());
    publisher.fail_topic("team/101");
    let translator = Translator::new(EventCode::from("test3"), lookup, publisher.clone());

    let publications = translator.handle(&match_post(7)).await.unwrap();

    assert_eq!(publications.len(), 6);
    assert_eq!(publisher.attempts().len(), 6);
    assert_eq!(
        publisher.published(),
        pairs(&[
            ("team/100", "win"),
            ("team/102", "win"),
            ("team/200", "loss"),
            ("team/201", "loss"),
            ("team/202", "loss"),
        ])
    );
}
