use super::*;
use std::fs;

type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

fn record(name: &str) -> Vec<u8> {
    fs::read(format!(
        "{}/test_data/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    ))
    .expect("test input not found")
}

#[test]
fn classifies_a_plain_tweet() -> TestResult {
    let event = Event::try_from(&record("tweet_001")[..])?;
    assert_eq!(
        event,
        Event::Tweet(Tweet {
            id: Id(45215427410780160),
            text: "Shipping the new feed reader tonight. Fingers crossed.".to_string(),
            user: TwitterUser {
                id: Id(10),
                screen_name: "readerdev".to_string(),
            },
            in_reply_to_user_id: None,
        })
    );
    Ok(())
}

#[test]
fn classifies_a_reply() -> TestResult {
    match Event::try_from(&record("reply_001")[..])? {
        Event::Tweet(tweet) => {
            assert_eq!(tweet.author(), Id(10));
            assert_eq!(tweet.reply_target(), Some(Id(99)));
        }
        other => panic!("expected a tweet, got a {}", other.kind()),
    }
    Ok(())
}

#[test]
fn classifies_control_events() -> TestResult {
    match Event::try_from(&record("control_001")[..])? {
        Event::Control(ControlEvent { event, source, .. }) => {
            assert_eq!(event, "favorite");
            assert_eq!(source.and_then(|s| s.id), Some(Id(10)));
        }
        other => panic!("expected a control event, got a {}", other.kind()),
    }
    Ok(())
}

#[test]
fn classifies_friend_lists() -> TestResult {
    let event = Event::try_from(&record("friends_001")[..])?;
    assert_eq!(
        event,
        Event::Friends(FriendList {
            friends: vec![Id(10), Id(20), Id(1497), Id(783214), Id(6253282)],
        })
    );
    Ok(())
}

#[test]
fn zero_reply_target_is_not_a_reply() -> TestResult {
    let txt = r#"{"id":7,"text":"hi","user":{"id":10,"screen_name":"a"},"in_reply_to_user_id":0}"#;
    match Event::try_from(txt)? {
        Event::Tweet(tweet) => {
            assert_eq!(tweet.in_reply_to_user_id, Some(Id(0)));
            assert_eq!(tweet.reply_target(), None);
        }
        other => panic!("expected a tweet, got a {}", other.kind()),
    }
    Ok(())
}

#[test]
fn accepts_string_ids() -> TestResult {
    let txt = r#"{"id":"7","text":"hi","user":{"id":"10","screen_name":"a"}}"#;
    match Event::try_from(txt)? {
        Event::Tweet(tweet) => assert_eq!((tweet.id, tweet.author()), (Id(7), Id(10))),
        other => panic!("expected a tweet, got a {}", other.kind()),
    }
    Ok(())
}

#[test]
fn record_without_an_author_is_not_a_tweet() {
    for txt in &[
        r#"{"bogus":true}"#,
        r#"{"id":7,"text":"orphan"}"#,
        r#"{"id":7,"text":"anonymous","user":{"screen_name":"nobody"}}"#,
    ] {
        assert!(matches!(Event::try_from(*txt), Err(EventErr::NotATweet)));
    }
}

#[test]
fn delete_notices_are_not_tweets() {
    assert!(matches!(
        Event::try_from(&record("delete_001")[..]),
        Err(EventErr::NotATweet)
    ));
}

#[test]
fn garbage_is_a_parse_error() {
    for txt in &["", "not json", "42", r#"{"id":7,"#] {
        assert!(matches!(
            Event::try_from(*txt),
            Err(EventErr::SerdeParse(_))
        ));
    }
}

#[test]
fn marked_records_are_never_read_as_tweets() {
    // well-formed statuses apart from an unexpected marker value
    for txt in &[
        r#"{"event":123,"id":7,"text":"x","user":{"id":10,"screen_name":"a"}}"#,
        r#"{"friends":"none","id":7,"text":"x","user":{"id":10,"screen_name":"a"}}"#,
    ] {
        assert!(matches!(
            Event::try_from(*txt),
            Err(EventErr::SerdeParse(_))
        ));
    }
}

#[test]
fn marker_key_decides_the_shape() -> TestResult {
    let txt = r#"{"event":"follow","friends":[10],"source":{"id":10}}"#;
    assert_eq!(Event::try_from(txt)?.kind(), "control event");
    Ok(())
}

#[test]
fn null_text_fields_still_make_a_tweet() -> TestResult {
    let txt = r#"{"id":7,"text":null,"user":{"id":10,"screen_name":null}}"#;
    match Event::try_from(txt)? {
        Event::Tweet(tweet) => {
            assert_eq!((tweet.id, tweet.author()), (Id(7), Id(10)));
            assert_eq!(tweet.text, "");
            assert_eq!(tweet.user.screen_name, "");
        }
        other => panic!("expected a tweet, got a {}", other.kind()),
    }
    Ok(())
}
