//! End-to-end tests for the debounced recurrence filter stream.

use std::time::Duration;

use schoolday::commands::watch_recurrence;
use schoolday::Config;
use schoolday_core::recurrence::{RecurrenceFilter, RecurrenceType};
use tokio::io::{AsyncWriteExt, BufReader};

fn test_config() -> Config {
    Config::from_vars(|_| None)
}

fn draft_line(occurrences: &str) -> String {
    format!(
        r#"{{"startDate":"2024-05-06","startTime":"10:15","endTime":"11:00","recurrenceEnum":"WEEKLY","occurrences":"{}"}}"#,
        occurrences
    ) + "\n"
}

#[tokio::test(start_paused = true)]
async fn test_burst_settles_once_at_end_of_input() {
    let input = [draft_line("1"), draft_line("12"), draft_line("120")].concat();
    let mut settled: Vec<Option<RecurrenceFilter>> = Vec::new();

    watch_recurrence(BufReader::new(input.as_bytes()), &test_config(), |filter| {
        settled.push(filter)
    })
    .await
    .unwrap();

    assert_eq!(settled.len(), 1);
    let filter = settled[0].as_ref().unwrap();
    assert_eq!(filter.recurrence, RecurrenceType::Weekly);
    assert_eq!(filter.occurrences, Some(120));
}

#[tokio::test(start_paused = true)]
async fn test_pauses_between_drafts_settle_each_value() {
    let (mut writer, reader) = tokio::io::duplex(1024);

    let typing = tokio::spawn(async move {
        writer.write_all(draft_line("3").as_bytes()).await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        // Cleared field: recurring draft with no end is not ready
        writer.write_all(draft_line("").as_bytes()).await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        writer.write_all(draft_line("4").as_bytes()).await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
    });

    let mut settled: Vec<Option<u32>> = Vec::new();
    watch_recurrence(BufReader::new(reader), &test_config(), |filter| {
        settled.push(filter.and_then(|f| f.occurrences))
    })
    .await
    .unwrap();
    typing.await.unwrap();

    assert_eq!(settled, vec![Some(3), None, Some(4)]);
}

#[tokio::test(start_paused = true)]
async fn test_malformed_lines_are_skipped() {
    let input = ["not json\n".to_string(), "\n".to_string(), draft_line("2")].concat();
    let mut settled: Vec<Option<RecurrenceFilter>> = Vec::new();

    watch_recurrence(BufReader::new(input.as_bytes()), &test_config(), |filter| {
        settled.push(filter)
    })
    .await
    .unwrap();

    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].as_ref().unwrap().occurrences, Some(2));
}

#[tokio::test(start_paused = true)]
async fn test_incomplete_input_settles_nothing() {
    let input = r#"{"startDate":"2024-05-06"}"#.to_string() + "\n";
    let mut settled: Vec<Option<RecurrenceFilter>> = Vec::new();

    watch_recurrence(BufReader::new(input.as_bytes()), &test_config(), |filter| {
        settled.push(filter)
    })
    .await
    .unwrap();

    // None was already the published value, so nothing changes
    assert!(settled.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_clearing_recurrence_settles_to_none() {
    let (mut writer, reader) = tokio::io::duplex(1024);

    let typing = tokio::spawn(async move {
        writer.write_all(draft_line("3").as_bytes()).await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        let cleared = draft_line("3").replace(r#""recurrenceEnum":"WEEKLY""#, r#""recurrenceEnum":"""#);
        writer.write_all(cleared.as_bytes()).await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
    });

    let mut settled: Vec<Option<u32>> = Vec::new();
    watch_recurrence(BufReader::new(reader), &test_config(), |filter| {
        settled.push(filter.and_then(|f| f.occurrences))
    })
    .await
    .unwrap();
    typing.await.unwrap();

    assert_eq!(settled, vec![Some(3), None]);
}
