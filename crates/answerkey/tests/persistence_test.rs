//! Integration tests for reading and rewriting question files.

use std::fs;
use std::io::Write;
use std::sync::Arc;

use tempfile::{NamedTempFile, TempDir};

use answerkey::persistence::{backup, history_directory, list_history};
use answerkey::{
    AnnotationEvent, AnnotatorConfig, AnswerKeyError, CollectingReporter, QuestionAnnotator,
    QuestionSet,
};

const SCENARIO: &str = r#"[{"options":[{"text":"[ক] 5"},{"text":"[খ] 10"},{"text":"সঠিক উত্তর: [খ]"}]}]"#;

const SCENARIO_EXPECTED: &str = r#"[
  {
    "options": [
      {
        "text": "[ক] 5"
      },
      {
        "text": "[খ] 10",
        "correct": true
      }
    ]
  }
]"#;

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

#[test]
fn test_run_rewrites_file_in_place() {
    let file = create_test_file(SCENARIO);

    let summary = QuestionAnnotator::new()
        .run(file.path())
        .expect("Run failed");

    assert_eq!(summary.answers_marked, 1);
    assert_eq!(fs::read_to_string(file.path()).unwrap(), SCENARIO_EXPECTED);
}

#[test]
fn test_run_to_leaves_input_alone() {
    let file = create_test_file(SCENARIO);
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out").join("questions.json");

    QuestionAnnotator::new()
        .run_to(file.path(), &output)
        .expect("Run failed");

    assert_eq!(fs::read_to_string(file.path()).unwrap(), SCENARIO);
    assert_eq!(fs::read_to_string(&output).unwrap(), SCENARIO_EXPECTED);
}

#[test]
fn test_preview_does_not_write() {
    let file = create_test_file(SCENARIO);

    let (set, summary) = QuestionAnnotator::new()
        .preview(file.path())
        .expect("Preview failed");

    assert_eq!(summary.sentinels_removed, 1);
    assert_eq!(set.to_pretty_json().unwrap(), SCENARIO_EXPECTED);
    assert_eq!(fs::read_to_string(file.path()).unwrap(), SCENARIO);
}

#[test]
fn test_invalid_json_is_parse_error_and_file_untouched() {
    let content = r#"[{"options": [{"text": "সঠিক উত্তর: [খ]"}"#;
    let file = create_test_file(content);

    let err = QuestionAnnotator::new().run(file.path()).unwrap_err();

    assert!(matches!(err, AnswerKeyError::Parse { .. }), "got {err:?}");
    assert_eq!(fs::read_to_string(file.path()).unwrap(), content);
}

#[test]
fn test_top_level_object_is_parse_error() {
    let file = create_test_file(r#"{"questions": []}"#);

    let err = QuestionSet::load(file.path()).unwrap_err();

    assert!(matches!(err, AnswerKeyError::Parse { .. }));
}

#[test]
fn test_invalid_utf8_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[{\"options\": [{\"text\": \"\xff\xfe\"}]}]")
        .unwrap();

    let err = QuestionSet::load(file.path()).unwrap_err();

    assert!(matches!(err, AnswerKeyError::Parse { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.json");

    let err = QuestionAnnotator::new().run(&path).unwrap_err();

    match err {
        AnswerKeyError::Io { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn test_unwritable_output_is_io_error() {
    let file = create_test_file(SCENARIO);
    let dir = TempDir::new().unwrap();

    let err = QuestionAnnotator::new()
        .run_to(file.path(), dir.path())
        .unwrap_err();

    match err {
        AnswerKeyError::Io { path, .. } => assert_eq!(path, dir.path()),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(file.path()).unwrap(), SCENARIO);
}

#[test]
fn test_untouched_numbers_written_verbatim() {
    let content = r#"[
  {
    "id": 123456789012345678901234567890,
    "weight": 1.10,
    "ratio": -0.000000000000000000001,
    "options": [
      {
        "text": "[ক] 5",
        "score": 18446744073709551616
      }
    ]
  }
]"#;
    let file = create_test_file(content);

    let summary = QuestionAnnotator::new().run(file.path()).expect("Run failed");

    assert!(!summary.has_changes());
    assert_eq!(fs::read_to_string(file.path()).unwrap(), content);
}

#[test]
fn test_empty_marker_fails_before_reading() {
    let file = create_test_file(SCENARIO);
    let annotator = QuestionAnnotator::with_config(AnnotatorConfig::new().with_marker(""));

    let err = annotator.run(file.path()).unwrap_err();

    assert!(matches!(err, AnswerKeyError::Config(_)));
    assert_eq!(fs::read_to_string(file.path()).unwrap(), SCENARIO);
}

#[test]
fn test_non_ascii_written_literally() {
    let file = create_test_file(r#"[{"prompt":"প্রশ্ন","options":[]}]"#);

    QuestionAnnotator::new().run(file.path()).expect("Run failed");

    let written = fs::read_to_string(file.path()).unwrap();
    assert!(written.contains("\"prompt\": \"প্রশ্ন\""));
    assert!(!written.contains("\\u"));
}

#[test]
fn test_run_reports_lifecycle_events() {
    let file = create_test_file(SCENARIO);
    let reporter = Arc::new(CollectingReporter::new());

    QuestionAnnotator::new()
        .with_reporter(Arc::clone(&reporter))
        .run(file.path())
        .expect("Run failed");

    let events = reporter.events();
    assert_eq!(
        events.first(),
        Some(&AnnotationEvent::Loaded {
            path: file.path().to_path_buf(),
            questions: 1
        })
    );
    assert!(events.contains(&AnnotationEvent::Saving {
        path: file.path().to_path_buf(),
        sentinels_removed: 1
    }));
    assert_eq!(events.last(), Some(&AnnotationEvent::Done));
}

#[test]
fn test_backup_snapshots_previous_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.json");
    fs::write(&path, SCENARIO).unwrap();

    let first = backup(&path).expect("Backup failed");
    let second = backup(&path).expect("Backup failed");
    QuestionAnnotator::new().run(&path).expect("Run failed");

    assert_ne!(first, second);
    assert!(first.starts_with(history_directory(&path)));
    assert_eq!(fs::read_to_string(&first).unwrap(), SCENARIO);
    assert_eq!(fs::read_to_string(&path).unwrap(), SCENARIO_EXPECTED);
    assert_eq!(list_history(&path).unwrap().len(), 2);
}

#[test]
fn test_backup_of_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.json");

    let err = backup(&path).unwrap_err();

    assert!(matches!(err, AnswerKeyError::Backup { .. }));
}

#[test]
fn test_list_history_without_snapshots() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.json");

    assert!(list_history(&path).unwrap().is_empty());
}
