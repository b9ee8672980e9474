mod common;

use common::{complete_basic_info, create_test_wizard, open_wizard};
use regimen_core::{
    models::{ExerciseAssignmentDraft, ExerciseConfiguration},
    params::BasicInfo,
    Action, BuilderError, WizardStep,
};

#[test]
fn test_session_starts_empty() {
    let (_temp_dir, wizard) = create_test_wizard();

    let draft = wizard.state();
    assert_eq!(draft.name, "");
    assert_eq!(draft.duration_weeks, 4);
    assert_eq!(draft.step(), WizardStep::ProgramInfo);
    assert!(!draft.is_valid);
    assert!(!draft.is_dirty);
    assert!(!wizard.has_saved_draft());
}

#[test]
fn test_session_restores_after_reopen() {
    let (temp_dir, mut wizard) = create_test_wizard();
    wizard.dispatch_all([
        Action::SetBasicInfo(BasicInfo {
            duration_weeks: Some(3),
            ..complete_basic_info()
        }),
        Action::NextStep,
        Action::RemoveWeek(1),
        Action::NextStep,
    ]);
    let before = wizard.state().clone();
    drop(wizard);

    let reopened = open_wizard(&temp_dir);

    assert!(reopened.has_saved_draft());
    assert!(reopened.saved_at().is_some());
    assert_eq!(reopened.state(), &before);
    assert_eq!(reopened.state().weeks.len(), 2);
    assert_eq!(reopened.state().step(), WizardStep::Workouts);
}

#[test]
fn test_full_wizard_flow_to_submission() {
    let (temp_dir, mut wizard) = create_test_wizard();

    assert!(wizard.dispatch(Action::SetBasicInfo(complete_basic_info())).is_valid);
    wizard.dispatch(Action::NextStep);

    let draft = wizard.dispatch(Action::SetBasicInfo(BasicInfo {
        duration_weeks: Some(2),
        ..Default::default()
    }));
    assert_eq!(draft.weeks.len(), 2);
    assert!(draft.is_valid);
    wizard.dispatch(Action::NextStep);

    assert!(!wizard.state().is_valid);
    wizard.dispatch(Action::AddWorkout {
        week_index: 0,
        workout: None,
    });
    assert!(wizard.state().is_valid);
    wizard.dispatch(Action::NextStep);

    assert!(!wizard.state().is_valid);
    wizard.dispatch_all([
        Action::SetCurrentWeek(0),
        Action::SetCurrentWorkout(0),
        Action::AddExercises(vec![
            ExerciseAssignmentDraft::new("squat")
                .with_configuration(ExerciseConfiguration::working(1, "5")),
            ExerciseAssignmentDraft::new("bench"),
        ]),
        Action::ReorderExercises { from: 1, to: 0 },
        Action::CommitExercises,
    ]);
    assert!(wizard.state().is_valid);
    wizard.dispatch(Action::NextStep);
    assert_eq!(wizard.state().step(), WizardStep::Preview);

    let submission = wizard.finalize().expect("Draft should be ready");
    assert_eq!(submission.duration_weeks, 2);
    let exercises = &submission.weeks[0].workouts[0].exercises;
    assert_eq!(exercises[0].exercise_id, "bench");
    assert_eq!(exercises[1].exercise_id, "squat");
    assert_eq!(exercises[1].order_index, 1);

    assert!(!wizard.has_saved_draft());
    let reopened = open_wizard(&temp_dir);
    assert!(!reopened.has_saved_draft());
    assert!(reopened.state().weeks.is_empty());
}

#[test]
fn test_finalize_reports_every_issue() {
    let (_temp_dir, mut wizard) = create_test_wizard();
    wizard.dispatch(Action::SetBasicInfo(BasicInfo {
        duration_weeks: Some(1),
        ..complete_basic_info()
    }));

    match wizard.finalize() {
        Err(BuilderError::NotReady { issues }) => assert_eq!(
            issues,
            vec![
                "at least one workout is required".to_string(),
                "at least one exercise is required".to_string()
            ]
        ),
        other => panic!("unexpected result {other:?}"),
    }
    assert!(wizard.has_saved_draft());
}

#[test]
fn test_discard_clears_storage() {
    let (temp_dir, mut wizard) = create_test_wizard();
    wizard.dispatch(Action::AddWeek(None));
    wizard.discard();
    drop(wizard);

    let reopened = open_wizard(&temp_dir);
    assert!(!reopened.has_saved_draft());
    assert_eq!(reopened.state().duration_weeks, 4);
}

#[test]
fn test_json_actions_drive_the_session() {
    let (_temp_dir, mut wizard) = create_test_wizard();
    let actions = [
        r#"{"type": "SET_BASIC_INFO", "payload": {"name": "Json", "durationWeeks": 2}}"#,
        r#"{"type": "DUPLICATE_WEEK", "payload": 0}"#,
        r#"{"type": "UPDATE_WEEK", "payload": {"index": 1, "week": {"weekNumber": 9, "name": "Heavy", "isDeload": false, "workouts": []}}}"#,
        r#"{"type": "SET_STEP", "payload": 42}"#,
    ];

    for json in actions {
        let action: Action = serde_json::from_str(json).expect("Failed to parse action");
        wizard.dispatch(action);
    }

    let draft = wizard.state();
    assert_eq!(draft.name, "Json");
    assert_eq!(draft.weeks.len(), 3);
    assert_eq!(draft.weeks[1].name, "Heavy");
    assert_eq!(draft.weeks[1].week_number, 2);
    assert_eq!(draft.weeks[2].name, "Week 1 (Copy)");
    assert_eq!(draft.duration_weeks, 3);
    assert_eq!(draft.current_step, 5);
}
