//! Integration tests for raqt

use raqt::{
    AnswerValue, QuestionId, Session, SurveyBackend, SurveyEvent, TestBackend, aqt,
    export_snapshot,
};

#[test]
fn test_every_question_prefix_matches_exactly_one_category() {
    let catalog = aqt();
    for question in catalog.questions() {
        let letter = question.category().unwrap();
        let matching = catalog
            .categories()
            .iter()
            .filter(|c| c.letter() == letter)
            .count();
        assert_eq!(matching, 1, "question {}", question.id());
    }
}

#[test]
fn test_category_questions_are_exactly_its_prefix() {
    let catalog = aqt();
    for category in catalog.categories() {
        let by_category: Vec<_> = catalog.questions_in(category.letter()).collect();
        let by_prefix: Vec<_> = catalog
            .questions()
            .iter()
            .filter(|q| q.id().as_str().starts_with(category.letter()))
            .collect();
        assert_eq!(by_category, by_prefix);
    }
}

#[test]
fn test_set_then_read_back_returns_latest_value() {
    let mut session = Session::new();
    for value in [AnswerValue::Yes, AnswerValue::No, AnswerValue::NotApplicable] {
        session.apply(SurveyEvent::SetAnswer {
            id: "E2".into(),
            value,
            justification: None,
        });
        let in_category: Vec<_> = session.answers().answers_for_category('E').collect();
        assert_eq!(in_category.len(), 1);
        assert_eq!(in_category[0].1.value(), value);
    }
}

#[test]
fn test_export_without_questions_has_no_prompt_text() {
    let mut session = Session::new();
    TestBackend::new()
        .with_answer("A1", AnswerValue::Yes)
        .with_answer("N1", AnswerValue::No)
        .with_na("J3", "out of scope")
        .collect(aqt(), &mut session)
        .unwrap();

    let text = session.snapshot(aqt()).to_json_pretty().unwrap();
    for question in aqt().questions() {
        assert!(
            !text.contains(question.prompt()),
            "prompt of {} leaked into export",
            question.id()
        );
    }
}

#[test]
fn test_export_with_questions_has_every_category_name() {
    let session = Session::new();
    let snapshot = export_snapshot(session.answers(), aqt(), true);
    let text = snapshot.to_json_pretty().unwrap();
    for category in aqt().categories() {
        assert!(text.contains(category.name()), "missing {}", category.name());
    }
}

#[test]
fn test_single_answer_export() {
    let mut session = Session::new();
    session.apply(SurveyEvent::SetAnswer {
        id: "A1".into(),
        value: AnswerValue::Yes,
        justification: None,
    });

    let snapshot = session.snapshot(aqt());
    assert_eq!(snapshot.answers.len(), 1);
    assert_eq!(snapshot.answers[&QuestionId::new("A1")], AnswerValue::Yes);
    assert!(snapshot.answers.keys().all(|id| id.belongs_to('A')));

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json, serde_json::json!({ "answers": { "A1": "yes" } }));
}

#[test]
fn test_na_export_with_questions() {
    let mut session = Session::new();
    session.apply(SurveyEvent::SetAnswer {
        id: "G2".into(),
        value: AnswerValue::NotApplicable,
        justification: Some("insufficient data".into()),
    });
    session.apply(SurveyEvent::SetIncludeQuestions(true));

    let snapshot = session.snapshot(aqt());
    let g2 = QuestionId::new("G2");
    assert_eq!(snapshot.answers[&g2], AnswerValue::NotApplicable);
    assert_eq!(snapshot.justifications[&g2], "insufficient data");
    assert_eq!(
        snapshot.questions.as_ref().unwrap()[&g2],
        aqt().prompt(&g2).unwrap()
    );

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["answers"]["G2"], "NA");
    assert_eq!(json["justifications"]["G2"], "insufficient data");
    assert_eq!(json["categories"]["G"], "Basis of Knowledge");
}

#[test]
fn test_resubmission_overwrites() {
    let mut session = Session::new();
    TestBackend::new()
        .with_na("H3", "no data")
        .collect(aqt(), &mut session)
        .unwrap();
    TestBackend::new()
        .with_answer("H3", AnswerValue::Yes)
        .collect(aqt(), &mut session)
        .unwrap();

    let answer = session.answers().get(&QuestionId::new("H3")).unwrap();
    assert_eq!(answer.value(), AnswerValue::Yes);
    assert_eq!(answer.justification(), None);
}

#[test]
fn test_strict_backend_errors_propagate() -> anyhow::Result<()> {
    let mut session = Session::new();
    let err = TestBackend::new()
        .strict()
        .with_answer("Z1", AnswerValue::Yes)
        .collect(aqt(), &mut session)
        .map_err(anyhow::Error::from)
        .unwrap_err();
    assert!(err.to_string().contains("Z1"));
    assert!(session.answers().is_empty());

    TestBackend::new()
        .strict()
        .with_answer("A1", AnswerValue::Yes)
        .collect(aqt(), &mut session)?;
    assert_eq!(session.answers().len(), 1);
    Ok(())
}
