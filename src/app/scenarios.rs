//! End-to-end runs through the controller with a fake clock and canned batches.

use std::time::Duration;

use web_time::Instant;

use super::*;
use crate::app::session::tests::batch;
use crate::model::Difficulty;

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

fn load(app: &mut QuizApp, questions: Vec<Question>, now: Instant) {
    let ticket = app.begin_request();
    ticket.tx.send((ticket.id, Ok(questions))).unwrap();
    app.poll_questions(now);
}

#[test]
fn three_easy_questions_all_correct() {
    let t0 = Instant::now();
    let mut app = QuizApp::default();
    assert_eq!(app.settings.difficulty, Difficulty::Easy);
    assert_eq!(app.settings.count(), 3);
    load(&mut app, batch(3), t0);

    let mut now = t0;
    for i in 1..=3 {
        now += secs(5);
        app.tick(now);
        app.select_answer(&format!("Right {i}")).unwrap();
        app.check_answer().unwrap();
        app.next_question(now).unwrap();
    }

    let session = app.session().unwrap();
    assert!(session.is_ended());
    assert_eq!(app.score_line().unwrap().final_label(), "Your Score: 3 / 3");
}

#[test]
fn two_questions_left_to_time_out() {
    let t0 = Instant::now();
    let mut app = QuizApp::default();
    app.set_question_count(2);
    load(&mut app, batch(2), t0);

    // one frame per second, nobody touches anything
    for s in 1..=60 {
        app.tick(t0 + secs(s));
    }
    assert_eq!(app.session().unwrap().current_index(), 1);
    assert_eq!(app.session().unwrap().time_remaining(), 60);

    for s in 61..=120 {
        app.tick(t0 + secs(s));
    }

    assert!(app.is_ended());
    assert_eq!(app.session().unwrap().score(), 0);
    assert_eq!(app.session().unwrap().total(), 2);

    // nothing keeps ticking once it is over
    app.tick(t0 + secs(500));
    assert_eq!(app.session().unwrap().current_index(), 2);
}

#[test]
fn changing_difficulty_mid_quiz_starts_over() {
    let t0 = Instant::now();
    let mut app = QuizApp::default();
    let stale = app.begin_request();
    stale.tx.send((stale.id, Ok(batch(3)))).unwrap();
    app.poll_questions(t0);

    app.select_answer("Right 1").unwrap();
    app.check_answer().unwrap();
    app.next_question(t0 + secs(2)).unwrap();
    assert_eq!(app.session().unwrap().score(), 1);

    app.set_difficulty(Difficulty::Medium);
    assert!(app.needs_fetch());
    assert!(app.session().is_none());

    let fresh = app.begin_request();
    assert!(fresh.id > stale.id);

    // a late duplicate of the earlier batch changes nothing
    assert!(!app.on_questions_loaded(stale.id, Ok(batch(3)), t0 + secs(3)));
    assert!(app.session().is_none());

    fresh.tx.send((fresh.id, Ok(batch(3)))).unwrap();
    app.poll_questions(t0 + secs(4));
    let session = app.session().unwrap();
    assert_eq!(session.score(), 0);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.time_remaining(), 60);
}

#[test]
fn shorter_question_time_from_config() {
    let t0 = Instant::now();
    let config = AppConfig::default().with_question_time(secs(10));
    let mut app = QuizApp::new(config);
    load(&mut app, batch(1), t0);

    app.select_answer("Right 1").unwrap();
    app.tick(t0 + secs(10));
    assert!(app.is_ended());
    assert_eq!(app.session().unwrap().score(), 0);
}

#[test]
fn illegal_triggers_leave_state_alone() {
    let t0 = Instant::now();
    let mut app = QuizApp::default();

    // nothing loaded yet: triggers are no-ops
    assert_eq!(app.select_answer("anything"), Ok(()));
    assert_eq!(app.check_answer(), Ok(false));
    assert_eq!(app.next_question(t0), Ok(()));

    load(&mut app, batch(2), t0);
    assert_eq!(
        app.next_question(t0),
        Err(crate::error::SessionError::NotRevealed)
    );
    app.check_answer().unwrap();
    assert_eq!(
        app.check_answer(),
        Err(crate::error::SessionError::AlreadyRevealed)
    );
    assert_eq!(app.session().unwrap().current_index(), 0);
}
