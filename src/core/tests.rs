#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::{TimeZone, Utc};

    use crate::core::consent::{ConsentManager, MemoryStore};
    use crate::core::contact::{ContactField, ContactFormController, ContactFormState, FormStatus, SubmitOutcome};
    use crate::core::demos::{email_draft, meeting, profile_research};
    use crate::core::sequencer::{DemoRun, DemoScript, DemoStage, RevealTrack, TimelineScheduler};
    use crate::core::timer::ManualTimer;

    type Cell<S> = Rc<RefCell<DemoRun<S>>>;

    fn bind<S: DemoStage>(script: DemoScript<S>) -> (TimelineScheduler<S, Cell<S>, ManualTimer>, Cell<S>, ManualTimer) {
        let state = Rc::new(RefCell::new(TimelineScheduler::<S, Cell<S>, ManualTimer>::initial_run(&script)));
        let timer = ManualTimer::new();
        let scheduler = TimelineScheduler::new(script, state.clone(), timer.clone());
        (scheduler, state, timer)
    }

    fn assert_pristine<S: DemoStage>(run: &DemoRun<S>, first: S) {
        assert_eq!(run.stage(), first);
        assert!(run.revealed().is_empty());
        assert_eq!(run.progress(), 0);
        assert!(!run.is_running());
    }

    // ========================================================================
    // Sequencer properties, checked against every shipped demo
    // ========================================================================

    fn check_reset_restores_first_stage<S: DemoStage>(script: DemoScript<S>) {
        let first = script.machine().first();
        let midpoint = u64::from(script.timeline().duration_ms() / 2);
        let (scheduler, state, timer) = bind(script);

        scheduler.start();
        timer.advance(midpoint);
        scheduler.reset();
        assert_pristine(&state.borrow(), first);

        timer.run_to_end();
        assert_pristine(&state.borrow(), first);
    }

    #[test]
    fn test_reset_restores_first_stage_for_every_demo() {
        check_reset_restores_first_stage(meeting::script().unwrap());
        check_reset_restores_first_stage(profile_research::script().unwrap());
        check_reset_restores_first_stage(email_draft::script().unwrap());
    }

    fn check_double_start<S: DemoStage>(script: DemoScript<S>) {
        let authored = script.timeline().reveal_count();
        let (scheduler, state, timer) = bind(script);

        assert!(scheduler.start());
        assert!(!scheduler.start());
        timer.advance(10);
        assert!(!scheduler.start());
        timer.run_to_end();

        assert_eq!(state.borrow().revealed().len(), authored);
    }

    #[test]
    fn test_rapid_double_start_never_double_schedules() {
        check_double_start(meeting::script().unwrap());
        check_double_start(profile_research::script().unwrap());
        check_double_start(email_draft::script().unwrap());
    }

    fn check_track_completes_in_order<S: DemoStage>(script: DemoScript<S>, track: RevealTrack<S>) {
        let (scheduler, state, timer) = bind(script);
        scheduler.start();
        timer.run_to_end();

        let run = state.borrow();
        assert_eq!(track.revealed_count(&run), track.len());
        assert!(track.is_complete(&run));

        let order: Vec<_> = run
            .revealed()
            .iter()
            .copied()
            .filter(|k| track.keys().contains(k))
            .collect();
        assert_eq!(order, track.keys());
    }

    #[test]
    fn test_every_track_reveals_all_items_in_authored_order() {
        check_track_completes_in_order(meeting::script().unwrap(), meeting::LINK_TRACK);
        check_track_completes_in_order(meeting::script().unwrap(), meeting::TRANSCRIPT_TRACK);
        check_track_completes_in_order(meeting::script().unwrap(), meeting::SUMMARY_TRACK);
        check_track_completes_in_order(profile_research::script().unwrap(), profile_research::SOURCE_TRACK);
        check_track_completes_in_order(profile_research::script().unwrap(), profile_research::FIELD_TRACK);
        check_track_completes_in_order(email_draft::script().unwrap(), email_draft::SECTION_TRACK);
    }

    fn check_cancel_freezes<S: DemoStage>(script: DemoScript<S>, at_ms: u64) {
        let (scheduler, state, timer) = bind(script);
        scheduler.start();
        timer.advance(at_ms);

        scheduler.cancel();
        let frozen = state.borrow().clone();
        timer.run_to_end();

        let run = state.borrow();
        assert_eq!(run.stage(), frozen.stage());
        assert_eq!(run.revealed(), frozen.revealed());
        assert_eq!(run.progress(), frozen.progress());
        assert!(!run.is_running());
    }

    #[test]
    fn test_cancel_mid_run_freezes_state() {
        for at_ms in [0, 4_000, 11_700, 14_000] {
            check_cancel_freezes(meeting::script().unwrap(), at_ms);
        }
        check_cancel_freezes(profile_research::script().unwrap(), 7_500);
        check_cancel_freezes(email_draft::script().unwrap(), 10_000);
    }

    #[test]
    fn test_meeting_demo_walkthrough() {
        use meeting::MeetingStage;

        let (scheduler, state, timer) = bind(meeting::script().unwrap());
        scheduler.start();

        timer.advance(6_000);
        assert_eq!(state.borrow().stage(), MeetingStage::LiveTranscription);
        assert_eq!(meeting::TRANSCRIPT_TRACK.visible(&state.borrow()), vec!["line-1"]);
        assert!(meeting::TRANSCRIPT_TRACK.is_typing(&state.borrow()));

        timer.advance(5_800);
        assert_eq!(state.borrow().stage(), MeetingStage::ProofUpload);
        assert_eq!(state.borrow().progress(), 50);
        assert!(!meeting::TRANSCRIPT_TRACK.is_typing(&state.borrow()));

        timer.run_to_end();
        assert_eq!(state.borrow().stage(), MeetingStage::Dashboard);
        assert_eq!(state.borrow().progress(), 100);
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_email_demo_replay_mid_delivery() {
        use email_draft::EmailStage;

        let (scheduler, state, timer) = bind(email_draft::script().unwrap());
        scheduler.start();
        timer.advance(10_000);
        assert_eq!(state.borrow().stage(), EmailStage::Delivery);
        assert_eq!(state.borrow().progress(), 30);

        assert!(scheduler.replay());
        timer.advance(1_000);
        assert_eq!(state.borrow().stage(), EmailStage::Contact);
        assert_eq!(state.borrow().revealed(), &[email_draft::SUBJECT_KEY]);
        assert_eq!(state.borrow().progress(), 0);

        timer.run_to_end();
        assert_eq!(state.borrow().stage(), EmailStage::Complete);
    }

    #[test]
    fn test_research_demo_selects_candidate_during_disambiguation() {
        use profile_research::ResearchStage;

        let (scheduler, state, timer) = bind(profile_research::script().unwrap());
        scheduler.start();

        timer.advance(5_499);
        assert_eq!(state.borrow().stage(), ResearchStage::Disambiguating);
        assert!(!state.borrow().is_revealed(profile_research::SELECTED_CANDIDATE_KEY));

        timer.advance(1);
        assert!(state.borrow().is_revealed(profile_research::SELECTED_CANDIDATE_KEY));
    }

    // ========================================================================
    // Contact form and consent scenarios
    // ========================================================================

    #[test]
    fn test_contact_form_scenarios() {
        let state = Rc::new(RefCell::new(ContactFormState::default()));
        let timer = ManualTimer::new();
        let controller = ContactFormController::new(state.clone(), timer.clone());

        controller.edit(ContactField::Email, "not-an-email".into());
        controller.edit(ContactField::Message, "Hi".into());
        let SubmitOutcome::Rejected(errors) = controller.submit() else {
            panic!("invalid form was accepted");
        };
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key(&ContactField::Name));
        assert!(errors.contains_key(&ContactField::Email));
        assert_eq!(state.borrow().status, FormStatus::Idle);

        controller.edit(ContactField::Name, "Jane".into());
        controller.edit(ContactField::Email, "jane@co.com".into());
        assert_eq!(controller.submit(), SubmitOutcome::Accepted);
        assert_eq!(state.borrow().status, FormStatus::Sending);

        timer.advance(1_500);
        assert_eq!(state.borrow().status, FormStatus::Success);

        timer.advance(5_000);
        let state = state.borrow();
        assert_eq!(state.status, FormStatus::Idle);
        assert!(state.form.name.is_empty());
        assert!(state.form.email.is_empty());
        assert!(state.form.message.is_empty());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_consent_across_visits() {
        let browser = MemoryStore::default();
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

        let first_visit = ConsentManager::new(browser.clone());
        assert!(first_visit.should_prompt());

        let saved = first_visit.accept_all(now).unwrap();
        assert!(saved.essential && saved.analytics && saved.marketing);

        let second_visit = ConsentManager::new(browser);
        assert!(!second_visit.should_prompt());
        assert_eq!(second_visit.load().unwrap(), Some(saved));
    }
}
