//! Game session orchestration
//!
//! One session per (language, day). The session owns the target word, the
//! evaluated guesses, the keyboard accumulator, and the stats snapshot, and
//! drives the `Loading → Playing → AwaitingBonus → Finished` lifecycle.
//! Persistence and the bonus unlock are delegated to the injected
//! collaborators.

use super::keyboard::KeyboardState;
use super::reward::{RewardGate, RewardOutcome};
use super::stats::GameStats;
use crate::core::{GuessResult, Language, WORD_LEN, Word};
use crate::storage::{GameStore, SavedGame, StoreError};
use crate::wordlists::{WordBank, selector};
use chrono::{Local, NaiveDate, Utc};

/// Normal attempt cap
pub const MAX_ATTEMPTS: usize = 5;

/// Attempt cap once the bonus try has been unlocked
pub const BONUS_ATTEMPTS: usize = 6;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Created but not yet initialized from the store
    Loading,
    /// Accepting letter input and guesses
    Playing,
    /// Fifth attempt missed; waiting on the bonus decision
    AwaitingBonus,
    /// Won or lost; stats recorded
    Finished,
}

/// What a submitted guess did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Buffer was short or invalid, or the session is not accepting guesses;
    /// nothing changed
    Rejected,
    /// Guess recorded, game continues
    InProgress,
    Won,
    /// Last normal attempt missed; bonus decision pending
    AwaitingBonus,
    Lost,
}

/// Resolution of a bonus decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusDecision {
    /// Gate granted the reward; one more attempt allowed
    ExtraTryGranted,
    /// Declined or gate unavailable; game finalized as a loss
    FinishedLost,
    /// Session was not awaiting a decision (e.g. a late decline racing an
    /// already-recorded win); nothing changed
    Ignored,
}

/// The local calendar day, which indexes the daily word
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn iso_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One language's game for one day
pub struct GameSession<S: GameStore, G: RewardGate> {
    language: Language,
    store: S,
    gate: G,
    date: NaiveDate,
    target: Word,
    results: Vec<GuessResult>,
    input: String,
    keyboard: KeyboardState,
    stats: GameStats,
    phase: SessionPhase,
    won: bool,
    started_at_ms: i64,
    ended_at_ms: i64,
    extra_try: bool,
}

impl<S: GameStore, G: RewardGate> GameSession<S, G> {
    /// Create an uninitialized session; call [`initialize`](Self::initialize)
    /// before playing
    ///
    /// # Panics
    /// Will not panic - the fallback placeholder is a valid word.
    pub fn new(language: Language, store: S, gate: G) -> Self {
        Self {
            language,
            store,
            gate,
            date: NaiveDate::default(),
            target: Word::new(selector::FALLBACK).expect("fallback is a valid word"),
            results: Vec::new(),
            input: String::new(),
            keyboard: KeyboardState::new(),
            stats: GameStats::default(),
            phase: SessionPhase::Loading,
            won: false,
            started_at_ms: 0,
            ended_at_ms: 0,
            extra_try: false,
        }
    }

    /// Load stats, resolve today's word, and restore or start the day's game
    ///
    /// A stored game is restored only when both its date and its target word
    /// match today's; anything else is treated as absent and a fresh game
    /// starts. Restoring re-evaluates every saved guess so the board and the
    /// keyboard come back exactly as they were.
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read.
    pub fn initialize(&mut self, bank: &WordBank, date: NaiveDate) -> Result<(), StoreError> {
        self.date = date;
        self.target = selector::daily_word(bank.words(self.language), date);
        self.stats = self.store.load_stats(self.language)?;

        match self.store.load_game(self.language)? {
            Some(saved)
                if saved.date == iso_day(date) && saved.word == self.target.text() =>
            {
                self.restore(&saved);
            }
            _ => self.start_fresh(),
        }
        Ok(())
    }

    fn start_fresh(&mut self) {
        self.results.clear();
        self.input.clear();
        self.keyboard = KeyboardState::new();
        self.won = false;
        self.extra_try = false;
        self.started_at_ms = now_ms();
        self.ended_at_ms = 0;
        self.phase = SessionPhase::Playing;
    }

    fn restore(&mut self, saved: &SavedGame) {
        self.results = saved
            .guesses
            .iter()
            .filter_map(|g| Word::new(g).ok())
            .map(|guess| GuessResult::evaluate(&guess, &self.target))
            .collect();
        self.keyboard = KeyboardState::from_results(self.results.iter());
        self.input.clear();
        self.won = saved.won;
        self.extra_try = saved.extra_try;
        self.started_at_ms = saved.started_at_ms;
        self.ended_at_ms = saved.ended_at_ms;
        self.phase = if saved.game_over {
            SessionPhase::Finished
        } else if !saved.extra_try && self.results.len() >= MAX_ATTEMPTS {
            SessionPhase::AwaitingBonus
        } else {
            SessionPhase::Playing
        };
    }

    /// Append a letter to the input buffer (ignored unless Playing)
    pub fn push_letter(&mut self, c: char) {
        if self.phase == SessionPhase::Playing
            && self.input.len() < WORD_LEN
            && c.is_ascii_alphabetic()
        {
            self.input.push(c.to_ascii_uppercase());
        }
    }

    /// Remove the last letter from the input buffer
    pub fn delete_letter(&mut self) {
        if self.phase == SessionPhase::Playing {
            self.input.pop();
        }
    }

    /// Submit the input buffer as a guess
    ///
    /// A buffer shorter than five letters is rejected silently. The win
    /// check runs before any attempt-cap check, so a correct guess on the
    /// final allowed attempt always wins.
    ///
    /// # Errors
    /// Returns `StoreError` if persisting the updated game fails.
    pub fn submit_guess(&mut self) -> Result<SubmitOutcome, StoreError> {
        if self.phase != SessionPhase::Playing || self.results.len() >= self.attempt_cap() {
            return Ok(SubmitOutcome::Rejected);
        }
        let Ok(guess) = Word::new(self.input.as_str()) else {
            return Ok(SubmitOutcome::Rejected);
        };

        self.input.clear();
        let result = GuessResult::evaluate(&guess, &self.target);
        self.keyboard.absorb(&result);
        let won = result.is_correct();
        self.results.push(result);

        if won {
            self.finalize(true)?;
            return Ok(SubmitOutcome::Won);
        }
        if self.results.len() >= BONUS_ATTEMPTS {
            self.finalize(false)?;
            return Ok(SubmitOutcome::Lost);
        }
        if self.results.len() >= MAX_ATTEMPTS && !self.extra_try {
            self.phase = SessionPhase::AwaitingBonus;
            self.persist()?;
            return Ok(SubmitOutcome::AwaitingBonus);
        }
        self.persist()?;
        Ok(SubmitOutcome::InProgress)
    }

    /// Resolve the pending bonus decision
    ///
    /// Accepting consults the reward gate; a grant raises the attempt cap to
    /// six and play resumes. Declining, or any gate failure, finalizes the
    /// game as a loss. Outside `AwaitingBonus` this is a no-op, which is what
    /// protects a recorded win from a late decline callback.
    ///
    /// # Errors
    /// Returns `StoreError` if persisting the updated game fails.
    pub fn decide_bonus(&mut self, accepted: bool) -> Result<BonusDecision, StoreError> {
        if self.phase != SessionPhase::AwaitingBonus {
            return Ok(BonusDecision::Ignored);
        }

        if accepted
            && self.gate.is_ready()
            && self.gate.request() == RewardOutcome::Granted
        {
            self.extra_try = true;
            self.phase = SessionPhase::Playing;
            self.persist()?;
            Ok(BonusDecision::ExtraTryGranted)
        } else {
            self.finalize(false)?;
            Ok(BonusDecision::FinishedLost)
        }
    }

    /// Record the end of the game exactly once
    fn finalize(&mut self, won: bool) -> Result<(), StoreError> {
        if self.phase == SessionPhase::Finished {
            return Ok(());
        }
        self.phase = SessionPhase::Finished;
        self.won = won;
        self.ended_at_ms = now_ms();
        self.stats = self.stats.updated(won);
        self.store.save_stats(&self.stats, self.language)?;
        self.persist()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let snapshot = self.snapshot();
        self.store.save_game(&snapshot, self.language)
    }

    /// Persisted view of the current game
    #[must_use]
    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            date: iso_day(self.date),
            word: self.target.text().to_string(),
            guesses: self
                .results
                .iter()
                .map(|r| r.guess().text().to_string())
                .collect(),
            game_over: self.phase == SessionPhase::Finished,
            won: self.won,
            started_at_ms: self.started_at_ms,
            ended_at_ms: self.ended_at_ms,
            extra_try: self.extra_try,
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// The secret word; callers reveal it only after the game is over
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn extra_try(&self) -> bool {
        self.extra_try
    }

    /// Current attempt cap (5, or 6 once the bonus is granted)
    #[must_use]
    pub const fn attempt_cap(&self) -> usize {
        if self.extra_try {
            BONUS_ATTEMPTS
        } else {
            MAX_ATTEMPTS
        }
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.attempt_cap().saturating_sub(self.results.len())
    }

    /// Milliseconds from first play to finish, once finished
    #[must_use]
    pub const fn duration_ms(&self) -> Option<i64> {
        if self.ended_at_ms > 0 {
            Some(self.ended_at_ms - self.started_at_ms)
        } else {
            None
        }
    }

    /// Access the underlying store (e.g. to share it with a later session)
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::reward::{InstantReward, NoReward};
    use crate::storage::MemoryStore;

    fn day0() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn test_bank() -> WordBank {
        let mut bank = WordBank::empty();
        bank.set_words(
            Language::English,
            ["TABLE", "CHAIR", "PLANT"]
                .iter()
                .map(|w| Word::new(*w).unwrap())
                .collect(),
        );
        bank
    }

    fn started<G: RewardGate>(gate: G) -> GameSession<MemoryStore, G> {
        let mut session = GameSession::new(Language::English, MemoryStore::new(), gate);
        session.initialize(&test_bank(), day0()).unwrap();
        session
    }

    fn submit<S: GameStore, G: RewardGate>(
        session: &mut GameSession<S, G>,
        word: &str,
    ) -> SubmitOutcome {
        for c in word.chars() {
            session.push_letter(c);
        }
        session.submit_guess().unwrap()
    }

    #[test]
    fn new_session_is_loading() {
        let session: GameSession<MemoryStore, InstantReward> =
            GameSession::new(Language::English, MemoryStore::new(), InstantReward);
        assert_eq!(session.phase(), SessionPhase::Loading);
    }

    #[test]
    fn initialize_starts_playing_with_daily_word() {
        let session = started(InstantReward);
        assert_eq!(session.phase(), SessionPhase::Playing);
        // Day 0 maps to the first list entry
        assert_eq!(session.target().text(), "TABLE");
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn short_guess_is_rejected_silently() {
        let mut session = started(InstantReward);
        session.push_letter('C');
        session.push_letter('A');

        assert_eq!(session.submit_guess().unwrap(), SubmitOutcome::Rejected);
        assert_eq!(session.results().len(), 0);
        assert_eq!(session.input(), "CA"); // Buffer untouched
    }

    #[test]
    fn input_buffer_caps_at_word_length() {
        let mut session = started(InstantReward);
        for c in "ABCDEFGH".chars() {
            session.push_letter(c);
        }
        assert_eq!(session.input(), "ABCDE");

        session.delete_letter();
        assert_eq!(session.input(), "ABCD");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut session = started(InstantReward);
        session.push_letter('1');
        session.push_letter('!');
        session.push_letter('a');
        assert_eq!(session.input(), "A");
    }

    #[test]
    fn first_guess_win() {
        let mut session = started(InstantReward);

        assert_eq!(submit(&mut session, "TABLE"), SubmitOutcome::Won);
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert!(session.won());
        assert_eq!(
            *session.stats(),
            GameStats {
                total_played: 1,
                wins: 1,
                current_streak: 1,
                max_streak: 1,
            }
        );
        assert!(session.duration_ms().is_some());
    }

    #[test]
    fn wrong_guesses_keep_playing_until_fifth() {
        let mut session = started(InstantReward);

        for _ in 0..4 {
            assert_eq!(submit(&mut session, "CHAIR"), SubmitOutcome::InProgress);
        }
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.remaining_attempts(), 1);
    }

    #[test]
    fn win_on_final_attempt_beats_cap_check() {
        let mut session = started(InstantReward);

        for _ in 0..4 {
            submit(&mut session, "CHAIR");
        }
        assert_eq!(submit(&mut session, "TABLE"), SubmitOutcome::Won);
        assert!(session.won());
    }

    #[test]
    fn fifth_miss_awaits_bonus_decision() {
        let mut session = started(InstantReward);

        for _ in 0..4 {
            submit(&mut session, "CHAIR");
        }
        assert_eq!(submit(&mut session, "CHAIR"), SubmitOutcome::AwaitingBonus);
        assert_eq!(session.phase(), SessionPhase::AwaitingBonus);

        // Scoring pauses: guesses are rejected until the decision is made
        assert_eq!(submit(&mut session, "PLANT"), SubmitOutcome::Rejected);
        // Stats untouched while the game is undecided
        assert_eq!(session.stats().total_played, 0);
    }

    #[test]
    fn declining_bonus_finalizes_loss() {
        let mut session = started(InstantReward);
        for _ in 0..5 {
            submit(&mut session, "CHAIR");
        }

        assert_eq!(
            session.decide_bonus(false).unwrap(),
            BonusDecision::FinishedLost
        );
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert!(!session.won());
        assert_eq!(session.stats().total_played, 1);
        assert_eq!(session.stats().current_streak, 0);
    }

    #[test]
    fn unavailable_gate_finalizes_loss_even_when_accepted() {
        let mut session = started(NoReward);
        for _ in 0..5 {
            submit(&mut session, "CHAIR");
        }

        assert_eq!(
            session.decide_bonus(true).unwrap(),
            BonusDecision::FinishedLost
        );
        assert!(!session.won());
    }

    #[test]
    fn granted_bonus_allows_sixth_attempt() {
        let mut session = started(InstantReward);
        for _ in 0..5 {
            submit(&mut session, "CHAIR");
        }

        assert_eq!(
            session.decide_bonus(true).unwrap(),
            BonusDecision::ExtraTryGranted
        );
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.attempt_cap(), BONUS_ATTEMPTS);
        assert_eq!(session.remaining_attempts(), 1);
    }

    #[test]
    fn sixth_miss_is_a_loss() {
        let mut session = started(InstantReward);
        for _ in 0..5 {
            submit(&mut session, "CHAIR");
        }
        session.decide_bonus(true).unwrap();

        assert_eq!(submit(&mut session, "CHAIR"), SubmitOutcome::Lost);
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert_eq!(session.stats().total_played, 1);
    }

    #[test]
    fn sixth_attempt_win_is_a_win() {
        let mut session = started(InstantReward);
        for _ in 0..5 {
            submit(&mut session, "CHAIR");
        }
        session.decide_bonus(true).unwrap();

        assert_eq!(submit(&mut session, "TABLE"), SubmitOutcome::Won);
        assert!(session.won());
        assert_eq!(session.stats().wins, 1);
    }

    #[test]
    fn finalize_is_idempotent() {
        let mut session = started(InstantReward);
        submit(&mut session, "TABLE");
        let stats_after_win = *session.stats();

        // A late decline callback must not overwrite the recorded win
        assert_eq!(session.decide_bonus(false).unwrap(), BonusDecision::Ignored);
        assert!(session.won());
        assert_eq!(*session.stats(), stats_after_win);

        // Further guesses are rejected
        assert_eq!(submit(&mut session, "CHAIR"), SubmitOutcome::Rejected);
    }

    #[test]
    fn double_decline_records_one_loss() {
        let mut session = started(InstantReward);
        for _ in 0..5 {
            submit(&mut session, "CHAIR");
        }

        session.decide_bonus(false).unwrap();
        assert_eq!(session.decide_bonus(false).unwrap(), BonusDecision::Ignored);
        assert_eq!(session.stats().total_played, 1);
    }

    #[test]
    fn restore_resumes_mid_game() {
        let mut session = started(InstantReward);
        submit(&mut session, "CHAIR");
        submit(&mut session, "PLANT");
        let store = session.store().clone();

        let mut resumed = GameSession::new(Language::English, store, InstantReward);
        resumed.initialize(&test_bank(), day0()).unwrap();

        assert_eq!(resumed.phase(), SessionPhase::Playing);
        assert_eq!(resumed.results().len(), 2);
        assert_eq!(resumed.results()[0].guess().text(), "CHAIR");
        // Keyboard rebuilt from the saved guesses
        assert_ne!(
            resumed.keyboard().verdict(b'T'),
            crate::core::Verdict::Empty
        );
    }

    #[test]
    fn restore_resumes_awaiting_bonus() {
        let mut session = started(InstantReward);
        for _ in 0..5 {
            submit(&mut session, "CHAIR");
        }
        let store = session.store().clone();

        let mut resumed = GameSession::new(Language::English, store, InstantReward);
        resumed.initialize(&test_bank(), day0()).unwrap();
        assert_eq!(resumed.phase(), SessionPhase::AwaitingBonus);
    }

    #[test]
    fn restore_keeps_finished_game_finished() {
        let mut session = started(InstantReward);
        submit(&mut session, "TABLE");
        let store = session.store().clone();

        let mut resumed = GameSession::new(Language::English, store, InstantReward);
        resumed.initialize(&test_bank(), day0()).unwrap();

        assert_eq!(resumed.phase(), SessionPhase::Finished);
        assert!(resumed.won());
        // Finishing again must not double-count stats
        assert_eq!(resumed.stats().total_played, 1);
    }

    #[test]
    fn stale_date_starts_fresh() {
        let mut session = started(InstantReward);
        submit(&mut session, "CHAIR");
        let store = session.store().clone();

        let next_day = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let mut resumed = GameSession::new(Language::English, store, InstantReward);
        resumed.initialize(&test_bank(), next_day).unwrap();

        assert_eq!(resumed.phase(), SessionPhase::Playing);
        assert_eq!(resumed.results().len(), 0);
        assert_eq!(resumed.target().text(), "CHAIR"); // Day 1 entry
    }

    #[test]
    fn empty_bank_plays_fallback_word() {
        let mut session =
            GameSession::new(Language::French, MemoryStore::new(), InstantReward);
        session.initialize(&WordBank::empty(), day0()).unwrap();

        assert_eq!(session.target().text(), selector::FALLBACK);
        assert_eq!(submit(&mut session, "ABCDE"), SubmitOutcome::Won);
    }

    #[test]
    fn snapshot_round_trips_through_store() {
        let mut session = started(InstantReward);
        submit(&mut session, "CHAIR");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.date, "2026-01-01");
        assert_eq!(snapshot.word, "TABLE");
        assert_eq!(snapshot.guesses, vec!["CHAIR".to_string()]);
        assert!(!snapshot.game_over);

        let stored = session.store().load_game(Language::English).unwrap();
        assert_eq!(stored, Some(snapshot));
    }
}
