//! # Session State
//!
//! [`Session`] is everything that changes during one page view: the quiz,
//! the score, the cart, the two pending form fields, the selected game and
//! the simulated viewer count. It is created at mount and dropped at unmount;
//! nothing is persisted.
//!
//! All transitions are synchronous. Operations that produce a user-facing
//! message take the [`NotificationSink`] to deliver it to.
//!
//! ```rust
//! use shared::catalog::CATALOG;
//! use shared::notify::NoticeLog;
//! use shared::session::Session;
//!
//! let notices = NoticeLog::new();
//! let mut session = Session::new();
//!
//! session.submit_answer("Redirect its trajectory");
//! assert_eq!(session.score(), 1);
//!
//! session.purchase_with_currency(&CATALOG[0], &notices);
//! assert_eq!(session.cart().len(), 1);
//! assert_eq!(
//!     notices.last().as_deref(),
//!     Some("You've added Space Shuttle T-Shirt to your cart for $25"),
//! );
//! ```

use rand::Rng;

use crate::catalog::{space_game, CatalogItem, GameId, SpaceGame, SPACE_GAMES};
use crate::commerce::{charge_points, Cart};
use crate::error::CommerceError;
use crate::notify::{Notice, NotificationSink};
use crate::quiz::Quiz;
use crate::viewers::ViewerCount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    score: u32,
    quiz: Quiz,
    cart: Cart,
    email: String,
    comment: String,
    selected_game: &'static SpaceGame,
    viewers: ViewerCount,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            score: 0,
            quiz: Quiz::new(),
            cart: Cart::new(),
            email: String::new(),
            comment: String::new(),
            selected_game: &SPACE_GAMES[0],
            viewers: ViewerCount::default(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary score. Used to set up redemption scenarios.
    pub fn with_score(score: u32) -> Self {
        Self {
            score,
            ..Self::default()
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn selected_game(&self) -> &'static SpaceGame {
        self.selected_game
    }

    pub fn viewers(&self) -> ViewerCount {
        self.viewers
    }

    // ------------------------------------------------------------------
    // Quiz
    // ------------------------------------------------------------------

    /// Record the first quiz answer; later calls are no-ops.
    pub fn submit_answer(&mut self, choice: &str) {
        match self.quiz.submit(choice) {
            Some(true) => {
                self.score = self.score.saturating_add(1);
                log::debug!("quiz answered correctly, score={}", self.score);
            }
            Some(false) => log::debug!("quiz answered incorrectly: {:?}", choice),
            None => log::debug!("quiz already answered, ignoring {:?}", choice),
        }
    }

    // ------------------------------------------------------------------
    // Commerce
    // ------------------------------------------------------------------

    /// Cash path. Always appends exactly one cart entry.
    pub fn purchase_with_currency(&mut self, item: &'static CatalogItem, sink: &dyn NotificationSink) {
        self.cart.push(item);
        log::debug!("added {} for ${}, cart={}", item.name, item.price, self.cart.len());
        Notice::AddedToCart { name: item.name, price: item.price }.send(sink);
    }

    /// Points path. Succeeds iff `score >= item.points`.
    ///
    /// On failure the score and cart are untouched, the "insufficient points"
    /// notice is delivered, and the error is returned to the caller.
    pub fn redeem_with_points(
        &mut self,
        item: &'static CatalogItem,
        sink: &dyn NotificationSink,
    ) -> Result<(), CommerceError> {
        match charge_points(&mut self.score, item) {
            Ok(()) => {
                self.cart.push(item);
                log::debug!("redeemed {} for {} points, score={}", item.name, item.points, self.score);
                Notice::Redeemed { name: item.name, points: item.points }.send(sink);
                Ok(())
            }
            Err(err) => {
                log::warn!("{}", err);
                Notice::InsufficientPoints.send(sink);
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Echo the pending email back to the user and clear the field.
    pub fn submit_email(&mut self, sink: &dyn NotificationSink) {
        let email = std::mem::take(&mut self.email);
        log::debug!("newsletter signup submitted");
        Notice::Subscribed { email }.send(sink);
    }

    /// Echo the pending comment back to the user and clear the field.
    pub fn submit_comment(&mut self, sink: &dyn NotificationSink) {
        let comment = std::mem::take(&mut self.comment);
        log::debug!("comment submitted ({} chars)", comment.chars().count());
        Notice::CommentReceived { comment }.send(sink);
    }

    // ------------------------------------------------------------------
    // Games and live feed
    // ------------------------------------------------------------------

    /// Select a game by id. Unknown ids leave the selection unchanged.
    pub fn select_game(&mut self, id: GameId) {
        match space_game(id) {
            Some(game) => self.selected_game = game,
            None => log::warn!("unknown game id {}", id),
        }
    }

    /// Advance the viewer random walk by one step.
    pub fn tick_viewers<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.viewers.step(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CATALOG, CORRECT_ANSWER, QUIZ_OPTIONS};
    use crate::notify::NoticeLog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_wrong_first_answer_locks_score_at_zero() {
        let mut session = Session::new();
        session.submit_answer("Nuke it");
        assert_eq!(session.score(), 0);
        assert!(session.quiz().is_answered());

        session.submit_answer(CORRECT_ANSWER);
        assert_eq!(session.score(), 0);
        assert_eq!(session.quiz().selected(), Some("Nuke it"));
    }

    #[test]
    fn test_correct_answer_scores_once() {
        let mut session = Session::new();
        session.submit_answer(CORRECT_ANSWER);
        assert_eq!(session.score(), 1);

        for option in QUIZ_OPTIONS {
            session.submit_answer(option);
        }
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_correct_answer_at_max_score_saturates() {
        let mut session = Session::with_score(u32::MAX);
        session.submit_answer(CORRECT_ANSWER);
        assert_eq!(session.score(), u32::MAX);
        assert!(session.quiz().is_correct());
    }

    #[test]
    fn test_purchase_always_appends() {
        let notices = NoticeLog::new();
        let mut session = Session::new();
        session.purchase_with_currency(&CATALOG[2], &notices);
        session.purchase_with_currency(&CATALOG[2], &notices);

        assert_eq!(session.cart().len(), 2);
        assert_eq!(session.score(), 0);
        assert_eq!(
            notices.messages(),
            vec![
                "You've added Planet Sticker Set to your cart for $10",
                "You've added Planet Sticker Set to your cart for $10",
            ]
        );
    }

    #[test]
    fn test_redeem_exact_tie_then_fail() {
        let notices = NoticeLog::new();
        let mug = &CATALOG[1];
        let mut session = Session::with_score(30);

        assert!(session.redeem_with_points(mug, &notices).is_ok());
        assert_eq!(session.score(), 0);
        assert_eq!(session.cart().len(), 1);
        assert_eq!(notices.last().as_deref(), Some("You've purchased Asteroid Mug with 30 points!"));

        let err = session.redeem_with_points(mug, &notices).unwrap_err();
        assert_eq!(err, CommerceError::InsufficientPoints { item: "Asteroid Mug", needed: 30, available: 0 });
        assert_eq!(session.score(), 0);
        assert_eq!(session.cart().len(), 1);
        assert_eq!(notices.last().as_deref(), Some("You don't have enough points for this item."));
        assert_eq!(notices.len(), 2);
    }

    #[test]
    fn test_failed_redeem_changes_nothing() {
        let notices = NoticeLog::new();
        let mut session = Session::new();
        session.submit_answer(CORRECT_ANSWER);
        let before = session.clone();

        assert!(session.redeem_with_points(&CATALOG[0], &notices).is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_cart_length_counts_successes_only() {
        let notices = NoticeLog::new();
        let mut session = Session::with_score(60);
        let mut successes = 0;

        session.purchase_with_currency(&CATALOG[0], &notices);
        successes += 1;
        for item in [&CATALOG[0], &CATALOG[1], &CATALOG[2], &CATALOG[2]] {
            if session.redeem_with_points(item, &notices).is_ok() {
                successes += 1;
            }
        }

        // 60 -> 10 after the shirt; the mug and both sticker sets are refused
        assert_eq!(session.score(), 10);
        assert_eq!(successes, 2);
        assert_eq!(session.cart().len(), successes);
        assert_eq!(notices.len(), 5);
    }

    #[test]
    fn test_forms_echo_and_clear() {
        let notices = NoticeLog::new();
        let mut session = Session::new();

        session.set_email("ground.control@nasa.gov");
        session.submit_email(&notices);
        assert_eq!(session.email(), "");

        session.set_comment("  Not today, rock!  ");
        session.submit_comment(&notices);
        assert_eq!(session.comment(), "");

        assert_eq!(
            notices.messages(),
            vec![
                "Thank you for subscribing with email: ground.control@nasa.gov",
                "Thank you for your comment:   Not today, rock!  ",
            ]
        );
    }

    #[test]
    fn test_select_game() {
        let mut session = Session::new();
        assert_eq!(session.selected_game().id, 1);

        session.select_game(3);
        assert_eq!(session.selected_game().id, 3);

        session.select_game(42);
        assert_eq!(session.selected_game().id, 3);
    }

    #[test]
    fn test_tick_viewers() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = Session::new();
        session.tick_viewers(&mut rng);
        let drift = session.viewers().get() - 1234;
        assert!((-5..=4).contains(&drift));
    }
}
