//! Poll entity models.
//!
//! A poll belongs to exactly one notice. Options live in their own table;
//! votes live in `poll_votes` whose primary key `(poll_id, user_id)` is the
//! database-level encoding of the "at most one vote per user per poll"
//! invariant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A poll attached to a notice.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Poll {
    /// Unique poll identifier.
    pub id: Uuid,
    /// The notice this poll is attached to (one poll per notice).
    pub notice_id: Uuid,
    /// The poll question.
    pub question: String,
    /// Voting closes at this time.
    pub end_date: DateTime<Utc>,
    /// When the poll was created.
    pub created_at: DateTime<Utc>,
}

impl Poll {
    /// Whether the poll is still accepting votes at `now`.
    ///
    /// Liveness is computed from `end_date` at each vote attempt; it is
    /// not a stored state.
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        now <= self.end_date
    }
}

/// One selectable option of a poll.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PollOption {
    /// Unique option identifier.
    pub id: Uuid,
    /// The owning poll.
    pub poll_id: Uuid,
    /// Display text.
    pub text: String,
    /// Stable display ordering.
    pub position: i32,
}

/// A recorded vote. At most one row per `(poll_id, user_id)`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PollVote {
    pub poll_id: Uuid,
    pub option_id: Uuid,
    pub user_id: Uuid,
}

/// An option together with the ids of the users who voted for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollOptionWithVotes {
    pub id: Uuid,
    pub text: String,
    pub position: i32,
    /// User ids currently voting for this option.
    pub votes: Vec<Uuid>,
}

/// Full poll view returned by the API: the poll plus its options and votes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollWithOptions {
    pub id: Uuid,
    pub notice_id: Uuid,
    pub question: String,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub options: Vec<PollOptionWithVotes>,
}

impl PollWithOptions {
    /// Assemble the API view from its table rows.
    pub fn assemble(poll: Poll, options: Vec<PollOption>, votes: Vec<PollVote>) -> Self {
        let options = options
            .into_iter()
            .map(|opt| PollOptionWithVotes {
                votes: votes
                    .iter()
                    .filter(|v| v.option_id == opt.id)
                    .map(|v| v.user_id)
                    .collect(),
                id: opt.id,
                text: opt.text,
                position: opt.position,
            })
            .collect();

        Self {
            id: poll.id,
            notice_id: poll.notice_id,
            question: poll.question,
            end_date: poll.end_date,
            created_at: poll.created_at,
            options,
        }
    }
}
