//! Session coordination between two remote participants.
//!
//! Every operation is a read-modify-write against the [`SessionStore`]:
//! load the record, apply a pure engine transition, then compare-and-swap
//! it back. A lost race reloads and reapplies. The submission that
//! completes a round's pair of choices also resolves that round inside the
//! same swap, so a round is finalized exactly once however many
//! participants race on it.

use tracing::{debug, info, warn};

use crate::cards::Card;
use crate::core::{GameConfig, Play, PlayerId, RoundRecord, Turn};
use crate::error::{ConfigError, LobbyError, StoreError};
use crate::games::ecard::{ECard, PlayerView};
use crate::identity::PlayerKey;
use crate::rules::RulesEngine;
use crate::store::{SessionId, SessionRecord, SessionStore, Versioned};

/// Attempts per operation before giving up with [`LobbyError::Contention`].
pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// Join-code collisions tolerated while creating a session.
const CREATE_ATTEMPTS: u32 = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LobbyConfig {
    /// Rules for newly created sessions.
    pub game: GameConfig,
    max_attempts: u32,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl LobbyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Clamped to at least one attempt.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Compare-and-swap attempts per operation, never zero.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

/// Result of a successful submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Choice recorded; the opponent has not chosen yet.
    Waiting,
    /// This choice completed the pair and the round was resolved.
    Resolved(RoundRecord),
}

/// What a read-modify-write step wants done with the record.
enum Change<T> {
    Keep(T),
    Write(SessionRecord, T),
}

pub struct Lobby<S> {
    store: S,
    config: LobbyConfig,
}

impl<S: SessionStore> Lobby<S> {
    pub fn new(store: S, config: LobbyConfig) -> Result<Self, ConfigError> {
        config.game.validate()?;
        Ok(Self { store, config })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }

    /// Open a new session with `host` in the first seat.
    pub fn create(&self, host: &PlayerKey) -> Result<(SessionId, PlayerId), LobbyError> {
        let record = SessionRecord::new(self.config.game.clone(), host.clone());

        let mut attempt = 0;
        loop {
            attempt += 1;
            let id = SessionId::generate();
            match self.store.insert(&id, &record) {
                Ok(_) => {
                    info!(session = %id, host = %host, "session created");
                    return Ok((id, PlayerId::FIRST));
                }
                Err(StoreError::AlreadyExists(taken)) if attempt < CREATE_ATTEMPTS => {
                    warn!(session = %taken, attempt, "join code collision, regenerating");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Take a seat in `id`. A key that is already seated gets its seat back.
    pub fn join(&self, id: &SessionId, key: &PlayerKey) -> Result<PlayerId, LobbyError> {
        self.update(id, |mut record| {
            if let Some(seat) = record.seat_of(key) {
                return Ok(Change::Keep((seat, false)));
            }

            let seat = record
                .free_seat()
                .ok_or_else(|| LobbyError::SessionFull(id.clone()))?;
            record.seats[seat] = Some(key.clone());
            Ok(Change::Write(record, (seat, true)))
        })
        .map(|(seat, newly_seated)| {
            if newly_seated {
                info!(session = %id, player = %seat, "player seated");
            } else {
                debug!(session = %id, player = %seat, "player rejoined");
            }
            seat
        })
    }

    /// Commit `card` from `hand_index` for the player holding `key`.
    ///
    /// `turn` is the attempt the player was shown (see [`PlayerView::turn`]).
    /// A choice for an attempt that has since been resolved is rejected with
    /// [`LobbyError::StaleTurn`], so a resent request never becomes a choice
    /// in a later attempt.
    pub fn submit(
        &self,
        id: &SessionId,
        key: &PlayerKey,
        turn: Turn,
        card: Card,
        hand_index: usize,
    ) -> Result<SubmitOutcome, LobbyError> {
        self.update(id, |mut record| {
            let player = Self::seat(id, &record, key)?;
            if !record.is_full() {
                return Err(LobbyError::WaitingForOpponent);
            }
            let current = record.state.turn();
            if current != turn {
                return Err(LobbyError::StaleTurn {
                    submitted: turn,
                    current,
                });
            }

            let engine = ECard::new(record.config.clone())?;
            let committed = engine.commit(&record.state, Play::new(player, card, hand_index))?;

            if !committed.both_committed() {
                record.state = committed;
                return Ok(Change::Write(record, SubmitOutcome::Waiting));
            }

            let (resolved, round) = engine.resolve_round(&committed)?;
            record.state = resolved;
            Ok(Change::Write(record, SubmitOutcome::Resolved(round)))
        })
        .inspect(|outcome| debug!(session = %id, ?outcome, "choice submitted"))
    }

    /// Current view of the session for the player holding `key`.
    pub fn view(
        &self,
        id: &SessionId,
        key: &PlayerKey,
    ) -> Result<Versioned<PlayerView>, LobbyError> {
        let current = self.store.load(id)?;
        let player = Self::seat(id, &current.value, key)?;
        Self::render(current, player)
    }

    /// Like [`Lobby::view`], but `None` while the session is still at
    /// version `since`.
    pub fn poll(
        &self,
        id: &SessionId,
        key: &PlayerKey,
        since: u64,
    ) -> Result<Option<Versioned<PlayerView>>, LobbyError> {
        let Some(current) = self.store.load_if_newer(id, since)? else {
            return Ok(None);
        };
        let player = Self::seat(id, &current.value, key)?;
        Self::render(current, player).map(Some)
    }

    /// Whether both seats are taken.
    pub fn is_ready(&self, id: &SessionId) -> Result<bool, LobbyError> {
        Ok(self.store.load(id)?.value.is_full())
    }

    /// Start the session over with a fresh game. Seats are kept.
    pub fn restart(&self, id: &SessionId, key: &PlayerKey) -> Result<(), LobbyError> {
        self.update(id, |mut record| {
            let player = Self::seat(id, &record, key)?;
            record.state = ECard::new(record.config.clone())?.restart();
            info!(session = %id, by = %player, "game restarted");
            Ok(Change::Write(record, ()))
        })
    }

    /// Delete the session. Any seated player may close it.
    pub fn close(&self, id: &SessionId, key: &PlayerKey) -> Result<(), LobbyError> {
        let current = self.store.load(id)?;
        let player = Self::seat(id, &current.value, key)?;
        self.store.remove(id)?;
        info!(session = %id, by = %player, "session closed");
        Ok(())
    }

    fn seat(id: &SessionId, record: &SessionRecord, key: &PlayerKey) -> Result<PlayerId, LobbyError> {
        record
            .seat_of(key)
            .ok_or_else(|| LobbyError::NotSeated(id.clone()))
    }

    fn render(
        current: Versioned<SessionRecord>,
        player: PlayerId,
    ) -> Result<Versioned<PlayerView>, LobbyError> {
        let engine = ECard::new(current.value.config.clone())?;
        Ok(current.map(|record| engine.view(&record.state, player)))
    }

    /// Compare-and-swap loop. `apply` sees a fresh copy of the record on
    /// every attempt and must not have side effects beyond its return.
    fn update<T>(
        &self,
        id: &SessionId,
        mut apply: impl FnMut(SessionRecord) -> Result<Change<T>, LobbyError>,
    ) -> Result<T, LobbyError> {
        for attempt in 1..=self.config.max_attempts {
            let current = self.store.load(id)?;
            let (record, out) = match apply(current.value)? {
                Change::Keep(out) => return Ok(out),
                Change::Write(record, out) => (record, out),
            };

            match self.store.compare_and_swap(id, current.version, &record) {
                Ok(_) => return Ok(out),
                Err(StoreError::Conflict { expected, actual, .. }) => {
                    warn!(session = %id, attempt, expected, actual, "session changed concurrently, retrying");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(LobbyError::Contention {
            id: id.clone(),
            attempts: self.config.max_attempts,
        })
    }
}
