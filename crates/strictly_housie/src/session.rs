//! Game sessions: the draw → broadcast → evaluate state machine.
//!
//! A [`GameSetup`] is the `Setup` phase: tickets are dealt, players are
//! subscribed to the dealer and patterns are opened. [`GameSetup::start`]
//! consumes it and returns a [`Session`], which advances one draw at a time
//! until every pattern has been claimed.

use crate::contracts::{AdvanceContract, Contract, assert_invariants};
use crate::dealer::{Dealer, ListenerHandle};
use crate::invariants::ticket_is_well_formed;
use crate::pool::{Number, NumberPool, NumberSource, RandomNumberSource};
use crate::summary::{PlayerSummary, Summary};
use crate::ticket::{Ticket, TicketLayout, TicketView};
use crate::{
    EvaluationOrder, GameConfig, HousieError, Pattern, PatternKind, Phase, Player, PlayerId, Slot,
};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// A pattern claimed by a player during an evaluation pass.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_more::Display,
)]
#[display("Player#{} has won '{}'", player, pattern)]
pub struct WinEvent {
    /// Who claimed the pattern.
    player: PlayerId,
    /// What was claimed.
    pattern: PatternKind,
}

impl WinEvent {
    /// Creates a win event.
    pub fn new(player: PlayerId, pattern: PatternKind) -> Self {
        Self { player, pattern }
    }
}

/// Outcome of one [`Session::advance`] step.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DrawReport {
    /// The number just called.
    number: Number,
    /// Patterns claimed on this draw, in claim order.
    wins: Vec<WinEvent>,
    /// Phase after the step.
    phase: Phase,
}

impl DrawReport {
    /// True if this draw ended the game.
    pub fn ended_game(&self) -> bool {
        self.phase.is_terminal()
    }
}

type SharedPlayer = Rc<RefCell<Player>>;

/// Deals tickets for `config` from fresh, independently shuffled pools.
fn deal_tickets(
    players: usize,
    layout: TicketLayout,
    source: &mut RandomNumberSource<StdRng>,
) -> Result<Vec<Ticket>, HousieError> {
    (0..players)
        .map(|_| {
            let mut numbers = source.create_pool();
            Ticket::generate(layout, &mut numbers, source.rng_mut())
        })
        .collect()
}

fn subscribe_all(dealer: &mut Dealer, players: &[SharedPlayer]) {
    for player in players {
        let handle: ListenerHandle = player.clone();
        dealer.add_listener(&handle);
    }
}

/// A game in its setup phase.
#[derive(Debug)]
pub struct GameSetup {
    config: GameConfig,
    layout: TicketLayout,
    source: RandomNumberSource<StdRng>,
    dealer: Dealer,
    players: Vec<SharedPlayer>,
    patterns: Vec<Pattern>,
}

impl GameSetup {
    /// Validates `config`, deals every ticket and builds the draw order.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::Configuration`] if the parameters cannot form a
    /// game. No dealing happens in that case.
    #[instrument(skip(config), fields(players = config.players(), seed = ?config.seed()))]
    pub fn new(config: GameConfig) -> Result<Self, HousieError> {
        let layout = config.validate()?;
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        let mut source = RandomNumberSource::new(config.range(), rng);

        let dealer_pool = source.create_pool();
        let tickets = deal_tickets(*config.players(), layout, &mut source)?;
        Ok(Self::assemble(config, layout, source, dealer_pool, tickets))
    }

    /// Builds a game from pre-dealt tickets and a fixed draw order.
    ///
    /// Ticket `i` goes to player `i + 1`. Useful for replaying a recorded
    /// game or scripting a scenario.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::Configuration`] if `config` is invalid, the
    /// ticket count differs from the player count, a ticket does not fit
    /// the configured layout and range or is already marked, or `draws` is
    /// not an ordering of every number in the range.
    #[instrument(skip_all, fields(players = config.players(), tickets = tickets.len()))]
    pub fn from_parts(
        config: GameConfig,
        tickets: Vec<Ticket>,
        draws: NumberPool,
    ) -> Result<Self, HousieError> {
        let layout = config.validate()?;
        if tickets.len() != *config.players() {
            return Err(HousieError::configuration(format!(
                "{} tickets supplied for {} players",
                tickets.len(),
                config.players()
            )));
        }
        let range = config.range();
        for (index, ticket) in tickets.iter().enumerate() {
            if !ticket_is_well_formed(ticket, &layout)
                || ticket.filled().any(|slot| !range.contains(&slot.number()))
            {
                return Err(HousieError::configuration(format!(
                    "ticket for player #{} does not fit the configured layout",
                    index + 1
                )));
            }
            if ticket.filled().any(Slot::is_marked) {
                return Err(HousieError::configuration(format!(
                    "ticket for player #{} has numbers marked before the first call",
                    index + 1
                )));
            }
        }

        let mut order: Vec<Number> = draws.iter().collect();
        order.sort_unstable();
        if !order.iter().copied().eq(range.clone()) {
            return Err(HousieError::configuration(format!(
                "draw order must hold every number from {} to {} exactly once",
                range.start(),
                range.end()
            )));
        }

        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        let source = RandomNumberSource::new(range, rng);
        Ok(Self::assemble(config, layout, source, draws, tickets))
    }

    fn assemble(
        config: GameConfig,
        layout: TicketLayout,
        source: RandomNumberSource<StdRng>,
        draws: NumberPool,
        tickets: Vec<Ticket>,
    ) -> Self {
        let players: Vec<SharedPlayer> = tickets
            .into_iter()
            .enumerate()
            .map(|(index, ticket)| Rc::new(RefCell::new(Player::new(index + 1, ticket))))
            .collect();

        let mut dealer = Dealer::new(draws);
        subscribe_all(&mut dealer, &players);

        let patterns = config.patterns().iter().copied().map(Pattern::new).collect();

        info!(
            players = players.len(),
            draws = dealer.remaining(),
            "Tickets created successfully"
        );
        Self {
            config,
            layout,
            source,
            dealer,
            players,
            patterns,
        }
    }

    /// Always [`Phase::Setup`].
    pub fn phase(&self) -> Phase {
        Phase::Setup
    }

    /// The validated configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only grid of a player's ticket.
    pub fn ticket_view(&self, player: PlayerId) -> Option<TicketView> {
        find_player(&self.players, player).map(|p| p.borrow().ticket().view())
    }

    /// Starts calling numbers.
    #[instrument(skip(self))]
    pub fn start(self) -> Session {
        info!("Game started");
        let session = Session {
            config: self.config,
            layout: self.layout,
            source: self.source,
            dealer: self.dealer,
            players: self.players,
            patterns: self.patterns,
            phase: Phase::InProgress,
        };
        assert_invariants(&session);
        session
    }
}

fn find_player(players: &[SharedPlayer], id: PlayerId) -> Option<&SharedPlayer> {
    id.checked_sub(1).and_then(|index| players.get(index))
}

/// A game that has started.
///
/// The session owns the dealer, every player and the pattern set. Claimed
/// flags and win sets change only inside [`Session::advance`].
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    layout: TicketLayout,
    source: RandomNumberSource<StdRng>,
    dealer: Dealer,
    pub(crate) players: Vec<SharedPlayer>,
    pub(crate) patterns: Vec<Pattern>,
    phase: Phase,
}

impl Session {
    /// Configures and starts a game in one step.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::Configuration`] for unplayable parameters.
    pub fn configure(config: GameConfig) -> Result<Self, HousieError> {
        Ok(GameSetup::new(config)?.start())
    }

    /// Calls one number and runs one evaluation pass.
    ///
    /// # Errors
    ///
    /// - [`HousieError::InvalidState`] if the game is already over.
    /// - [`HousieError::ExhaustedPool`] if no numbers remain; this indicates a
    ///   sequencing bug since a valid game ends before its pool does.
    ///
    /// On error nothing has changed. Once a number is drawn the step always
    /// completes; a broken postcondition panics in debug builds.
    #[instrument(skip(self), fields(called = self.dealer.called().len()))]
    pub fn advance(&mut self) -> Result<DrawReport, HousieError> {
        AdvanceContract::pre(self)?;

        #[cfg(debug_assertions)]
        let before = AdvanceContract::snapshot(self);

        let number = self.dealer.draw_next()?;
        let wins = self.evaluate();

        if self.patterns.iter().all(Pattern::is_claimed) {
            self.phase = Phase::Over;
            info!(draws = self.dealer.called().len(), "Game over");
        }

        #[cfg(debug_assertions)]
        {
            let post = AdvanceContract::post(&before, self);
            debug_assert!(post.is_ok(), "Advance postcondition failed: {:?}", post);
        }

        debug!(number, wins = wins.len(), "Advance complete");
        Ok(DrawReport {
            number,
            wins,
            phase: self.phase,
        })
    }

    /// Player indices in the order they are checked this pass.
    fn evaluation_order(&mut self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.players.len()).collect();
        if *self.config.order() == EvaluationOrder::Fair {
            order.shuffle(self.source.rng_mut());
        }
        order
    }

    /// Checks every open pattern against every player.
    ///
    /// The first player in evaluation order to satisfy a pattern claims it;
    /// later players in the same pass no longer see it.
    fn evaluate(&mut self) -> Vec<WinEvent> {
        let order = self.evaluation_order();
        debug!(?order, "Evaluation order");

        let mut wins = Vec::new();
        for index in order {
            let mut player = self.players[index].borrow_mut();
            for pattern in self.patterns.iter_mut() {
                if pattern.can_be_claimed_by(player.ticket()) {
                    pattern.claim();
                    player.record_win(pattern.kind());

                    let event = WinEvent::new(player.id(), pattern.kind());
                    info!(%event, "We have a winner");
                    wins.push(event);
                }
            }
        }
        wins
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once every pattern has been claimed.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// The configuration this session was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Active patterns with their claim state.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Patterns not yet claimed.
    pub fn open_patterns(&self) -> impl Iterator<Item = PatternKind> + '_ {
        self.patterns
            .iter()
            .filter(|pattern| !pattern.is_claimed())
            .map(Pattern::kind)
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Borrows one player.
    pub fn player(&self, id: PlayerId) -> Option<Ref<'_, Player>> {
        find_player(&self.players, id).map(|player| player.borrow())
    }

    /// Borrows every player in id order.
    pub fn players(&self) -> impl Iterator<Item = Ref<'_, Player>> + '_ {
        self.players.iter().map(|player| player.borrow())
    }

    /// Numbers called so far.
    pub fn called(&self) -> &[Number] {
        self.dealer.called()
    }

    /// The most recently called number.
    pub fn last_called(&self) -> Option<Number> {
        self.dealer.last_called()
    }

    /// Numbers left in the draw order.
    pub fn remaining(&self) -> usize {
        self.dealer.remaining()
    }

    pub(crate) fn layout(&self) -> &TicketLayout {
        &self.layout
    }

    /// Read-only grid of a player's ticket.
    pub fn ticket_view(&self, player: PlayerId) -> Option<TicketView> {
        self.player(player).map(|p| p.ticket().view())
    }

    /// What each player has won, in ascending id order.
    pub fn summary(&self) -> Summary {
        Summary::new(
            self.players()
                .map(|player| PlayerSummary::new(player.id(), player.won().clone()))
                .collect(),
        )
    }

    /// Starts a fresh game with the same configuration.
    ///
    /// Deals new tickets and a new draw order, reopens every pattern and
    /// clears every win set. Player ids are kept.
    ///
    /// # Errors
    ///
    /// Returns [`HousieError::ExhaustedPool`] if the range cannot fill a
    /// ticket, leaving the session unchanged.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) -> Result<(), HousieError> {
        let draws = self.source.create_pool();
        let tickets = deal_tickets(self.players.len(), self.layout, &mut self.source)?;

        for (player, ticket) in self.players.iter().zip(tickets) {
            player.borrow_mut().redeal(ticket);
        }
        self.dealer = Dealer::new(draws);
        subscribe_all(&mut self.dealer, &self.players);
        self.patterns.iter_mut().for_each(Pattern::reset);
        self.phase = Phase::InProgress;
        assert_invariants(self);

        info!("Session reset");
        Ok(())
    }
}
