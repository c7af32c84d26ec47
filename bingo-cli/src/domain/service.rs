/*!
   Module `service` provides the canonical implementation of the [BingoService] port.
*/

use bingo_core::{Clock, Drawer, RandomSource, StateStore};

use tracing::event;

use super::{
    models::{Announcement, DrawNumberError, RoundStatus},
    ports::{Announcer, BingoService},
};

/// Canonical implementation of the [BingoService] port: one load, one draw, one save, then
/// delivery.
pub struct Service<St, R, C, A>
where
    St: StateStore,
    R: RandomSource,
    C: Clock,
    A: Announcer,
{
    store: St,
    drawer: Drawer<R, C>,
    announcer: A,
}

impl<St, R, C, A> Service<St, R, C, A>
where
    St: StateStore,
    R: RandomSource,
    C: Clock,
    A: Announcer,
{
    pub fn new(store: St, drawer: Drawer<R, C>, announcer: A) -> Self {
        Self {
            store,
            drawer,
            announcer,
        }
    }
}

impl<St, R, C, A> BingoService for Service<St, R, C, A>
where
    St: StateStore,
    R: RandomSource,
    C: Clock,
    A: Announcer,
{
    /// Draw, persist and announce the next number.
    ///
    /// # Errors
    ///
    /// - Propagates any [bingo_core::Error] from the store or the drawer.
    /// - [DrawNumberError::Announce] if the [Announcer] fails; the draw stays saved.
    fn draw_number(&mut self) -> Result<Announcement, DrawNumberError> {
        let state = self.store.load()?;
        let draw = self.drawer.pick(&state)?;
        self.store.save(&draw.state)?;

        let announcement = Announcement::from_draw(&draw);
        if announcement.round_reset() {
            event!(tracing::Level::INFO, "Previous round complete, started a new one");
        }
        event!(
            tracing::Level::INFO,
            "Called [{}] (number {}), {}",
            announcement.label(),
            announcement.number(),
            announcement.progress()
        );

        self.announcer
            .announce(&announcement)
            .map_err(|source| DrawNumberError::Announce {
                label: announcement.label().to_string(),
                source,
            })?;

        Ok(announcement)
    }
}

/// Report the round in progress. Only reads from `store`.
pub fn round_status<St: StateStore>(store: &St) -> Result<RoundStatus, bingo_core::Error> {
    let state = store.load()?;
    Ok(RoundStatus::from_state(&state))
}
