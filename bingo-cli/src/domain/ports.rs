/*
   Module `ports` specifies how the bingo domain talks to the outside world.

   Persistence is the `StateStore` trait of `bingo-core`; delivery of the called number is the
   `Announcer` below. Everything runs once per invocation on a single thread, so the ports are
   plain synchronous traits.
*/

use crate::domain::models::{Announcement, DrawNumberError};

/// `BingoService` is the API the entry point drives.
pub trait BingoService {
    /// Draw the next number, persist the round and announce the result.
    ///
    /// # Errors
    ///
    /// - [DrawNumberError::Engine] if the state cannot be loaded, drawn from or saved. Nothing
    ///   is persisted or announced in that case.
    /// - [DrawNumberError::Announce] if delivery fails after the draw was saved.
    fn draw_number(&mut self) -> Result<Announcement, DrawNumberError>;
}

/// `Announcer` hands a completed draw to whoever should hear about it.
///
/// It receives the announcement only; it has no access to the draw state. Announcers may keep
/// an output stream, hence `&mut self`.
pub trait Announcer {
    fn announce(&mut self, announcement: &Announcement) -> anyhow::Result<()>;
}
