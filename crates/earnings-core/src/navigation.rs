//! The period cursor shared by the monthly and yearly views.
//!
//! `PeriodCursor` itself is a plain value; this module holds the single cursor the
//! server keeps between requests. Every client moves the same cursor, so two
//! operators browsing at once will see each other's navigation (last writer wins).
//! Anything multi-user has to keep a cursor per session instead.

use std::sync::Mutex;

use earnings_domain::{NavCommand, PeriodCursor};

use crate::{time::Clock, CoreError};

pub struct NavigationService;

impl NavigationService {
    /// Interprets the optional `command` query parameter.
    pub fn parse_command(raw: Option<&str>) -> Option<NavCommand> {
        let command = raw.and_then(NavCommand::parse);
        if command.is_none() {
            if let Some(value) = raw.filter(|value| !value.trim().is_empty()) {
                tracing::debug!(command = value, "ignoring unknown navigation command");
            }
        }
        command
    }

    /// Cursor for the month the clock is currently in.
    pub fn current_month(clock: &dyn Clock) -> PeriodCursor {
        PeriodCursor::containing(clock.today())
    }
}

/// Process-wide cursor, reset to the current month on every start.
#[derive(Debug)]
pub struct NavigationState {
    cursor: Mutex<PeriodCursor>,
}

impl NavigationState {
    pub fn new(initial: PeriodCursor) -> Self {
        Self {
            cursor: Mutex::new(initial),
        }
    }

    pub fn starting_now(clock: &dyn Clock) -> Self {
        Self::new(NavigationService::current_month(clock))
    }

    pub fn current(&self) -> Result<PeriodCursor, CoreError> {
        Ok(*self.lock()?)
    }

    pub fn set(&self, cursor: PeriodCursor) -> Result<(), CoreError> {
        *self.lock()? = cursor;
        Ok(())
    }

    /// Moves the cursor by one month per `command` and returns the new position.
    pub fn advance(&self, command: Option<NavCommand>) -> Result<PeriodCursor, CoreError> {
        self.update(|cursor| cursor.advance(command))
    }

    /// Moves the cursor by one year per `command` and returns the new position.
    pub fn shift_year(&self, command: Option<NavCommand>) -> Result<PeriodCursor, CoreError> {
        self.update(|cursor| cursor.shift_year(command))
    }

    fn update(
        &self,
        step: impl FnOnce(PeriodCursor) -> PeriodCursor,
    ) -> Result<PeriodCursor, CoreError> {
        let mut guard = self.lock()?;
        let previous = *guard;
        let next = step(previous);
        if next != previous {
            tracing::debug!(from = %previous, to = %next, "cursor moved");
        }
        *guard = next;
        Ok(next)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, PeriodCursor>, CoreError> {
        self.cursor
            .lock()
            .map_err(|_| CoreError::Storage("navigation cursor lock poisoned".into()))
    }
}
