//! Attaching to and detaching from the input source.

use std::fmt::Debug;

use log::{debug, warn};

use super::ListPager;
use crate::error::{PagerError, Result};
use crate::input::InputSource;
use crate::surface::RenderSurface;

impl<Id, S, I> ListPager<Id, S, I>
where
    Id: PartialEq + Clone + Debug,
    S: RenderSurface,
    I: InputSource,
{
    /// Attaches to the input source and shows the list.
    ///
    /// Draws, hides the cursor, switches the source to raw mode, and resumes
    /// it so single keystrokes arrive immediately. If any step fails the
    /// pager is stopped again and the error is returned.
    pub fn start(&mut self) -> Result<()> {
        if let Err(err) = self.attach() {
            self.stop_after(&err);
            return Err(err);
        }
        self.attached = true;
        debug!("pager started with {} items", self.items.len());
        Ok(())
    }

    /// Resets the surface, pauses the source, and detaches.
    ///
    /// Both the reset and the pause are attempted even if one fails. Safe to
    /// call more than once.
    pub fn stop(&mut self) -> Result<()> {
        self.attached = false;
        let reset = self.surface.reset();
        let paused = self.input.pause();
        debug!("pager stopped");
        reset.and(paused)
    }

    /// Starts the pager and handles key presses until it is stopped.
    ///
    /// Returns when a key stops the pager (`ctrl+c` by default) or when the
    /// source runs out of events. The pager is always stopped on return, also
    /// when reading or handling an event fails; that first error is returned.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        if let Err(err) = self.pump() {
            self.stop_after(&err);
            return Err(err);
        }
        self.stop()
    }

    fn attach(&mut self) -> Result<()> {
        self.draw()?;
        self.surface.hide_cursor()?;
        self.input.set_raw_mode(true)?;
        self.input.resume()
    }

    fn pump(&mut self) -> Result<()> {
        while self.attached {
            match self.input.read_event()? {
                Some(event) => self.on_keypress(event.ch, event.key.as_ref())?,
                None => break,
            }
        }
        Ok(())
    }

    /// Stops after `cause`, logging a failure to stop instead of returning it.
    fn stop_after(&mut self, cause: &PagerError) {
        warn!("stopping pager after error: {}", cause);
        if let Err(err) = self.stop() {
            warn!("failed to stop pager: {}", err);
        }
    }
}
