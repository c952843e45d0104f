//! Hand-off of a composed link to something that can display it.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::error::{Error, Result};

/// Opens a URL in a fresh, independent browsing context.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

impl<O: LinkOpener + ?Sized> LinkOpener for Rc<O> {
    fn open(&self, url: &str) -> Result<()> {
        (**self).open(url)
    }
}

/// Opens URLs with the operating system's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        info!(%url, "Opening link");
        open::that_detached(url).map_err(|source| Error::Open {
            url: url.to_string(),
            source,
        })
    }
}

/// Remembers every URL instead of opening it.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
