use crate::domain::{models::Announcement, ports::Announcer};

use std::io::Write;

use anyhow::Context;
use clap::ValueEnum;

/// How an announcement is rendered on a text stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line, e.g. `N42 (37/75 called this round)`.
    #[default]
    Text,
    /// The chat block payload as pretty JSON.
    Blocks,
}

/// Writes announcements to a text stream, typically stdout.
#[derive(Debug)]
pub struct WriterAnnouncer<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> WriterAnnouncer<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Announcer for WriterAnnouncer<W> {
    fn announce(&mut self, announcement: &Announcement) -> anyhow::Result<()> {
        let written = match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", announcement.text()),
            OutputFormat::Blocks => {
                let payload = serde_json::to_string_pretty(&announcement.blocks())?;
                writeln!(self.out, "{payload}")
            }
        };
        written.context("failed to write announcement")?;

        self.out.flush().context("failed to flush announcement")
    }
}
