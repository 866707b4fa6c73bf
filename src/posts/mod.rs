use std::fmt::Display;
use anyhow::{Result, anyhow};
use crate::posts::box_score::BoxScore;
use crate::posts::event_log::EventLogPost;
use crate::posts::substitution::Substitution;

pub mod box_score;
pub mod event_log;
pub mod substitution;

#[derive(Clone)]
pub enum Post {
    BoxScore(BoxScore),
    EventLog(EventLogPost),
    Substitution(Substitution),
    Summary(BoxScore, EventLogPost),
}

impl Post {
    #[inline]
    pub fn send(&self) -> Result<()> {
        self.send_with_settings(true, false)
    }

    pub fn send_with_settings(&self, stdout: bool, copy: bool) -> Result<()> {
        let text = self.to_string();

        if stdout {
            println!("{text}");
            std::io::Write::flush(&mut std::io::stdout())?;
        }

        if copy {
            cli_clipboard::set_contents(text).map_err(|_| anyhow!("Failed to set clipboard"))?;
        }

        Ok(())
    }
}

impl Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BoxScore(inner) => write!(f, "{inner}"),
            Self::EventLog(inner) => write!(f, "{inner}"),
            Self::Substitution(inner) => write!(f, "{inner:?}"),
            Self::Summary(box_score, log) => write!(f, "{box_score}\n{log}"),
        }
    }
}
