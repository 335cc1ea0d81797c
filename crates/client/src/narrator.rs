use std::io::Write;

use fight_core::{FightEvent, NarrationSink};
use tracing::warn;

/// Prints every narration event on its own line as soon as it happens.
pub struct ConsoleNarrator<W> {
    out: W,
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NarrationSink for ConsoleNarrator<W> {
    fn narrate(&mut self, event: FightEvent) {
        if let Err(error) = writeln!(self.out, "{event}").and_then(|()| self.out.flush()) {
            warn!(%error, "failed to print narration");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_one_line_per_event() {
        let mut narrator = ConsoleNarrator::new(Vec::new());
        narrator.narrate(FightEvent::Victory {
            winner: "Hero".into(),
        });
        narrator.narrate(FightEvent::Fled {
            name: "Hero".into(),
        });

        let text = String::from_utf8(narrator.into_inner()).unwrap();
        assert_eq!(text, "Hero wins!\nHero decides to live another day.\n");
    }
}
