//! Typing effect state machine: reveal one character per tick, then blink.

pub const CURSOR_GLYPH: char = '|';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Blinking,
}

#[derive(Clone, Debug)]
pub struct TypingEffect {
    source: Vec<char>,
    revealed: usize,
    phase: TypingPhase,
    cursor_visible: bool,
}

impl TypingEffect {
    /// Captures `raw` once, trimmed. Empty text goes straight to blinking.
    pub fn new(raw: &str) -> Self {
        let source: Vec<char> = raw.trim().chars().collect();
        let phase = if source.is_empty() {
            TypingPhase::Blinking
        } else {
            TypingPhase::Typing
        };

        Self {
            source,
            revealed: 0,
            phase,
            cursor_visible: true,
        }
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    #[cfg(test)]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    pub fn revealed_text(&self) -> String {
        self.source[..self.revealed].iter().collect()
    }

    /// Revealed text followed by the cursor glyph, as the page renders it.
    #[cfg(test)]
    pub fn rendered(&self) -> String {
        let mut text = self.revealed_text();
        text.push(CURSOR_GLYPH);
        text
    }

    /// Reveals one more character. Returns the phase after the tick.
    pub fn tick(&mut self) -> TypingPhase {
        if self.phase == TypingPhase::Typing {
            self.revealed += 1;
            if self.revealed >= self.source.len() {
                self.phase = TypingPhase::Blinking;
            }
        }
        self.phase
    }

    /// Flips cursor visibility. Only meaningful once typing is done.
    pub fn blink(&mut self) -> bool {
        if self.phase == TypingPhase::Blinking {
            self.cursor_visible = !self.cursor_visible;
        }
        self.cursor_visible
    }
}

/// Per-character delay. `sample` is uniform in `[0, 1)`.
pub fn next_delay_ms(sample: f64, min_ms: u32, max_ms: u32) -> u32 {
    let span = max_ms.saturating_sub(min_ms);
    let sample = if sample.is_finite() {
        sample.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let offset = (sample * f64::from(span)).floor() as u32;

    min_ms + offset.min(span)
}
