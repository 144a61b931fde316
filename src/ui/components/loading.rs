//! Loading spinners.
//!
//! Both widgets show a spinner while their `loading` prop is set. The
//! spinner frame only advances when the host calls `tick()`, so rendering
//! stays a pure function of widget state.

use serde::{Deserialize, Serialize};

/// Braille spinner frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// ASCII spinner frames for terminals without braille glyphs.
const SIMPLE_SPINNER_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Dots spinner frames.
const DOTS_SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// The type of spinner to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinnerStyle {
    /// Braille dots spinner (default).
    #[default]
    Braille,
    /// Simple ASCII spinner.
    Simple,
    /// Dots spinner.
    Dots,
}

impl SpinnerStyle {
    /// Get the frames for this spinner style.
    pub fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerStyle::Braille => SPINNER_FRAMES,
            SpinnerStyle::Simple => SIMPLE_SPINNER_FRAMES,
            SpinnerStyle::Dots => DOTS_SPINNER_FRAMES,
        }
    }
}

/// A spinner paired with a status message.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    /// The message shown next to the spinner.
    message: String,
    /// Current spinner frame index.
    spinner_state: usize,
    /// The spinner style.
    spinner_style: SpinnerStyle,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingIndicator {
    /// Create a new loading indicator.
    pub fn new() -> Self {
        Self::with_message("Loading...")
    }

    /// Create a loading indicator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            spinner_state: 0,
            spinner_style: SpinnerStyle::default(),
        }
    }

    /// Set the spinner style.
    pub fn with_style(mut self, style: SpinnerStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Change the spinner style, restarting the animation.
    pub fn set_style(&mut self, style: SpinnerStyle) {
        self.spinner_style = style;
        self.spinner_state = 0;
    }

    /// Get the current message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Advance the spinner animation by one frame.
    pub fn tick(&mut self) {
        let frames = self.spinner_style.frames();
        self.spinner_state = (self.spinner_state + 1) % frames.len();
    }

    /// Get the current spinner frame.
    pub fn spinner_frame(&self) -> &'static str {
        self.spinner_style.frames()[self.spinner_state]
    }

    /// Get the spinner followed by the message.
    pub fn text(&self) -> String {
        format!("{} {}", self.spinner_frame(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_style_frames() {
        assert_eq!(SpinnerStyle::Braille.frames().len(), 10);
        assert_eq!(SpinnerStyle::Simple.frames().len(), 4);
        assert_eq!(SpinnerStyle::Dots.frames().len(), 8);
    }

    #[test]
    fn test_loading_indicator_new() {
        let loader = LoadingIndicator::new();
        assert_eq!(loader.message(), "Loading...");
        assert_eq!(loader.spinner_frame(), SPINNER_FRAMES[0]);
    }

    #[test]
    fn test_loading_indicator_with_style() {
        let loader = LoadingIndicator::new().with_style(SpinnerStyle::Simple);
        assert_eq!(loader.spinner_style, SpinnerStyle::Simple);
        assert_eq!(loader.spinner_frame(), "|");
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut loader = LoadingIndicator::new();
        let initial = loader.spinner_frame();
        loader.tick();
        assert_ne!(initial, loader.spinner_frame());
    }

    #[test]
    fn test_tick_wraps() {
        let mut loader = LoadingIndicator::new().with_style(SpinnerStyle::Dots);
        for _ in 0..DOTS_SPINNER_FRAMES.len() {
            loader.tick();
        }
        assert_eq!(loader.spinner_state, 0);
    }

    #[test]
    fn test_set_style_resets_animation() {
        let mut loader = LoadingIndicator::new();
        loader.tick();
        loader.tick();
        loader.set_style(SpinnerStyle::Simple);
        assert_eq!(loader.spinner_state, 0);
    }

    #[test]
    fn test_text_contains_message() {
        let loader = LoadingIndicator::with_message("Loading data...");
        let text = loader.text();
        assert!(text.starts_with(SPINNER_FRAMES[0]));
        assert!(text.ends_with("Loading data..."));
    }
}
