pub const TOAST_ID: &str = "toast";

/// Singleton toast bookkeeping. Every `show` bumps the generation; a pending
/// hide only applies if no newer message arrived since it was scheduled.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    generation: u64,
    message: Option<String>,
}

impl ToastState {
    #[cfg(test)]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// Records `message` and returns the generation its hide timer must carry.
    pub fn show(&mut self, message: &str) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.to_string());
        self.generation
    }

    /// Hides the toast if `generation` is still the latest. Returns whether it hid.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }
}
