//! Image loading and fallback state.

/// Message shown in place of an image that failed to load.
pub const UNAVAILABLE_MESSAGE: &str = "Image not available";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Per-instance image state.
pub struct ImageState {
    /// Source currently assigned to the `<img>`.
    pub src: String,
    /// Whether the loading shimmer is showing.
    pub loading: bool,
    /// Whether every source failed.
    pub failed: bool,
    /// Whether `src` is the fallback.
    pub using_fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What an error event led to.
pub enum ImageErrorOutcome {
    /// The fallback source was assigned; wait for its load.
    SwappedToFallback,
    /// No usable source remains; report the failure.
    Failed,
}

impl ImageState {
    /// Initial state; the shimmer shows only when `show_placeholder` is set.
    pub fn new(src: impl Into<String>, show_placeholder: bool) -> Self {
        Self {
            src: src.into(),
            loading: show_placeholder,
            failed: false,
            using_fallback: false,
        }
    }

    /// The current source loaded.
    pub fn on_load(&mut self) {
        self.loading = false;
    }

    /// The current source failed. The fallback is tried at most once.
    pub fn on_error(&mut self, fallback: Option<&str>) -> ImageErrorOutcome {
        self.loading = false;
        match fallback.filter(|fallback| !fallback.is_empty()) {
            Some(fallback) if !self.using_fallback => {
                self.src = fallback.to_string();
                self.using_fallback = true;
                ImageErrorOutcome::SwappedToFallback
            }
            _ => {
                self.failed = true;
                ImageErrorOutcome::Failed
            }
        }
    }

    /// Classes of the `<img>` element.
    pub fn img_classes(&self) -> String {
        let mut classes = crate::style::ClassList::new();
        classes
            .push("w-full h-full object-cover")
            .push_if(self.loading, "opacity-0")
            .push_if(self.failed, "hidden");
        classes.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fallback_is_tried_once() {
        let mut state = ImageState::new("a.png", true);
        assert!(state.img_classes().contains("opacity-0"));

        assert_eq!(state.on_error(Some("b.png")), ImageErrorOutcome::SwappedToFallback);
        assert_eq!(state.src, "b.png");
        assert!(!state.loading);
        assert!(!state.failed);

        assert_eq!(state.on_error(Some("b.png")), ImageErrorOutcome::Failed);
        assert!(state.failed);
        assert_eq!(state.src, "b.png");
    }

    #[test]
    fn failure_without_fallback_hides_the_image() {
        let mut state = ImageState::new("a.png", false);
        assert_eq!(state.on_error(None), ImageErrorOutcome::Failed);
        assert_eq!(state.img_classes(), "w-full h-full object-cover hidden");
    }

    #[test]
    fn load_clears_the_shimmer() {
        let mut state = ImageState::new("a.png", true);
        state.on_load();
        assert_eq!(state.img_classes(), "w-full h-full object-cover");
    }
}
