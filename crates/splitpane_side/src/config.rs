//! Declarative panel configuration
//!
//! [`PanelConfig`] is the typed prop set a side panel projects onto its
//! element: placement, sizing, interaction flags, animation hints, and the
//! five lifecycle callbacks. Values normalize to the element's attribute
//! encodings here; the projection itself lives in [`crate::project`].

use std::fmt;
use std::sync::Arc;

use splitpane_element::{PanelEvent, PanelMode};

/// Screen edge a panel is anchored to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    /// Anchored to the left edge (default, standard for navigation)
    #[default]
    Left,
    /// Anchored to the right edge
    Right,
}

impl Side {
    /// Attribute encoding of the side
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// A panel dimension: a raw pixel number or a preformatted string
///
/// Pixel values encode as bare numbers (`200.0` becomes `"200"`); strings
/// such as `"20%"` pass through unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum Dimension {
    /// Logical pixels
    Px(f32),
    /// Preformatted value, e.g. `"20%"`
    Raw(String),
}

impl Dimension {
    /// Attribute encoding of the dimension
    pub fn to_attribute(&self) -> String {
        match self {
            Dimension::Px(px) => format_scalar(*px),
            Dimension::Raw(value) => value.clone(),
        }
    }
}

impl From<f32> for Dimension {
    fn from(px: f32) -> Self {
        Dimension::Px(px)
    }
}

impl From<i32> for Dimension {
    fn from(px: i32) -> Self {
        Dimension::Px(px as f32)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Raw(value.to_string())
    }
}

impl From<String> for Dimension {
    fn from(value: String) -> Self {
        Dimension::Raw(value)
    }
}

/// Animation timing overrides
///
/// Serialized into the element's `animation-options` attribute as an
/// object literal, e.g. `{duration: 0.2, delay: 0.4, timing: 'ease-in'}`;
/// absent fields are omitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationOptions {
    /// Animation duration in seconds
    pub duration: Option<f32>,
    /// Start delay in seconds
    pub delay: Option<f32>,
    /// Timing function name, e.g. `"ease-in"`
    pub timing: Option<String>,
}

impl AnimationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration in seconds
    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Set the start delay in seconds
    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = Some(seconds);
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: impl Into<String>) -> Self {
        self.timing = Some(timing.into());
        self
    }

    /// Attribute encoding of the options
    pub fn to_attribute(&self) -> String {
        let mut fields = Vec::new();
        if let Some(duration) = self.duration {
            fields.push(format!("duration: {}", format_scalar(duration)));
        }
        if let Some(delay) = self.delay {
            fields.push(format!("delay: {}", format_scalar(delay)));
        }
        if let Some(ref timing) = self.timing {
            fields.push(format!("timing: '{}'", timing));
        }
        format!("{{{}}}", fields.join(", "))
    }
}

/// Bare-number attribute encoding: integral values drop the fractional
/// part (`200.0` becomes `"200"`), others keep it (`0.2` becomes `"0.2"`)
pub(crate) fn format_scalar(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Callback invoked with the lifecycle event that triggered it
pub type PanelCallback = Arc<dyn Fn(&PanelEvent) + Send + Sync>;

/// The five lifecycle callbacks a panel accepts
///
/// All optional; absent callbacks bind as no-ops so the binding set stays
/// fixed at five for the mounted lifetime.
#[derive(Clone, Default)]
pub struct PanelCallbacks {
    /// Invoked after the panel finishes opening (`postopen`)
    pub on_open: Option<PanelCallback>,
    /// Invoked after the panel finishes closing (`postclose`)
    pub on_close: Option<PanelCallback>,
    /// Invoked before the panel starts opening (`preopen`)
    pub on_pre_open: Option<PanelCallback>,
    /// Invoked before the panel starts closing (`preclose`)
    pub on_pre_close: Option<PanelCallback>,
    /// Invoked when the element switches layout mode (`modechange`)
    pub on_mode_change: Option<PanelCallback>,
}

impl fmt::Debug for PanelCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelCallbacks")
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_pre_open", &self.on_pre_open.is_some())
            .field("on_pre_close", &self.on_pre_close.is_some())
            .field("on_mode_change", &self.on_mode_change.is_some())
            .finish()
    }
}

/// Declarative configuration for a side panel
///
/// # Example
///
/// ```ignore
/// use splitpane_side::prelude::*;
///
/// let config = PanelConfig::new()
///     .side(Side::Right)
///     .width(300.0)
///     .collapsed(true)
///     .swipeable(true)
///     .on_open(|_| println!("panel opened"))
///     .on_close(|_| println!("panel closed"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PanelConfig {
    /// Screen edge the panel anchors to
    pub side: Side,
    /// Panel width
    pub width: Option<Dimension>,
    /// Whether the panel collapses away instead of sitting beside content
    pub is_collapsed: bool,
    /// Whether swipe interaction is enabled in collapse mode
    pub is_swipeable: bool,
    /// Declared open intent, reconciled imperatively on every update
    pub is_open: bool,
    /// Named open/close animation, e.g. `"overlay"` or `"default"`
    pub animation: Option<String>,
    /// Animation timing overrides
    pub animation_options: Option<AnimationOptions>,
    /// Swipe distance ratio (0..1) required before the panel opens
    pub open_threshold: Option<f32>,
    /// The element's current layout mode; informational, never written back
    pub mode: Option<PanelMode>,
    /// Width of the edge region that accepts swipe gestures
    pub swipe_target_width: Option<Dimension>,
    /// Lifecycle callbacks, captured at mount
    pub callbacks: PanelCallbacks,
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which screen edge the panel anchors to
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Set the panel width
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Enable or disable collapse behavior
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.is_collapsed = collapsed;
        self
    }

    /// Enable or disable swipe interaction in collapse mode
    pub fn swipeable(mut self, swipeable: bool) -> Self {
        self.is_swipeable = swipeable;
        self
    }

    /// Declare whether the panel should be open
    pub fn open(mut self, open: bool) -> Self {
        self.is_open = open;
        self
    }

    /// Set the named open/close animation
    pub fn animation(mut self, animation: impl Into<String>) -> Self {
        self.animation = Some(animation.into());
        self
    }

    /// Set animation timing overrides
    pub fn animation_options(mut self, options: AnimationOptions) -> Self {
        self.animation_options = Some(options);
        self
    }

    /// Set how far the panel must be swiped before it opens (0..1)
    pub fn open_threshold(mut self, threshold: f32) -> Self {
        self.open_threshold = Some(threshold);
        self
    }

    /// Reflect the element's current layout mode (informational only)
    pub fn mode(mut self, mode: PanelMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the width of the edge region that accepts swipe gestures
    pub fn swipe_target_width(mut self, width: impl Into<Dimension>) -> Self {
        self.swipe_target_width = Some(width.into());
        self
    }

    /// Set the callback invoked after the panel finishes opening
    pub fn on_open<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PanelEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_open = Some(Arc::new(callback));
        self
    }

    /// Set the callback invoked after the panel finishes closing
    pub fn on_close<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PanelEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_close = Some(Arc::new(callback));
        self
    }

    /// Set the callback invoked before the panel starts opening
    pub fn on_pre_open<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PanelEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_pre_open = Some(Arc::new(callback));
        self
    }

    /// Set the callback invoked before the panel starts closing
    pub fn on_pre_close<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PanelEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_pre_close = Some(Arc::new(callback));
        self
    }

    /// Set the callback invoked when the element switches layout mode
    pub fn on_mode_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&PanelEvent) + Send + Sync + 'static,
    {
        self.callbacks.on_mode_change = Some(Arc::new(callback));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_defaults_left() {
        assert_eq!(Side::default(), Side::Left);
        assert_eq!(Side::Left.as_str(), "left");
        assert_eq!(Side::Right.as_str(), "right");
    }

    #[test]
    fn test_dimension_pixel_encoding() {
        assert_eq!(Dimension::from(200.0).to_attribute(), "200");
        assert_eq!(Dimension::from(200).to_attribute(), "200");
        assert_eq!(Dimension::Px(132.5).to_attribute(), "132.5");
    }

    #[test]
    fn test_dimension_string_passthrough() {
        assert_eq!(Dimension::from("20%").to_attribute(), "20%");
        assert_eq!(Dimension::from("12em".to_string()).to_attribute(), "12em");
    }

    #[test]
    fn test_animation_options_full() {
        let options = AnimationOptions::new()
            .duration(0.2)
            .delay(0.4)
            .timing("ease-in");
        assert_eq!(
            options.to_attribute(),
            "{duration: 0.2, delay: 0.4, timing: 'ease-in'}"
        );
    }

    #[test]
    fn test_animation_options_partial() {
        let options = AnimationOptions::new().duration(1.0);
        assert_eq!(options.to_attribute(), "{duration: 1}");

        let options = AnimationOptions::new().timing("linear");
        assert_eq!(options.to_attribute(), "{timing: 'linear'}");
    }

    #[test]
    fn test_animation_options_empty() {
        assert_eq!(AnimationOptions::new().to_attribute(), "{}");
    }

    #[test]
    fn test_format_scalar() {
        assert_eq!(format_scalar(200.0), "200");
        assert_eq!(format_scalar(0.85), "0.85");
        assert_eq!(format_scalar(0.0), "0");
    }

    #[test]
    fn test_config_builder() {
        let config = PanelConfig::new()
            .side(Side::Right)
            .width(300.0)
            .collapsed(true)
            .swipeable(true)
            .open(true)
            .open_threshold(0.3)
            .on_open(|_| {});

        assert_eq!(config.side, Side::Right);
        assert_eq!(config.width, Some(Dimension::Px(300.0)));
        assert!(config.is_collapsed);
        assert!(config.is_swipeable);
        assert!(config.is_open);
        assert_eq!(config.open_threshold, Some(0.3));
        assert!(config.callbacks.on_open.is_some());
        assert!(config.callbacks.on_close.is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config = PanelConfig::new();
        assert_eq!(config.side, Side::Left);
        assert!(!config.is_collapsed);
        assert!(!config.is_swipeable);
        assert!(!config.is_open);
        assert!(config.width.is_none());
        assert!(config.mode.is_none());
    }
}
