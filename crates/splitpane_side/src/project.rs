//! Render-time projection of panel configuration onto element attributes

use splitpane_element::{attr, AttributeMap};

use crate::config::{format_scalar, PanelConfig};

/// Project a [`PanelConfig`] onto the element attribute vocabulary
///
/// Pure and side-effect free; re-run on every render. Two fields never
/// appear in the output: `is_open` is reconciled imperatively (open/closed
/// state is element-owned, not attribute-driven), and the lifecycle
/// callbacks are bound at mount. Absent optional fields are omitted.
pub fn project(config: &PanelConfig) -> AttributeMap {
    let mut attrs = AttributeMap::new();

    // collapse and swipeable use a literal-string encoding and are always
    // present; the element distinguishes "false" from an absent attribute
    attrs.insert(
        attr::COLLAPSE,
        if config.is_collapsed { "collapse" } else { "false" }.to_string(),
    );
    attrs.insert(
        attr::SWIPEABLE,
        if config.is_swipeable { "swipeable" } else { "false" }.to_string(),
    );

    if let Some(ref width) = config.width {
        attrs.insert(attr::WIDTH, width.to_attribute());
    }
    attrs.insert(attr::SIDE, config.side.as_str().to_string());
    if let Some(ref animation) = config.animation {
        attrs.insert(attr::ANIMATION, animation.clone());
    }
    if let Some(ref options) = config.animation_options {
        attrs.insert(attr::ANIMATION_OPTIONS, options.to_attribute());
    }
    if let Some(threshold) = config.open_threshold {
        attrs.insert(attr::OPEN_THRESHOLD, format_scalar(threshold));
    }
    if let Some(mode) = config.mode {
        attrs.insert(attr::MODE, mode.as_str().to_string());
    }
    if let Some(ref width) = config.swipe_target_width {
        attrs.insert(attr::SWIPE_TARGET_WIDTH, width.to_attribute());
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimationOptions, Side};
    use splitpane_element::PanelMode;

    #[test]
    fn test_minimal_config_projects_required_encodings() {
        let attrs = project(&PanelConfig::new());

        assert_eq!(attrs.get(attr::COLLAPSE).unwrap(), "false");
        assert_eq!(attrs.get(attr::SWIPEABLE).unwrap(), "false");
        assert_eq!(attrs.get(attr::SIDE).unwrap(), "left");
        assert_eq!(attrs.len(), 3);
    }

    #[test]
    fn test_collapse_and_swipeable_literal_encoding() {
        let attrs = project(&PanelConfig::new().collapsed(true).swipeable(true));
        assert_eq!(attrs.get(attr::COLLAPSE).unwrap(), "collapse");
        assert_eq!(attrs.get(attr::SWIPEABLE).unwrap(), "swipeable");
    }

    #[test]
    fn test_mount_scenario_attributes() {
        let config = PanelConfig::new()
            .side(Side::Left)
            .width(200.0)
            .collapsed(true)
            .swipeable(true);
        let attrs = project(&config);

        assert_eq!(attrs.get(attr::COLLAPSE).unwrap(), "collapse");
        assert_eq!(attrs.get(attr::SWIPEABLE).unwrap(), "swipeable");
        assert_eq!(attrs.get(attr::WIDTH).unwrap(), "200");
        assert_eq!(attrs.get(attr::SIDE).unwrap(), "left");
    }

    #[test]
    fn test_width_percentage_passthrough() {
        let attrs = project(&PanelConfig::new().width("20%"));
        assert_eq!(attrs.get(attr::WIDTH).unwrap(), "20%");
    }

    #[test]
    fn test_renamed_attributes() {
        let config = PanelConfig::new()
            .animation_options(AnimationOptions::new().duration(0.2).timing("ease-in"))
            .open_threshold(0.3)
            .swipe_target_width(44.0);
        let attrs = project(&config);

        assert_eq!(
            attrs.get(attr::ANIMATION_OPTIONS).unwrap(),
            "{duration: 0.2, timing: 'ease-in'}"
        );
        assert_eq!(attrs.get(attr::OPEN_THRESHOLD).unwrap(), "0.3");
        assert_eq!(attrs.get(attr::SWIPE_TARGET_WIDTH).unwrap(), "44");
    }

    #[test]
    fn test_mode_passes_through_when_present() {
        let attrs = project(&PanelConfig::new().mode(PanelMode::Collapse));
        assert_eq!(attrs.get(attr::MODE).unwrap(), "collapse");

        let attrs = project(&PanelConfig::new());
        assert!(attrs.get(attr::MODE).is_none());
    }

    #[test]
    fn test_open_intent_and_callbacks_never_projected() {
        let config = PanelConfig::new()
            .open(true)
            .on_open(|_| {})
            .on_close(|_| {})
            .on_pre_open(|_| {})
            .on_pre_close(|_| {})
            .on_mode_change(|_| {});
        let attrs = project(&config);

        // only the three always-present attributes survive
        let keys: Vec<&str> = attrs.keys().copied().collect();
        assert_eq!(keys, vec![attr::COLLAPSE, attr::SWIPEABLE, attr::SIDE]);
    }

    #[test]
    fn test_projection_is_pure() {
        let config = PanelConfig::new()
            .side(Side::Right)
            .width(240.0)
            .collapsed(true)
            .animation("overlay")
            .open_threshold(0.5);

        assert_eq!(project(&config), project(&config));
    }
}
