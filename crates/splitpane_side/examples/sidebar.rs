//! Navigation sidebar walkthrough
//!
//! Mounts a side panel on the in-memory host element, drives the viewport
//! across the collapse breakpoint, and toggles the declared open intent
//! while the lifecycle callbacks log what the element reports back.
//!
//! Run with: cargo run -p splitpane_side --example sidebar

use splitpane_element::HostPanel;
use splitpane_side::prelude::*;

fn main() -> Result<(), PanelError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = PanelConfig::new()
        .side(Side::Left)
        .width(240.0)
        .collapsed(true)
        .swipeable(true)
        .animation("overlay")
        .animation_options(AnimationOptions::new().duration(0.2).timing("ease-in"))
        .on_pre_open(|_| println!("panel is about to open"))
        .on_open(|_| println!("panel opened"))
        .on_pre_close(|_| println!("panel is about to close"))
        .on_close(|_| println!("panel closed"))
        .on_mode_change(|event| println!("mode changed: {:?}", event.mode()));

    let mut panel = SidePanel::new(config)
        .child(Node::text("Home"))
        .child(Node::text("Profile"))
        .child(Node::text("Settings"));

    panel.mount(HostPanel::new())?;

    // narrow viewport: the element switches to collapse mode on its own
    panel.element_mut()?.set_viewport_width(480.0);

    // declare the panel open, then closed again
    let base = panel.config().clone();
    panel.update(base.clone().open(true))?;
    panel.update(base.open(false))?;

    let element = panel.unmount()?;
    println!("unmounted; listeners left: {}", element.listener_count());
    Ok(())
}
