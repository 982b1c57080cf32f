use std::rc::Rc;
use std::time::Duration;

use furl_core::animation::Easing;
use furl_core::geometry::Size;
use furl_core::host::ManualHost;
use furl_core::modifier::Modifier;
use furl_core::view::{View, ViewKind};
use furl_ui::{Collapsible, CollapsibleProps, CollapsibleState};

const FRAME: Duration = Duration::from_millis(16);

fn content() -> View {
    View::new(ViewKind::Box).modifier(Modifier::new().height(200.0))
}

fn pump(host: &ManualHost, state: &CollapsibleState, label: &str) {
    while host.pending_frames() > 0 {
        host.advance(FRAME);
        host.run_frame();
        log::info!("{label}: height {:.1}", state.height());
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional easing name, e.g. `collapse_demo ease-out-cubic`.
    let easing = match std::env::args().nth(1) {
        Some(name) => name.parse::<Easing>()?,
        None => Easing::EaseOutCubic,
    };

    let host = Rc::new(ManualHost::new());
    let node = host.register_node(Size {
        width: 320.0,
        height: 200.0,
    });

    let props = CollapsibleProps {
        easing,
        ..CollapsibleProps::default()
    };
    let state = CollapsibleState::new(host.clone(), props.clone());
    state.attach_content(node);

    log::info!("mounted collapsed at height {:.1}", state.height());

    let expanded = CollapsibleProps {
        collapsed: false,
        ..props.clone()
    };
    let _ = Collapsible(expanded, &state, content());
    pump(&host, &state, "expanding");

    let _ = Collapsible(props, &state, content());
    pump(&host, &state, "collapsing");

    log::info!("settled at height {:.1}", state.height());
    Ok(())
}
