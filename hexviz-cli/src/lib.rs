//! Shared wiring for the hexviz binaries.

use hexviz_core::{Color, Target};
use hexviz_dxf::DxfTarget;
use hexviz_term::TerminalViewer;

/// The standard target pair: the DXF writer first, the terminal viewer
/// last. The viewer blocks until closed, so it has to display after the
/// file is written. The file legend is drawn ByLayer, the viewer legend
/// yellow.
pub fn standard_targets(stem: &str) -> Vec<Target> {
    let mut dxf = DxfTarget::new();
    dxf.set_filename(stem);
    vec![
        Target::new(Box::new(dxf), Color::ByLayer),
        Target::new(Box::new(TerminalViewer::default()), Color::Yellow),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_target_is_registered_before_the_viewer() {
        let targets = standard_targets("out");
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].legend_color, Color::ByLayer);
        assert_eq!(targets[1].legend_color, Color::Yellow);
    }
}
