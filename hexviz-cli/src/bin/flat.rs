//! Flat variant: outline the subdivided hexagon from `subdivision.json` as
//! red lines, write `subdivision-out.dxf`, then open the viewer.

use anyhow::Context;
use hexviz_cli::standard_targets;
use hexviz_core::{render, DrawJob, Legend, Source};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut job = DrawJob::new(Source::file("subdivision.json"));
    job.scale = 10.0;
    job.legend = Some(Legend {
        title: "X5 subdivision".to_string(),
        lines: vec![
            "subdivision.json".to_string(),
            "hex subdivision test".to_string(),
        ],
    });

    let mut targets = standard_targets("subdivision-out");
    render(&job, &mut targets).context("rendering the subdivision")?;
    Ok(())
}
