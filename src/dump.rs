use crate::bind::RenderRecord;
use crate::bounds::{BoundingBox, Canvas};
use crate::pipeline::RenderOutput;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump<'a> {
    pub node_count: usize,
    pub depth: usize,
    pub bounds: BoundingBox,
    pub canvas: Canvas,
    pub nodes: &'a [RenderRecord],
}

impl<'a> LayoutDump<'a> {
    pub fn from_output(output: &'a RenderOutput) -> Self {
        LayoutDump {
            node_count: output.records.len(),
            depth: output.tree.depth(),
            bounds: output.bounds,
            canvas: output.canvas,
            nodes: &output.records,
        }
    }
}

pub fn write_layout_dump(path: &Path, output: &RenderOutput) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &LayoutDump::from_output(output))?;
    Ok(())
}
