use crate::bind::RenderRecord;
use crate::bounds::Canvas;
use crate::config::RenderConfig;
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

pub fn render_svg(
    records: &[RenderRecord],
    canvas: &Canvas,
    theme: &Theme,
    config: &RenderConfig,
) -> String {
    let mut svg = String::new();
    let width = canvas.width;
    let height = canvas.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\">",
    ));

    if config.draw_background {
        svg.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            escape_xml(&theme.background)
        ));
    }

    svg.push_str(&format!(
        "<g transform=\"translate({:.2}, {:.2})\">",
        canvas.translate_x, canvas.translate_y
    ));

    for record in records {
        svg.push_str(&node_svg(record, theme, config));
    }

    svg.push_str("</g>");
    svg.push_str("</svg>");
    svg
}

fn node_svg(record: &RenderRecord, theme: &Theme, config: &RenderConfig) -> String {
    // The rect hangs from the node's top-center point.
    format!(
        "<g class=\"node\" transform=\"translate({:.2}, {:.2})\"><rect data-id=\"{}\" x=\"{:.2}\" y=\"0\" rx=\"{}\" ry=\"{}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/></g>",
        record.x,
        record.y,
        record.id,
        -record.width / 2.0,
        config.corner_radius,
        config.corner_radius,
        record.width,
        record.height,
        escape_xml(&theme.node_fill),
        theme.node_fill_opacity,
        escape_xml(&theme.node_stroke),
        config.stroke_width
    )
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .or_else(|| usvg::Size::from_wh(800.0, 600.0))
        .ok_or_else(|| anyhow::anyhow!("Invalid default PNG size"))?;

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
