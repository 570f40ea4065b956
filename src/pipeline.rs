use crate::bind::{RenderRecord, bind};
use crate::bounds::{BoundingBox, Canvas};
use crate::config::Config;
use crate::identity::IdAssigner;
use crate::loader::{LoadError, Source, load_document};
use crate::render::render_svg;
use crate::tree::TreeNode;

/// Everything one render pass produces.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub tree: TreeNode,
    pub records: Vec<RenderRecord>,
    pub bounds: BoundingBox,
    pub canvas: Canvas,
    pub svg: String,
}

/// One load -> bind -> size -> render run over a single document.
pub struct RenderPass {
    config: Config,
    ids: IdAssigner,
}

impl RenderPass {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ids: IdAssigner::new(),
        }
    }

    pub async fn run(self, source: &Source) -> Result<RenderOutput, LoadError> {
        let tree = load_document(source).await?;
        Ok(self.render(tree))
    }

    pub fn render(mut self, tree: TreeNode) -> RenderOutput {
        let records = bind(&tree, &mut self.ids);

        let bounds = BoundingBox::of(&tree);
        log::info!(
            "min_x = {}, min_y = {}, max_x = {}, max_y = {}",
            bounds.min_x,
            bounds.min_y,
            bounds.max_x,
            bounds.max_y
        );
        let canvas = bounds.canvas(self.config.render.align_top);

        let svg = render_svg(&records, &canvas, &self.config.theme, &self.config.render);
        log::debug!(
            "rendered {} nodes ({} new ids) on a {}x{} canvas",
            records.len(),
            self.ids.issued(),
            canvas.width,
            canvas.height
        );

        RenderOutput {
            tree,
            records,
            bounds,
            canvas,
            svg,
        }
    }
}
