pub mod bind;
pub mod bounds;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dump;
pub mod flatten;
pub mod identity;
pub mod loader;
pub mod pipeline;
pub mod render;
pub mod theme;
pub mod tree;

pub use bind::{RenderRecord, bind};
pub use bounds::{BoundingBox, Canvas};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, RenderConfig, load_config};
pub use flatten::flatten;
pub use identity::IdAssigner;
pub use loader::{LoadError, Source, load_document};
pub use pipeline::{RenderOutput, RenderPass};
pub use render::render_svg;
pub use theme::Theme;
pub use tree::{NodeId, TreeNode};
