//! CLI logic for the Arrange grid tool.
//!
//! This module contains the core CLI logic: it loads a scene and a
//! configuration, arranges the scene's items, and writes the result.

pub mod error_adapter;
pub mod scene;

mod args;
mod config;

pub use args::Args;
pub use config::{LOCAL_CONFIG_PATH, load_config};

use log::info;

use arrange::{
    ArrangeError, Arranger, DEFAULT_SUMMARY_PREVIEW_LINES, LayoutResult, item::Placeable,
};

/// Run the Arrange CLI application
///
/// This function arranges the items of the input scene and writes the
/// updated scene to the output file.
///
/// # Errors
///
/// Returns `ArrangeError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene parsing errors
/// - An empty selection, a missing active item, or an active item that is
///   neither listed nor positioned by the scene
pub fn run(args: &Args) -> Result<LayoutResult, ArrangeError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let mut scene = scene::load_scene(&args.input)?;
    let active = args
        .active
        .as_deref()
        .or_else(|| scene.active())
        .map(|name| scene.resolve_active(name))
        .transpose()?;

    let arranger = Arranger::new(app_config);
    let result = arranger.arrange(
        scene.items_mut(),
        active.as_ref().map(|item| item as &dyn Placeable),
    )?;

    scene::write_scene(&args.output, &scene)?;

    for line in result
        .summary_preview(DEFAULT_SUMMARY_PREVIEW_LINES)
        .lines()
    {
        info!("{line}");
    }
    info!(output_file = args.output; "Scene exported successfully");

    Ok(result)
}
