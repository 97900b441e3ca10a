use std::time::Instant;

use blockshade_common::{BlockshadeError, Result};
use blockshade_config::schema::Backend;
use blockshade_config::{validation, BlockshadeConfig};
use blockshade_renderer::{render_scene_gpu, render_scene_with_stats, GpuContext, Scene};

use crate::cli::RenderArgs;

/// Apply command-line overrides on top of the loaded config.
fn effective_config(args: &RenderArgs, mut config: BlockshadeConfig) -> Result<BlockshadeConfig> {
    if let Some(width) = args.width {
        config.render.width = width;
    }
    if let Some(height) = args.height {
        config.render.height = height;
    }
    if let Some(backend) = args.backend {
        config.render.backend = backend.into();
    }
    validation::validate(&config)?;
    Ok(config)
}

pub fn run(args: &RenderArgs, config: BlockshadeConfig) -> Result<String> {
    let config = effective_config(args, config)?;
    let start = Instant::now();

    let scene = Scene::load(&args.scene)?;
    let batches = scene.batches()?;

    let image = match config.render.backend {
        Backend::Software => {
            let (framebuffer, stats) = render_scene_with_stats(&batches, &config);
            tracing::info!(
                triangles = stats.triangles,
                written = stats.fragments_written,
                discarded = stats.fragments_discarded,
                "software draw stats"
            );
            framebuffer.to_image()
        }
        Backend::Gpu => {
            let ctx = GpuContext::headless_blocking()?;
            render_scene_gpu(&ctx, &batches, &config)?
        }
    };

    image
        .save(&args.output)
        .map_err(|e| BlockshadeError::Image(format!("{}: {e}", args.output.display())))?;

    let elapsed = start.elapsed();
    tracing::info!(
        backend = ?config.render.backend,
        elapsed_ms = elapsed.as_millis() as u64,
        "rendered {}",
        args.scene.display()
    );
    Ok(format!(
        "wrote {} ({}x{}, {} instances)",
        args.output.display(),
        config.render.width,
        config.render.height,
        batches.instance_count()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::BackendArg;

    fn args(scene: std::path::PathBuf, output: std::path::PathBuf) -> RenderArgs {
        RenderArgs {
            scene,
            output,
            backend: Some(BackendArg::Software),
            width: Some(40),
            height: Some(30),
        }
    }

    #[test]
    fn overrides_apply_and_validate() {
        let mut render_args = args("s.toml".into(), "o.png".into());
        let config = effective_config(&render_args, BlockshadeConfig::default()).unwrap();
        assert_eq!(config.render.width, 40);
        assert_eq!(config.render.height, 30);
        assert_eq!(config.render.backend, Backend::Software);

        render_args.width = Some(0);
        let err = effective_config(&render_args, BlockshadeConfig::default()).unwrap_err();
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn software_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let scene = dir.path().join("scene.toml");
        std::fs::write(
            &scene,
            "[[quads]]\noffset = [0.0, 0.0]\nsize = [10.0, 10.0]\ncolor = \"#ff0000\"\n",
        )
        .unwrap();
        let output = dir.path().join("out.png");

        let summary = run(&args(scene, output.clone()), BlockshadeConfig::default()).unwrap();
        assert!(summary.contains("40x30"));

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (40, 30));
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(20, 20).0, [5, 5, 5, 255]);
    }

    #[test]
    fn missing_scene_is_scene_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &args(dir.path().join("nope.toml"), dir.path().join("out.png")),
            BlockshadeConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BlockshadeError::Scene(_)));
    }
}
