use std::path::Path;

use blockshade_common::Result;
use blockshade_renderer::ShaderKind;

/// Concatenated sources, or a summary of the files written under `out`.
pub fn run(out: Option<&Path>) -> Result<String> {
    let Some(dir) = out else {
        return Ok(ShaderKind::ALL
            .iter()
            .map(|kind| format!("// ---- {}.wgsl ----\n{}", kind.name(), kind.source()))
            .collect::<Vec<_>>()
            .join("\n"));
    };

    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for kind in ShaderKind::ALL {
        let path = dir.join(format!("{}.wgsl", kind.name()));
        std::fs::write(&path, kind.source())?;
        tracing::debug!(path = %path.display(), "wrote shader");
        written.push(path.display().to_string());
    }
    Ok(format!("wrote {} shaders:\n{}", written.len(), written.join("\n")))
}
