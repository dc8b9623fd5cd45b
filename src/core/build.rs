use crate::domain::model::CopyReport;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

fn has_extension(path: &Path, extension: &str) -> bool {
    let wanted = extension.trim_start_matches('.');
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == wanted)
}

/// Mirrors `source` into `target`, copying only files with `extension`.
/// Directories are created on the way down, even when they end up empty.
pub fn copy_files(source: &Path, target: &Path, extension: &str) -> Result<CopyReport> {
    let mut report = CopyReport::default();
    copy_dir(source, target, extension, Path::new(""), &mut report)?;
    Ok(report)
}

fn copy_dir(
    source: &Path,
    target: &Path,
    extension: &str,
    relative: &Path,
    report: &mut CopyReport,
) -> Result<()> {
    // 依名稱排序，輸出順序才穩定
    let mut entries = fs::read_dir(source)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let source_path = entry.path();
        let target_path = target.join(entry.file_name());
        let relative_path = relative.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            if !target_path.exists() {
                fs::create_dir_all(&target_path)?;
                report.directories_created += 1;
            }
            copy_dir(&source_path, &target_path, extension, &relative_path, report)?;
        } else if has_extension(&source_path, extension) {
            fs::copy(&source_path, &target_path)?;
            tracing::info!("✅ Copied: {}", relative_path.display());
            report
                .copied
                .push(relative_path.to_string_lossy().replace('\\', "/"));
        } else {
            tracing::debug!("Skipping {}", relative_path.display());
        }
    }

    Ok(())
}

/// Creates the output directory, then copies.
pub fn build(source: &Path, output: &Path, extension: &str) -> Result<CopyReport> {
    tracing::info!("🏗️  Building application...");
    if !output.exists() {
        fs::create_dir_all(output)?;
    }

    let report = copy_files(source, output, extension)?;

    tracing::info!("✅ Build complete!");
    tracing::info!("📦 Output: {}", output.display());
    Ok(report)
}
