/// Collision-free filename resolution.
///
/// When a file is moved into a category directory that already holds an
/// entry with the same name, the destination name gets a numeric suffix
/// (`report_1.pdf`, `report_2.pdf`, ...) instead of overwriting. Resolution
/// is pure existence probing; the caller performs the actual move.
use std::path::Path;

/// Returns a filename that does not currently exist under `target_dir`.
///
/// If `filename` itself is free it is returned unchanged. Otherwise the
/// name is split into stem and extension and candidates `stem_1.ext`,
/// `stem_2.ext`, ... are probed in increasing order until a free one is
/// found. Files without an extension probe `stem_1`, `stem_2`, ...
///
/// The counter increases monotonically, so resolution terminates for any
/// finite set of existing names.
///
/// # Examples
///
/// ```no_run
/// use downsort::name_resolver::resolve;
/// use std::path::Path;
///
/// let name = resolve(Path::new("/downloads/Documents"), "report.pdf");
/// // "report.pdf" if free, otherwise "report_1.pdf", "report_2.pdf", ...
/// println!("{}", name);
/// ```
pub fn resolve(target_dir: &Path, filename: &str) -> String {
    if !target_dir.join(filename).exists() {
        return filename.to_string();
    }

    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path.extension().map(|e| e.to_string_lossy().into_owned());

    let mut counter: u64 = 1;
    loop {
        let candidate = match &extension {
            Some(ext) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", stem, counter),
        };
        if !target_dir.join(&candidate).exists() {
            return candidate;
        }
        counter += 1;
    }
}
