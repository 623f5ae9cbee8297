use crate::BakeContext;
use crate::descriptor::Descriptor;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::scanner;
use std::path::PathBuf;
use tracing::info;

/// Outcome of a successful bake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeReport {
    /// Where the manifest was written
    pub manifest_path: PathBuf,
    /// Number of file records written
    pub files: usize,
}

/// Load the root descriptor and walk the tree, without writing anything
///
/// # Errors
///
/// Returns an error if:
/// - The root descriptor is missing or malformed
/// - A directory cannot be read
/// - A nested descriptor is malformed
pub fn build_manifest(ctx: &BakeContext) -> Result<Manifest> {
    let root_descriptor = Descriptor::load(&ctx.descriptor_path())?;
    info!(
        name = %root_descriptor.name,
        version = %root_descriptor.version,
        author = %root_descriptor.author,
        "Loaded root descriptor"
    );

    let mut manifest = Manifest::new(&root_descriptor, &ctx.config.urls);
    for record in scanner::collect_files(&ctx.root, &root_descriptor, &ctx.config)? {
        manifest.push(record);
    }
    Ok(manifest)
}

/// Bake the manifest and write it to the scan root
///
/// Nothing is written unless the whole tree was scanned successfully, and an
/// existing manifest is replaced atomically.
///
/// # Errors
///
/// Returns an error if [`build_manifest`] fails or the manifest cannot be
/// written.
pub fn run(ctx: &BakeContext) -> Result<BakeReport> {
    let manifest = build_manifest(ctx)?;
    let manifest_path = ctx.manifest_path();
    manifest.save(&manifest_path)?;

    info!(path = %manifest_path.display(), files = manifest.len(), "Manifest written");
    Ok(BakeReport {
        manifest_path,
        files: manifest.len(),
    })
}
