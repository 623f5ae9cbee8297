use crate::DESCRIPTOR_FILE;
use crate::config::Config;
use crate::descriptor::Descriptor;
use crate::error::Result;
use crate::manifest::FileRecord;
use crate::output;
use crate::scanner::scope::DescriptorStack;
use crate::utils::paths::{normalize_to_relative, relative_to, to_url_path};
use std::cmp::Ordering;
use std::path::Path;
use tracing::{Level, debug, span};
use walkdir::{DirEntry, WalkDir};

/// Collect a file record for every source file beneath `root`
///
/// Performs a single depth-first traversal. Within a directory, files are
/// visited before subdirectories and each group is ordered by name, so the
/// result is the same on every platform. Excluded directories (the tool's own
/// directory and `.git` by default) are never entered.
///
/// Each directory holding a `ccpack.json` re-bases the records beneath it on
/// that descriptor; how long it stays in effect follows `config.scan.scoping`.
///
/// # Arguments
/// * `root` - Scan root
/// * `root_descriptor` - Descriptor already loaded from `root`
/// * `config` - Scan and URL settings
///
/// # Errors
///
/// Returns an error if a directory cannot be read or a nested descriptor is
/// malformed.
pub fn collect_files(
    root: &Path,
    root_descriptor: &Descriptor,
    config: &Config,
) -> Result<Vec<FileRecord>> {
    let span = span!(Level::DEBUG, "collect_files", root = %root.display());
    let _guard = span.enter();

    let mut scope = DescriptorStack::new(root_descriptor.clone(), config.scan.scoping);
    let mut records = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_first)
        .into_iter()
        .filter_entry(|e| !is_excluded(e, config));

    for entry in walker {
        let entry = entry?;
        let relative = normalize_to_relative(entry.path(), root);
        scope.leave_to(entry.depth());

        if entry.file_type().is_dir() {
            output::info(&format!("Entering directory: {}", display_dir(&relative)));

            // The root descriptor was loaded up front
            if entry.depth() > 0
                && let Some(descriptor) = Descriptor::load_from_dir(entry.path(), DESCRIPTOR_FILE)?
            {
                output::info(&format!(
                    "Found {DESCRIPTOR_FILE} in {}, using {}/{} {}",
                    display_dir(&relative),
                    descriptor.author,
                    descriptor.name,
                    descriptor.version
                ));
                scope.enter(entry.depth(), &relative, descriptor);
                debug!(nesting = scope.nesting(), dir = %relative.display(), "Descriptor override");
            }
            continue;
        }

        if !is_source_file(&entry, &config.scan.extension) {
            continue;
        }

        let frame = scope.current();
        let path = to_url_path(&relative_to(&relative, &frame.dir));
        let record = FileRecord::new(&frame.descriptor, path, &config.urls);
        output::action("Adding", &record.path);
        output::verbose(&format!("    {}", record.url));
        records.push(record);
    }

    debug!(files = records.len(), "Walk complete");
    Ok(records)
}

/// Files before directories, then by name
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Directories pruned from the walk; the root itself is never pruned
fn is_excluded(entry: &DirEntry, config: &Config) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && config.is_excluded_dir(&entry.file_name().to_string_lossy())
}

/// Non-directory entries whose name ends with `extension`
///
/// Symlinks are listed unless they resolve to a directory; dangling links
/// count as files.
fn is_source_file(entry: &DirEntry, extension: &str) -> bool {
    let is_file = !entry.file_type().is_dir()
        && !(entry.path_is_symlink() && entry.path().is_dir());

    is_file
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(extension))
}

fn display_dir(relative: &Path) -> String {
    if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        format!("./{}", to_url_path(relative))
    }
}
