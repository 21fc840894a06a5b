/// srcgen-core: The patient clerk of source trees
///
/// Build files rot the moment someone adds a file the build never hears
/// about. This library is the clerk that walks the whole source tree,
/// writes every file down in strict alphabetical order, and fills in the
/// build template so nobody has to maintain the list by hand again.
///
/// ## Two Acts of Generation
///
/// **Discovery**: the census of the source tree
/// - Walks every subdirectory of the configured roots
/// - Keeps regular files only, never directories
/// - Leaves dotfiles alone unless asked to count them too
///
/// **Rendering**: the substitution into the template
/// - Expresses every path relative to the project root, `/`-separated
/// - Sorts the listing so two runs always agree to the byte
/// - Replaces every `%<IDENT>` placeholder with the indented listing
///
/// ## A Sample Conversation
///
/// ```rust,no_run
/// use std::path::PathBuf;
/// use srcgen_core::generate::{generate, GenerateConfig};
///
/// // The classic layout: a Source/ tree next to a CMake template.
/// let config = GenerateConfig {
///     project_root: PathBuf::from("/projects/delay-plugin"),
///     ..GenerateConfig::default()
/// };
///
/// let report = generate(&config)?;
/// println!(
///     "wrote {} ({} files, {} placeholders filled)",
///     report.output_path.display(),
///     report.files.len(),
///     report.placeholders_replaced,
/// );
/// #
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// ## Playground Rules
///
/// One walk, one substitution, one overwrite. No caching, no build graph,
/// no partial-write heroics: the output is a disposable artifact that gets
/// regenerated in full on every invocation, so the fix for any failure is
/// to correct the filesystem and run again.
///
/// ## The Cast of Characters
///
/// - [`generate::GenerateConfig`]: where to look and where to write
/// - [`listing::SourceListing`]: the sorted roll call of relative paths
/// - [`generate::GenerateReport`]: what a run found and touched

pub mod discovery;
pub mod generate;
pub mod listing;
pub mod output;
pub mod render;
