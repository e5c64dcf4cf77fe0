use thiserror::Error;

/// Inconsistencies in the static tables. The shipped catalog never produces
/// these; they guard edits to the tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("package {name} generated twice with different geometry")]
    PackageConflict { name: String },
    #[error("footprint {footprint} connects to pad {pad}, which package {package} does not have")]
    UnknownPad {
        footprint: String,
        package: String,
        pad: String,
    },
}
