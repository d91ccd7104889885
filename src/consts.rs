use std::time::Duration;

/// Default registry endpoint queried for the latest published version
pub(crate) const REGISTRY_URL: &str = "https://pypi.org/pypi/bidskit/json";

/// Hard cap on the version-check request; the transport default is unbounded
pub(crate) const REGISTRY_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable overriding package root discovery
pub(crate) const HOME_ENV: &str = "BIDSKIT_HOME";

/// Folder names derived from the package root
pub(crate) const SCHEMA_DIR: &str = "schema";
pub(crate) const HEURISTICS_DIR: &str = "heuristics";
pub(crate) const PLUGIN_DIR: &str = "plugins";

/// Default template bidsmap under the heuristics folder
pub(crate) const DEFAULT_TEMPLATE: &str = "bidsmap_dccn.yaml";

/// File under the schema folder holding the supported BIDS version
pub(crate) const BIDS_VERSION_FILE: &str = "BIDS_VERSION";
