//! Router module discovery and loading
//!
//! An application keeps its routes in self-contained module directories.
//! Each module ships a router manifest, a JSON file whose name ends in
//! `.router.json`, declaring routes against handlers registered by name
//! during bootstrap:
//!
//! ```json
//! {
//!     "routes": [
//!         { "method": "GET", "path": "/users", "handler": "users.index",
//!           "name": "users.index" }
//!     ]
//! }
//! ```
//!
//! At startup the whole modules tree is scanned once and every manifest is
//! folded into the router. Loading is fail-fast: a broken manifest aborts
//! startup rather than serving a partial route table.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::discovery::{find_files, DiscoveryError, Exclusion, FilePattern};
use crate::routing::{register_route_name, resolve_handler, RouteMethod, Router};

/// File name suffix identifying router manifests
pub const ROUTER_FILE_SUFFIX: &str = ".router.json";

/// Errors raised while loading router modules
#[derive(Debug, Error)]
pub enum ModuleError {
    /// The modules tree could not be scanned
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// A discovered manifest could not be read
    #[error("could not read router manifest '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A manifest is not valid JSON or misses required fields
    #[error("invalid router manifest '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A route references a handler that was never registered
    #[error("unknown handler '{handler}' referenced by '{path}'")]
    UnknownHandler { handler: String, path: PathBuf },

    /// A route declares a method the router does not dispatch
    #[error("unsupported method '{method}' in '{path}'")]
    UnsupportedMethod { method: String, path: PathBuf },
}

/// A parsed router manifest
#[derive(Debug, Deserialize)]
pub struct RouterManifest {
    pub routes: Vec<RouteSpec>,
}

/// One route declaration inside a manifest
#[derive(Debug, Deserialize)]
pub struct RouteSpec {
    pub method: String,
    pub path: String,
    /// Name of a handler registered via
    /// [`register_handler`](crate::routing::register_handler)
    pub handler: String,
    /// Optional route name for URL generation
    #[serde(default)]
    pub name: Option<String>,
}

/// Collect every router manifest under `root`
pub fn discover(root: &Path, exclude: &Exclusion) -> Result<Vec<PathBuf>, DiscoveryError> {
    find_files(root, &FilePattern::suffix(ROUTER_FILE_SUFFIX), exclude)
}

/// Load every router manifest under `root` into `router`
pub fn load_into(
    mut router: Router,
    root: &Path,
    exclude: &Exclusion,
) -> Result<Router, ModuleError> {
    for path in discover(root, exclude)? {
        let manifest = read_manifest(&path)?;
        let count = manifest.routes.len();

        for spec in manifest.routes {
            let method =
                RouteMethod::parse(&spec.method).ok_or_else(|| ModuleError::UnsupportedMethod {
                    method: spec.method.clone(),
                    path: path.clone(),
                })?;
            let handler =
                resolve_handler(&spec.handler).ok_or_else(|| ModuleError::UnknownHandler {
                    handler: spec.handler.clone(),
                    path: path.clone(),
                })?;

            router.insert(method, &spec.path, handler, Some(spec.handler));
            if let Some(name) = &spec.name {
                register_route_name(name, &spec.path);
            }
        }

        tracing::info!(manifest = %path.display(), routes = count, "loaded router module");
    }

    Ok(router)
}

fn read_manifest(path: &Path) -> Result<RouterManifest, ModuleError> {
    let raw = fs::read_to_string(path).map_err(|source| ModuleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ModuleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
