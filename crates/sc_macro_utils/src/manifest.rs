use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a workspace crate as seen from the
/// caller's Cargo.toml.
///
/// Derive macros emit absolute paths such as `::sc_class::Instance`, which
/// only resolve if the invoking crate depends on `sc_class` directly. Crates
/// that only depend on the facade need `::sc_core::class::Instance` instead.
///
/// # Example
///
/// ```rust
/// # use sc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("sc_class"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `sc_` and the caller depends on
///    the facade crate `sc_core`, return `::sc_core::short_name`
///    (e.g. `sc_class` -> `::sc_core::class`).
/// 3. The same for a facade renamed to `sc` in the caller's manifest.
/// 4. Repeat step 1-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A crate that uses its own derive (e.g. `sc_class` in its unit tests) falls
/// into rule 5 and resolves through `extern crate self as sc_class;`.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Option<Document<Box<str>>>,
    pub modified_time: Option<SystemTime>,
}

const CORE_NAME: &str = "sc_core";
const SHORT_NAME: &str = "sc";
const CRATE_PREFIX: &str = "sc_";

impl Manifest {
    // Try get `Cargo.toml` path.
    #[inline(never)]
    fn get_manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    // Try get `Cargo.toml` modified time.
    #[inline(never)]
    fn get_manifest_modified_time(cargo_manifest_path: &Path) -> Option<SystemTime> {
        std::fs::metadata(cargo_manifest_path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Option<Document<Box<str>>> {
        let manifest = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(manifest).ok()
    }

    #[inline]
    fn crate_root(name: &str) -> syn::Path {
        let ident = syn::Ident::new(name, proc_macro2_span());
        let mut path = syn::Path::from(ident);
        path.leading_colon = Some(Default::default());
        path
    }

    #[inline]
    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::crate_root(name));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        [CORE_NAME, SHORT_NAME]
            .into_iter()
            .find(|facade| deps.contains_key(facade))
            .map(|facade| {
                let mut path = Self::crate_root(facade);
                path.segments
                    .push(syn::Ident::new(module, proc_macro2_span()).into());
                path
            })
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let Some(manifest) = &self.manifest else {
            return Self::crate_root(name);
        };

        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|section| match manifest.get(section) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::crate_root(name))
    }

    /// Obtain the [Manifest] of the caller's Cargo.toml.
    ///
    /// This function reads and caches the caller's `Cargo.toml`. Parsing the
    /// manifest and acquiring the global cache lock are relatively expensive for
    /// proc-macros, so callers should invoke [`Manifest::shared`] once per macro
    /// invocation and pass the returned [`syn::Path`] around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::get_manifest_path() else {
            return func(&Manifest {
                manifest: None,
                modified_time: None,
            });
        };
        let modified_time = Self::get_manifest_modified_time(&manifest_path);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[inline(always)]
fn proc_macro2_span() -> proc_macro2::Span {
    proc_macro2::Span::call_site()
}
