//! Route table and sidebar navigation for the Prism documentation site.
//!
//! This crate provides:
//! - [`Route`]: the closed enumeration of documentation page paths
//! - [`SIDEBAR`]: the grouped link table the sidebar renders from
//!
//! Both are constant data. The rendering layer resolves routes to paths
//! when constructing links and iterates [`SIDEBAR`] as-is; nothing here
//! is computed or mutated at runtime.
//!
//! # Quick Start
//!
//! ```
//! use prism_nav::{Route, SIDEBAR};
//!
//! // Resolve a route to the path used when constructing links
//! assert_eq!(Route::AiGateway.path(), "/guides/ai_gateway");
//!
//! // Iterate groups in display order for sidebar rendering
//! let titles: Vec<&str> = SIDEBAR.iter().map(|group| group.title).collect();
//! assert_eq!(titles, ["Getting Started", "Guides", "Integrations", "Cookbook"]);
//! ```

mod route;
mod sidebar;

pub use route::Route;
pub use sidebar::{Link, NavGroup, SIDEBAR};
