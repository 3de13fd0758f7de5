//! Fn tag checking.
//!
//! A fn tag is a string literal assigned to a local `fn` variable at the top
//! of a Go function body, naming the function's package, file and name:
//!
//! ```go
//! func (w *Widget) Render() string {
//!     fn := "shapes.widget.*Widget-Render"
//!     ...
//! }
//! ```
//!
//! - [`naming`] derives the canonical tag (and accepted legacy forms)
//! - [`reconcile`] compares declared tags against it and plans corrections

pub mod naming;
pub mod reconcile;

pub use naming::{CanonicalTag, MethodReceiver, NamingScheme, TagSubject, NAMING_SCHEMES};
pub use reconcile::{go_quote, Finding, Reconciler, Reconciliation};
