//! Generic client-side table engine: raw list -> filters -> pagination -> export.
//!
//! Platform independent; the front end binds a `TableView` to signals.

pub mod busy;
pub mod export;
pub mod filter;
pub mod paginator;
pub mod view;

pub use busy::ActionStart;
pub use export::{build_csv, export_filename, ExportColumn, ExportError, ExportScope};
pub use filter::{FilterKind, FilterSpec, FilterValue};
pub use paginator::{PageItem, PageNav, Paginator};
pub use view::{LoadTicket, PagePolicy, TableView};
