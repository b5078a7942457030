//! The strategy console's route table.
//!
//! ```text
//! /                    layouts/default
//! ├── ""               pages/index
//! ├── build            pages/buildStrategy
//! └── monitor/:stratId pages/monitor        (params → props)
//! *                    pages/404
//! ```

use crate::routing::{Route, RouteTable, TableError};
use crate::view::ComponentRef;

/// Every view module the application ships.
pub const MODULES: [&str; 5] = [
    "layouts/default",
    "pages/index",
    "pages/buildStrategy",
    "pages/monitor",
    "pages/404",
];

/// Build the application route table.
pub fn routes() -> Result<RouteTable, TableError> {
    RouteTable::new(vec![
        Route::new("/", ComponentRef::import("layouts/default")).with_children(vec![
            Route::new("", ComponentRef::import("pages/index")),
            Route::new("build", ComponentRef::import("pages/buildStrategy")),
            Route::new("monitor/:stratId", ComponentRef::import("pages/monitor")).with_props(true),
        ]),
        // Always leave this as the last one.
        Route::wildcard(ComponentRef::import("pages/404")),
    ])
}
