//! Client-side routing for the clinic dashboard: the route table, the
//! navigation guard and the router that ties them together.

mod config;
mod guard;
mod location;
mod route;
mod router;
pub mod routes;
mod table;
mod view;

pub use config::{Config, DEFAULT_SESSION_KEY, GuardMode};
pub use guard::{AuthPolicy, Decision, Guard, SessionProvider};
pub use location::Location;
pub use route::{RouteMeta, RouteRecord, RouteTarget};
pub use router::{Navigation, ResolvedRoute, Router};
pub use table::{RouteMatch, RouteTable};
pub use view::LazyView;

#[cfg(test)]
mod testing;
