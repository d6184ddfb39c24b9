// storefront
//
// everything the webapp needs that does not touch the browser: the breakpoint tables behind
// the responsive layout components, the route-scoped scroll tracker, the two theme records,
// the site configuration and the static product catalog.  keeping these here means they
// can be tested natively instead of inside a wasm runtime
pub mod catalog;
pub mod config;
pub mod layout;
pub mod scroll;
pub mod theme;
