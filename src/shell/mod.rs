// Composition root for the people API.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the selected storage backend once, for the process lifetime.
// - Wire the backend into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
