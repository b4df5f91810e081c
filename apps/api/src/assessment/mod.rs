// Assessment progression: the four fixed rounds, the session they advance,
// the pure transition logic, its persisted mirror and the proctoring monitor.
// `service` applies transition effects (notifications, navigation, countdown)
// and is the only place that touches the store.

pub mod flow;
pub mod handlers;
pub mod persistence;
pub mod proctoring;
pub mod rounds;
pub mod service;
pub mod session;
