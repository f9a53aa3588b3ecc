//! Uniform service management across init systems.
//!
//! Probes the host for a supported service manager (systemd or runit) and
//! exposes a single boolean-result interface for enabling, disabling,
//! restarting and querying services. Hosts without a supported manager get
//! a no-op fallback so callers are never blocked.

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod exec;

pub use backend::traits::ServiceManager;
pub use backend::{detect_manager, services};
