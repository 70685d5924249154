//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! Inbound ports are what the CLI calls; outbound ports describe the
//! collaborators the launch layer hands its plan to.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │   CLI   │            │   Plugin    │              │ Renderers │
//! │ Adapter │            │  Contract   │              │ JSON, XML │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```

pub mod inbound;
pub mod outbound;
