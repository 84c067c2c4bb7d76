//! Domain Layer
//!
//! This is the core of dirsync - strategy selection and argument
//! construction without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Request and invocation entities
//! - `value_objects/` - Endpoints, exclusions, strategies, warnings
//! - `services/` - Executor strategies and the planner
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never launches processes or touches the file system
//! 2. **Pure Functions** - Executors return invocations instead of running them
//! 3. **Ports & Adapters** - Probing and running go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
