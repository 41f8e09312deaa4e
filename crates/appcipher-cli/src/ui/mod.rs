//! UI primitives for the AppCipher CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and styles
//! - **Render**: Badges, key-value lines, hints, errors
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{badge, kv, print, Badge, UiContext};
//!
//! let ctx = UiContext::from_env(args.json, cli.no_color);
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! print(&ctx, &badge(&ctx, Badge::Ok, "Key stored"));
//! print(&ctx, &kv(&ctx, "Service", &identity.service));
//! ```

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{badge, hint, kv, print, print_error};
