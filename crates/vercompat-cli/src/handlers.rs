//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod banner;
mod compat;
mod completions;
mod index_created;
mod list;
mod resolve;
mod utils;
mod wire;

pub use banner::handle_banner;
pub use compat::handle_compat;
pub use completions::handle_completions;
pub use index_created::handle_index_created;
pub use list::handle_list;
pub use resolve::{handle_parse, handle_resolve};
pub use wire::{handle_decode, handle_encode};
