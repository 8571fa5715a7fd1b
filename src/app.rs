// SPDX-License-Identifier: MPL-2.0

pub use page::{Message, PageModel};

mod overlay;
mod page;
mod utils;
