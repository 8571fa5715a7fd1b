// SPDX-License-Identifier: MPL-2.0

pub mod app;
pub mod config;
pub mod i18n;
pub mod icons;
pub mod note;
