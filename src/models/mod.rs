// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure form data types and validation rules, free of UI concerns.

pub mod field_group;
pub mod form_state;
pub mod validation;
