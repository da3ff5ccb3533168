/* This file is part of DarkFi (https://dark.fi)
 *
 * Copyright (C) 2020-2026 Dyne.org foundation
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/// Main result type used throughout the codebase.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the code generation layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    // ===============
    // Dispatch errors
    // ===============
    #[error("Unknown gadget `{0}`")]
    UnknownGadget(String),

    // =======================
    // Malformed record errors
    // =======================
    #[error("Incorrect number of arguments for `{gadget}` on line {line}. Expected {expected}, got {found}.")]
    ArityMismatch { gadget: &'static str, expected: usize, found: usize, line: usize },

    #[error("Gadget `{0}` does not produce a value, but an output is bound")]
    UnexpectedOutput(&'static str),

    #[error("Gadget `{0}` produces a value, but no output is bound")]
    MissingOutput(&'static str),

    #[error("Invalid identifier `{0}`")]
    InvalidIdent(String),

    #[error("Label `{0}` contains a character that cannot be escaped")]
    UnescapableLabel(String),

    // ==============
    // Binding errors
    // ==============
    #[error("Unknown variable reference `{name}` on line {line}")]
    UnboundVar { name: String, line: usize },

    #[error("Incorrect argument type for `{gadget}` on line {line}. Expected `{expected}`, got `{found}`.")]
    TypeMismatch { gadget: &'static str, expected: &'static str, found: &'static str, line: usize },
}
