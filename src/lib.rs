//! Core library for the divtool command line application.
//!
//! The library exposes the interactive division routine used by the binary
//! as well as the integration tests. Responsibilities are kept narrow: operand
//! parsing lives in [`division::input`], the arithmetic in
//! [`division::arithmetic`], persistence under [`division::io`], user-facing
//! wording in [`division::messages`], and the orchestration of a single run
//! in [`division::session`].

pub mod division;

pub use division::{
    DivisionTool, ErrorKind, Outcome, Result, ToolError, arithmetic, error, input, io, messages,
    session,
};
