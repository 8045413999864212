//! # cmake-starter - C++/CMake project scaffolding
//!
//! Creates a new C++ project from a fixed CMake template repository.
//!
//! ## Quick Start
//!
//! ```bash
//! cmake-starter "Sample App"
//! cmake-starter my_tool --gcc-version 13
//! ```
//!
//! ## What a run does
//!
//! 1. Clone the template into `./<kebab-name>`
//! 2. Replace `@PROJECT_NAME@` in `CMakeLists.txt` and `.vscode/launch.json`
//! 3. Remove the template's `.git/`
//! 4. Run `cmake` once from `build/` to check the project configures
//! 5. `git init` the new project
//!
//! ## Module Organization
//!
//! - [`names`] - kebab and CMake identifier forms of the project name
//! - [`template`] - clone, placeholder substitution, history reset
//! - [`verify`] - CMake configure check
//! - [`scaffold`] - the pipeline tying the steps together

/// User configuration (`~/.cmake-starter/config.toml`).
pub mod config;

/// Error taxonomy for a scaffolding run.
pub mod error;

/// Project name normalization.
pub mod names;

/// The step-by-step scaffolding pipeline.
pub mod scaffold;

/// Template cloning and patching.
pub mod template;

/// GCC compiler naming.
pub mod toolchain;

/// CMake configure verification.
pub mod verify;
