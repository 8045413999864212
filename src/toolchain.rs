//! GCC compiler selection for the configure step.
//!
//! The C and C++ compilers are always GCC. An optional version suffix is
//! appended to both binary names, so `--gcc-version 13` selects `gcc-13`
//! and `g++-13`.

/// The compiler pair handed to CMake
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GccToolchain {
    /// Either empty or `-<version>`
    suffix: String,
}

impl GccToolchain {
    /// Build a toolchain from an optional version string.
    /// An empty or whitespace-only version counts as absent.
    pub fn new(version: Option<&str>) -> Self {
        let suffix = match version.map(str::trim) {
            Some(v) if !v.is_empty() => format!("-{}", v),
            _ => String::new(),
        };
        Self { suffix }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// C compiler binary name (`gcc` or `gcc-<version>`)
    pub fn cc(&self) -> String {
        format!("gcc{}", self.suffix)
    }

    /// C++ compiler binary name (`g++` or `g++-<version>`)
    pub fn cxx(&self) -> String {
        format!("g++{}", self.suffix)
    }

    /// Cache definitions passed to `cmake`
    pub fn cmake_defines(&self) -> [String; 2] {
        [
            format!("-DCMAKE_C_COMPILER={}", self.cc()),
            format!("-DCMAKE_CXX_COMPILER={}", self.cxx()),
        ]
    }
}
