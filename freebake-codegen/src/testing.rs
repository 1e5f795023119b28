//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use eyre::{Result, eyre};

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles.
pub trait CompileChecker {
    /// Check that the code in the given directory compiles.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// Java compile checker using `javac`.
///
/// Every `.java` file under the directory is compiled into `<dir>/classes`.
pub struct JavaChecker;

impl JavaChecker {
    /// Directory the compiled classes are written to.
    pub fn classes_dir(dir: &Path) -> PathBuf {
        dir.join("classes")
    }

    /// Run `main_class` from a previously compiled directory and return its stdout.
    pub fn run(&self, dir: &Path, main_class: &str) -> Result<String, CompileError> {
        let output = Command::new("java")
            .arg("-cp")
            .arg(Self::classes_dir(dir))
            .arg(main_class)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run java: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(failure("java exited with an error", &output))
        }
    }
}

impl CompileChecker for JavaChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        let mut sources = Vec::new();
        collect_java_sources(dir, &mut sources).map_err(|e| CompileError {
            message: format!("Failed to list sources: {}", e),
            output: String::new(),
        })?;
        sources.sort();

        let output = Command::new("javac")
            .arg("-d")
            .arg(Self::classes_dir(dir))
            .args(&sources)
            .output()
            .map_err(|e| CompileError {
                message: format!("Failed to run javac: {}", e),
                output: String::new(),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(failure("javac failed", &output))
        }
    }
}

fn failure(message: &str, output: &std::process::Output) -> CompileError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    CompileError {
        message: message.to_string(),
        output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
    }
}

fn collect_java_sources(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_java_sources(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "java") {
            out.push(path);
        }
    }
    Ok(())
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        // Simple line-by-line diff
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Generate code into a temporary directory and return the path.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp<F>(generate: F) -> Result<tempfile::TempDir>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let temp_dir = tempfile::TempDir::new()?;
    generate(temp_dir.path())?;
    Ok(temp_dir)
}

/// Helper to run a generator and check that it compiles.
///
/// Returns the temporary directory so callers can run the compiled classes.
pub fn assert_generates_valid_code<C>(
    generate: impl FnOnce(&Path) -> Result<()>,
    checker: &C,
) -> Result<tempfile::TempDir>
where
    C: CompileChecker,
{
    let temp_dir = generate_to_temp(generate)?;

    checker.check(temp_dir.path()).map_err(|e| {
        // Print the generated files for debugging
        eprintln!("Generated files in {}:", temp_dir.path().display());
        let mut sources = Vec::new();
        if collect_java_sources(temp_dir.path(), &mut sources).is_ok() {
            for source in sources {
                eprintln!("  {}", source.display());
            }
        }
        eyre!("Compile check failed: {}", e)
    })?;

    Ok(temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_java_sources_recurses() {
        let temp = generate_to_temp(|dir| {
            std::fs::create_dir_all(dir.join("com/example"))?;
            std::fs::write(dir.join("com/example/A.java"), "")?;
            std::fs::write(dir.join("notes.txt"), "")?;
            Ok(())
        })
        .unwrap();

        let mut sources = Vec::new();
        collect_java_sources(temp.path(), &mut sources).unwrap();
        assert_eq!(sources, vec![temp.path().join("com/example/A.java")]);
    }

    #[test]
    #[should_panic(expected = "Line 2")]
    fn test_assert_content_eq_reports_line() {
        assert_content_eq("a\nb\n", "a\nc\n");
    }
}
