//! Structural checks: every source file has a mirrored unit test file and
//! every test file actually contains tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module roots carry no logic of their own
    fn needs_mirror(relative: &str) -> bool {
        !(relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs"))
    }

    // Relative paths of `.rs` files and directories below `base`
    fn collect_relative_paths(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_| io::Error::other("path outside of base directory"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.extend(collect_relative_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }

        Ok(paths)
    }

    fn mirrored_trees() -> (BTreeSet<String>, BTreeSet<String>) {
        let src = Path::new(SRC_DIR);
        let unit = Path::new(UNIT_DIR);
        let src_paths = collect_relative_paths(src, src).unwrap_or_default();
        let unit_paths = collect_relative_paths(unit, unit).unwrap_or_default();
        assert!(!src_paths.is_empty(), "no sources found under {SRC_DIR}");
        (src_paths, unit_paths)
    }

    // Tests that every source file and directory has a unit test counterpart
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src_paths, unit_paths) = mirrored_trees();

        let missing: Vec<String> = src_paths
            .iter()
            .filter(|path| needs_mirror(path) && !unit_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests that no unit test file outlives its source file
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src_paths, unit_paths) = mirrored_trees();

        let orphaned: Vec<String> = unit_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    fn files_without_tests(dir: &Path, base: &Path, found: &mut Vec<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                files_without_tests(&path, base, found)?;
                continue;
            }
            if path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }

            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if name == "mod.rs" || (name == "main.rs" && path.parent() == Some(base)) {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                found.push(format!("  - {}", path.display()));
            }
        }
        Ok(())
    }

    // Tests that every test file contains at least one test function
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut found = Vec::new();

        let scan = files_without_tests(tests_dir, tests_dir, &mut found);
        assert!(scan.is_ok(), "Failed to scan tests directory: {scan:?}");

        assert!(
            found.is_empty(),
            "Test files without #[test] functions:\n{}",
            found.join("\n")
        );
    }
}
