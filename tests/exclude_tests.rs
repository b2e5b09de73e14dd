use fsame::duplicates::{DuplicateFinder, FinderConfig};
use fsame::progress::ScanObserver;
use fsame::scanner::TraversalConfig;
use regex::Regex;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/// Observer that records directory notifications for assertions.
#[derive(Default)]
struct RecordingObserver {
    checking: Mutex<Vec<PathBuf>>,
    omitted: Mutex<Vec<PathBuf>>,
}

impl ScanObserver for RecordingObserver {
    fn on_checking(&self, dir: &Path) {
        self.checking.lock().unwrap().push(dir.to_path_buf());
    }

    fn on_omitted(&self, dir: &Path) {
        self.omitted.lock().unwrap().push(dir.to_path_buf());
    }
}

fn finder_with_patterns(patterns: &[&str]) -> DuplicateFinder {
    let exclude = patterns.iter().map(|p| Regex::new(p).unwrap()).collect();
    DuplicateFinder::new(FinderConfig::default().with_traversal(TraversalConfig::new(exclude)))
}

#[test]
fn test_excluded_subtree_never_reported() {
    let dir = tempdir().unwrap();

    // Duplicate content inside and outside the excluded profile dir.
    File::create(dir.path().join("outside1.dat"))
        .unwrap()
        .write_all(b"shared bytes")
        .unwrap();
    File::create(dir.path().join("outside2.dat"))
        .unwrap()
        .write_all(b"shared bytes")
        .unwrap();

    let profile = dir.path().join(".operaprofile");
    fs::create_dir(&profile).unwrap();
    File::create(profile.join("cache.dat"))
        .unwrap()
        .write_all(b"shared bytes")
        .unwrap();

    let finder = finder_with_patterns(&[r"\.opera"]);
    let (groups, summary) = finder.find_duplicates(dir.path());

    assert_eq!(summary.total_files, 2);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].paths.len(), 2);
    assert!(groups[0].paths.iter().all(|p| !p.starts_with(&profile)));
}

#[test]
fn test_no_checking_notification_for_pruned_subtree() {
    let dir = tempdir().unwrap();

    let excluded = dir.path().join("node_modules");
    fs::create_dir(&excluded).unwrap();
    let nested = excluded.join("lodash");
    fs::create_dir(&nested).unwrap();
    File::create(nested.join("index.js"))
        .unwrap()
        .write_all(b"module")
        .unwrap();

    let kept = dir.path().join("src");
    fs::create_dir(&kept).unwrap();
    File::create(kept.join("main.js"))
        .unwrap()
        .write_all(b"module")
        .unwrap();

    let observer = Arc::new(RecordingObserver::default());
    let exclude = vec![Regex::new("node_modules").unwrap()];
    let finder = DuplicateFinder::new(
        FinderConfig::default()
            .with_traversal(TraversalConfig::new(exclude))
            .with_observer(observer.clone()),
    );

    let (_, summary) = finder.find_duplicates(dir.path());

    assert_eq!(summary.total_files, 1);

    let checking = observer.checking.lock().unwrap();
    let omitted = observer.omitted.lock().unwrap();

    assert!(checking.contains(&kept));
    assert!(!checking.contains(&excluded));
    assert!(!checking.contains(&nested));
    assert_eq!(omitted.as_slice(), &[excluded]);
}

#[test]
fn test_pattern_searched_anywhere_in_path() {
    let dir = tempdir().unwrap();

    // The pattern names a component in the middle of the path; everything
    // below it must be pruned too.
    let cache = dir.path().join(".opera").join("cache").join("deep");
    fs::create_dir_all(&cache).unwrap();
    File::create(cache.join("entry.bin"))
        .unwrap()
        .write_all(b"cached")
        .unwrap();

    File::create(dir.path().join("kept.bin"))
        .unwrap()
        .write_all(b"cached")
        .unwrap();

    let finder = finder_with_patterns(&[r"\.opera"]);
    let (groups, summary) = finder.find_duplicates(dir.path());

    assert_eq!(summary.total_files, 1);
    assert!(groups.is_empty());
}

#[test]
fn test_root_matching_pattern_prunes_everything() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("backup.opera");
    fs::create_dir(&root).unwrap();

    File::create(root.join("a.txt"))
        .unwrap()
        .write_all(b"twin")
        .unwrap();
    File::create(root.join("b.txt"))
        .unwrap()
        .write_all(b"twin")
        .unwrap();

    let finder = finder_with_patterns(&[r"\.opera"]);
    let (groups, summary) = finder.find_duplicates(&root);

    assert!(groups.is_empty());
    assert_eq!(summary.total_files, 0);
}

#[test]
fn test_non_matching_pattern_keeps_everything() {
    let dir = tempdir().unwrap();

    File::create(dir.path().join("a.txt"))
        .unwrap()
        .write_all(b"pair")
        .unwrap();
    File::create(dir.path().join("b.txt"))
        .unwrap()
        .write_all(b"pair")
        .unwrap();

    let finder = finder_with_patterns(&[r"\.opera"]);
    let (groups, summary) = finder.find_duplicates(dir.path());

    assert_eq!(summary.total_files, 2);
    assert_eq!(groups.len(), 1);
}
