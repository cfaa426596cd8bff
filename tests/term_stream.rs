use std::fs;
use std::path::{Path, PathBuf};

use termpoly::{MalformedTerm, Poly, TermStreamError};

type P = Poly<f32>;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A file in the system temp directory, unique to this test process and
/// removed when dropped, including when the test panics.
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("termpoly-{}-{}.txt", std::process::id(), name));
        let _ = fs::remove_file(&path);
        Self(path)
    }

    fn with_contents(name: &str, contents: &str) -> Self {
        let file = Self::new(name);
        fs::write(file.path(), contents).unwrap();
        file
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn load_reads_term_file() {
    init_logger();
    let file = TempFile::with_contents("load", "4 5\n-2 3\n2 1\n3 0\n");

    let p = P::load(file.path()).unwrap();

    assert_eq!(p.to_string(), "4x^5 - 2x^3 + 2x + 3");
    assert_eq!(p.eval(1.0), 7.0);
}

#[test]
fn save_then_load() {
    init_logger();
    let file = TempFile::new("save");
    let p = P::from_terms([(0.5, 12), (-3.25, 7), (1.0, 0)]);

    p.save(file.path()).unwrap();
    let text = fs::read_to_string(file.path()).unwrap();
    let q = P::load(file.path()).unwrap();

    assert_eq!(text, "0.5 12\n-3.25 7\n1 0\n");
    assert_eq!(p, q);
}

#[test]
fn save_replaces_existing_file() {
    init_logger();
    let file = TempFile::with_contents("replace", "9 9\n8 8\n7 7\n");

    P::monomial(2.0, 1).save(file.path()).unwrap();
    let q = P::load(file.path()).unwrap();

    assert_eq!(q, P::monomial(2.0, 1));
}

#[test]
fn temp_file_removed_on_drop() {
    let path = {
        let file = TempFile::with_contents("dropped", "1 0\n");
        assert!(file.path().exists());
        file.path().to_path_buf()
    };
    assert!(!path.exists());
}

#[test]
fn load_missing_file_is_io_failure() {
    init_logger();
    let file = TempFile::new("missing");

    match P::load(file.path()) {
        Err(TermStreamError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected an I/O failure, got {:?}", other),
    }
}

#[test]
fn load_malformed_file_reports_line() {
    init_logger();
    let file = TempFile::with_contents("malformed", "4 5\n-2 3\n2 one\n3 0\n");

    match P::load(file.path()) {
        Err(TermStreamError::MalformedTerm { line, kind }) => {
            assert_eq!(line, 3);
            assert_eq!(kind, MalformedTerm::InvalidDegree("one".into()));
        }
        other => panic!("expected a malformed term, got {:?}", other),
    }
}

#[test]
fn load_non_utf8_file_reports_line() {
    init_logger();
    let file = TempFile::new("latin1");
    fs::write(file.path(), b"4 5\n2 1\n\xe9 0\n").unwrap();

    match P::load(file.path()) {
        Err(TermStreamError::MalformedTerm { line, kind }) => {
            assert_eq!(line, 3);
            assert_eq!(kind, MalformedTerm::InvalidUtf8(0));
        }
        other => panic!("expected a malformed term, got {:?}", other),
    }
}

#[test]
fn sum_and_product_of_loaded_files() {
    init_logger();
    let a_file = TempFile::with_contents("a", "1 1\n1 0\n");
    let b_file = TempFile::with_contents("b", "1 1\n-1 0\n");

    let a = P::load(a_file.path()).unwrap();
    let b = P::load(b_file.path()).unwrap();

    assert_eq!((&a + &b).to_string(), "2x");
    assert_eq!((&a * &b).to_string(), "x^2 - 1");
}
